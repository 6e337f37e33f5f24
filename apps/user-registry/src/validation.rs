//! # 入力バリデーション
//!
//! リクエストのパスパラメータとボディを検証し、フィールド単位のエラー一覧に変換する。
//!
//! ## エラー形式
//!
//! ```json
//! { "type": "field", "value": "", "msg": "Name is required", "path": "name", "location": "body" }
//! ```
//!
//! 検証ルールそのものはドメインの値オブジェクトが持ち、
//! このモジュールはその [`DomainError`] を [`FieldError`] に変換する。

use serde::{Deserialize, Serialize};
use user_registry_domain::{DomainError, user::UserId};
use utoipa::ToSchema;

/// エラーが検出された入力の場所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// リクエストボディ
    Body,
    /// パスパラメータ
    Params,
}

/// フィールド単位のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// 常に `"field"`
    #[serde(rename = "type")]
    #[schema(example = "field")]
    pub error_type: String,
    /// 違反した入力値
    pub value:      String,
    /// 違反したルールの説明
    #[schema(example = "Name is required")]
    pub msg:        String,
    /// フィールド名
    #[schema(example = "name")]
    pub path:       String,
    pub location:   Location,
}

impl FieldError {
    pub fn new(
        path: impl Into<String>,
        value: impl Into<String>,
        msg: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            error_type: "field".to_string(),
            value: value.into(),
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }

    /// ドメインのバリデーションエラーから作成する
    pub fn from_domain(error: DomainError, value: impl Into<String>, location: Location) -> Self {
        let DomainError::Validation { field, message } = error;
        Self::new(field, value, message, location)
    }
}

/// パスパラメータ `id` をユーザー ID にパースする
pub fn parse_user_id(raw: &str) -> Result<UserId, FieldError> {
    UserId::parse(raw).map_err(|e| FieldError::from_domain(e, raw, Location::Params))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_user_id_整数を受け付ける() {
        assert_eq!(parse_user_id("12").unwrap(), UserId::from_i64(12));
    }

    #[test]
    fn test_parse_user_id_整数以外はparamsのフィールドエラー() {
        let error = parse_user_id("abc").unwrap_err();

        assert_eq!(
            error,
            FieldError::new("id", "abc", "Id must be an integer", Location::Params)
        );
    }

    #[test]
    fn test_from_domainはフィールド名とメッセージを引き継ぐ() {
        let error = FieldError::from_domain(
            DomainError::validation("name", "Name is required"),
            "  ",
            Location::Body,
        );

        assert_eq!(
            error,
            FieldError::new("name", "  ", "Name is required", Location::Body)
        );
    }

    #[test]
    fn test_field_errorのjson形状() {
        let error = FieldError::new("email", "bad", "Email is invalid", Location::Body);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "field",
                "value": "bad",
                "msg": "Email is invalid",
                "path": "email",
                "location": "body"
            })
        );
    }
}
