//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 値オブジェクトの生成失敗 |
//!
//! エンティティの不在はユースケース層で判定し、アプリ側のエラーで表現する。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// `field` には違反したフィールド名（`"name"`, `"email"` など）を入れる。
    #[error("バリデーションエラー({field}): {message}")]
    Validation {
        field:   &'static str,
        message: String,
    },
}

impl DomainError {
    /// バリデーションエラーを作成する
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validationのメッセージにフィールド名が含まれる() {
        let error = DomainError::validation("name", "Name is required");

        assert_eq!(
            error.to_string(),
            "バリデーションエラー(name): Name is required"
        );
    }

    #[test]
    fn test_validationコンストラクタがフィールドを保持する() {
        let DomainError::Validation { field, message } = DomainError::validation("email", "x");

        assert_eq!(field, "email");
        assert_eq!(message, "x");
    }
}
