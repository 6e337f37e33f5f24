//! # User Registry エラー定義
//!
//! アプリケーション層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | ステータス | ボディ |
//! |-------|-----------|--------|
//! | `Validation` | 400 | `{ "errors": [FieldError] }` |
//! | `UserNotFound` | 404 | `{ "message": "User is not found" }` |
//! | `Infra` | 500 | RFC 9457 Problem Details |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use user_registry_domain::user::UserId;
use user_registry_infra::InfraError;
use user_registry_shared::ErrorResponse;
use utoipa::ToSchema;

use crate::validation::FieldError;

/// ユーザーが存在しない場合のメッセージ
pub const USER_NOT_FOUND_MESSAGE: &str = "User is not found";

/// バリデーションエラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// メッセージのみのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User is not found")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// アプリケーション層で発生するエラー
#[derive(Debug, Error)]
pub enum AppError {
    /// 入力値の検証失敗
    #[error("バリデーションエラー: {} 件", .0.len())]
    Validation(Vec<FieldError>),

    /// ユーザーが存在しない
    #[error("ユーザーが見つかりません: {0}")]
    UserNotFound(UserId),

    /// ストアのエラー
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            AppError::UserNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(USER_NOT_FOUND_MESSAGE)),
            )
                .into_response(),
            AppError::Infra(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    span_trace = %e.span_trace(),
                    "ストアで内部エラー: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal_error()),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validation::Location;

    async fn status_and_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validationで400とerrors配列() {
        let error = AppError::Validation(vec![FieldError::new(
            "name",
            "",
            "Name is required",
            Location::Body,
        )]);

        let (status, json) = status_and_json(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["path"], "name");
        assert_eq!(json["errors"][0]["location"], "body");
    }

    #[tokio::test]
    async fn test_user_not_foundで404と固定メッセージ() {
        let error = AppError::UserNotFound(UserId::from_i64(999_999));

        let (status, json) = status_and_json(error.into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "message": "User is not found" }));
    }

    #[tokio::test]
    async fn test_infra_unexpectedで500と固定detail() {
        let error = AppError::from(InfraError::unexpected("採番失敗"));

        let (status, json) = status_and_json(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Internal server error");
    }
}
