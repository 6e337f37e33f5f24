//! # ユーザー管理 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /users` - ユーザー作成
//! - `GET /users/{id}` - ユーザー取得
//! - `PUT /users/{id}` - ユーザー更新（名前・メールアドレス）
//! - `DELETE /users/{id}` - ユーザー削除
//!
//! パスの `id` は整数としてパースし、失敗した場合は 400 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use user_registry_domain::user::{Email, User, UserName};
use utoipa::ToSchema;

use crate::{
    error::{AppError, MessageResponse, ValidationErrorResponse},
    usecase::{CreateUserInput, UpdateUserInput, UserUseCaseImpl},
    validation::{FieldError, Location, parse_user_id},
};

/// ユーザー削除成功時のメッセージ
const USER_DELETED_MESSAGE: &str = "User is deleted";

/// ユーザー管理 API の共有状態
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

// --- リクエスト型 ---

/// ユーザー作成・更新リクエスト
///
/// 欠落したフィールドは空文字列として扱い、値オブジェクトの生成時に拒否する。
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name:  String,
    #[serde(default)]
    #[schema(example = "ann@x.com")]
    pub email: String,
}

impl UserPayload {
    /// 値オブジェクトに変換する
    ///
    /// 検証はドメインの値オブジェクトに任せ、違反したフィールドを `name`, `email` の順にすべて返す。
    fn into_profile(self) -> Result<(UserName, Email), Vec<FieldError>> {
        let name = UserName::new(self.name.as_str())
            .map_err(|e| FieldError::from_domain(e, self.name.as_str(), Location::Body));
        let email = Email::new(self.email.as_str())
            .map_err(|e| FieldError::from_domain(e, self.email.as_str(), Location::Body));

        match (name, email) {
            (Ok(name), Ok(email)) => Ok((name, email)),
            (name, email) => Err(name.err().into_iter().chain(email.err()).collect()),
        }
    }
}

// --- レスポンス型 ---

/// ユーザー情報レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id:    i64,
    #[schema(example = "Ann")]
    pub name:  String,
    #[schema(example = "ann@x.com")]
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id:    user.id().as_i64(),
            name:  user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
        }
    }
}

// --- ハンドラ ---

/// POST /users
///
/// ユーザーを作成する。ID はサービスが採番する。
#[utoipa::path(
   post,
   path = "/users",
   tag = "users",
   request_body = UserPayload,
   responses(
      (status = 201, description = "ユーザー作成成功", body = UserResponse),
      (status = 400, description = "バリデーションエラー", body = ValidationErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    Json(req): Json<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (name, email) = req.into_profile().map_err(AppError::Validation)?;
    let user = state
        .usecase
        .create_user(CreateUserInput { name, email })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/{id}
#[utoipa::path(
   get,
   path = "/users/{id}",
   tag = "users",
   params(("id" = i64, Path, description = "ユーザー ID")),
   responses(
      (status = 200, description = "ユーザー取得成功", body = UserResponse),
      (status = 400, description = "ID が整数ではない", body = ValidationErrorResponse),
      (status = 404, description = "ユーザーが見つからない", body = MessageResponse)
   )
)]
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&raw_id).map_err(|e| AppError::Validation(vec![e]))?;

    let user = state.usecase.get_user(user_id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{id}
///
/// 名前とメールアドレスを置き換える。ID は変更されない。
/// パスとボディの検証エラーはまとめて `id`, `name`, `email` の順に返す。
#[utoipa::path(
   put,
   path = "/users/{id}",
   tag = "users",
   params(("id" = i64, Path, description = "ユーザー ID")),
   request_body = UserPayload,
   responses(
      (status = 200, description = "ユーザー更新成功", body = UserResponse),
      (status = 400, description = "バリデーションエラー", body = ValidationErrorResponse),
      (status = 404, description = "ユーザーが見つからない", body = MessageResponse)
   )
)]
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    Path(raw_id): Path<String>,
    Json(req): Json<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (user_id, (name, email)) = match (parse_user_id(&raw_id), req.into_profile()) {
        (Ok(user_id), Ok(profile)) => (user_id, profile),
        (user_id, profile) => {
            let errors = user_id
                .err()
                .into_iter()
                .chain(profile.err().into_iter().flatten())
                .collect();
            return Err(AppError::Validation(errors));
        }
    };

    let user = state
        .usecase
        .update_user(UpdateUserInput {
            user_id,
            name,
            email,
        })
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{id}
#[utoipa::path(
   delete,
   path = "/users/{id}",
   tag = "users",
   params(("id" = i64, Path, description = "ユーザー ID")),
   responses(
      (status = 200, description = "ユーザー削除成功", body = MessageResponse),
      (status = 400, description = "ID が整数ではない", body = ValidationErrorResponse),
      (status = 404, description = "ユーザーが見つからない", body = MessageResponse)
   )
)]
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&raw_id).map_err(|e| AppError::Validation(vec![e]))?;

    state.usecase.delete_user(user_id).await?;

    Ok(Json(MessageResponse::new(USER_DELETED_MESSAGE)))
}
