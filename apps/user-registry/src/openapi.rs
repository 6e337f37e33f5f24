//! # OpenAPI 仕様定義
//!
//! utoipa を使用して User Registry の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::{Modify, OpenApi, openapi::server::Server};

use crate::handler::{health, user};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "User Registry API",
      version = "0.1.0",
      description = "インメモリのユーザー管理 API"
   ),
   paths(
      // health
      health::health_check,
      // users
      user::create_user,
      user::get_user,
      user::update_user,
      user::delete_user,
   ),
   components(schemas(
      user_registry_shared::ErrorResponse,
      crate::validation::FieldError,
      crate::validation::Location,
      crate::error::ValidationErrorResponse,
      crate::error::MessageResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "users", description = "ユーザー管理"),
   ),
   modifiers(&LocalServerAddon)
)]
pub struct ApiDoc;

/// 既定ポートで起動したローカルサーバーを登録する
struct LocalServerAddon;

impl Modify for LocalServerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .servers
            .get_or_insert_default()
            .push(Server::new("http://localhost:3000"));
    }
}
