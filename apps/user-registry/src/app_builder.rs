//! # User Registry アプリケーション構築
//!
//! DI（リポジトリ・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use user_registry_infra::repository::UserRepository;
use user_registry_shared::observability::{MakeRequestUuidV7, make_request_span};

use crate::{
    handler::{
        UserState,
        create_user,
        delete_user,
        docs_page,
        get_user,
        health_check,
        openapi_json,
        update_user,
    },
    usecase::UserUseCaseImpl,
};

/// ルーターを構築する
///
/// ストアは呼び出し側が用意する。テストではリクエストごとに新しいストアを渡す。
pub fn build_app(user_repository: Arc<dyn UserRepository>) -> Router {
    let user_state = Arc::new(UserState {
        usecase: UserUseCaseImpl::new(user_repository),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/docs", get(docs_page))
        .route("/docs/openapi.json", get(openapi_json))
        .merge(
            Router::new()
                .route("/users", post(create_user))
                .route(
                    "/users/{id}",
                    get(get_user).put(update_user).delete(delete_user),
                )
                .with_state(user_state),
        )
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
