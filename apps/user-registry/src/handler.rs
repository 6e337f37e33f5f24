//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲

pub mod docs;
pub mod health;
pub mod user;

pub use docs::{docs_page, openapi_json};
pub use health::health_check;
pub use user::{UserState, create_user, delete_user, get_user, update_user};
