//! # ユースケース層
//!
//! User Registry のビジネスロジックを実装する。
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の検証と変換のみ、ロジックはユースケースに集約

pub mod user;

pub use user::{CreateUserInput, UpdateUserInput, UserUseCaseImpl};
