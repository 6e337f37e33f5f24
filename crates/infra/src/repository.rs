//! # リポジトリ
//!
//! リポジトリトレイトと、その具体的な実装を提供する。
//!
//! - **依存性逆転**: ユースケース層はトレイト経由でのみストアにアクセスする
//! - **テスタビリティ**: テストごとに新しいストアを注入できる

pub mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository};
