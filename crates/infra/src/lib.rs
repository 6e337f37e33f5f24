//! # User Registry インフラ層
//!
//! ユーザー台帳の保存先を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトと、その具体的な実装を提供する。
//! 現在の実装はプロセス内メモリのみで、プロセス終了時にデータは失われる。
//!
//! ## 依存関係
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
