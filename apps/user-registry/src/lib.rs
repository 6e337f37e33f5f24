//! # User Registry ライブラリ
//!
//! インメモリでユーザーを管理する HTTP API のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアの構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: アプリケーションエラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義
//! - `usecase`: ユースケース
//! - `validation`: 入力バリデーション

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
pub mod validation;

pub use app_builder::build_app;
