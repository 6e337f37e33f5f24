//! # User Registry ドメイン層
//!
//! ユーザー台帳のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use user_registry_domain::user::{Email, User, UserId, UserName};
//!
//! let user = User::new(
//!     UserId::first(),
//!     UserName::new("Ann")?,
//!     Email::new("ann@x.com")?,
//! );
//! assert_eq!(user.id().as_i64(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod user;

pub use error::DomainError;
