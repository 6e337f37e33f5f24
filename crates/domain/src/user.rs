//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: UserId は整数をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、変更は新しい値を返すメソッド経由
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use user_registry_domain::user::{Email, User, UserId, UserName};
//!
//! let user = User::new(UserId::first(), UserName::new("  Ann ")?, Email::new("ann@x.com")?);
//! assert_eq!(user.name().as_str(), "Ann");
//!
//! let renamed = user.with_profile(UserName::new("Bo")?, Email::new("bo@x.com")?);
//! assert_eq!(renamed.id().as_i64(), 1);
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::DomainError;

/// ユーザー ID
///
/// ストアが単調増加カウンタで採番する正の整数。
/// 削除後も再利用されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
    /// 最初に採番される ID（1）
    pub fn first() -> Self {
        Self(1)
    }

    /// 既存の整数値からユーザー ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// パスパラメータの文字列からユーザー ID をパースする
    ///
    /// 符号付き 10 進整数のみ受け付ける。存在チェックは行わない。
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::validation("id", "Id must be an integer"))
    }

    /// 次の ID を返す
    ///
    /// i64 の最大値を超える場合は `None`。
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ユーザー名（値オブジェクト）
///
/// 前後の空白を除去して保持する。除去後に空であってはならない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct UserName(String);

impl UserName {
    /// ユーザー名を作成する
    ///
    /// # エラー
    ///
    /// trim 後に空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::validation("name", "Name is required"));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// 構文チェックは `validator` に委譲し、加えてドメイン部にトップレベルドメインを要求する
/// （`ann@localhost` や IP アドレスのドメインは受け付けない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// 値は正規化せず、受け取ったまま保持する。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if !value.validate_email() || !has_top_level_domain(&value) {
            return Err(DomainError::validation("email", "Email is invalid"));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// ドメイン部の最後のラベルがトップレベルドメインの形をしているか
///
/// 2 文字以上の英字（非 ASCII 文字を含む）か、`xn` で始まる Punycode 表記を受け付ける。
fn has_top_level_domain(value: &str) -> bool {
    let Some((_, tld)) = value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
    else {
        return false;
    };

    let alphabetic = tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic);
    let punycode = tld.len() >= 4
        && tld.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("xn"))
        && tld.chars().skip(2).all(|c| c.is_ascii_alphanumeric() || c == '-');
    alphabetic || punycode
}

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:    UserId,
    name:  UserName,
    email: Email,
}

impl User {
    /// 新しいユーザーを作成する
    pub fn new(id: UserId, name: UserName, email: Email) -> Self {
        Self { id, name, email }
    }

    /// 名前とメールアドレスを差し替えたユーザーを返す
    ///
    /// ID は変わらない。
    pub fn with_profile(self, name: UserName, email: Email) -> Self {
        Self {
            id: self.id,
            name,
            email,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
