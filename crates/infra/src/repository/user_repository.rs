//! # UserRepository
//!
//! ユーザー台帳の保存を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一ロック**: コレクションと採番カウンタを 1 つの非同期 Mutex で保護し、
//!   各操作の read-modify-write を 1 回のロック取得内で完結させる
//! - **単調増加の採番**: 採番は追加と同じクリティカルセクションで行い、
//!   追加に成功したときだけカウンタを進める。削除された ID は再利用しない
//! - **挿入順の保持**: 削除後も残りのユーザーの並び順は変わらない

use async_trait::async_trait;
use tokio::sync::Mutex;
use user_registry_domain::user::{Email, User, UserId, UserName};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
///
/// ユーザー情報の保存操作を定義する。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID を採番してユーザーを追加する
    ///
    /// 同じ ID を二度割り当てることはない。
    async fn create(&self, name: UserName, email: Email) -> Result<User, InfraError>;

    /// ID でユーザーを検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;

    /// ユーザーの名前とメールアドレスを置き換える
    ///
    /// 対象が存在しない場合は `Ok(None)` を返す。
    async fn update_profile(
        &self,
        id: UserId,
        name: UserName,
        email: Email,
    ) -> Result<Option<User>, InfraError>;

    /// ユーザーを削除する
    ///
    /// 対象が存在しない場合は `Ok(false)` を返す。
    async fn delete(&self, id: UserId) -> Result<bool, InfraError>;
}

/// ロックで保護される内部状態
#[derive(Debug, Default)]
struct Store {
    users:   Vec<User>,
    last_id: Option<UserId>,
}

impl Store {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }

    fn next_id(&self) -> Result<UserId, InfraError> {
        match self.last_id {
            None => Ok(UserId::first()),
            Some(last) => last
                .next()
                .ok_or_else(|| InfraError::unexpected("ユーザー ID を採番できません")),
        }
    }
}

/// プロセス内メモリ実装の UserRepository
///
/// プロセスの生存期間中のみデータを保持する。
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, name: UserName, email: Email) -> Result<User, InfraError> {
        let mut store = self.store.lock().await;

        let id = store.next_id()?;
        let user = User::new(id, name, email);
        store.users.push(user.clone());
        store.last_id = Some(id);

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
        let store = self.store.lock().await;

        Ok(store.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn update_profile(
        &self,
        id: UserId,
        name: UserName,
        email: Email,
    ) -> Result<Option<User>, InfraError> {
        let mut store = self.store.lock().await;

        let Some(index) = store.position(id) else {
            return Ok(None);
        };
        let updated = store.users[index].clone().with_profile(name, email);
        store.users[index] = updated.clone();

        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> Result<bool, InfraError> {
        let mut store = self.store.lock().await;

        let Some(index) = store.position(id) else {
            return Ok(false);
        };
        store.users.remove(index);

        Ok(true)
    }
}
