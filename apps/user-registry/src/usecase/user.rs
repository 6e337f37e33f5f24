//! ユーザー管理ユースケース

use std::sync::Arc;

use user_registry_domain::user::{Email, User, UserId, UserName};
use user_registry_infra::repository::UserRepository;

use crate::error::AppError;

/// ユーザー作成の入力
pub struct CreateUserInput {
    pub name:  UserName,
    pub email: Email,
}

/// ユーザー更新の入力
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub name:    UserName,
    pub email:   Email,
}

/// ユーザー管理ユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// ユーザーを作成する
    ///
    /// 採番と追加はストアの 1 回のロック内で行う。
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, AppError> {
        let user = self
            .user_repository
            .create(input.name, input.email)
            .await?;

        tracing::info!(user_id = %user.id(), "ユーザーを作成しました");
        Ok(user)
    }

    /// ユーザーを取得する
    pub async fn get_user(&self, user_id: UserId) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))
    }

    /// ユーザーの名前とメールアドレスを更新する
    pub async fn update_user(&self, input: UpdateUserInput) -> Result<User, AppError> {
        let updated = self
            .user_repository
            .update_profile(input.user_id, input.name, input.email)
            .await?
            .ok_or(AppError::UserNotFound(input.user_id))?;

        tracing::info!(user_id = %updated.id(), "ユーザーを更新しました");
        Ok(updated)
    }

    /// ユーザーを削除する
    pub async fn delete_user(&self, user_id: UserId) -> Result<(), AppError> {
        if !self.user_repository.delete(user_id).await? {
            return Err(AppError::UserNotFound(user_id));
        }

        tracing::info!(user_id = %user_id, "ユーザーを削除しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use user_registry_infra::repository::InMemoryUserRepository;

    use super::*;

    fn sut() -> UserUseCaseImpl {
        UserUseCaseImpl::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn create_input(name: &str, email: &str) -> CreateUserInput {
        CreateUserInput {
            name:  UserName::new(name).unwrap(),
            email: Email::new(email).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_user_idは作成順に1から振られる() {
        let sut = sut();

        let ann = sut.create_user(create_input("Ann", "ann@x.com")).await.unwrap();
        let bo = sut.create_user(create_input("Bo", "bo@x.com")).await.unwrap();

        assert_eq!(ann.id().as_i64(), 1);
        assert_eq!(bo.id().as_i64(), 2);
    }

    #[tokio::test]
    async fn test_get_user_作成したユーザーを取得できる() {
        let sut = sut();
        let created = sut.create_user(create_input("Ann", "ann@x.com")).await.unwrap();

        let found = sut.get_user(created.id()).await.unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_user_存在しないidはuser_not_found() {
        let sut = sut();

        let result = sut.get_user(UserId::from_i64(999_999)).await;

        assert!(matches!(result, Err(AppError::UserNotFound(id)) if id.as_i64() == 999_999));
    }

    #[tokio::test]
    async fn test_update_user_idを保持して名前とメールを差し替える() {
        let sut = sut();
        let created = sut.create_user(create_input("Ann", "ann@x.com")).await.unwrap();

        let updated = sut
            .update_user(UpdateUserInput {
                user_id: created.id(),
                name:    UserName::new("Annie").unwrap(),
                email:   Email::new("annie@x.com").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(sut.get_user(created.id()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_user_存在しないidはuser_not_found() {
        let sut = sut();

        let result = sut
            .update_user(UpdateUserInput {
                user_id: UserId::from_i64(1),
                name:    UserName::new("Ann").unwrap(),
                email:   Email::new("ann@x.com").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AppError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_user_二度目はuser_not_found() {
        let sut = sut();
        let created = sut.create_user(create_input("Ann", "ann@x.com")).await.unwrap();

        sut.delete_user(created.id()).await.unwrap();
        let second = sut.delete_user(created.id()).await;

        assert!(matches!(second, Err(AppError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_user_後の作成でidは再利用されない() {
        let sut = sut();
        let ann = sut.create_user(create_input("Ann", "ann@x.com")).await.unwrap();
        sut.create_user(create_input("Bo", "bo@x.com")).await.unwrap();

        sut.delete_user(ann.id()).await.unwrap();
        let cy = sut.create_user(create_input("Cy", "cy@x.com")).await.unwrap();

        assert_eq!(cy.id().as_i64(), 3);
    }
}
