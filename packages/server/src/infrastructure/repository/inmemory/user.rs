//! InMemory User Repository 実装

use std::sync::Arc;

use async_trait::async_trait;
use tayori_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    Email, ImageUrl, NewUser, RepositoryError, Timestamp, User, UserId, UserRepository,
};

pub struct InMemoryUserRepository {
    /// 登録順
    users: Mutex<Vec<User>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            clock,
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(RepositoryError::DuplicateEmail(
                new_user.email.as_str().to_string(),
            ));
        }
        let user = User::create(new_user, Timestamp::new(self.clock.now_millis()));
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn list_except(&self, id: &UserId) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().filter(|u| &u.id != id).cloned().collect())
    }

    async fn update_profile_pic(
        &self,
        id: &UserId,
        profile_pic: ImageUrl,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| RepositoryError::UserNotFound(id.as_str().to_string()))?;
        user.profile_pic = profile_pic.as_str().to_string();
        user.updated_at = Timestamp::new(self.clock.now_millis());
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FullName;
    use tayori_shared::time::FixedClock;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            full_name: FullName::new(name.to_string()).unwrap(),
            email: Email::new(email.to_string()).unwrap(),
            password_hash: "hash".to_string(),
        }
    }

    fn create_test_repository() -> InMemoryUserRepository {
        InMemoryUserRepository::new(Arc::new(FixedClock::new(1000)))
    }

    #[tokio::test]
    async fn test_create_and_find() {
        // テスト項目: 作成したユーザーを ID とメールで取得できる
        // given (前提条件):
        let repo = create_test_repository();

        // when (操作):
        let user = repo
            .create(new_user("Alice", "alice@example.com"))
            .await
            .unwrap();

        // then (期待する結果):
        let by_id = repo.find_by_id(&user.id).await.unwrap();
        let by_email = repo.find_by_email(&user.email).await.unwrap();
        assert_eq!(by_id, Some(user.clone()));
        assert_eq!(by_email, Some(user));
    }

    #[tokio::test]
    async fn test_create_duplicate_email_fails() {
        // テスト項目: 同じメールアドレス（大文字小文字違い含む）での登録はエラーになる
        // given (前提条件):
        let repo = create_test_repository();
        repo.create(new_user("Alice", "alice@example.com"))
            .await
            .unwrap();

        // when (操作):
        let result = repo
            .create(new_user("Alice 2", "ALICE@example.com"))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateEmail(
                "alice@example.com".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_list_except_excludes_caller() {
        // テスト項目: 自分以外のユーザーが登録順で返される
        // given (前提条件):
        let repo = create_test_repository();
        let alice = repo
            .create(new_user("Alice", "alice@example.com"))
            .await
            .unwrap();
        let bob = repo.create(new_user("Bob", "bob@example.com")).await.unwrap();
        let carol = repo
            .create(new_user("Carol", "carol@example.com"))
            .await
            .unwrap();

        // when (操作):
        let result = repo.list_except(&alice.id).await.unwrap();

        // then (期待する結果):
        assert_eq!(result, vec![bob, carol]);
    }

    #[tokio::test]
    async fn test_update_profile_pic_unknown_user() {
        // テスト項目: 存在しないユーザーのプロフィール更新は UserNotFound になる
        // given (前提条件):
        let repo = create_test_repository();
        let ghost = UserId::new("ghost".to_string()).unwrap();

        // when (操作):
        let result = repo
            .update_profile_pic(&ghost, ImageUrl::new("http://x/y.png".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::UserNotFound("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_profile_pic() {
        // テスト項目: プロフィール画像 URL が保存される
        // given (前提条件):
        let repo = create_test_repository();
        let alice = repo
            .create(new_user("Alice", "alice@example.com"))
            .await
            .unwrap();

        // when (操作):
        let updated = repo
            .update_profile_pic(&alice.id, ImageUrl::new("http://x/a.png".to_string()).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(updated.profile_pic, "http://x/a.png");
        let stored = repo.find_by_id(&alice.id).await.unwrap().unwrap();
        assert_eq!(stored.profile_pic, "http://x/a.png");
    }
}
