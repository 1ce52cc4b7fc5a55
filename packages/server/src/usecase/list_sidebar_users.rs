//! UseCase: サイドバー用ユーザー一覧
//!
//! 自分以外の全ユーザーを、現在オンラインかどうかの情報付きで返します。
//! オンライン判定は ConnectionRegistry のスナップショットに基づきます。

use std::{collections::HashSet, sync::Arc};

use crate::domain::{ConnectionRegistry, RepositoryError, User, UserId, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarUser {
    pub user: User,
    pub is_online: bool,
}

pub struct ListSidebarUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
    registry: Arc<dyn ConnectionRegistry>,
}

impl ListSidebarUsersUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        registry: Arc<dyn ConnectionRegistry>,
    ) -> Self {
        Self {
            user_repository,
            registry,
        }
    }

    pub async fn execute(&self, me: &UserId) -> Result<Vec<SidebarUser>, RepositoryError> {
        let users = self.user_repository.list_except(me).await?;
        let online: HashSet<UserId> = self.registry.snapshot().await.into_iter().collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let is_online = online.contains(&user.id);
                SidebarUser { user, is_online }
            })
            .collect())
    }
}
