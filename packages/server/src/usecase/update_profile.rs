//! UseCase: プロフィール画像の更新

use std::sync::Arc;

use crate::domain::{MediaStore, RepositoryError, User, UserId, UserRepository};

use super::error::UpdateProfileError;

pub struct UpdateProfileUseCase {
    user_repository: Arc<dyn UserRepository>,
    media_store: Arc<dyn MediaStore>,
}

impl UpdateProfileUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, media_store: Arc<dyn MediaStore>) -> Self {
        Self {
            user_repository,
            media_store,
        }
    }

    /// Upload `profile_pic` (a base64 data URL) and store its URL on the user.
    pub async fn execute(
        &self,
        user_id: &UserId,
        profile_pic: Option<String>,
    ) -> Result<User, UpdateProfileError> {
        let payload = profile_pic
            .filter(|p| !p.trim().is_empty())
            .ok_or(UpdateProfileError::MissingProfilePic)?;

        let url = self.media_store.upload(&payload).await.map_err(|e| {
            tracing::warn!("Profile picture upload failed for '{}': {}", user_id, e);
            UpdateProfileError::UploadFailed(e.to_string())
        })?;

        self.user_repository
            .update_profile_pic(user_id, url)
            .await
            .map_err(|e| match e {
                RepositoryError::UserNotFound(_) => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::Repository(other),
            })
    }
}
