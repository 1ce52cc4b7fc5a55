//! Media upload collaborator.

use async_trait::async_trait;

use super::{error::MediaError, value_object::ImageUrl};

/// Stores an uploaded image and hands back a stable URL. The core only keeps
/// and forwards the URL; it never looks at image bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// `payload` is a base64 data URL (`data:image/png;base64,...`) or bare base64.
    async fn upload(&self, payload: &str) -> Result<ImageUrl, MediaError>;
}
