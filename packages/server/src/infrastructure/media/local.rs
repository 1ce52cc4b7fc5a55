//! Local filesystem MediaStore.
//!
//! base64 の data URL をデコードしてメディアディレクトリに保存し、
//! `{public_url}/media/{file}` 形式の URL を返します。

use std::path::PathBuf;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use uuid::Uuid;

use crate::domain::{ImageUrl, MediaError, MediaStore};

/// URL path prefix the router serves the media directory under.
pub const MEDIA_ROUTE: &str = "/media";

pub struct LocalMediaStore {
    dir: PathBuf,
    public_url: String,
}

impl LocalMediaStore {
    pub fn new(dir: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

/// Split a payload into (file extension, base64 body).
fn parse_payload(payload: &str) -> Result<(&'static str, &str), MediaError> {
    let payload = payload.trim();
    let Some(rest) = payload.strip_prefix("data:") else {
        return Ok(("bin", payload));
    };
    let (header, body) = rest
        .split_once(',')
        .ok_or_else(|| MediaError::InvalidPayload("data URL without ','".to_string()))?;
    let Some(mime) = header.strip_suffix(";base64") else {
        return Err(MediaError::InvalidPayload(
            "only base64 data URLs are supported".to_string(),
        ));
    };
    let extension = match mime {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        other if other.starts_with("image/") => "img",
        other => {
            return Err(MediaError::InvalidPayload(format!(
                "unsupported media type '{other}'"
            )));
        }
    };
    Ok((extension, body))
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn upload(&self, payload: &str) -> Result<ImageUrl, MediaError> {
        let (extension, body) = parse_payload(payload)?;
        let bytes = STANDARD
            .decode(body)
            .map_err(|e| MediaError::InvalidPayload(e.to_string()))?;
        if bytes.is_empty() {
            return Err(MediaError::InvalidPayload("empty image".to_string()));
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| MediaError::StorageFailed(e.to_string()))?;
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(self.dir.join(&file_name), &bytes)
            .await
            .map_err(|e| MediaError::StorageFailed(e.to_string()))?;

        tracing::info!("Stored image {} ({} bytes)", file_name, bytes.len());
        ImageUrl::new(format!("{}{}/{}", self.public_url, MEDIA_ROUTE, file_name))
            .map_err(|e| MediaError::StorageFailed(e.to_string()))
    }
}
