//! Storage for uploaded seller documents

use std::path::PathBuf;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("invalid file payload: {0}")]
    InvalidPayload(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store a base64 payload (plain or `data:` URI) under `folder` and
    /// return its public URL.
    async fn upload(&self, payload: &str, folder: &str) -> Result<String, MediaError>;

    /// Delete a file previously returned by `upload`
    async fn remove(&self, url: &str) -> Result<(), MediaError>;
}

/// Writes files below a local directory served at `base_url`
pub struct LocalMediaStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn upload(&self, payload: &str, folder: &str) -> Result<String, MediaError> {
        if folder.split('/').any(|part| part.is_empty() || part == "..") {
            return Err(MediaError::InvalidPayload(format!("bad folder '{}'", folder)));
        }

        let decoded = decode_payload(payload)?;
        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), decoded.extension);

        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), &decoded.bytes).await?;

        debug!(folder, file = %file_name, bytes = decoded.bytes.len(), "Stored upload");
        Ok(format!("{}/{}/{}", self.base_url, folder, file_name))
    }

    async fn remove(&self, url: &str) -> Result<(), MediaError> {
        let relative = url
            .strip_prefix(self.base_url.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.split('/').any(|part| part.is_empty() || part == ".."))
            .ok_or_else(|| MediaError::InvalidPayload(format!("not a stored file: {}", url)))?;

        tokio::fs::remove_file(self.root.join(relative)).await?;
        debug!(url, "Removed upload");
        Ok(())
    }
}

#[derive(Debug)]
struct DecodedFile {
    bytes: Vec<u8>,
    extension: &'static str,
}

fn decode_payload(payload: &str) -> Result<DecodedFile, MediaError> {
    let payload = payload.trim();
    let (mime, data) = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest
                .split_once(',')
                .ok_or_else(|| MediaError::InvalidPayload("malformed data URI".to_string()))?;
            let mime = header
                .strip_suffix(";base64")
                .ok_or_else(|| MediaError::InvalidPayload("data URI must be base64".to_string()))?;
            (Some(mime), data)
        }
        None => (None, payload),
    };

    let bytes = BASE64
        .decode(data)
        .map_err(|e| MediaError::InvalidPayload(e.to_string()))?;
    if bytes.is_empty() {
        return Err(MediaError::InvalidPayload("empty file".to_string()));
    }

    let extension = mime
        .and_then(extension_for_mime)
        .unwrap_or_else(|| sniff_extension(&bytes));

    Ok(DecodedFile { bytes, extension })
}

fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

fn sniff_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"%PDF") {
        "pdf"
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpg"
    } else {
        "bin"
    }
}
