use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::utils::mime;

/// Default upload ceiling: 10 MiB, matching the widget's advertised limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Validation failures a user can run into while selecting a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    InvalidFileType,
    FileTooLarge,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::InvalidFileType => write!(f, "Please select a valid image file."),
            UploadError::FileTooLarge => write!(f, "File size must be less than 10MB."),
        }
    }
}

impl std::error::Error for UploadError {}

/// A file the user pointed the app at, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub media_type: Option<String>,
    pub size: u64,
}

impl UploadCandidate {
    /// Build a candidate from a filesystem path. A missing path or a
    /// non-regular file is reported the same way as a wrong media type,
    /// since from the user's point of view nothing selectable was there.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path).map_err(|_| UploadError::InvalidFileType)?;
        if !meta.is_file() {
            return Err(UploadError::InvalidFileType);
        }

        Ok(Self {
            path: path.to_path_buf(),
            media_type: mime::guess_media_type(path),
            size: meta.len(),
        })
    }

    /// Media type check plus size ceiling. Accepts any `image/*` type up to
    /// and including `max_bytes`.
    pub fn validate(&self, max_bytes: u64) -> Result<(), UploadError> {
        match &self.media_type {
            Some(mt) if mt.starts_with("image/") => {}
            _ => return Err(UploadError::InvalidFileType),
        }

        if self.size > max_bytes {
            return Err(UploadError::FileTooLarge);
        }

        Ok(())
    }
}

/// Read a validated file into a `data:` URL the preview layer can hold on to.
pub async fn read_as_data_url(path: &Path, media_type: &str) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(format!("data:{};base64,{}", media_type, BASE64.encode(&bytes)))
}

/// Upload slot state. Replaced wholesale on every new selection; nothing is
/// mutated in place and nothing survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub raw_file: Option<PathBuf>,
    pub preview: Option<String>,
}

impl UploadState {
    pub fn accepted(path: PathBuf, data_url: String) -> Self {
        Self {
            raw_file: Some(path),
            preview: Some(data_url),
        }
    }

    /// Preview present means a valid image was accepted; the analyze action
    /// keys off this.
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }
}
