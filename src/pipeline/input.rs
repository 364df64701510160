//! Input resolution: give every document a path on disk.
//!
//! The extractor works on file paths, so an upload that arrives as bytes in a
//! multipart body is spooled into a `TempDir` first. Keeping the `TempDir`
//! inside [`Upload`] ties the file's lifetime to the request: it is removed
//! when the `Upload` is dropped, even if the handler bails out early.

use crate::error::ComplianceError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Name used when the client sent a file part without a filename.
pub const FALLBACK_FILENAME: &str = "upload.docx";

/// Where the bytes of an [`Upload`] live.
enum Storage {
    /// A file the caller already had on disk (CLI use).
    Local(PathBuf),
    /// Bytes spooled from a request body into a temp directory.
    /// The `TempDir` is kept alive to prevent cleanup until the request ends.
    Spooled { path: PathBuf, _temp_dir: TempDir },
    /// Spooling failed; the request cannot go further.
    Unresolved,
}

/// One uploaded document.
pub struct Upload {
    display_name: String,
    content_type: Option<String>,
    storage: Storage,
}

impl Upload {
    /// Spool `bytes` into a fresh temp directory.
    ///
    /// Failure to write is not returned here: the upload is kept with an
    /// unresolved path so the caller can report it at the point the path is
    /// needed, after the missing-file check.
    pub async fn spool(
        display_name: impl Into<String>,
        content_type: Option<String>,
        bytes: &[u8],
    ) -> Self {
        let display_name = display_name.into();
        let storage = match write_temp(&display_name, bytes).await {
            Ok((path, temp_dir)) => {
                debug!("Spooled {} bytes to {}", bytes.len(), path.display());
                Storage::Spooled {
                    path,
                    _temp_dir: temp_dir,
                }
            }
            Err(e) => {
                warn!("Could not spool upload '{}': {}", display_name, e);
                Storage::Unresolved
            }
        };
        Self {
            display_name,
            content_type,
            storage,
        }
    }

    /// Wrap a local file, validating that it exists and is readable.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ComplianceError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(ComplianceError::FileNotFound { path });
        }
        if let Err(e) = std::fs::File::open(&path) {
            return Err(ComplianceError::CorruptDocument {
                path,
                detail: e.to_string(),
            });
        }
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string());
        debug!("Resolved local document: {}", path.display());
        Ok(Self {
            display_name,
            content_type: None,
            storage: Storage::Local(path),
        })
    }

    /// The name the client gave the file; shown to the model as-is.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Content type declared by the client, if any. Informational only.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Path to the document on disk.
    pub fn path(&self) -> Result<&Path, ComplianceError> {
        match &self.storage {
            Storage::Local(p) => Ok(p),
            Storage::Spooled { path, .. } => Ok(path),
            Storage::Unresolved => Err(ComplianceError::UploadPathUnresolved),
        }
    }
}

/// Reduce a client-supplied filename to a single safe path component.
fn temp_file_name(display_name: &str) -> String {
    Path::new(display_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty() && n != "." && n != "..")
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

async fn write_temp(display_name: &str, bytes: &[u8]) -> std::io::Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(temp_file_name(display_name));
    tokio::fs::write(&path, bytes).await?;
    Ok((path, temp_dir))
}
