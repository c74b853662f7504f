//! Resource descriptors and their configuration form.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::key::ResourceKey;

/// Where a resource's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceDescriptor {
    /// Remote resource; delivered as a text message carrying the URL.
    Link { url: String },
    /// Local file; delivered as an upload of its bytes.
    File { path: PathBuf },
}

impl ResourceDescriptor {
    pub fn link(url: impl Into<String>) -> Self {
        ResourceDescriptor::Link { url: url.into() }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        ResourceDescriptor::File { path: path.into() }
    }

    /// Local path to read for a `File` descriptor; relative paths are joined onto `base_dir`.
    pub fn resolve_path(&self, base_dir: &Path) -> Option<PathBuf> {
        match self {
            ResourceDescriptor::Link { .. } => None,
            ResourceDescriptor::File { path } => Some(resolve_file_path(path, base_dir)),
        }
    }
}

/// Absolute paths are kept; relative ones are joined onto `base_dir`.
pub fn resolve_file_path(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// One configured catalog entry: `{"key": "...", "file_url": "..."}` or `{"key": "...", "file_path": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceEntry {
    pub key: ResourceKey,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

impl ResourceEntry {
    pub fn link(key: ResourceKey, url: impl Into<String>) -> Self {
        Self {
            key,
            file_url: Some(url.into()),
            file_path: None,
        }
    }

    pub fn file(key: ResourceKey, path: impl Into<PathBuf>) -> Self {
        Self {
            key,
            file_url: None,
            file_path: Some(path.into()),
        }
    }

    /// Validates the entry into a key/descriptor pair.
    pub fn into_descriptor(self) -> Result<(ResourceKey, ResourceDescriptor)> {
        let descriptor = match (self.file_url, self.file_path) {
            (Some(url), None) => {
                if url.trim().is_empty() {
                    return Err(CatalogError::EmptyLocation {
                        key: self.key.to_string(),
                        field: "file_url",
                    });
                }
                ResourceDescriptor::Link { url }
            }
            (None, Some(path)) => {
                if path.as_os_str().is_empty() {
                    return Err(CatalogError::EmptyLocation {
                        key: self.key.to_string(),
                        field: "file_path",
                    });
                }
                ResourceDescriptor::File { path }
            }
            _ => {
                return Err(CatalogError::AmbiguousDescriptor {
                    key: self.key.to_string(),
                })
            }
        };
        Ok((self.key, descriptor))
    }
}
