//! [`Catalog`]: ordered, read-only mapping from [`ResourceKey`] to [`ResourceDescriptor`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::descriptor::{ResourceDescriptor, ResourceEntry};
use crate::error::{CatalogError, Result};
use crate::key::ResourceKey;

/// Entries of the built-in catalog used when no resources are configured.
const BUILTIN_LINKS: &[(&str, &str)] = &[
    ("keyword1", "https://example.com/file1.pdf"),
    ("keyword2", "https://example.com/file2.txt"),
];

/// Immutable catalog. Built once at startup and shared behind an `Arc`.
///
/// Display order is configuration order; keys are unique.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(ResourceKey, ResourceDescriptor)>,
    index: HashMap<ResourceKey, usize>,
}

impl Catalog {
    /// Builds a catalog from validated pairs, rejecting duplicate keys.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ResourceKey, ResourceDescriptor)>,
    {
        let mut catalog = Catalog::default();
        for (key, descriptor) in pairs {
            if catalog.index.contains_key(&key) {
                return Err(CatalogError::DuplicateKey(key.to_string()));
            }
            catalog.index.insert(key.clone(), catalog.entries.len());
            catalog.entries.push((key, descriptor));
        }
        Ok(catalog)
    }

    /// Builds a catalog from configured entries; the first malformed entry fails the whole load.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ResourceEntry>,
    {
        let pairs = entries
            .into_iter()
            .map(ResourceEntry::into_descriptor)
            .collect::<Result<Vec<_>>>()?;
        Self::from_pairs(pairs)
    }

    /// Parses a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<ResourceEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Reads and parses a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        debug!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The default link-only catalog.
    pub fn builtin() -> Self {
        let pairs = BUILTIN_LINKS.iter().filter_map(|(key, url)| {
            ResourceKey::parse(*key)
                .ok()
                .map(|key| (key, ResourceDescriptor::link(*url)))
        });
        Self::from_pairs(pairs).unwrap_or_default()
    }

    /// Descriptor for `key`, or `None` when the key is not in the catalog.
    pub fn lookup(&self, key: &str) -> Option<&ResourceDescriptor> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKey, &ResourceDescriptor)> {
        self.entries.iter().map(|(key, descriptor)| (key, descriptor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File descriptors whose resolved path is not an existing regular file.
    pub fn missing_files(&self, base_dir: &Path) -> Vec<(ResourceKey, PathBuf)> {
        self.iter()
            .filter_map(|(key, descriptor)| {
                descriptor
                    .resolve_path(base_dir)
                    .filter(|path| !path.is_file())
                    .map(|path| (key.clone(), path))
            })
            .collect()
    }
}
