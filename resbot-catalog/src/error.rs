use thiserror::Error;

/// Rejections raised while building a catalog. Lookups never fail; a missing key is `None`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid resource key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Duplicate resource key: {0}")]
    DuplicateKey(String),

    #[error("Resource {key:?} must set exactly one of file_url or file_path")]
    AmbiguousDescriptor { key: String },

    #[error("Resource {key:?} has an empty {field}")]
    EmptyLocation { key: String, field: &'static str },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
