//! # resbot-catalog
//!
//! The static resource catalog: [`ResourceKey`] (validated newtype), [`ResourceDescriptor`] (link or
//! local file), and [`Catalog`], loaded once from JSON configuration and read-only afterwards.

mod catalog;
mod descriptor;
mod error;
mod key;

pub use catalog::Catalog;
pub use descriptor::{resolve_file_path, ResourceDescriptor, ResourceEntry};
pub use error::{CatalogError, Result};
pub use key::{ResourceKey, MAX_KEY_BYTES};
