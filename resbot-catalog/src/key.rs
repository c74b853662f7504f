//! [`ResourceKey`]: the display label and callback payload of a resource.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::{CatalogError, Result};

/// Telegram rejects callback data longer than 64 bytes.
pub const MAX_KEY_BYTES: usize = 64;

/// Validated resource key: non-empty, no surrounding whitespace, at most [`MAX_KEY_BYTES`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let reason = if raw.trim().is_empty() {
            Some("key is empty")
        } else if raw.trim() != raw {
            Some("key has leading or trailing whitespace")
        } else if raw.len() > MAX_KEY_BYTES {
            Some("key is longer than 64 bytes")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(CatalogError::InvalidKey { key: raw, reason }),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ResourceKey {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for ResourceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ResourceKey::parse(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let key = ResourceKey::parse("Bitcoin").unwrap();
        assert_eq!(key.as_str(), "Bitcoin");
        assert_eq!(key.to_string(), "Bitcoin");
        assert!(ResourceKey::parse("white paper v2").is_ok());
        assert!(ResourceKey::parse("x".repeat(MAX_KEY_BYTES)).is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ResourceKey::parse("").is_err());
        assert!(ResourceKey::parse("   ").is_err());
        assert!(ResourceKey::parse(" Bitcoin").is_err());
        assert!(ResourceKey::parse("Bitcoin\n").is_err());
        assert!(ResourceKey::parse("x".repeat(MAX_KEY_BYTES + 1)).is_err());
    }

    #[test]
    fn test_length_is_counted_in_bytes() {
        // 22 three-byte characters = 66 bytes
        let key = "€".repeat(22);
        assert!(matches!(
            ResourceKey::parse(key),
            Err(CatalogError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let key: ResourceKey = serde_json::from_str("\"keyword1\"").unwrap();
        assert_eq!(key.as_str(), "keyword1");
        assert!(serde_json::from_str::<ResourceKey>("\"\"").is_err());
    }
}
