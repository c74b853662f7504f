//! Integration tests for [`resbot_catalog::Catalog`].
//!
//! Covers: lookup returns the inserted descriptor, unknown keys yield None, display order follows
//! configuration order, load-time rejection of malformed entries, and the missing-file check.

use std::fs;

use resbot_catalog::{Catalog, CatalogError, ResourceDescriptor, ResourceEntry, ResourceKey};
use tempfile::TempDir;

fn key(s: &str) -> ResourceKey {
    ResourceKey::parse(s).unwrap()
}

/// **Test: every configured key looks up to exactly the descriptor it was configured with.**
#[test]
fn test_lookup_returns_inserted_descriptor() {
    let pairs = vec![
        (key("Bitcoin"), ResourceDescriptor::file("bitcoin.pdf")),
        (key("Ethereum"), ResourceDescriptor::link("https://ethereum.org/whitepaper")),
        (key("Notes"), ResourceDescriptor::file("/srv/notes.txt")),
    ];
    let catalog = Catalog::from_pairs(pairs.clone()).unwrap();

    assert_eq!(catalog.len(), 3);
    for (k, d) in &pairs {
        assert_eq!(catalog.lookup(k.as_str()), Some(d));
    }
}

/// **Test: keys absent from the catalog yield None; lookup is case-sensitive.**
#[test]
fn test_lookup_unknown_key_is_none() {
    let catalog =
        Catalog::from_pairs(vec![(key("Bitcoin"), ResourceDescriptor::file("bitcoin.pdf"))])
            .unwrap();

    assert!(catalog.lookup("Ethereum").is_none());
    assert!(catalog.lookup("bitcoin").is_none());
    assert!(catalog.lookup("").is_none());
}

/// **Test: keys() follows configuration order, not alphabetical order.**
#[test]
fn test_keys_follow_configuration_order() {
    let json = r#"[
        {"key": "zeta", "file_url": "https://example.com/z"},
        {"key": "alpha", "file_path": "a.pdf"},
        {"key": "mid", "file_url": "https://example.com/m"}
    ]"#;
    let catalog = Catalog::from_json_str(json).unwrap();

    let keys: Vec<&str> = catalog.keys().map(ResourceKey::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

/// **Test: duplicate keys are rejected at load time.**
#[test]
fn test_duplicate_key_rejected() {
    let entries = vec![
        ResourceEntry::link(key("Bitcoin"), "https://bitcoin.org/bitcoin.pdf"),
        ResourceEntry::file(key("Bitcoin"), "bitcoin.pdf"),
    ];
    let err = Catalog::from_entries(entries).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateKey(k) if k == "Bitcoin"));
}

/// **Test: malformed JSON entries (bad key, both locations) fail the whole load.**
#[test]
fn test_malformed_entries_rejected() {
    let bad_key = r#"[{"key": " padded ", "file_url": "https://example.com"}]"#;
    assert!(matches!(
        Catalog::from_json_str(bad_key),
        Err(CatalogError::Parse(_))
    ));

    let both = r#"[{"key": "a", "file_url": "https://example.com", "file_path": "a.pdf"}]"#;
    assert!(matches!(
        Catalog::from_json_str(both),
        Err(CatalogError::AmbiguousDescriptor { .. })
    ));

    assert!(Catalog::from_json_str("{}").is_err());
}

/// **Test: load() reads a file; a missing file is a Read error.**
#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resources.json");
    fs::write(&path, r#"[{"key": "Bitcoin", "file_path": "bitcoin.pdf"}]"#).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(
        catalog.lookup("Bitcoin"),
        Some(&ResourceDescriptor::file("bitcoin.pdf"))
    );

    let err = Catalog::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
}

/// **Test: missing_files reports file descriptors whose resolved path does not exist; links are ignored.**
#[test]
fn test_missing_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("present.pdf"), b"%PDF").unwrap();

    let catalog = Catalog::from_pairs(vec![
        (key("present"), ResourceDescriptor::file("present.pdf")),
        (key("absent"), ResourceDescriptor::file("absent.pdf")),
        (key("link"), ResourceDescriptor::link("https://example.com/x.pdf")),
    ])
    .unwrap();

    let missing = catalog.missing_files(dir.path());
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].0.as_str(), "absent");
    assert_eq!(missing[0].1, dir.path().join("absent.pdf"));
}
