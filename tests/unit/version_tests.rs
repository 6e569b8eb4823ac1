//! Server version comparison tests

use std::cmp::Ordering;

use rust_tableparser::version::{compare, major, minor, normalize, release, validate};
use rust_tableparser::{TableParserError, Version, VersionPolicy};

#[test]
fn test_validate_rejects() {
    for v in ["8a.0.30", "8.0c.30", "8.0.30d", "4.0.30", "9.0.30"] {
        assert!(!validate(v), "Validation returned true for '{v}'");
    }
}

#[test]
fn test_percona_build_suffix() {
    let v = "8.0.29-21.3";
    assert!(validate(v));
    assert_eq!(major(v).unwrap(), "8");
    assert_eq!(minor(v).unwrap(), "0.29");
    assert_eq!(release(v).unwrap(), "-21.3");
}

#[test]
fn test_normalize_pads() {
    assert_eq!(normalize("8.0.9-rel").unwrap(), "80009");
    assert_eq!(normalize("8.0.30").unwrap(), "80030");
}

#[test]
fn test_compare_scenarios() {
    assert_eq!(compare("8.0.30-rel", "5.7.55").unwrap(), Ordering::Greater);
    assert_eq!(compare("5.7.55", "8.0.30-rel").unwrap(), Ordering::Less);
    assert_eq!(compare("8.0.30-rel", "8.0.30-rel1").unwrap(), Ordering::Equal);
}

#[test]
fn test_compare_matches_normalized_order() {
    let versions = ["5.7.9", "5.7.44", "8.0.1", "8.0.30", "8.4.2"];
    for a in versions {
        for b in versions {
            let lexical = normalize(a).unwrap().cmp(&normalize(b).unwrap());
            assert_eq!(compare(a, b).unwrap(), lexical, "{a} vs {b}");
        }
    }
}

#[test]
fn test_invalid_version_error_names_input() {
    assert_eq!(
        compare("8.0.30", "10.1.1"),
        Err(TableParserError::InvalidVersion {
            version: "10.1.1".to_string()
        })
    );
}

#[test]
fn test_mariadb_with_permissive_policy() {
    let policy = VersionPolicy::permissive();
    let maria: Version = policy.parse("10.11.6-MariaDB").unwrap();
    assert_eq!(maria.major, 10);
    assert_eq!(maria.release.as_deref(), Some("MariaDB"));
    assert!("10.11.6-MariaDB".parse::<Version>().is_err());
}
