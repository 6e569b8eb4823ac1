//! Index selection tests

use pretty_assertions::assert_eq;

use rust_tableparser::{find_best_index, parse_table, sort_indexes, TableParserError};

use crate::common::table_ddl;

fn sorted_names(body: &str) -> Vec<String> {
    let table = parse_table(&table_ddl("t", body)).unwrap();
    sort_indexes(&table)
        .into_iter()
        .map(|k| k.name.clone())
        .collect()
}

#[test]
fn test_primary_always_first() {
    let names = sorted_names(
        "  `a` int NOT NULL,
  `b` int NOT NULL,
  `c` int NOT NULL,
  UNIQUE KEY `uk_abc` (`a`,`b`,`c`),
  PRIMARY KEY (`a`)",
    );
    assert_eq!(names[0], "PRIMARY");
}

#[test]
fn test_unique_two_column_beats_plain_one_column() {
    let table = parse_table(&table_ddl(
        "t",
        "  `a` int DEFAULT NULL,
  `b` int DEFAULT NULL,
  KEY `k_a` (`a`),
  UNIQUE KEY `uk_ab` (`a`,`b`)",
    ))
    .unwrap();
    assert_eq!(find_best_index(&table, "").unwrap(), "uk_ab");
}

#[test]
fn test_full_tie_break_chain() {
    let names = sorted_names(
        "  `a` int DEFAULT NULL,
  `b` int NOT NULL,
  `c` int NOT NULL,
  KEY `k_a` (`a`),
  KEY `k_b` (`b`),
  KEY `k_bc` (`b`,`c`),
  UNIQUE KEY `uk_a` (`a`),
  UNIQUE KEY `uk_b` (`b`),
  KEY `k_c` (`c`)",
    );
    assert_eq!(
        names,
        vec!["uk_b", "uk_a", "k_bc", "k_b", "k_c", "k_a"]
    );
}

#[test]
fn test_preferred_missing_even_when_others_usable() {
    let table = parse_table(&table_ddl(
        "t",
        "  `a` int NOT NULL,\n  PRIMARY KEY (`a`),\n  KEY `k_a` (`a`)",
    ))
    .unwrap();
    assert!(matches!(
        find_best_index(&table, "missing"),
        Err(TableParserError::IndexNotFound { name, .. }) if name == "missing"
    ));
}

#[test]
fn test_no_keys_at_all() {
    let table = parse_table(&table_ddl("t", "  `a` int NOT NULL")).unwrap();
    assert!(matches!(
        find_best_index(&table, ""),
        Err(TableParserError::NoUsableIndex { .. })
    ));
}
