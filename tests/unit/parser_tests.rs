//! Table definition parsing tests

use pretty_assertions::assert_eq;

use rust_tableparser::{parse_table, KeyKind, TableParserError};

use crate::common::table_ddl;

// ============================================================================
// Column Tests
// ============================================================================

#[test]
fn test_positions_follow_source_order() {
    let body: Vec<String> = (1..=12)
        .map(|i| format!("  `c{i}` varchar(10) DEFAULT NULL,"))
        .collect();
    let ddl = table_ddl("wide", body.join("\n").trim_end_matches(','));

    let table = parse_table(&ddl).unwrap();
    assert_eq!(table.columns.len(), 12);
    for (idx, col) in table.columns.iter().enumerate() {
        assert_eq!(col.position, idx + 1);
        assert_eq!(col.name, format!("c{}", idx + 1));
    }
}

#[test]
fn test_scenario_single_primary_key() {
    let ddl = "CREATE TABLE `t` (\n  `id` int NOT NULL,\n  PRIMARY KEY (`id`)\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";
    let table = parse_table(ddl).unwrap();

    assert_eq!(table.name, "t");
    assert_eq!(table.columns.len(), 1);
    let id = &table.columns[0];
    assert_eq!(id.name, "id");
    assert!(!id.nullable);
    assert!(id.numeric);

    assert_eq!(table.keys.len(), 1);
    let pk = &table.keys[0];
    assert_eq!(pk.name, "PRIMARY");
    assert!(pk.primary && pk.unique);
    assert_eq!(pk.kind, KeyKind::BTree);
    assert_eq!(pk.columns.len(), 1);
    assert_eq!(table.ddl, ddl);
}

#[test]
fn test_column_names_with_escaped_backticks() {
    let ddl = table_ddl("t", "  `we``ird` int NOT NULL,\n  KEY `k``1` (`we``ird`)");
    let table = parse_table(&ddl).unwrap();
    assert!(table.column("we`ird").is_some());
    let key = table.key("k`1").unwrap();
    assert_eq!(key.columns[0].name, "we`ird");
    assert!(!table.has_nullable_column(key));
}

#[test]
fn test_composite_primary_key_with_prefix() {
    let ddl = table_ddl(
        "t",
        "  `a` varchar(200) NOT NULL,\n  `b` int NOT NULL,\n  PRIMARY KEY (`a`(50),`b`) USING BTREE",
    );
    let table = parse_table(&ddl).unwrap();
    let pk = table.primary_key().unwrap();
    let cols: Vec<_> = pk.columns.iter().map(|c| (c.name.as_str(), c.prefix)).collect();
    assert_eq!(cols, vec![("a", Some(50)), ("b", None)]);
    assert_eq!(pk.definition, "PRIMARY KEY (`a`(50),`b`) USING BTREE");
}

#[test]
fn test_temporary_table() {
    let ddl = "CREATE TEMPORARY TABLE `scratch` (\n  `id` int DEFAULT NULL\n) ENGINE=MEMORY DEFAULT CHARSET=latin1";
    let table = parse_table(ddl).unwrap();
    assert!(table.temporary);
    assert_eq!(table.engine, "MEMORY");
    assert_eq!(table.charset, "latin1");
}

#[test]
fn test_key_columns_keep_declaration_order() {
    let ddl = table_ddl(
        "t",
        "  `a` int NOT NULL,\n  `b` int NOT NULL,\n  `c` int NOT NULL,\n  KEY `k_cba` (`c`,`b`,`a`)",
    );
    let table = parse_table(&ddl).unwrap();
    let names: Vec<_> = table.key("k_cba").unwrap().column_names().collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_unquoted_definition_is_rejected() {
    let ddl = "CREATE TABLE t (\n  id int NOT NULL\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";
    let err = parse_table(ddl).unwrap_err();
    match err {
        TableParserError::MalformedDefinition { input, .. } => assert_eq!(input, ddl),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_view_without_engine_fails() {
    let ddl = "CREATE ALGORITHM=UNDEFINED DEFINER=`root`@`localhost` SQL SECURITY DEFINER VIEW `v` AS select `t`.`id` AS `id` from `t`";
    assert!(matches!(
        parse_table(ddl),
        Err(TableParserError::EngineNotFound { .. })
    ));
}

#[test]
fn test_two_primary_keys_are_rejected() {
    let ddl = table_ddl("t", "  `a` int NOT NULL,\n  PRIMARY KEY (`a`),\n  PRIMARY KEY (`a`)");
    assert!(matches!(
        parse_table(&ddl),
        Err(TableParserError::MalformedDefinition { .. })
    ));
}

#[test]
fn test_errors_carry_offending_input() {
    let ddl = "CREATE TABLE `t` (\n  `id` int\n) DEFAULT CHARSET=utf8mb4";
    assert_eq!(
        parse_table(ddl),
        Err(TableParserError::EngineNotFound {
            input: ddl.to_string()
        })
    );
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_building_twice_yields_equal_tables() {
    let ddl = table_ddl(
        "t",
        "  `id` int NOT NULL AUTO_INCREMENT,\n  `name` varchar(20) DEFAULT NULL,\n  PRIMARY KEY (`id`),\n  KEY `idx_name` (`name`)",
    );
    assert_eq!(parse_table(&ddl).unwrap(), parse_table(&ddl).unwrap());
}
