//! File-based inspection tests

use rust_tableparser::{inspect, InspectOptions};

use crate::common::{create_sql_file, fixture_path, table_ddl};

#[test]
fn test_inspect_fixtures() {
    let options = InspectOptions {
        paths: vec![fixture_path("child.sql"), fixture_path("no_primary.sql")],
        ..Default::default()
    };

    let reports = inspect(&options).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].table.name, "child");
    assert_eq!(reports[0].best_index, "PRIMARY");
    assert_eq!(reports[1].table.name, "events");
    assert_eq!(reports[1].best_index, "uk_host_seen");
}

#[test]
fn test_inspect_with_preferred_index() {
    let options = InspectOptions {
        paths: vec![fixture_path("child.sql")],
        preferred_index: "idx_parent".to_string(),
        verbose: true,
    };

    let reports = inspect(&options).unwrap();
    assert_eq!(reports[0].best_index, "idx_parent");
}

#[test]
fn test_inspect_missing_preferred_index_fails() {
    let options = InspectOptions {
        paths: vec![fixture_path("child.sql")],
        preferred_index: "nope".to_string(),
        verbose: false,
    };

    let err = inspect(&options).unwrap_err();
    assert!(
        format!("{err:#}").contains("Index 'nope' does not exist in table 'child'"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn test_inspect_fulltext_only_fails() {
    let options = InspectOptions {
        paths: vec![fixture_path("fulltext_only.sql")],
        ..Default::default()
    };
    assert!(inspect(&options).is_err());
}

#[test]
fn test_inspect_many_files_in_parallel() {
    let files: Vec<_> = (0..12)
        .map(|i| {
            let ddl = table_ddl(
                &format!("t{i}"),
                "  `id` int NOT NULL,\n  `v` int DEFAULT NULL,\n  KEY `k_v` (`v`),\n  PRIMARY KEY (`id`)",
            );
            create_sql_file(ddl.as_bytes())
        })
        .collect();

    let options = InspectOptions {
        paths: files.iter().map(|f| f.path().to_path_buf()).collect(),
        ..Default::default()
    };

    let reports = inspect(&options).unwrap();
    assert_eq!(reports.len(), 12);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.table.name, format!("t{i}"));
        assert_eq!(report.best_index, "PRIMARY");
    }
}

#[test]
fn test_inspect_windows_1252_file() {
    let mut ddl = b"CREATE TABLE `caf\xe9` (\n  `id` int NOT NULL,\n".to_vec();
    ddl.extend_from_slice(b"  PRIMARY KEY (`id`)\n) ENGINE=InnoDB DEFAULT CHARSET=latin1\n");
    let file = create_sql_file(&ddl);

    let options = InspectOptions {
        paths: vec![file.path().to_path_buf()],
        ..Default::default()
    };

    let reports = inspect(&options).unwrap();
    assert_eq!(reports[0].table.name, "café");
}

#[test]
fn test_inspect_reports_unreadable_file() {
    let options = InspectOptions {
        paths: vec![fixture_path("does_not_exist.sql")],
        ..Default::default()
    };

    let err = inspect(&options).unwrap_err();
    assert!(err.to_string().contains("Failed to read table definition"));
}
