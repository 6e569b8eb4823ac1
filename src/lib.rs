//! rust-tableparser: structural introspection of MySQL table definitions
//!
//! This library recovers a typed model (columns, keys, foreign keys, engine,
//! charset) from `SHOW CREATE TABLE` output, picks the best index for ordered
//! scans, and compares server version strings.

pub mod error;
pub mod input;
pub mod model;
pub mod observer;
pub mod parser;
pub mod quoter;
pub mod report;
pub mod selector;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context, Result};

use observer::{NoopObserver, ParseObserver, TracingObserver};

pub use error::TableParserError;
pub use model::{Column, ForeignKey, Key, KeyColumn, KeyKind, ReferentialAction, Table};
pub use parser::{parse_table, parse_table_with, parse_tables};
pub use report::InspectReport;
pub use selector::{find_best_index, sort_indexes};
pub use version::{Version, VersionPolicy};

/// Options for inspecting table definition files
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Files holding `SHOW CREATE TABLE` output, one table per file
    pub paths: Vec<PathBuf>,
    /// Index to use instead of the best ranked one; empty picks automatically
    pub preferred_index: String,
    /// Report every parsing step through `tracing`
    pub verbose: bool,
}

/// Parse every file in `options.paths` and select an index for each table
pub fn inspect(options: &InspectOptions) -> Result<Vec<InspectReport>> {
    let ddls = options
        .paths
        .iter()
        .map(|path| input::read_definition_file(path))
        .collect::<Result<Vec<_>>>()?;

    let observer: &dyn ParseObserver = if options.verbose {
        &TracingObserver
    } else {
        &NoopObserver
    };

    let tables = parse_tables(&ddls, observer);

    let mut reports = Vec::with_capacity(tables.len());
    for (path, table) in options.paths.iter().zip(tables) {
        let table = table.with_context(|| format!("Failed to parse {}", path.display()))?;
        let best_index = selector::find_best_index_with(&table, &options.preferred_index, observer)
            .with_context(|| format!("No index selected for {}", path.display()))?
            .to_string();

        tracing::info!(table = %table.name, index = %best_index, "Selected index");

        reports.push(InspectReport {
            path: path.clone(),
            table,
            best_index,
        });
    }

    Ok(reports)
}
