//! `SHOW CREATE TABLE` parsing

pub mod extract;
pub mod key_columns;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{build_table, Table};
use crate::observer::{NoopObserver, ParseObserver};

/// Minimum number of definitions to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Parse a single table definition
pub fn parse_table(ddl: &str) -> Result<Table> {
    build_table(ddl, &NoopObserver)
}

/// Parse a single table definition, reporting each step to `observer`
pub fn parse_table_with(ddl: &str, observer: &dyn ParseObserver) -> Result<Table> {
    build_table(ddl, observer)
}

/// Parse independent table definitions, in parallel for larger batches.
///
/// Results are returned in input order; one bad definition does not stop the
/// others from being built.
pub fn parse_tables<S>(ddls: &[S], observer: &dyn ParseObserver) -> Vec<Result<Table>>
where
    S: AsRef<str> + Sync,
{
    if ddls.len() >= PARALLEL_THRESHOLD {
        ddls.par_iter()
            .map(|ddl| build_table(ddl.as_ref(), observer))
            .collect()
    } else {
        ddls.iter()
            .map(|ddl| build_table(ddl.as_ref(), observer))
            .collect()
    }
}
