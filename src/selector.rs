//! Index selection for scan ordering
//!
//! Only BTREE keys are ranked. The order is: PRIMARY, then unique keys, then
//! keys without nullable columns, then keys with more columns. Anything still
//! tied keeps its declaration order.

use std::cmp::Ordering;

use crate::error::{Result, TableParserError};
use crate::model::{Key, KeyKind, Table};
use crate::observer::{NoopObserver, ParseObserver};

fn rank(table: &Table, x: &Key, y: &Key) -> Ordering {
    let is_primary = |k: &Key| k.name == Key::PRIMARY;

    // `true` sorts first in each comparison, hence the reversed operands.
    is_primary(y)
        .cmp(&is_primary(x))
        .then_with(|| y.unique.cmp(&x.unique))
        .then_with(|| table.has_nullable_column(x).cmp(&table.has_nullable_column(y)))
        .then_with(|| y.columns.len().cmp(&x.columns.len()))
}

/// BTREE keys of `table`, best first.
pub fn sort_indexes(table: &Table) -> Vec<&Key> {
    sort_indexes_with(table, &NoopObserver)
}

pub fn sort_indexes_with<'a>(table: &'a Table, observer: &dyn ParseObserver) -> Vec<&'a Key> {
    let mut keys: Vec<&Key> = table
        .keys
        .iter()
        .filter(|k| k.kind == KeyKind::BTree)
        .collect();

    // sort_by is stable, ties stay in declaration order
    keys.sort_by(|x, y| rank(table, x, y));

    observer.event(
        "index.sorted",
        &keys.iter().map(|k| k.name.as_str()).collect::<Vec<_>>(),
    );
    keys
}

/// Returns the key to scan with.
///
/// A non-empty `preferred` name is returned as-is when the table has such a
/// key and is an error otherwise; it is never silently replaced. With an empty
/// `preferred` the best ranked BTREE key wins.
pub fn find_best_index<'a>(table: &'a Table, preferred: &str) -> Result<&'a str> {
    find_best_index_with(table, preferred, &NoopObserver)
}

pub fn find_best_index_with<'a>(
    table: &'a Table,
    preferred: &str,
    observer: &dyn ParseObserver,
) -> Result<&'a str> {
    let best = if !preferred.is_empty() {
        table
            .key(preferred)
            .map(|k| k.name.as_str())
            .ok_or_else(|| TableParserError::IndexNotFound {
                name: preferred.to_string(),
                table: table.name.clone(),
            })?
    } else {
        sort_indexes_with(table, observer)
            .into_iter()
            .next()
            .map(|k| k.name.as_str())
            .ok_or_else(|| TableParserError::NoUsableIndex {
                table: table.name.clone(),
            })?
    };

    observer.event("index.best", &best);
    Ok(best)
}
