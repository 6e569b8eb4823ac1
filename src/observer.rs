//! Diagnostic observers
//!
//! The parser and the index selector never print anything themselves. Callers
//! that want to see what was extracted pass an observer in; each step reports a
//! `(stage, detail)` pair to it.
//!
//! ```ignore
//! use rust_tableparser::observer::TracingObserver;
//!
//! let table = rust_tableparser::parse_table_with(ddl, &TracingObserver)?;
//! ```

use std::fmt::Debug;

/// Receives diagnostic events while a table is built or ranked.
pub trait ParseObserver: Sync {
    fn event(&self, stage: &str, detail: &dyn Debug);
}

/// Discards every event. Used by the plain entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {
    fn event(&self, _stage: &str, _detail: &dyn Debug) {}
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn event(&self, stage: &str, detail: &dyn Debug) {
        tracing::debug!(stage = stage, detail = ?detail, "tableparser");
    }
}

impl<F> ParseObserver for F
where
    F: Fn(&str, &dyn Debug) + Sync,
{
    fn event(&self, stage: &str, detail: &dyn Debug) {
        self(stage, detail)
    }
}
