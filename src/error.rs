//! Error types for rust-tableparser

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while introspecting a table definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableParserError {
    #[error("Malformed table definition ({message}): {input}")]
    MalformedDefinition { message: String, input: String },

    #[error("Could not determine the table engine from: {input}")]
    EngineNotFound { input: String },

    #[error("Could not determine the table default charset from: {input}")]
    CharsetNotFound { input: String },

    #[error("Index '{name}' does not exist in table '{table}'")]
    IndexNotFound { name: String, table: String },

    #[error("Table '{table}' has no usable BTREE index")]
    NoUsableIndex { table: String },

    #[error("Invalid version format: '{version}'")]
    InvalidVersion { version: String },

    #[error("Failed to read table definition: {path} ({message})")]
    InputReadError { path: PathBuf, message: String },
}

impl TableParserError {
    pub(crate) fn malformed(message: impl Into<String>, input: impl Into<String>) -> Self {
        TableParserError::MalformedDefinition {
            message: message.into(),
            input: input.into(),
        }
    }

    pub(crate) fn invalid_version(version: &str) -> Self {
        TableParserError::InvalidVersion {
            version: version.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableParserError>;
