//! Reading table definitions from disk for the command-line tool

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;

use crate::error::TableParserError;

/// Read a file as a string, trying UTF-8 first, then Windows-1252 as fallback
pub fn read_definition_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read table definition: {}", path.display()))?;

    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            // Dumps saved on Windows are often latin1
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                return Err(TableParserError::InputReadError {
                    path: path.to_path_buf(),
                    message: "file contains invalid characters".to_string(),
                }
                .into());
            }
            decoded.into_owned()
        }
    };

    Ok(text.trim_start_matches('\u{feff}').to_string())
}
