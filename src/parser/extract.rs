//! Pattern rules that pull fragments out of `SHOW CREATE TABLE` output.
//!
//! Each rule handles one fragment kind and works on single lines of the
//! server's pretty-printed output:
//!
//! ```sql
//! CREATE TABLE `child` (
//!   `id` int unsigned NOT NULL AUTO_INCREMENT,
//!   `parent_id` int NOT NULL,
//!   `name` char(40) DEFAULT NULL,
//!   PRIMARY KEY (`id`),
//!   UNIQUE KEY `uk_name` (`name`(10)),
//!   KEY `idx_parent` (`parent_id`),
//!   CONSTRAINT `child_ibfk_1` FOREIGN KEY (`parent_id`) REFERENCES `parent` (`id`) ON DELETE CASCADE
//! ) ENGINE=InnoDB AUTO_INCREMENT=19 DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_0900_ai_ci
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TableParserError};
use crate::quoter::unquote;

// =============================================================================
// Cached Regex Patterns
// =============================================================================

/// A backtick-quoted identifier, optionally qualified with a quoted namespace.
const QUOTED_NAME: &str = r"`(?:[^`\n]|``)+`(?:\.`(?:[^`\n]|``)+`)?";

static TABLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im)^\s*CREATE\s+(TEMPORARY\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?({QUOTED_NAME})"
    ))
    .unwrap()
});

static VIEW_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?im)^\s*CREATE\b[^\n]*?\bVIEW\s+({QUOTED_NAME})")).unwrap()
});

static ENGINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\)\s*ENGINE=([^\s,;]+)").unwrap());

static CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\).*?\bDEFAULT CHARSET=([^\s,;]+)").unwrap());

static COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  `((?:[^`\n]|``)+)` (\S+?)(?: (.*?))?,?\r?$").unwrap());

static PRIMARY_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  PRIMARY KEY \((.*?)\r?$").unwrap());

static SECONDARY_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^  (?:(FULLTEXT|SPATIAL|UNIQUE)\s+)?KEY `((?:[^`\n]|``)+)` \((.*?)\r?$")
        .unwrap()
});

static FOREIGN_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^  CONSTRAINT ({QUOTED_NAME}) FOREIGN KEY \((.*?)\) REFERENCES ({QUOTED_NAME}) \((.*?)\)(.*?),?\r?$"
    ))
    .unwrap()
});

/// The object named in the definition header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeader {
    pub name: String,
    pub temporary: bool,
    pub is_view: bool,
}

/// A column line, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedColumn {
    pub name: String,
    pub data_type: String,
    /// Everything after the data type (`unsigned NOT NULL AUTO_INCREMENT`)
    pub rest: String,
    /// The whole line without indentation or trailing comma
    pub definition: String,
}

/// A `PRIMARY KEY` or `[UNIQUE|FULLTEXT|SPATIAL] KEY` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedKey {
    /// `None` for the primary key line
    pub name: Option<String>,
    /// `FULLTEXT`, `SPATIAL`, `UNIQUE` or empty
    pub modifier: String,
    /// Raw column list between the parentheses
    pub columns: String,
    pub definition: String,
}

/// A `CONSTRAINT ... FOREIGN KEY` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedForeignKey {
    pub name: String,
    pub columns: String,
    pub referenced_database: Option<String>,
    pub referenced_table: String,
    pub referenced_columns: String,
    /// Trailing clauses, e.g. `ON DELETE CASCADE`
    pub options: String,
    pub definition: String,
}

fn clean_line(line: &str) -> String {
    line.trim()
        .trim_end_matches(',')
        .trim_end()
        .to_string()
}

/// Splits the text following an opening `(` at its matching `)`.
///
/// Parentheses inside backtick identifiers and string literals do not count,
/// so a trailing `COMMENT '(...)'` stays out of the column list.
fn split_parenthesized(text: &str) -> Option<(&str, &str)> {
    let mut in_ident = false;
    let mut in_literal = false;
    let mut depth = 0usize;

    for (idx, ch) in text.char_indices() {
        match ch {
            '`' if !in_literal => in_ident = !in_ident,
            '\'' if !in_ident => in_literal = !in_literal,
            '(' if !in_ident && !in_literal => depth += 1,
            ')' if !in_ident && !in_literal => {
                if depth == 0 {
                    return Some((&text[..idx], &text[idx + 1..]));
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Splits a quoted, possibly qualified name into an optional namespace and name.
fn split_name(quoted: &str) -> (Option<String>, String) {
    let (namespace, name) = unquote(quoted, "");
    ((!namespace.is_empty()).then_some(namespace), name)
}

/// Extracts the table (or view) name from the header.
///
/// Unquoted headers are rejected rather than guessed at.
pub fn extract_header(ddl: &str) -> Result<ExtractedHeader> {
    if let Some(caps) = TABLE_HEADER_RE.captures(ddl) {
        let (_, name) = split_name(&caps[2]);
        return Ok(ExtractedHeader {
            name,
            temporary: caps.get(1).is_some(),
            is_view: false,
        });
    }

    if let Some(caps) = VIEW_HEADER_RE.captures(ddl) {
        let (_, name) = split_name(&caps[1]);
        return Ok(ExtractedHeader {
            name,
            temporary: false,
            is_view: true,
        });
    }

    Err(TableParserError::malformed(
        "no quoted CREATE TABLE or CREATE VIEW header",
        ddl,
    ))
}

pub fn extract_engine(ddl: &str) -> Result<String> {
    ENGINE_RE
        .captures(ddl)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| TableParserError::EngineNotFound {
            input: ddl.to_string(),
        })
}

pub fn extract_charset(ddl: &str) -> Result<String> {
    CHARSET_RE
        .captures(ddl)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| TableParserError::CharsetNotFound {
            input: ddl.to_string(),
        })
}

/// Every column line, in source order.
pub fn extract_columns(ddl: &str) -> Vec<ExtractedColumn> {
    COLUMN_RE
        .captures_iter(ddl)
        .map(|caps| ExtractedColumn {
            name: caps[1].replace("``", "`"),
            data_type: caps[2].to_string(),
            rest: caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            definition: clean_line(&caps[0]),
        })
        .collect()
}

/// All `PRIMARY KEY` lines. A well-formed definition has at most one.
pub fn extract_primary_keys(ddl: &str) -> Vec<ExtractedKey> {
    PRIMARY_KEY_RE
        .captures_iter(ddl)
        .filter_map(|caps| {
            let (columns, _) = split_parenthesized(caps.get(1)?.as_str())?;
            Some(ExtractedKey {
                name: None,
                modifier: String::new(),
                columns: columns.to_string(),
                definition: clean_line(&caps[0]),
            })
        })
        .collect()
}

/// Every secondary key line, in source order.
pub fn extract_secondary_keys(ddl: &str) -> Vec<ExtractedKey> {
    SECONDARY_KEY_RE
        .captures_iter(ddl)
        .filter_map(|caps| {
            let (columns, _) = split_parenthesized(caps.get(3)?.as_str())?;
            Some(ExtractedKey {
                name: Some(caps[2].replace("``", "`")),
                modifier: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
                columns: columns.to_string(),
                definition: clean_line(&caps[0]),
            })
        })
        .collect()
}

/// Every foreign key constraint line, in source order.
pub fn extract_foreign_keys(ddl: &str) -> Vec<ExtractedForeignKey> {
    FOREIGN_KEY_RE
        .captures_iter(ddl)
        .map(|caps| {
            let (_, name) = split_name(&caps[1]);
            let (referenced_database, referenced_table) = split_name(&caps[3]);
            ExtractedForeignKey {
                name,
                columns: caps[2].to_string(),
                referenced_database,
                referenced_table,
                referenced_columns: caps[4].to_string(),
                options: caps[5].trim().to_string(),
                definition: clean_line(&caps[0]),
            }
        })
        .collect()
}
