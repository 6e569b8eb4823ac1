//! Backtick quoting for MySQL identifiers and simple value escaping.
//!
//! # Examples
//!
//! ```ignore
//! use rust_tableparser::quoter::*;
//!
//! assert_eq!(quote(&["db", "tbl"]), "`db`.`tbl`");
//! assert_eq!(unquote("`db`.`tbl`", "test"), ("db".to_string(), "tbl".to_string()));
//! assert_eq!(unquote("tbl", "test"), ("test".to_string(), "tbl".to_string()));
//! ```

/// The identifier quote character used by MySQL.
pub const QUOTE: char = '`';

/// Quotes each part in backticks and joins them with `.`.
///
/// Backticks inside a part are doubled. An empty slice yields an empty string.
pub fn quote<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| format!("`{}`", part.as_ref().replace('`', "``")))
        .collect::<Vec<_>>()
        .join(".")
}

/// Splits a possibly quoted, possibly qualified name into `(namespace, identifier)`.
///
/// The split happens on the first `.` outside a quoted part. Without a
/// separator the namespace is `default_namespace`. Each part loses one leading
/// and one trailing backtick, and doubled backticks collapse to one.
pub fn unquote(qualified: &str, default_namespace: &str) -> (String, String) {
    match split_unquoted(qualified, '.').as_slice() {
        [identifier] => (default_namespace.to_string(), strip_quotes(identifier)),
        [namespace, rest @ ..] => (strip_quotes(namespace), strip_quotes(&rest.join("."))),
        [] => (default_namespace.to_string(), String::new()),
    }
}

/// Removes one surrounding pair of backticks and un-doubles inner ones.
pub fn strip_quotes(part: &str) -> String {
    let part = part.strip_prefix(QUOTE).unwrap_or(part);
    let part = part.strip_suffix(QUOTE).unwrap_or(part);
    part.replace("``", "`")
}

/// Splits `text` on `separator` wherever the separator is neither inside a
/// backtick-quoted identifier, a single-quoted literal, nor nested parentheses.
pub fn split_unquoted(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_ident = false;
    let mut in_literal = false;
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            '`' if !in_literal => in_ident = !in_ident,
            '\'' if !in_ident => in_literal = !in_literal,
            '(' if !in_ident && !in_literal => depth += 1,
            ')' if !in_ident && !in_literal => depth = depth.saturating_sub(1),
            c if c == separator && !in_ident && !in_literal && depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Quotes a value for use in a statement.
///
/// `None` becomes `NULL`. Only `char` typed values are quoted; everything else
/// is returned verbatim.
pub fn quote_value(value: Option<&str>, data_type: &str) -> String {
    match value {
        None => "NULL".to_string(),
        Some(v) if data_type != "char" => v.to_string(),
        Some(v) => format!("'{}'", v.replace('\\', "\\\\").replace('\'', "\\'")),
    }
}

/// Escapes the `LIKE` wildcards `%` and `_` and wraps the pattern in quotes.
pub fn escape_like(pattern: &str) -> String {
    format!("'{}'", pattern.replace('%', "\\%").replace('_', "\\_"))
}

/// Joins values with `,`, escaping embedded commas and literal `\N` markers.
pub fn serialize_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref().replace(',', "\\,").replace("\\N", "\\\\N"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Reverses [`serialize_list`].
pub fn deserialize_list(list: &str) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = list.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&',') => {
                chars.next();
                current.push(',');
            }
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    items.push(current);

    items
        .into_iter()
        .map(|item| item.replace("\\\\N", "\\N"))
        .collect()
}
