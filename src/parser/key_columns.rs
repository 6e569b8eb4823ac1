//! Token-based parsing of key and foreign key column lists
//!
//! ## Supported Syntax
//!
//! ```sql
//! `a`
//! `a`,`b`(10)
//! `name`(16) DESC,`id`
//! (lower(`email`))
//! ```
//!
//! Each element is tokenized with the MySQL dialect so that doubled backticks
//! inside identifiers are unescaped the same way the server writes them.

use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer};

use crate::error::{Result, TableParserError};
use crate::quoter::split_unquoted;

/// One element of a key's column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyColumn {
    /// Column name, or the raw text of a functional key part
    pub name: String,
    /// Index prefix length, e.g. `10` for `` `name`(10) ``
    pub prefix: Option<u32>,
    /// The element as written in the definition
    pub definition: String,
}

fn tokenize(piece: &str) -> Result<Vec<Token>> {
    let dialect = MySqlDialect {};
    let tokens = Tokenizer::new(&dialect, piece)
        .tokenize()
        .map_err(|e| TableParserError::malformed(format!("cannot tokenize key column: {e}"), piece))?;

    Ok(tokens
        .into_iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect())
}

fn parse_prefix(number: &str, piece: &str) -> Result<u32> {
    match number.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TableParserError::malformed(
            "key prefix length must be a positive integer",
            piece,
        )),
    }
}

fn parse_element(piece: &str) -> Result<ParsedKeyColumn> {
    let definition = piece.trim().to_string();
    let tokens = tokenize(&definition)?;

    match tokens.as_slice() {
        [] => Err(TableParserError::malformed("empty key column", piece)),
        [Token::Word(word), rest @ ..] => {
            let prefix = match rest {
                [Token::LParen, Token::Number(n, _), Token::RParen, ..] => {
                    Some(parse_prefix(n, piece)?)
                }
                _ => None,
            };
            Ok(ParsedKeyColumn {
                name: word.value.clone(),
                prefix,
                definition,
            })
        }
        // Functional key part; there is no single column to name.
        _ => Ok(ParsedKeyColumn {
            name: definition.clone(),
            prefix: None,
            definition,
        }),
    }
}

/// Parses the text between a key's parentheses into its columns.
pub fn parse_key_columns(list: &str) -> Result<Vec<ParsedKeyColumn>> {
    if list.trim().is_empty() {
        return Err(TableParserError::malformed("empty key column list", list));
    }

    split_unquoted(list, ',')
        .into_iter()
        .map(parse_element)
        .collect()
}

/// Parses a foreign key column list into bare column names.
pub fn parse_column_names(list: &str) -> Result<Vec<String>> {
    Ok(parse_key_columns(list)?
        .into_iter()
        .map(|column| column.name)
        .collect())
}
