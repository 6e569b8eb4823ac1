//! Table model element types

use std::fmt;

/// Index storage strategy declared for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Ordered tree; the only kind usable for scan ordering
    BTree,
    /// Spatial tree (`SPATIAL KEY`)
    RTree,
    /// Full-text (`FULLTEXT KEY`)
    Text,
}

impl KeyKind {
    /// Derives the kind from the modifier preceding `KEY`.
    pub fn from_modifier(modifier: &str) -> Self {
        if modifier.contains("FULLTEXT") {
            KeyKind::Text
        } else if modifier.contains("SPATIAL") {
            KeyKind::RTree
        } else {
            KeyKind::BTree
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::BTree => "BTREE",
            KeyKind::RTree => "RTREE",
            KeyKind::Text => "TEXT",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// 1-based position in the definition
    pub position: usize,
    /// Declared type token, e.g. `int` or `varchar(255)`
    pub data_type: String,
    /// The full column line, without its indentation and trailing comma
    pub definition: String,
    pub nullable: bool,
    pub generated: bool,
    /// Substring heuristic on the type token, see [`is_numeric_type`]
    pub numeric: bool,
    pub auto_increment: bool,
}

/// Returns true when the type token looks numeric.
///
/// This is a substring test, so any future type whose name happens to contain
/// `int` will be classified as numeric too.
pub fn is_numeric_type(data_type: &str) -> bool {
    ["int", "float", "double", "decimal", "year"]
        .iter()
        .any(|needle| data_type.contains(needle))
}

/// One column of a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumn {
    pub name: String,
    /// Prefix length; `None` indexes the whole column
    pub prefix: Option<u32>,
    /// The column reference as written
    pub definition: String,
}

/// Primary or secondary key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub name: String,
    pub kind: KeyKind,
    pub primary: bool,
    pub unique: bool,
    /// Columns in declaration order
    pub columns: Vec<KeyColumn>,
    /// The key line, without its indentation and trailing comma
    pub definition: String,
}

impl Key {
    pub const PRIMARY: &'static str = "PRIMARY";

    pub fn column(&self, name: &str) -> Option<&KeyColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

/// Referential action of `ON DELETE` / `ON UPDATE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl ReferentialAction {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "RESTRICT" => Some(ReferentialAction::Restrict),
            "CASCADE" => Some(ReferentialAction::Cascade),
            "SET NULL" => Some(ReferentialAction::SetNull),
            "NO ACTION" => Some(ReferentialAction::NoAction),
            "SET DEFAULT" => Some(ReferentialAction::SetDefault),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }
}

/// Foreign key constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    /// Set when the referenced table is qualified with a database
    pub referenced_database: Option<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
    pub definition: String,
}

/// A table recovered from its `SHOW CREATE TABLE` text.
///
/// Built once by [`crate::model::build_table`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub temporary: bool,
    pub engine: String,
    pub charset: String,
    /// Columns ordered by position
    pub columns: Vec<Column>,
    /// Keys in declaration order, primary key first when present
    pub keys: Vec<Key>,
    pub foreign_keys: Vec<ForeignKey>,
    pub ddl: String,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn key(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name == name)
    }

    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.name == name)
    }

    pub fn primary_key(&self) -> Option<&Key> {
        self.keys.iter().find(|k| k.primary)
    }

    /// True when the definition yielded no columns at all.
    ///
    /// Usually a sign that the text was not pretty-printed by the server.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when any column of `key` may hold NULL.
    ///
    /// Key columns missing from the table (functional key parts) count as
    /// nullable.
    pub fn has_nullable_column(&self, key: &Key) -> bool {
        key.columns
            .iter()
            .any(|kc| self.column(&kc.name).map_or(true, |c| c.nullable))
    }
}
