//! Table model builder - assembles extracted fragments into a [`Table`]

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::elements::{
    is_numeric_type, Column, ForeignKey, Key, KeyColumn, KeyKind, ReferentialAction, Table,
};
use crate::error::{Result, TableParserError};
use crate::observer::ParseObserver;
use crate::parser::extract::{
    extract_charset, extract_columns, extract_engine, extract_foreign_keys, extract_header,
    extract_primary_keys, extract_secondary_keys, ExtractedColumn, ExtractedForeignKey,
    ExtractedKey,
};
use crate::parser::key_columns::{parse_column_names, parse_key_columns};

static ON_DELETE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ON DELETE (RESTRICT|CASCADE|SET NULL|NO ACTION|SET DEFAULT)").unwrap()
});

static ON_UPDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ON UPDATE (RESTRICT|CASCADE|SET NULL|NO ACTION|SET DEFAULT)").unwrap()
});

/// Builds a [`Table`] from the full `SHOW CREATE TABLE` text.
///
/// Fails on the first missing fragment (name, engine, charset) or broken
/// invariant; nothing partial is ever returned.
pub fn build_table(ddl: &str, observer: &dyn ParseObserver) -> Result<Table> {
    if ddl.trim().is_empty() {
        return Err(TableParserError::malformed("empty table definition", ddl));
    }

    let header = extract_header(ddl)?;
    observer.event("table.name", &header.name);

    let engine = extract_engine(ddl)?;
    observer.event("table.engine", &engine);

    let charset = extract_charset(ddl)?;
    observer.event("table.charset", &charset);

    let columns = build_columns(extract_columns(ddl))?;
    observer.event("table.columns", &columns.len());
    if columns.is_empty() {
        observer.event("table.empty", &header.name);
    }

    let keys = build_keys(ddl)?;
    observer.event(
        "table.keys",
        &keys.iter().map(|k| k.name.as_str()).collect::<Vec<_>>(),
    );

    let foreign_keys = build_foreign_keys(extract_foreign_keys(ddl))?;
    observer.event(
        "table.foreign_keys",
        &foreign_keys.iter().map(|fk| fk.name.as_str()).collect::<Vec<_>>(),
    );

    Ok(Table {
        name: header.name,
        temporary: header.temporary,
        engine,
        charset,
        columns,
        keys,
        foreign_keys,
        ddl: ddl.to_string(),
    })
}

fn ensure_unique<'a>(
    seen: &mut HashSet<&'a str>,
    name: &'a str,
    what: &str,
    definition: &str,
) -> Result<()> {
    if seen.insert(name) {
        Ok(())
    } else {
        Err(TableParserError::malformed(
            format!("duplicate {what} name '{name}'"),
            definition,
        ))
    }
}

fn build_columns(extracted: Vec<ExtractedColumn>) -> Result<Vec<Column>> {
    let mut seen = HashSet::new();
    for col in &extracted {
        ensure_unique(&mut seen, &col.name, "column", &col.definition)?;
    }

    Ok(extracted
        .into_iter()
        .enumerate()
        .map(|(idx, col)| Column {
            position: idx + 1,
            nullable: !col.definition.contains("NOT NULL"),
            generated: col.definition.contains("GENERATED ALWAYS AS"),
            numeric: is_numeric_type(&col.data_type),
            auto_increment: col.rest.contains("AUTO_INCREMENT"),
            name: col.name,
            data_type: col.data_type,
            definition: col.definition,
        })
        .collect())
}

fn build_key(extracted: ExtractedKey) -> Result<Key> {
    let columns = parse_key_columns(&extracted.columns)?
        .into_iter()
        .map(|c| KeyColumn {
            name: c.name,
            prefix: c.prefix,
            definition: c.definition,
        })
        .collect();

    let key = match extracted.name {
        None => Key {
            name: Key::PRIMARY.to_string(),
            kind: KeyKind::BTree,
            primary: true,
            unique: true,
            columns,
            definition: extracted.definition,
        },
        Some(name) => Key {
            name,
            kind: KeyKind::from_modifier(&extracted.modifier),
            primary: false,
            unique: extracted.modifier.contains("UNIQUE"),
            columns,
            definition: extracted.definition,
        },
    };

    Ok(key)
}

fn build_keys(ddl: &str) -> Result<Vec<Key>> {
    let primary = extract_primary_keys(ddl);
    if primary.len() > 1 {
        return Err(TableParserError::malformed(
            "more than one PRIMARY KEY",
            primary[1].definition.clone(),
        ));
    }

    let keys = primary
        .into_iter()
        .chain(extract_secondary_keys(ddl))
        .map(build_key)
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for key in &keys {
        ensure_unique(&mut seen, &key.name, "key", &key.definition)?;
    }

    Ok(keys)
}

fn referential_action(re: &Regex, options: &str) -> Option<ReferentialAction> {
    re.captures(options)
        .and_then(|caps| ReferentialAction::parse(&caps[1]))
}

fn build_foreign_keys(extracted: Vec<ExtractedForeignKey>) -> Result<Vec<ForeignKey>> {
    let mut foreign_keys = Vec::with_capacity(extracted.len());

    for fk in extracted {
        let columns = parse_column_names(&fk.columns)?;
        let referenced_columns = parse_column_names(&fk.referenced_columns)?;
        if columns.len() != referenced_columns.len() {
            return Err(TableParserError::malformed(
                format!(
                    "foreign key '{}' has {} local and {} referenced columns",
                    fk.name,
                    columns.len(),
                    referenced_columns.len()
                ),
                fk.definition,
            ));
        }

        foreign_keys.push(ForeignKey {
            on_delete: referential_action(&ON_DELETE_RE, &fk.options),
            on_update: referential_action(&ON_UPDATE_RE, &fk.options),
            name: fk.name,
            columns,
            referenced_database: fk.referenced_database,
            referenced_table: fk.referenced_table,
            referenced_columns,
            definition: fk.definition,
        });
    }

    let mut seen = HashSet::new();
    for fk in &foreign_keys {
        ensure_unique(&mut seen, &fk.name, "foreign key", &fk.definition)?;
    }

    Ok(foreign_keys)
}
