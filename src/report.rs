//! Human-readable summaries of inspected tables

use std::fmt;
use std::path::PathBuf;

use crate::model::Table;

/// Outcome of inspecting one definition file
#[derive(Debug, Clone)]
pub struct InspectReport {
    pub path: PathBuf,
    pub table: Table,
    pub best_index: String,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = &self.table;
        writeln!(f, "{} ({})", table.name, self.path.display())?;
        writeln!(f, "  engine: {}", table.engine)?;
        writeln!(f, "  charset: {}", table.charset)?;
        if table.temporary {
            writeln!(f, "  temporary: yes")?;
        }

        writeln!(f, "  columns:")?;
        for col in &table.columns {
            let mut flags = Vec::new();
            if !col.nullable {
                flags.push("not null");
            }
            if col.numeric {
                flags.push("numeric");
            }
            if col.auto_increment {
                flags.push("auto_increment");
            }
            if col.generated {
                flags.push("generated");
            }
            writeln!(
                f,
                "    {:>3} {} {} [{}]",
                col.position,
                col.name,
                col.data_type,
                flags.join(", ")
            )?;
        }

        writeln!(f, "  keys:")?;
        for key in &table.keys {
            let columns: Vec<String> = key
                .columns
                .iter()
                .map(|c| match c.prefix {
                    Some(len) => format!("{}({len})", c.name),
                    None => c.name.clone(),
                })
                .collect();
            writeln!(
                f,
                "    {} {}{} ({})",
                key.name,
                key.kind,
                if key.unique { " unique" } else { "" },
                columns.join(", ")
            )?;
        }

        if !table.foreign_keys.is_empty() {
            writeln!(f, "  foreign keys:")?;
            for fk in &table.foreign_keys {
                writeln!(
                    f,
                    "    {} ({}) -> {} ({})",
                    fk.name,
                    fk.columns.join(", "),
                    fk.referenced_table,
                    fk.referenced_columns.join(", ")
                )?;
            }
        }

        write!(f, "  best index: {}", self.best_index)
    }
}
