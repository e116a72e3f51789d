use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::entry::Entry;
use crate::relation::{Relation, RELATION_TYPE};

/// Column projection used by the TSV renderer.
///
/// Unknown columns and absent values project to an empty cell, never an
/// error; the output column lists are fixed by the downstream consumers.
pub trait Tabular {
    fn field(&self, column: &str) -> Option<String>;
}

impl Tabular for Entry {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "type" => Some(self.entry_type.to_string()),
            "sub_type" => self.sub_type.clone(),
            "entry" => self.entry.clone(),
            "summary" => self.summary.clone(),
            _ => None,
        }
    }
}

impl Tabular for Relation {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "type" => Some(RELATION_TYPE.to_string()),
            "subType" => Some(self.sub_type.clone()),
            "variant" => Some(self.variant.clone()),
            "fromEntryId" => Some(self.from_entry_id.clone()),
            "toEntryId" => Some(self.to_entry_id.clone()),
            "from" => self.from.clone(),
            "to" => self.to.clone(),
            "from_type" => self.from_type.clone(),
            "to_type" => self.to_type.clone(),
            _ => None,
        }
    }
}

/// Keep one record per line: tabs collapse to a space, newlines become the
/// two-character escape `\n`, carriage returns are dropped.
fn escape_cell(value: &str) -> String {
    value
        .replace('\r', "")
        .replace('\t', " ")
        .replace('\n', "\\n")
}

/// Render records onto a fixed column list as TSV text: one header line,
/// one line per record. Deterministic for identical input.
pub fn render<T: Tabular>(records: &[T], columns: &[&str]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(columns.join("\t"));

    for record in records {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                record
                    .field(column)
                    .map(|value| escape_cell(&value))
                    .unwrap_or_default()
            })
            .collect();
        lines.push(cells.join("\t"));
    }

    lines.join("\n")
}

/// Unique entry display names, newline-separated, in first-seen order.
#[must_use]
pub fn unique_names(entries: &[Entry]) -> String {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for entry in entries {
        if seen.insert(entry.name.as_str()) {
            names.push(entry.name.as_str());
        }
    }

    names.join("\n")
}

/// Write text verbatim, creating parent directories and overwriting any
/// existing file.
pub fn write_text(text: &str, path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
