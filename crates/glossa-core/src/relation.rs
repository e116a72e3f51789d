use serde::{Deserialize, Serialize};

use crate::index::NameIndex;
use crate::row::RawRow;
use crate::warning::ParseWarning;

/// Fixed value of the `type` column for every exported relation.
pub const RELATION_TYPE: &str = "relation";

/// A directed, typed link between two entries.
///
/// Endpoints are resolved to display names through the identifier index;
/// an id that no entity sheet knows leaves the endpoint empty rather than
/// failing the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub id: String,
    pub name: String,
    pub sub_type: String,
    pub variant: String,
    pub from_entry_id: String,
    pub to_entry_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_type: Option<String>,
}

impl Relation {
    /// Build one relation from a raw row, resolving both endpoints against
    /// the index snapshot.
    pub fn from_row(row: &RawRow, index: &NameIndex, warnings: &mut Vec<ParseWarning>) -> Self {
        let id = row.text("id").to_string();
        // The sheet leaves name blank for most relations; fall back to id.
        let name = row
            .non_empty("name")
            .map_or_else(|| id.clone(), str::to_string);

        let from_entry_id = row.text("fromEntryId").to_string();
        let to_entry_id = row.text("toEntryId").to_string();

        let from = resolve_endpoint(index, &id, "fromEntryId", &from_entry_id, warnings);
        let to = resolve_endpoint(index, &id, "toEntryId", &to_entry_id, warnings);

        Self {
            id,
            name,
            sub_type: row.text("subType").to_lowercase(),
            variant: row.text("variant").to_string(),
            from_entry_id,
            to_entry_id,
            from,
            to,
            from_type: row.non_empty("from_type").map(str::to_string),
            to_type: row.non_empty("to_type").map(str::to_string),
        }
    }
}

fn resolve_endpoint(
    index: &NameIndex,
    relation_id: &str,
    column: &'static str,
    entry_id: &str,
    warnings: &mut Vec<ParseWarning>,
) -> Option<String> {
    match index.resolve(entry_id) {
        Some(name) => Some(name.to_string()),
        None => {
            warnings.push(ParseWarning::UnresolvedEndpoint {
                relation_id: relation_id.to_string(),
                column,
                entry_id: entry_id.to_string(),
            });
            None
        }
    }
}

/// Result of resolving the relation sheet: the relations plus a warning per
/// endpoint that could not be resolved.
#[derive(Debug, Default)]
pub struct Resolution {
    pub relations: Vec<Relation>,
    pub warnings: Vec<ParseWarning>,
}

impl Resolution {
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

/// Resolve every relation row against the index snapshot. Rows are never
/// dropped here; malformed upstream data degrades, it does not abort.
#[must_use]
pub fn resolve_relations(rows: &[RawRow], index: &NameIndex) -> Resolution {
    let mut resolution = Resolution::default();

    for row in rows {
        let relation = Relation::from_row(row, index, &mut resolution.warnings);
        resolution.relations.push(relation);
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryType};

    fn entry(id: &str, name: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            entry_type: EntryType::Hypothesis,
            sub_type: None,
            entry: None,
            summary: None,
        }
    }

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn endpoints_resolve_to_display_names() {
        let index = NameIndex::build(&[entry("a1", "X"), entry("a2", "Y")]);
        let mut warnings = Vec::new();

        let relation = Relation::from_row(
            &row(&[
                ("id", "r1"),
                ("subType", "Entail"),
                ("fromEntryId", "a1"),
                ("toEntryId", "a2"),
            ]),
            &index,
            &mut warnings,
        );

        assert_eq!(relation.from.as_deref(), Some("X"));
        assert_eq!(relation.to.as_deref(), Some("Y"));
        assert_eq!(relation.sub_type, "entail");
        assert!(warnings.is_empty());
    }

    #[test]
    fn unresolved_endpoint_is_emitted_with_warning() {
        let index = NameIndex::build(&[entry("a1", "X")]);
        let mut warnings = Vec::new();

        let relation = Relation::from_row(
            &row(&[("id", "r1"), ("fromEntryId", "ghost"), ("toEntryId", "a1")]),
            &index,
            &mut warnings,
        );

        assert_eq!(relation.from, None);
        assert_eq!(relation.to.as_deref(), Some("X"));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            ParseWarning::UnresolvedEndpoint { column: "fromEntryId", .. }
        ));
    }

    #[test]
    fn blank_name_falls_back_to_id() {
        let index = NameIndex::default();
        let mut warnings = Vec::new();

        let relation = Relation::from_row(&row(&[("id", "r7")]), &index, &mut warnings);

        assert_eq!(relation.name, "r7");
    }

    #[test]
    fn resolve_relations_keeps_every_row() {
        let index = NameIndex::build(&[entry("a1", "X")]);
        let rows = vec![
            row(&[("id", "r1"), ("fromEntryId", "a1"), ("toEntryId", "nope")]),
            row(&[("id", "r2"), ("fromEntryId", "nope"), ("toEntryId", "nope")]),
        ];

        let resolution = resolve_relations(&rows, &index);

        assert_eq!(resolution.relation_count(), 2);
        assert_eq!(resolution.warnings.len(), 3);
    }
}
