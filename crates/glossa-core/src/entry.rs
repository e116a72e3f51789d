use serde::{Deserialize, Serialize};

use crate::row::RawRow;
use crate::warning::ParseWarning;

/// Raw column holding the JSON-encoded Semantic Scholar id list.
const AUTHOR_IDS_COLUMN: &str = "semanticScholarAuthorIds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Hypothesis,
    Framework,
    Topic,
    Publication,
    Author,
}

impl EntryType {
    /// All entry kinds, in the fixed sheet concatenation order.
    pub const ALL: [Self; 5] = [
        Self::Hypothesis,
        Self::Framework,
        Self::Topic,
        Self::Publication,
        Self::Author,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hypothesis => "hypothesis",
            Self::Framework => "framework",
            Self::Topic => "topic",
            Self::Publication => "publication",
            Self::Author => "author",
        }
    }

    /// Only topic and publication sheets carry a subType column.
    #[must_use]
    const fn has_sub_type(self) -> bool {
        matches!(self, Self::Topic | Self::Publication)
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hypothesis" => Ok(Self::Hypothesis),
            "framework" => Ok(Self::Framework),
            "topic" => Ok(Self::Topic),
            "publication" => Ok(Self::Publication),
            "author" => Ok(Self::Author),
            _ => Err(crate::Error::InvalidEntryType(s.to_string())),
        }
    }
}

/// A normalized record from one of the five entity sheets.
///
/// `id` is opaque and supplied by the sheet; this pipeline never invents
/// one. Sheet-specific columns that some kinds lack are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Entry {
    /// Normalize one raw row into an entry of the given kind.
    ///
    /// Author rows rewrite `name` to `"<name>, <first id>"` when the
    /// Semantic Scholar id list parses and is non-empty; a malformed list
    /// degrades to a warning and leaves the name unchanged.
    pub fn from_row(
        entry_type: EntryType,
        row: &RawRow,
        warnings: &mut Vec<ParseWarning>,
    ) -> Self {
        let mut name = row.text("name").to_string();

        if entry_type == EntryType::Author {
            match first_author_id(row.text(AUTHOR_IDS_COLUMN)) {
                Ok(Some(author_id)) => name = format!("{name}, {author_id}"),
                Ok(None) => {}
                Err(_) => warnings.push(ParseWarning::BadAuthorIds {
                    name: name.clone(),
                    raw: row.text(AUTHOR_IDS_COLUMN).to_string(),
                }),
            }
        }

        let sub_type = if entry_type.has_sub_type() {
            Some(row.text("subType").to_lowercase()).filter(|s| !s.is_empty())
        } else {
            None
        };

        Self {
            id: row.text("id").to_string(),
            name,
            entry_type,
            sub_type,
            entry: row.non_empty("entry").map(str::to_string),
            summary: row.non_empty("summary").map(str::to_string),
        }
    }
}

/// First element of the JSON-encoded id list, stringified.
///
/// The upstream sheet stores ids as either JSON strings or numbers; both
/// come out as plain text, matching what the export has always emitted.
fn first_author_id(raw: &str) -> Result<Option<String>, serde_json::Error> {
    if raw.is_empty() {
        return Ok(None);
    }

    let ids: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    Ok(ids.first().and_then(|value| match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }))
}

/// Result of normalizing one sheet: the entries plus any row-level
/// degradations encountered along the way.
#[derive(Debug, Default)]
pub struct Normalization {
    pub entries: Vec<Entry>,
    pub warnings: Vec<ParseWarning>,
}

impl Normalization {
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Normalize every row of one entity sheet. No row is dropped here; rows
/// that failed upstream parsing are simply absent from the input.
#[must_use]
pub fn normalize_sheet(entry_type: EntryType, rows: &[RawRow]) -> Normalization {
    let mut normalization = Normalization::default();

    for row in rows {
        let entry = Entry::from_row(entry_type, row, &mut normalization.warnings);
        normalization.entries.push(entry);
    }

    normalization
}
