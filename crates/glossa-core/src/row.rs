use std::collections::HashMap;

use crate::config::Sheet;
use crate::warning::ParseWarning;

/// One physical data row of a sheet: column name to cell text.
///
/// The header row of the export defines the key set. No ordering or
/// uniqueness beyond "one row per data line, in sheet order".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Cell text for a column, empty string when the column is absent.
    #[must_use]
    pub fn text(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    /// Cell text only when present and non-empty.
    #[must_use]
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str).filter(|s| !s.is_empty())
    }

    /// A row with neither an id nor a name carries nothing worth keeping.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.non_empty("id").is_none() && self.non_empty("name").is_none()
    }
}

impl FromIterator<(String, String)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Parse a published tab-separated export into rows.
///
/// The first record is the header. Parsing is lenient: carriage returns are
/// stripped up front, short rows get empty trailing cells, extra cells are
/// ignored, and rows that still fail to parse are dropped with a warning
/// rather than failing the sheet.
#[must_use]
pub fn parse_tsv(sheet: Sheet, text: &str) -> (Vec<RawRow>, Vec<ParseWarning>) {
    let cleaned = text.replace('\r', "");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(cleaned.as_bytes());

    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            warnings.push(ParseWarning::MalformedRow {
                sheet,
                line: 1,
                message: e.to_string(),
            });
            return (rows, warnings);
        }
    };

    for (idx, record) in reader.records().enumerate() {
        // +1 for the header, +1 for one-based line numbers.
        let line = idx + 2;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warnings.push(ParseWarning::MalformedRow {
                    sheet,
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();

        if row.is_void() {
            warnings.push(ParseWarning::VoidRow { sheet, line });
            continue;
        }

        rows.push(row);
    }

    (rows, warnings)
}
