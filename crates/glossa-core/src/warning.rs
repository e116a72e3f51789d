use thiserror::Error;

use crate::config::Sheet;

/// Row-level degradations the export recovers from instead of aborting.
///
/// These are values, not errors: each one corresponds to a place where the
/// pipeline silently coerces bad upstream data (a dropped row, an empty
/// author-id list, an unresolved relation endpoint). Callers can log or
/// count them; none of them stops the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// Row carried neither an id nor a name and was discarded.
    #[error("{sheet} sheet, row {line}: dropped, no id or name")]
    VoidRow { sheet: Sheet, line: usize },

    /// Row failed tab-delimited parsing and was discarded.
    #[error("{sheet} sheet, row {line}: dropped, {message}")]
    MalformedRow {
        sheet: Sheet,
        line: usize,
        message: String,
    },

    /// The author-id cell was not a JSON list; treated as empty.
    #[error("author '{name}': unparseable semanticScholarAuthorIds {raw:?}")]
    BadAuthorIds { name: String, raw: String },

    /// A relation endpoint id is absent from the identifier index; the
    /// relation is still emitted with an empty endpoint.
    #[error("relation '{relation_id}': {column} '{entry_id}' not found in any entity sheet")]
    UnresolvedEndpoint {
        relation_id: String,
        column: &'static str,
        entry_id: String,
    },
}
