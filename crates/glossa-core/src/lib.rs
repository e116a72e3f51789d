pub mod config;
pub mod entry;
pub mod error;
pub mod export;
pub mod fetch;
pub mod index;
pub mod pipeline;
pub mod relation;
pub mod row;
pub mod warning;

pub use config::{Sheet, SheetConfig, DEFAULT_SPREADSHEET_KEY};
pub use entry::{normalize_sheet, Entry, EntryType, Normalization};
pub use error::{Error, Result};
pub use export::{render, unique_names, write_text, Tabular};
pub use fetch::{HttpSheetFetcher, SheetFetcher};
pub use index::NameIndex;
pub use pipeline::{
    ExportPipeline, ExportReport, ENTRY_COLUMNS, RELATION_COLUMNS, TYPED_RELATION_COLUMNS,
};
pub use relation::{resolve_relations, Relation, Resolution, RELATION_TYPE};
pub use row::{parse_tsv, RawRow};
pub use warning::ParseWarning;
