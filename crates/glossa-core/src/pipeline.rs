use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::config::{Sheet, SheetConfig};
use crate::entry::{normalize_sheet, Entry, EntryType};
use crate::export::{render, unique_names, write_text};
use crate::fetch::SheetFetcher;
use crate::index::NameIndex;
use crate::relation::{resolve_relations, Relation};
use crate::row::{parse_tsv, RawRow};
use crate::warning::ParseWarning;
use crate::Result;

/// Columns of `entries.tsv`.
pub const ENTRY_COLUMNS: [&str; 5] = ["name", "type", "sub_type", "entry", "summary"];

/// Columns of `rels.tsv`.
pub const RELATION_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "type",
    "subType",
    "variant",
    "fromEntryId",
    "toEntryId",
    "from",
    "to",
];

/// Columns of `rels_w_type.tsv`.
pub const TYPED_RELATION_COLUMNS: [&str; 5] = ["from", "from_type", "type", "to", "to_type"];

/// Summary of one completed export run.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub entry_count: usize,
    pub relation_count: usize,
    pub warnings: Vec<ParseWarning>,
    pub written: Vec<PathBuf>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,
}

/// The whole fetch → normalize → join → write transform.
///
/// Sheets are fetched sequentially; writes happen only after every fetch
/// and join has completed, so a transport failure leaves no partial output
/// behind.
pub struct ExportPipeline<F> {
    fetcher: F,
    config: SheetConfig,
}

impl<F: SheetFetcher> ExportPipeline<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            config: SheetConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the export once, writing the four output files under `out_dir`.
    pub async fn run(&self, out_dir: &Path) -> Result<ExportReport> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let entries = self.collect_entries(&mut warnings).await?;
        let index = NameIndex::build(&entries);

        let relation_rows = self.fetch_rows(Sheet::Relation, &mut warnings).await?;
        let resolution = resolve_relations(&relation_rows, &index);
        warnings.extend(resolution.warnings);
        let relations = resolution.relations;

        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        let written = write_outputs(out_dir, &entries, &relations)?;

        let report = ExportReport {
            entry_count: entries.len(),
            relation_count: relations.len(),
            warnings,
            written,
            finished_at: Utc::now(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            entries = report.entry_count,
            relations = report.relation_count,
            warnings = report.warnings.len(),
            duration_ms = report.duration_ms,
            "export complete"
        );

        Ok(report)
    }

    /// Normalize the five entity sheets and concatenate them in the fixed
    /// order; the order defines duplicate-id precedence in the index.
    async fn collect_entries(&self, warnings: &mut Vec<ParseWarning>) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry_type in EntryType::ALL {
            let rows = self.fetch_rows(Sheet::from(entry_type), warnings).await?;
            let normalization = normalize_sheet(entry_type, &rows);

            tracing::debug!(
                sheet = %entry_type,
                rows = normalization.entry_count(),
                "normalized sheet"
            );

            warnings.extend(normalization.warnings);
            entries.extend(normalization.entries);
        }

        Ok(entries)
    }

    async fn fetch_rows(
        &self,
        sheet: Sheet,
        warnings: &mut Vec<ParseWarning>,
    ) -> Result<Vec<RawRow>> {
        let url = self.config.export_url(sheet)?;
        let text = self.fetcher.fetch(&url).await?;

        let (rows, row_warnings) = parse_tsv(sheet, &text);
        warnings.extend(row_warnings);

        Ok(rows)
    }
}

fn write_outputs(
    out_dir: &Path,
    entries: &[Entry],
    relations: &[Relation],
) -> Result<Vec<PathBuf>> {
    let outputs = [
        (out_dir.join("entry_names.txt"), unique_names(entries)),
        (out_dir.join("entries.tsv"), render(entries, &ENTRY_COLUMNS)),
        (out_dir.join("rels.tsv"), render(relations, &RELATION_COLUMNS)),
        (
            out_dir.join("rels_w_type.tsv"),
            render(relations, &TYPED_RELATION_COLUMNS),
        ),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (path, text) in outputs {
        write_text(&text, &path)?;
        written.push(path);
    }

    Ok(written)
}
