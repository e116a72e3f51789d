use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use glossa_core::{ExportPipeline, HttpSheetFetcher, SheetConfig};

/// Export the linguistics knowledge-base spreadsheets as TSV files.
///
/// Fetches the six published worksheets, normalizes their rows, resolves
/// cross-sheet references, and writes the result under the output
/// directory. Re-running overwrites the previous export.
#[derive(Debug, Parser)]
#[command(name = "glossa", version)]
struct Cli {
    /// Directory the output files are written to.
    #[arg(long, default_value = "result")]
    out_dir: PathBuf,

    /// Source spreadsheet key, defaulting to the production knowledge base.
    #[arg(long)]
    spreadsheet_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli
        .spreadsheet_key
        .map_or_else(SheetConfig::default, SheetConfig::new);

    let fetcher = HttpSheetFetcher::new()?;
    let pipeline = ExportPipeline::new(fetcher).with_config(config);

    let report = pipeline.run(&cli.out_dir).await?;

    println!(
        "Exported {} entries and {} relations to {} ({} warnings)",
        report.entry_count,
        report.relation_count,
        cli.out_dir.display(),
        report.warnings.len(),
    );

    Ok(())
}
