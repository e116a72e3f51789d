use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid sheet locator: {0}")]
    Locator(#[from] url::ParseError),

    #[error("Sheet fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Sheet parse failed: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
