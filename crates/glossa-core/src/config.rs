use url::Url;

use crate::entry::EntryType;

/// Spreadsheet key of the production knowledge base.
pub const DEFAULT_SPREADSHEET_KEY: &str = "12kSfJdC9o99cNvis-f4g5m6uclF_37NLoYEh58J3g3c";

/// One worksheet tab of the source spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Hypothesis,
    Framework,
    Topic,
    Publication,
    Author,
    Relation,
}

impl Sheet {
    /// The five entity sheets, in the order their entries are concatenated.
    pub const ENTITY_SHEETS: [Self; 5] = [
        Self::Hypothesis,
        Self::Framework,
        Self::Topic,
        Self::Publication,
        Self::Author,
    ];

    /// Grid id of the worksheet within the spreadsheet.
    #[must_use]
    pub const fn gid(self) -> &'static str {
        match self {
            Self::Hypothesis => "1826693149",
            Self::Framework => "1723178886",
            Self::Topic => "2023287325",
            Self::Publication => "1194994121",
            Self::Author => "296545536",
            Self::Relation => "1972451989",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hypothesis => "hypothesis",
            Self::Framework => "framework",
            Self::Topic => "topic",
            Self::Publication => "publication",
            Self::Author => "author",
            Self::Relation => "relation",
        }
    }
}

impl std::fmt::Display for Sheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EntryType> for Sheet {
    fn from(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Hypothesis => Self::Hypothesis,
            EntryType::Framework => Self::Framework,
            EntryType::Topic => Self::Topic,
            EntryType::Publication => Self::Publication,
            EntryType::Author => Self::Author,
        }
    }
}

/// Static locator table for the published sheet exports.
///
/// The spreadsheet key is the only variable part; grid ids are fixed per
/// worksheet.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    spreadsheet_key: String,
}

impl SheetConfig {
    #[must_use]
    pub fn new(spreadsheet_key: impl Into<String>) -> Self {
        Self {
            spreadsheet_key: spreadsheet_key.into(),
        }
    }

    #[must_use]
    pub fn spreadsheet_key(&self) -> &str {
        &self.spreadsheet_key
    }

    /// URL of the published tab-separated export for one worksheet.
    pub fn export_url(&self, sheet: Sheet) -> crate::Result<Url> {
        let raw = format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=tsv&gid={}",
            self.spreadsheet_key,
            sheet.gid()
        );
        Ok(Url::parse(&raw)?)
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPREADSHEET_KEY)
    }
}
