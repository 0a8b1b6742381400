// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ScrapeError;
use crate::model::QueryKind;
use crate::rank::Prior;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub input: InputOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Read options from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ScrapeError> {
        let text = std::fs::read_to_string(path)?;
        let opts: AppOptions = toml::from_str(&text)
            .map_err(|e| ScrapeError::config(format!("{}: {e}", path.display())))?;
        opts.scrape.validate()?;
        Ok(opts)
    }
}

/* ---------------- Input ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// Spreadsheet export with columns [title, author, description, …]
    Csv(PathBuf),
    /// Folder of book files named "<prefix> - <title>.<ext>"
    Directory(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            InputSource::Csv(p) | InputSource::Directory(p) => p,
        }
    }
}

/// Which CSV column keys the query list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum KeyMode {
    Title,
    Author,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum KindChoice {
    Book,
    Author,
    /// Book when the text reads "<title> by <author>", otherwise author.
    Auto,
}

impl KindChoice {
    pub fn resolve(&self, text: &str) -> QueryKind {
        match self {
            KindChoice::Book => QueryKind::Book,
            KindChoice::Author => QueryKind::Author,
            KindChoice::Auto => {
                if text.to_lowercase().contains(" by ") {
                    QueryKind::Book
                } else {
                    QueryKind::Author
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub source: InputSource,
    pub key: KeyMode,
    pub kind: KindChoice,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            source: InputSource::Csv(PathBuf::from("booklist.csv")),
            key: KeyMode::Title,
            kind: KindChoice::Book,
        }
    }
}

/* ---------------- Scrape ---------------- */

/// How detail pages are read. Chosen up front; the batch never switches
/// path on its own after a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Script-executed page from the browser session. All four fields.
    Rendered,
    /// Server-delivered HTML only. Rating and count, never author/description.
    Static,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub mode: ExtractMode,
    pub base_url: String,
    pub prior: Prior,
    pub settle_ms: u64,
    pub pause_ms: u64,
    pub timeout_secs: u64,
    pub author_limit: usize,
    pub webdriver_url: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            mode: ExtractMode::Rendered,
            base_url: s!(BASE_URL),
            prior: Prior::default(),
            settle_ms: SETTLE_MS,
            pause_ms: REQUEST_PAUSE_MS,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            author_limit: AUTHOR_BOOK_LIMIT,
            webdriver_url: s!(WEBDRIVER_URL),
        }
    }
}

impl ScrapeOptions {
    pub fn validate(&self) -> Result<(), ScrapeError> {
        self.prior.validate()?;
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ScrapeError::config(format!("base url must be absolute: {:?}", self.base_url)));
        }
        if self.author_limit == 0 {
            return Err(ScrapeError::config("author_limit must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::config("timeout_secs must be at least 1"));
        }
        Ok(())
    }

    /// Site origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn settle(&self) -> Duration { Duration::from_millis(self.settle_ms) }
    pub fn pause(&self) -> Duration { Duration::from_millis(self.pause_ms) }
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    Tsv,
    /// Human-readable text report of every query
    Report,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Report => "txt",
        }
    }

    /// Field separator for tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Report => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, path: None }
    }
}

impl ExportOptions {
    /// Final file path. A user path without an extension gets the format's;
    /// a user extension is kept.
    pub fn out_path(&self) -> PathBuf {
        match &self.path {
            Some(p) if p.extension().is_some() => p.clone(),
            Some(p) => p.with_extension(self.format.ext()),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(join!(DEFAULT_FILE, ".", self.format.ext())),
        }
    }

    /// Parse GUI/CLI text. Blank → default path.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn is_default_path(&self) -> bool {
        self.path.is_none()
    }
}
