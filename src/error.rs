// src/error.rs
use thiserror::Error;

use crate::model::QueryKind;

/// Everything that can go wrong while resolving or reading a page.
///
/// Per-query variants (`NotFound`, `Status`, `Transport`, `Render`) are caught
/// at the query boundary and turned into failed records. `Config` is fatal and
/// surfaces before a batch starts.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no {kind} result for \"{query}\"")]
    NotFound { query: String, kind: QueryKind },

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("request failed for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("render failed for {url}: {reason}")]
    Render { url: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn config(msg: impl Into<String>) -> Self {
        ScrapeError::Config(msg.into())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, ScrapeError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
