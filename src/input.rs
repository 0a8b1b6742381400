// src/input.rs
//! Turning the user's book list into queries.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::options::{InputOptions, InputSource, KeyMode, KindChoice};
use crate::csv::{cell, parse_rows, skip_header};
use crate::error::ScrapeError;
use crate::model::{Query, QueryKind};

const TITLE_COL: usize = 0;
const AUTHOR_COL: usize = 1;

/// Read queries from whichever source `opts` names.
pub fn load_queries(opts: &InputOptions) -> Result<Vec<Query>, ScrapeError> {
    let queries = match &opts.source {
        InputSource::Csv(path) => read_queries(path, opts.key, opts.kind)?,
        InputSource::Directory(dir) => titles_from_dir(dir)?
            .into_iter()
            .map(|t| Query { kind: opts.kind.resolve(&t), text: t })
            .collect(),
    };
    info!("Input: {} queries from {}", queries.len(), opts.source.path().display());
    Ok(queries)
}

/// CSV with columns `[title, author, description, …]`.
///
/// Header row (first cell "title") and all-empty rows are skipped. Values are
/// distinct, in first-seen order. Keying by author always yields author
/// queries.
pub fn read_queries(path: &Path, key: KeyMode, kind: KindChoice) -> Result<Vec<Query>, ScrapeError> {
    let text = fs::read_to_string(path)?;
    Ok(queries_from_csv(&text, key, kind))
}

pub fn queries_from_csv(text: &str, key: KeyMode, kind: KindChoice) -> Vec<Query> {
    let col = match key {
        KeyMode::Title => TITLE_COL,
        KeyMode::Author => AUTHOR_COL,
    };

    let mut out: Vec<Query> = Vec::new();
    for row in skip_header(parse_rows(text, ',')) {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let value = cell(&row, col);
        if value.is_empty() || out.iter().any(|q| q.text == value) {
            continue;
        }
        let kind = match key {
            KeyMode::Title => kind.resolve(value),
            KeyMode::Author => QueryKind::Author,
        };
        out.push(Query { text: s!(value), kind });
    }
    out
}

/// One title per regular file in `dir`, sorted by file name.
pub fn titles_from_dir(dir: &Path) -> Result<Vec<String>, ScrapeError> {
    if !dir.is_dir() {
        return Err(ScrapeError::config(format!("not a directory: {}", dir.display())));
    }

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut titles: Vec<String> = Vec::new();
    for name in names {
        let title = title_from_filename(&name);
        if !title.is_empty() && !titles.contains(&title) {
            titles.push(title);
        }
    }
    Ok(titles)
}

/// `"Author Name - The Title.epub"` → `"The Title"`.
/// Names without a `-` keep their whole stem.
pub fn title_from_filename(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!(name));
    match stem.rsplit_once('-') {
        Some((_, title)) if !title.trim().is_empty() => s!(title.trim()),
        _ => s!(stem.trim()),
    }
}
