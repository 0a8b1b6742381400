// src/file.rs

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::clean_description;
use crate::csv::to_export_string;
use crate::model::{AuthorPayload, BookPayload, Field, Payload, ResultRecord};
use crate::rank::{self, Effect, Prior};
use crate::error::ScrapeError;

/// Write `results` in the format `export` names. Returns the final path.
pub fn export(
    results: &[ResultRecord],
    export: &ExportOptions,
    prior: &Prior,
) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = match export.format.delim() {
        Some(sep) => to_export_string(results, sep),
        None => to_report_string(results, prior),
    };

    fs::write(&path, contents)?;
    info!("Export: {} ({:?}) → {}", results.len(), export.format, path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::config(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/* ---------------- Text report ---------------- */

const RULE: &str = "--------------------------------------------------";

/// Every query, in order. Failures read "NO RESULTS FOUND".
pub fn to_report_string(results: &[ResultRecord], prior: &Prior) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Goodreads results ({} queries)", results.len());
    let _ = writeln!(out, "Prior: mean {:.2}, weight {} ratings", prior.mean, prior.count);

    for r in results {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{} [{}]", r.query, r.kind);

        match (&r.payload, r.success) {
            (Some(Payload::Book(b)), true) => report_book(&mut out, b, prior),
            (Some(Payload::Author(a)), true) => report_author(&mut out, a),
            _ => {
                let _ = writeln!(out, "  NO RESULTS FOUND");
                if let Some(reason) = &r.failure {
                    let _ = writeln!(out, "  ({reason})");
                }
            }
        }
    }
    out
}

fn report_book(out: &mut String, b: &BookPayload, prior: &Prior) {
    let _ = writeln!(out, "  Author:      {}", b.author);
    let _ = writeln!(out, "  Raw rating:  {}", b.raw_rating);
    let _ = writeln!(out, "  Ratings:     {}", b.rating_count);
    match b.score {
        Field::Found(score) => { let _ = writeln!(out, "  By-rating:   {score:.2}"); }
        Field::Unknown => { let _ = writeln!(out, "  By-rating:   {}", b.score); }
    }

    if let Some((raw, count)) = raw_pair(b) {
        let cmp = rank::compare(raw, count, prior);
        let effect = match cmp.effect {
            Effect::PulledDown => "pulled down toward the prior",
            Effect::PulledUp => "pulled up toward the prior",
            Effect::Unchanged => "unchanged",
        };
        let _ = writeln!(out, "  Difference:  {:+.2} ({effect})", cmp.difference);
    }

    let _ = writeln!(out, "  URL:         {}", b.url);
    if let Field::Found(d) = &b.description {
        let _ = writeln!(out, "  Description: {}", clean_description(d));
    }
}

fn raw_pair(b: &BookPayload) -> Option<(f64, u64)> {
    let raw = rank::parse_rating(b.raw_rating.as_ref().found()?).ok()?;
    let count = rank::parse_count(b.rating_count.as_ref().found()?).ok()?;
    Some((raw, count))
}

fn report_author(out: &mut String, a: &AuthorPayload) {
    let _ = writeln!(out, "  URL:         {}", a.url);
    let _ = writeln!(out, "  Books:       {}", a.total_books());
    for (i, book) in a.books.iter().enumerate() {
        let _ = writeln!(out, "    {:>2}. {}", i + 1, book.title);
        let _ = writeln!(out, "        {}", book.url);
    }
}

/// Format name for status lines.
pub fn format_label(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "CSV",
        ExportFormat::Tsv => "TSV",
        ExportFormat::Report => "text report",
    }
}
