// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::{EXPORT_HEADERS, UNKNOWN};
use crate::core::sanitize::clean_description;
use crate::model::{Field, ResultRecord};
use crate::rank::parse_count;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/// Drop the first row when it is a header (first cell reads "title").
pub fn skip_header(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| c.trim().eq_ignore_ascii_case("title"));
    if is_header {
        rows.remove(0);
    }
    rows
}

/// Cell `i` of a row, empty when the row is short.
pub fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(|c| c.trim()).unwrap_or("")
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Export rows ---------------- */

fn field_cell(f: &Field<String>) -> String {
    match f {
        Field::Found(v) => v.clone(),
        Field::Unknown => s!(UNKNOWN),
    }
}

/// Count as digits only ("1,234" → "1234"); raw text if it does not parse.
fn count_cell(f: &Field<String>) -> String {
    match f {
        Field::Found(v) => parse_count(v).map(|n| n.to_string()).unwrap_or_else(|_| v.clone()),
        Field::Unknown => s!(UNKNOWN),
    }
}

/// One row per successful book record, in result order:
/// `title, author, byrating, rawrating, num_ratings, description`.
pub fn book_rows(results: &[ResultRecord]) -> Vec<Vec<String>> {
    results
        .iter()
        .filter_map(ResultRecord::book)
        .map(|b| {
            vec![
                b.title.clone(),
                field_cell(&b.author),
                match b.score {
                    Field::Found(score) => format!("{score:.2}"),
                    Field::Unknown => s!(UNKNOWN),
                },
                field_cell(&b.raw_rating),
                count_cell(&b.rating_count),
                match &b.description {
                    Field::Found(d) => clean_description(d),
                    Field::Unknown => s!(UNKNOWN),
                },
            ]
        })
        .collect()
}

/// Full CSV/TSV document: header line, then `book_rows`.
pub fn to_export_string(results: &[ResultRecord], sep: char) -> String {
    let headers: Vec<String> = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
    rows_to_string(&book_rows(results), &Some(headers), sep)
}

/* ---------------- Convenience: stringify rows as-is ---------------- */

pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
