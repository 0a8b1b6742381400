// src/specs/mod.rs
//! # Page-reading "specs"
//!
//! Each spec knows one kind of page on the catalog site and *where the data
//! lives in it*: the search results page, a book's detail page, an author's
//! catalog page.
//!
//! ## What lives here
//! - **Pure parsing** of page source already fetched by someone else.
//! - **Selector choice & precedence**: the versioned class / test-id markup
//!   first, an alternate attribute next, raw-text patterns over the whole
//!   source last.
//! - **Light shaping** into `model` types (`RawBookRecord`, `BookLink`, …).
//!
//! ## What does **not** live here
//! - Networking, the browser session, pacing (`core`, `scrape::batch`).
//! - Ranking (`rank`), record assembly and failure policy (`scrape`).
//! - Export formatting (`csv`, `file`).
//!
//! ## Conventions
//! - Nothing here returns an error. A field no strategy can read is
//!   `Field::Unknown`; a missing link is `None`.
//! - Every spec is testable offline against saved fixtures.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;

pub mod author;
pub mod book;
pub mod search;

/// Parse a selector known at compile time.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Visible text of an element, whitespace-normalized.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text of the first element matching `sel` that has any.
pub(crate) fn first_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).map(element_text).find(|t| !t.is_empty())
}
