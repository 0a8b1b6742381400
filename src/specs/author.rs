// src/specs/author.rs
//! Author catalog page.
//!
//! Lists `a.bookTitle` links in page order, capped, then splits them by the
//! basic-Latin title check. Dropped titles are kept aside, not discarded, so
//! callers can see what was filtered.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{element_text, selector};
use crate::core::{sanitize::is_basic_latin, url::absolutize};
use crate::model::BookLink;

static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.bookTitle"));

/// First `limit` title links, hrefs made absolute against `origin`.
pub fn title_links(page: &str, origin: &str, limit: usize) -> Vec<BookLink> {
    let doc = Html::parse_document(page);
    doc.select(&TITLE_LINK)
        .take(limit)
        .map(|a| BookLink {
            title: element_text(a),
            url: absolutize(origin, a.value().attr("href").unwrap_or("")),
        })
        .collect()
}

/// `(kept, dropped)`, both in input order.
pub fn split_by_script(links: Vec<BookLink>) -> (Vec<BookLink>, Vec<BookLink>) {
    links.into_iter().partition(|l| is_basic_latin(&l.title))
}
