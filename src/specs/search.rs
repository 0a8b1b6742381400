// src/specs/search.rs
//! Search results page: `/search?q=…`.
//!
//! Book rows carry `a.bookTitle`, author names carry `a.authorName`. The first
//! link of the wanted kind wins; there is no ranking between candidates.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{element_text, selector};
use crate::model::QueryKind;

static BOOK_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.bookTitle"));
static AUTHOR_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.authorName"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// `href` exactly as it appears on the page (may be relative)
    pub href: String,
    pub text: String,
}

pub fn first_link(page: &str, kind: QueryKind) -> Option<Link> {
    let doc = Html::parse_document(page);
    let sel = match kind {
        QueryKind::Book => &*BOOK_LINK,
        QueryKind::Author => &*AUTHOR_LINK,
    };

    doc.select(sel).find_map(|a| {
        let href = a.value().attr("href")?.trim();
        if href.is_empty() {
            return None;
        }
        Some(Link { href: s!(href), text: element_text(a) })
    })
}
