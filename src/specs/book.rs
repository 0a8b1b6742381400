// src/specs/book.rs
//! Book detail page: rating, rating count, author, description.
//!
//! Two paths, picked by the caller (`ExtractMode`):
//!
//! **Rendered** (script-executed DOM). Each field walks a fixed chain and
//! stops at the first non-empty value:
//! 1. versioned class / test-id markup (`RatingStatistics__rating`, …)
//! 2. an alternate attribute (`itemprop`, `data-testid`, older classes)
//! 3. raw-text patterns over the whole source (`"1,234 ratings"`,
//!    `"ratingCount": 1234`, embedded `"name"` / `"description"` JSON)
//! 4. `Field::Unknown`
//!
//! **Static** (server HTML only). `meta[itemprop]` tags, then the same text
//! patterns over visible text, for rating and count only. Author and
//! description need rendered markup and stay unknown.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};

use super::{first_text, selector};
use crate::config::options::ExtractMode;
use crate::core::sanitize::{decode_json_text, normalize_ws};
use crate::model::{Field, RawBookRecord};

/* ---------------- Selectors & patterns ---------------- */

static RATING_PRIMARY: LazyLock<Selector> = LazyLock::new(|| selector(".RatingStatistics__rating"));
static RATING_ALT: LazyLock<Selector> = LazyLock::new(|| selector("[itemprop='ratingValue']"));
static COUNT_PRIMARY: LazyLock<Selector> = LazyLock::new(|| selector("[data-testid='ratingsCount']"));
static COUNT_ALT: LazyLock<Selector> = LazyLock::new(|| selector("[itemprop='ratingCount']"));
static AUTHOR_PRIMARY: LazyLock<Selector> = LazyLock::new(|| selector(".ContributorLink__name"));
static AUTHOR_ALT: LazyLock<Selector> = LazyLock::new(|| selector("[data-testid='name']"));
static DESC_PRIMARY: LazyLock<Selector> =
    LazyLock::new(|| selector(".DetailsLayoutRightParagraph__widthConstrained"));
static DESC_ALT: LazyLock<Selector> = LazyLock::new(|| selector("[data-testid='description']"));
static DESC_LEGACY: LazyLock<Selector> =
    LazyLock::new(|| selector(".BookPageMetadataSection__description"));
static META_RATING: LazyLock<Selector> = LazyLock::new(|| selector("meta[itemprop='ratingValue']"));
static META_COUNT: LazyLock<Selector> = LazyLock::new(|| selector("meta[itemprop='ratingCount']"));

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| re(r"\d+(?:\.\d+)?"));
static GROUPED_INT: LazyLock<Regex> = LazyLock::new(|| re(r"\d[\d,]*"));
static RATING_TEXT: LazyLock<Regex> = LazyLock::new(|| re(r"(\d+\.\d+)\s+(?:average rating|rating)"));
static COUNT_TEXT: LazyLock<Regex> = LazyLock::new(|| re(r"(\d[\d,]*)\s+ratings?\b"));
static COUNT_JSON: LazyLock<Regex> = LazyLock::new(|| re(r#"ratingCount["']?\s*:\s*["']?(\d[\d,]*)"#));
static NAME_JSON: LazyLock<Regex> = LazyLock::new(|| re(r#""name"\s*:\s*"((?:[^"\\]|\\.)+)""#));
static DESC_JSON: LazyLock<Regex> = LazyLock::new(|| re(r#""description"\s*:\s*"((?:[^"\\]|\\.)+)""#));

fn re(pattern: &'static str) -> Regex {
    Regex::new(pattern).expect("static pattern")
}

/* ---------------- Page ---------------- */

/// Source plus its parsed DOM. Strategies read whichever they need.
pub struct Page<'a> {
    source: &'a str,
    doc: Html,
}

impl<'a> Page<'a> {
    pub fn parse(source: &'a str) -> Self {
        Self { source, doc: Html::parse_document(source) }
    }

    fn text_of(&self, sel: &Selector) -> Option<String> {
        first_text(&self.doc, sel)
    }

    /// `content` attribute if present, else the element text.
    fn content_or_text(&self, sel: &Selector) -> Option<String> {
        self.doc.select(sel).find_map(|el| {
            let v = match el.value().attr("content") {
                Some(c) => normalize_ws(c),
                None => super::element_text(el),
            };
            (!v.is_empty()).then_some(v)
        })
    }

    fn meta_content(&self, sel: &Selector) -> Option<String> {
        self.doc
            .select(sel)
            .filter_map(|el| el.value().attr("content"))
            .map(normalize_ws)
            .find(|v| !v.is_empty())
    }

    /// All text nodes, script bodies included.
    fn visible_text(&self) -> String {
        self.doc.root_element().text().collect::<Vec<_>>().join(" ")
    }
}

/* ---------------- Strategy chains ---------------- */

type Strategy = fn(&Page<'_>) -> Option<String>;

/// Walk `chain` in order; first non-empty value wins.
fn resolve(page: &Page<'_>, field: &str, chain: &[(&str, Strategy)]) -> Field<String> {
    for (tier, strategy) in chain {
        if let Some(v) = strategy(page).filter(|v| !v.trim().is_empty()) {
            debug!("Extract: {field} ← {tier}");
            return Field::Found(v);
        }
    }
    debug!("Extract: {field} unknown");
    Field::Unknown
}

fn first_match(rx: &Regex, text: &str) -> Option<String> {
    rx.find(text).map(|m| s!(m.as_str()))
}

fn capture(rx: &Regex, text: &str) -> Option<String> {
    rx.captures(text).and_then(|c| c.get(1)).map(|m| s!(m.as_str()))
}

fn rating_class(p: &Page<'_>) -> Option<String> {
    p.text_of(&RATING_PRIMARY).and_then(|t| first_match(&DECIMAL, &t))
}
fn rating_itemprop(p: &Page<'_>) -> Option<String> {
    p.content_or_text(&RATING_ALT).and_then(|t| first_match(&DECIMAL, &t))
}
fn rating_text(p: &Page<'_>) -> Option<String> {
    capture(&RATING_TEXT, p.source)
}

fn count_testid(p: &Page<'_>) -> Option<String> {
    p.text_of(&COUNT_PRIMARY).and_then(|t| first_match(&GROUPED_INT, &t))
}
fn count_itemprop(p: &Page<'_>) -> Option<String> {
    p.content_or_text(&COUNT_ALT).and_then(|t| first_match(&GROUPED_INT, &t))
}
fn count_text(p: &Page<'_>) -> Option<String> {
    capture(&COUNT_TEXT, p.source).or_else(|| capture(&COUNT_JSON, p.source))
}

fn author_class(p: &Page<'_>) -> Option<String> { p.text_of(&AUTHOR_PRIMARY) }
fn author_testid(p: &Page<'_>) -> Option<String> { p.text_of(&AUTHOR_ALT) }
fn author_json(p: &Page<'_>) -> Option<String> {
    capture(&NAME_JSON, p.source).map(|raw| decode_json_text(&raw))
}

fn desc_class(p: &Page<'_>) -> Option<String> { p.text_of(&DESC_PRIMARY) }
fn desc_testid(p: &Page<'_>) -> Option<String> { p.text_of(&DESC_ALT) }
fn desc_legacy(p: &Page<'_>) -> Option<String> { p.text_of(&DESC_LEGACY) }
fn desc_json(p: &Page<'_>) -> Option<String> {
    capture(&DESC_JSON, p.source).map(|raw| decode_json_text(&raw))
}

fn meta_rating(p: &Page<'_>) -> Option<String> { p.meta_content(&META_RATING) }
fn meta_count(p: &Page<'_>) -> Option<String> { p.meta_content(&META_COUNT) }
fn visible_rating(p: &Page<'_>) -> Option<String> { capture(&RATING_TEXT, &p.visible_text()) }
fn visible_count(p: &Page<'_>) -> Option<String> { capture(&COUNT_TEXT, &p.visible_text()) }

const RATING_CHAIN: &[(&str, Strategy)] = &[
    ("class", rating_class),
    ("itemprop", rating_itemprop),
    ("text", rating_text),
];

const COUNT_CHAIN: &[(&str, Strategy)] = &[
    ("test-id", count_testid),
    ("itemprop", count_itemprop),
    ("text", count_text),
];

const AUTHOR_CHAIN: &[(&str, Strategy)] = &[
    ("class", author_class),
    ("test-id", author_testid),
    ("json", author_json),
];

const DESCRIPTION_CHAIN: &[(&str, Strategy)] = &[
    ("class", desc_class),
    ("test-id", desc_testid),
    ("legacy-class", desc_legacy),
    ("json", desc_json),
];

const STATIC_RATING_CHAIN: &[(&str, Strategy)] = &[
    ("meta", meta_rating),
    ("text", visible_rating),
];

const STATIC_COUNT_CHAIN: &[(&str, Strategy)] = &[
    ("meta", meta_count),
    ("text", visible_count),
];

/* ---------------- Entry points ---------------- */

/// Read a rendered detail page. Never fails; unreadable fields are unknown.
pub fn extract(source: &str, url: &str) -> RawBookRecord {
    let page = Page::parse(source);
    RawBookRecord {
        rating: resolve(&page, "rating", RATING_CHAIN),
        rating_count: resolve(&page, "rating count", COUNT_CHAIN),
        author: resolve(&page, "author", AUTHOR_CHAIN),
        description: resolve(&page, "description", DESCRIPTION_CHAIN),
        url: s!(url),
    }
}

/// Read server-delivered HTML. Rating and count only.
pub fn extract_static(source: &str, url: &str) -> RawBookRecord {
    let page = Page::parse(source);
    RawBookRecord {
        rating: resolve(&page, "rating", STATIC_RATING_CHAIN),
        rating_count: resolve(&page, "rating count", STATIC_COUNT_CHAIN),
        ..RawBookRecord::unknown(url)
    }
}

pub fn extract_with(mode: ExtractMode, source: &str, url: &str) -> RawBookRecord {
    match mode {
        ExtractMode::Rendered => extract(source, url),
        ExtractMode::Static => extract_static(source, url),
    }
}
