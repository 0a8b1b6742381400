// src/model.rs
//! Data flowing through one batch: queries in, result records out.
//!
//! A field that could not be read is `Field::Unknown`, never a missing key,
//! and a record's payload is a tagged variant keyed by the query kind.

use std::fmt;

use crate::config::consts::UNKNOWN;

/* ---------------- Queries ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Book,
    Author,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Book => "book",
            QueryKind::Author => "author",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of work: free text plus what kind of thing it names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub kind: QueryKind,
}

impl Query {
    pub fn book(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: QueryKind::Book }
    }

    pub fn author(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: QueryKind::Author }
    }
}

/* ---------------- Search ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    /// Link text matched the query.
    Exact,
    /// First listed link of the right kind; may be a false positive.
    FirstMatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub url: String,
    pub confidence: Confidence,
}

/* ---------------- Extraction ---------------- */

/// A best-effort value. `Unknown` is a valid terminal state, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Field<T> {
    Found(T),
    Unknown,
}

impl<T> Field<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Field::Found(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Found(v) => Field::Found(v),
            Field::Unknown => Field::Unknown,
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Field::Found(v) => Some(v),
            Field::Unknown => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Field::Found(v),
            None => Field::Unknown,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Found(v) => v.fmt(f),
            Field::Unknown => f.write_str(UNKNOWN),
        }
    }
}

/// Fields as read off a detail page. Rating and count stay textual
/// (e.g. `"4.12"`, `"1,234,567"`) until ranking coerces them.
#[derive(Clone, Debug, PartialEq)]
pub struct RawBookRecord {
    pub author: Field<String>,
    pub description: Field<String>,
    pub rating: Field<String>,
    pub rating_count: Field<String>,
    pub url: String,
}

impl RawBookRecord {
    pub fn unknown(url: impl Into<String>) -> Self {
        Self {
            author: Field::Unknown,
            description: Field::Unknown,
            rating: Field::Unknown,
            rating_count: Field::Unknown,
            url: url.into(),
        }
    }
}

/* ---------------- Results ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct BookPayload {
    pub title: String,
    pub author: Field<String>,
    pub description: Field<String>,
    pub raw_rating: Field<String>,
    pub score: Field<f64>,
    pub rating_count: Field<String>,
    pub url: String,
    pub confidence: Confidence,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookLink {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthorPayload {
    pub author: String,
    pub url: String,
    /// Kept titles, in page order.
    pub books: Vec<BookLink>,
    /// Titles rejected by the script filter. Never exported.
    pub dropped: Vec<BookLink>,
}

impl AuthorPayload {
    pub fn total_books(&self) -> usize {
        self.books.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Book(BookPayload),
    Author(AuthorPayload),
}

/// The unit of batch output. One per input query, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRecord {
    pub query: String,
    pub kind: QueryKind,
    pub success: bool,
    pub payload: Option<Payload>,
    /// Why the record failed, for logs and the text report.
    pub failure: Option<String>,
}

impl ResultRecord {
    pub fn failed(query: &Query, reason: impl Into<String>) -> Self {
        Self {
            query: query.text.clone(),
            kind: query.kind,
            success: false,
            payload: None,
            failure: Some(reason.into()),
        }
    }

    pub fn book(&self) -> Option<&BookPayload> {
        match &self.payload {
            Some(Payload::Book(b)) if self.success => Some(b),
            _ => None,
        }
    }

    pub fn author(&self) -> Option<&AuthorPayload> {
        match &self.payload {
            Some(Payload::Author(a)) if self.success => Some(a),
            _ => None,
        }
    }
}
