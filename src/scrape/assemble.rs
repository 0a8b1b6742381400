// src/scrape/assemble.rs
use log::debug;

use crate::{
    error::ScrapeError,
    model::{AuthorPayload, BookLink, BookPayload, Field, Payload, Query, RawBookRecord, ResultRecord, SearchResult},
};

/// What a book query produced before assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct BookExtraction {
    pub search: SearchResult,
    pub raw: RawBookRecord,
    /// `Unknown` when rating or count could not be coerced.
    pub score: Field<f64>,
}

/// What an author query produced before assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub search: SearchResult,
    pub books: Vec<BookLink>,
    pub dropped: Vec<BookLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Extraction {
    Book(BookExtraction),
    Author(Catalog),
}

/// Build the one output record for `query`.
///
/// - Resolution or fetch error → `success = false`, no payload.
/// - Book → success even when every field is unknown.
/// - Author → success only when at least one title survived the filter.
///   The payload is kept either way so the dropped list stays visible.
pub fn assemble(query: &Query, outcome: Result<Extraction, ScrapeError>) -> ResultRecord {
    let extraction = match outcome {
        Ok(x) => x,
        Err(e) => return ResultRecord::failed(query, e.to_string()),
    };

    match extraction {
        Extraction::Book(BookExtraction { search, raw, score }) => ResultRecord {
            query: query.text.clone(),
            kind: query.kind,
            success: true,
            payload: Some(Payload::Book(BookPayload {
                title: query.text.clone(),
                author: raw.author,
                description: raw.description,
                raw_rating: raw.rating,
                score,
                rating_count: raw.rating_count,
                url: search.url,
                confidence: search.confidence,
            })),
            failure: None,
        },

        Extraction::Author(Catalog { search, books, dropped }) => {
            let success = !books.is_empty();
            let failure = (!success).then(|| {
                format!("no basic-Latin titles on author page ({} dropped)", dropped.len())
            });
            if !dropped.is_empty() {
                debug!("Author \"{}\": {} title(s) dropped by script filter", query.text, dropped.len());
            }
            ResultRecord {
                query: query.text.clone(),
                kind: query.kind,
                success,
                payload: Some(Payload::Author(AuthorPayload {
                    author: query.text.clone(),
                    url: search.url,
                    books,
                    dropped,
                })),
                failure,
            }
        }
    }
}
