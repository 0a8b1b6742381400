// src/scrape/scraper.rs
use log::debug;

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    error::ScrapeError,
    model::{Field, Query, QueryKind, ResultRecord},
    rank,
    specs::{author, book},
};

use super::{assemble, resolve, BookExtraction, Catalog, Extraction};

/// Where book detail pages come from.
pub enum DetailSource<'a> {
    /// Browser session (script-executed DOM), all four fields.
    Rendered(&'a mut dyn Fetch),
    /// Same plain client as search; rating and count only.
    Static,
}

/// One query in, one record out. Search and author pages always go through
/// `http`; book detail pages go through `detail`.
pub struct Scraper<'a> {
    http: &'a mut dyn Fetch,
    detail: DetailSource<'a>,
    opts: &'a ScrapeOptions,
}

impl<'a> Scraper<'a> {
    pub fn new(http: &'a mut dyn Fetch, detail: DetailSource<'a>, opts: &'a ScrapeOptions) -> Self {
        Self { http, detail, opts }
    }

    /// Never fails. Errors become a failed record for this query only.
    pub fn process(&mut self, query: &Query) -> ResultRecord {
        let outcome = match query.kind {
            QueryKind::Book => self.book(query).map(Extraction::Book),
            QueryKind::Author => self.author(query).map(Extraction::Author),
        };
        assemble(query, outcome)
    }

    fn book(&mut self, query: &Query) -> Result<BookExtraction, ScrapeError> {
        let search = resolve(&mut *self.http, self.opts, &query.text, QueryKind::Book)?;

        let raw = match &mut self.detail {
            DetailSource::Rendered(session) => {
                let source = session.fetch(&search.url)?;
                book::extract(&source, &search.url)
            }
            DetailSource::Static => {
                let source = self.http.fetch(&search.url)?;
                book::extract_static(&source, &search.url)
            }
        };

        let score = match rank::normalize_fields(&raw.rating, &raw.rating_count, &self.opts.prior) {
            Ok(score) => Field::Found(score),
            Err(e) => {
                debug!("Rank: \"{}\" not ranked: {e}", query.text);
                Field::Unknown
            }
        };

        Ok(BookExtraction { search, raw, score })
    }

    fn author(&mut self, query: &Query) -> Result<Catalog, ScrapeError> {
        let search = resolve(&mut *self.http, self.opts, &query.text, QueryKind::Author)?;
        let page = self.http.fetch(&search.url)?;

        let links = author::title_links(&page, self.opts.origin(), self.opts.author_limit);
        let (books, dropped) = author::split_by_script(links);

        Ok(Catalog { search, books, dropped })
    }
}
