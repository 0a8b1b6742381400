// src/scrape/resolve.rs
use log::debug;

use crate::{
    config::{consts::SEARCH_PATH, options::ScrapeOptions},
    core::{net::Fetch, sanitize::loose_eq, url::{absolutize, search_url}},
    error::ScrapeError,
    model::{Confidence, QueryKind, SearchResult},
    specs::search,
};

/// Free text → canonical absolute page URL.
///
/// Takes the first link of the wanted kind on the search page. A link whose
/// text matches the query is `Exact`; anything else is `FirstMatch` and may
/// be a false positive.
pub fn resolve(
    http: &mut dyn Fetch,
    opts: &ScrapeOptions,
    query: &str,
    kind: QueryKind,
) -> Result<SearchResult, ScrapeError> {
    let url = search_url(opts.origin(), SEARCH_PATH, query);
    debug!("Search: {url}");
    let page = http.fetch(&url)?;

    let link = search::first_link(&page, kind).ok_or_else(|| ScrapeError::NotFound {
        query: s!(query),
        kind,
    })?;

    let confidence = if loose_eq(&link.text, query) {
        Confidence::Exact
    } else {
        Confidence::FirstMatch
    };
    let url = absolutize(opts.origin(), &link.href);
    debug!("Search: \"{query}\" → {url} ({confidence:?})");

    Ok(SearchResult { url, confidence })
}
