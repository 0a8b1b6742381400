// src/scrape/batch.rs
use std::{thread, time::Duration};

use log::{info, warn};

use crate::{
    config::options::{ExtractMode, ScrapeOptions},
    core::{net::HttpClient, render::BrowserSession},
    error::ScrapeError,
    model::{Query, ResultRecord},
    progress::Progress,
};

use super::{DetailSource, Scraper};

/// Run a whole batch with live network access.
///
/// Validates options and opens the browser session (rendered mode) before the
/// first query; either failing is fatal. After that, per-query failures only
/// mark their own record. The session is closed once every query is done.
pub fn run(
    queries: &[Query],
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<ResultRecord>, ScrapeError> {
    opts.validate()?;
    let mut http = HttpClient::new(opts.timeout());
    info!("Batch: {} queries, {:?} mode", queries.len(), opts.mode);

    let records = match opts.mode {
        ExtractMode::Rendered => {
            let mut session = BrowserSession::open(&opts.webdriver_url, opts.settle())?;
            let records = {
                let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut session), opts);
                run_with(&mut scraper, queries, opts.pause(), progress)
            };
            if let Err(e) = session.close() {
                warn!("Render: close failed: {e}");
            }
            records
        }
        ExtractMode::Static => {
            let mut scraper = Scraper::new(&mut http, DetailSource::Static, opts);
            run_with(&mut scraper, queries, opts.pause(), progress)
        }
    };

    Ok(records)
}

/// Sequential loop over `queries` with `pause` between them (not after the
/// last). Output has one record per query, in input order, also when
/// `progress` cancels the run part way.
pub fn run_with(
    scraper: &mut Scraper<'_>,
    queries: &[Query],
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<ResultRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(queries.len());
    }

    let mut records = Vec::with_capacity(queries.len());
    let mut failed = 0usize;

    for (i, query) in queries.iter().enumerate() {
        if i > 0 && !pause.is_zero() {
            thread::sleep(pause);
        }
        if progress.as_deref().is_some_and(|p| p.cancelled()) {
            warn!("Batch: cancelled before query {}", i + 1);
            failed += queries.len() - i;
            records.extend(queries[i..].iter().map(|q| ResultRecord::failed(q, "cancelled")));
            break;
        }
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("{}/{} {} \"{}\"", i + 1, queries.len(), query.kind, query.text));
        }

        let record = scraper.process(query);
        match &record.failure {
            None => info!("Query {}: \"{}\" ok", i + 1, query.text),
            Some(reason) => {
                failed += 1;
                warn!("Query {}: \"{}\" failed: {reason}", i + 1, query.text);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &query.text, record.success);
        }
        records.push(record);
    }

    info!("Batch: done, {} ok, {failed} failed", records.len() - failed);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}
