// tests/batch.rs
//
// Whole-batch behavior over in-memory fetchers: order, isolation, author flow.

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use shelf_scrape::config::options::ScrapeOptions;
use shelf_scrape::core::net::Fetch;
use shelf_scrape::error::ScrapeError;
use shelf_scrape::model::{Confidence, Field, Payload, Query, QueryKind};
use shelf_scrape::progress::Progress;
use shelf_scrape::rank;
use shelf_scrape::scrape::{run_with, DetailSource, Scraper};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR")))
        .unwrap_or_else(|e| panic!("read fixture {name}: {e}"))
}

/// Canned pages by URL, 404 otherwise. Remembers what was asked for.
#[derive(Default)]
struct FakeFetch {
    pages: HashMap<String, String>,
    seen: Vec<String>,
}

impl FakeFetch {
    fn page(mut self, url: &str, fixture_name: &str) -> Self {
        self.pages.insert(url.to_string(), fixture(fixture_name));
        self
    }
}

impl Fetch for FakeFetch {
    fn fetch(&mut self, url: &str) -> Result<String, ScrapeError> {
        self.seen.push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { status: 404, url: url.to_string() })
    }
}

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    done: Vec<(usize, String, bool)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn item_done(&mut self, index: usize, query: &str, success: bool) {
        self.done.push((index, query.to_string(), success));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

const DUNE_URL: &str = "https://www.goodreads.com/book/show/234225.Dune";

fn search_http() -> FakeFetch {
    FakeFetch::default()
        .page("https://www.goodreads.com/search?q=Dune", "search_books.html")
        .page("https://www.goodreads.com/search?q=Nothing+Here", "search_empty.html")
        .page("https://www.goodreads.com/search?q=Dune+Broken", "search_books.html")
        .page("https://www.goodreads.com/search?q=Frank+Herbert", "search_books.html")
}

#[test]
fn one_failure_does_not_stop_the_batch() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http();
    let mut detail = FakeFetch::default().page(DUNE_URL, "book_rendered.html");

    let queries = vec![
        Query::book("Dune"),
        Query::book("Nothing Here"),
        Query::book("Dune"),
    ];

    let mut progress = Recorder::default();
    let records = {
        let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut detail), &opts);
        run_with(&mut scraper, &queries, Duration::ZERO, Some(&mut progress))
    };

    assert_eq!(records.len(), 3);
    let flags: Vec<bool> = records.iter().map(|r| r.success).collect();
    assert_eq!(flags, [true, false, true]);
    assert_eq!(records[1].query, "Nothing Here");
    assert!(records[1].payload.is_none());
    assert!(records[1].failure.as_deref().unwrap_or("").contains("no book result"));

    assert_eq!(progress.total, Some(3));
    assert_eq!(progress.done[1], (1, "Nothing Here".to_string(), false));
    assert!(progress.finished);

    // search pages over plain HTTP, detail pages over the rendered source
    assert_eq!(detail.seen, [DUNE_URL, DUNE_URL]);
    assert!(http.seen.iter().all(|u| u.contains("/search?q=")));
}

#[test]
fn book_record_carries_fields_and_score() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http();
    let mut detail = FakeFetch::default().page(DUNE_URL, "book_rendered.html");

    let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut detail), &opts);
    let record = scraper.process(&Query::book("Dune"));

    let book = record.book().unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.url, DUNE_URL);
    assert_eq!(book.confidence, Confidence::Exact);
    assert_eq!(book.author, Field::Found("Frank Herbert".to_string()));
    assert_eq!(book.raw_rating, Field::Found("4.12".to_string()));
    assert_eq!(book.score, Field::Found(rank::normalize(4.12, 1_234_567, &opts.prior)));
}

#[test]
fn detail_fetch_failure_fails_only_that_query() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http();
    // no detail pages at all
    let mut detail = FakeFetch::default();

    let queries = vec![Query::book("Dune Broken"), Query::book("Nothing Here")];
    let records = {
        let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut detail), &opts);
        run_with(&mut scraper, &queries, Duration::ZERO, None)
    };

    assert_eq!(records.len(), 2);
    assert!(!records[0].success);
    assert!(records[0].failure.as_deref().unwrap_or("").contains("404"));
    assert!(!records[1].success);
}

#[test]
fn unreadable_detail_page_still_succeeds_with_unknowns() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http();
    let mut detail = FakeFetch::default().page(DUNE_URL, "book_empty.html");

    let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut detail), &opts);
    let record = scraper.process(&Query::book("Dune"));

    assert!(record.success);
    let book = record.book().unwrap();
    assert_eq!(book.author, Field::Unknown);
    assert_eq!(book.score, Field::Unknown);
}

#[test]
fn static_mode_reads_detail_over_http() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http().page(DUNE_URL, "book_static.html");

    let mut scraper = Scraper::new(&mut http, DetailSource::Static, &opts);
    let record = scraper.process(&Query::book("Dune"));

    let book = record.book().unwrap();
    assert_eq!(book.raw_rating, Field::Found("4.05".to_string()));
    assert_eq!(book.author, Field::Unknown);
    assert_eq!(book.score, Field::Found(rank::normalize(4.05, 98_765, &opts.prior)));
}

#[test]
fn author_query_lists_kept_titles() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http()
        .page("https://www.goodreads.com/author/show/58.Frank_Herbert", "author_page.html");
    let mut detail = FakeFetch::default();

    let record = {
        let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut detail), &opts);
        scraper.process(&Query::author("Frank Herbert"))
    };

    assert_eq!(record.kind, QueryKind::Author);
    let author = record.author().unwrap();
    assert_eq!(author.url, "https://www.goodreads.com/author/show/58.Frank_Herbert");
    assert_eq!(author.total_books(), 3);
    assert_eq!(author.dropped.len(), 2);
    // author pages never go through the browser
    assert!(detail.seen.is_empty());
}

#[test]
fn author_with_no_kept_titles_fails_but_keeps_dropped() {
    let opts = ScrapeOptions { pause_ms: 0, author_limit: 2, ..ScrapeOptions::default() };
    let mut http = FakeFetch::default()
        .page("https://www.goodreads.com/search?q=Someone", "search_books.html");

    // the cap of 2 leaves only non-Latin titles
    let html = "<html><body>\
        <a class=\"bookTitle\" href=\"/book/show/1\">Café</a>\
        <a class=\"bookTitle\" href=\"/book/show/2\">砂の惑星</a>\
        <a class=\"bookTitle\" href=\"/book/show/3\">The Stand</a></body></html>";
    http.pages.insert("https://www.goodreads.com/author/show/58.Frank_Herbert".to_string(), html.to_string());

    let mut scraper = Scraper::new(&mut http, DetailSource::Static, &opts);
    let record = scraper.process(&Query::author("Someone"));

    assert!(!record.success);
    assert!(record.author().is_none());
    match &record.payload {
        Some(Payload::Author(a)) => {
            assert!(a.books.is_empty());
            assert_eq!(a.dropped.len(), 2);
        }
        other => panic!("expected author payload, got {other:?}"),
    }
}

/// Asks to stop once `after` queries have finished.
struct StopAfter {
    after: usize,
    done: usize,
    finished: bool,
}

impl Progress for StopAfter {
    fn item_done(&mut self, _index: usize, _query: &str, _success: bool) {
        self.done += 1;
    }
    fn finish(&mut self) {
        self.finished = true;
    }
    fn cancelled(&self) -> bool {
        self.done >= self.after
    }
}

#[test]
fn cancelled_batch_skips_remaining_queries_in_order() {
    let opts = ScrapeOptions { pause_ms: 0, ..ScrapeOptions::default() };
    let mut http = search_http();
    let mut detail = FakeFetch::default().page(DUNE_URL, "book_rendered.html");
    let queries = vec![
        Query::book("Dune"),
        Query::book("Dune"),
        Query::author("Frank Herbert"),
    ];

    let mut progress = StopAfter { after: 1, done: 0, finished: false };
    let records = {
        let mut scraper = Scraper::new(&mut http, DetailSource::Rendered(&mut detail), &opts);
        run_with(&mut scraper, &queries, Duration::ZERO, Some(&mut progress))
    };

    assert_eq!(records.len(), 3);
    assert!(records[0].success);
    for r in &records[1..] {
        assert!(!r.success);
        assert_eq!(r.failure.as_deref(), Some("cancelled"));
    }
    assert_eq!(records[2].kind, QueryKind::Author);
    assert!(progress.finished);

    // nothing fetched after the stop
    assert_eq!(detail.seen, [DUNE_URL]);
    assert_eq!(http.seen, ["https://www.goodreads.com/search?q=Dune"]);
}
