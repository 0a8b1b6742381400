// src/scrape/mod.rs
mod assemble;
mod batch;
mod resolve;
mod scraper;

pub use assemble::{assemble, BookExtraction, Catalog, Extraction};
pub use batch::{run, run_with};
pub use resolve::resolve;
pub use scraper::{DetailSource, Scraper};
