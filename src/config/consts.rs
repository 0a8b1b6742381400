// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.goodreads.com";
pub const SEARCH_PATH: &str = "/search";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const WEBDRIVER_URL: &str = "http://localhost:9515";

// Rendering
pub const SETTLE_MS: u64 = 3_000; // let client-side script finish

// Batch
pub const REQUEST_PAUSE_MS: u64 = 2_000; // be polite
pub const AUTHOR_BOOK_LIMIT: usize = 20;

// Ranking
pub const DEFAULT_PRIOR_MEAN: f64 = 3.5;
pub const DEFAULT_PRIOR_COUNT: u64 = 10_000;
pub const MAX_RATING: f64 = 5.0;

// Marker for fields no strategy could read
pub const UNKNOWN: &str = "N/A";

// Local files
pub const OPTIONS_FILE: &str = "shelf_scrape.toml";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "goodreads_results";
pub const EXPORT_HEADERS: [&str; 6] = ["title", "author", "byrating", "rawrating", "num_ratings", "description"];
