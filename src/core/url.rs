// src/core/url.rs

/// URL-escape free text for the `q=` parameter; spaces become `+`.
pub fn escape_query(text: &str) -> String {
    urlencoding::encode(text.trim()).replace("%20", "+")
}

pub fn search_url(origin: &str, search_path: &str, query: &str) -> String {
    join!(origin.trim_end_matches('/'), search_path, "?q=", &escape_query(query))
}

/// Make a scraped `href` absolute against the site origin.
/// - `http…` → as-is
/// - `/book/123` → `origin/book/123`
/// - `book/123` → `origin/book/123`
pub fn absolutize(origin: &str, href: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let href = href.trim();
    if href.starts_with("http") {
        s!(href)
    } else if href.starts_with('/') {
        join!(origin, href)
    } else {
        join!(origin, "/", href)
    }
}
