// src/core/net.rs
// Blocking GETs with the identification header on every request.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// Anything that can turn a URL into page source.
/// Plain HTTP for search/author/static pages; the browser session for
/// rendered detail pages; in-memory maps in tests.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self { agent }
    }
}

impl Fetch for HttpClient {
    fn fetch(&mut self, url: &str) -> Result<String, ScrapeError> {
        let resp = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => ScrapeError::Status { status, url: s!(url) },
                ureq::Error::Transport(t) => ScrapeError::Transport { url: s!(url), reason: t.to_string() },
            })?;

        resp.into_string().map_err(|e| ScrapeError::Transport {
            url: s!(url),
            reason: e.to_string(),
        })
    }
}
