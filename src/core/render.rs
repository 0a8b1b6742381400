// src/core/render.rs
// One headless browser behind WebDriver, owned by a single batch.
//
// Open once, reuse per query, close at the end. `close()` is the normal
// path; `Drop` quits the browser if a batch unwinds before reaching it.

use std::{thread, time::Duration};

use log::{debug, info, warn};
use thirtyfour::{prelude::*, ChromiumLikeCapabilities};
use tokio::runtime::{Builder, Runtime};

use crate::config::consts::USER_AGENT;
use crate::core::net::Fetch;
use crate::error::ScrapeError;

pub struct BrowserSession {
    runtime: Runtime,
    driver: Option<WebDriver>,
    settle: Duration,
}

impl BrowserSession {
    /// Start a headless Chrome through the WebDriver server at `webdriver_url`.
    pub fn open(webdriver_url: &str, settle: Duration) -> Result<Self, ScrapeError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        let driver = runtime
            .block_on(async {
                let mut caps = DesiredCapabilities::chrome();
                caps.set_headless()?;
                caps.set_no_sandbox()?;
                caps.set_disable_dev_shm_usage()?;
                caps.add_arg(&format!("user-agent={USER_AGENT}"))?;
                WebDriver::new(webdriver_url, caps).await
            })
            .map_err(|e| ScrapeError::config(format!(
                "could not start browser session at {webdriver_url}: {e} (use static mode to skip rendering)"
            )))?;

        info!("Render: session open ({webdriver_url})");
        Ok(Self { runtime, driver: Some(driver), settle })
    }

    /// Quit the browser. Consumes the session.
    pub fn close(mut self) -> Result<(), ScrapeError> {
        self.quit()
    }

    fn quit(&mut self) -> Result<(), ScrapeError> {
        let Some(driver) = self.driver.take() else { return Ok(()) };
        self.runtime
            .block_on(driver.quit())
            .map_err(|e| ScrapeError::Render { url: s!("session"), reason: e.to_string() })?;
        info!("Render: session closed");
        Ok(())
    }
}

impl Fetch for BrowserSession {
    /// Navigate, wait the fixed settle delay, return the rendered DOM.
    fn fetch(&mut self, url: &str) -> Result<String, ScrapeError> {
        let driver = self.driver.as_ref().ok_or_else(|| ScrapeError::Render {
            url: s!(url),
            reason: s!("session already closed"),
        })?;
        let render_err = |e: WebDriverError| ScrapeError::Render { url: s!(url), reason: e.to_string() };

        self.runtime.block_on(driver.goto(url)).map_err(render_err)?;
        thread::sleep(self.settle);
        let source = self.runtime.block_on(driver.source()).map_err(render_err)?;
        debug!("Render: {} bytes from {}", source.len(), url);
        Ok(source)
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if self.driver.is_some() {
            warn!("Render: session dropped without close(); quitting browser");
            if let Err(e) = self.quit() {
                warn!("Render: quit failed: {e}");
            }
        }
    }
}
