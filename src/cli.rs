// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use log::{info, LevelFilter};

use crate::config::options::{
    AppOptions, ExportFormat, ExtractMode, InputSource, KeyMode, KindChoice,
};
use crate::progress::Progress;
use crate::{file, input, scrape};

#[derive(Parser, Debug)]
#[command(name = "shelf_scrape")]
#[command(about = "Look up books and authors, rank ratings by volume, export the results")]
#[command(version)]
pub struct Args {
    /// CSV book list with columns [title, author, description, …]
    #[arg(short, long, conflicts_with = "dir")]
    pub input: Option<PathBuf>,

    /// Folder of book files named "<prefix> - <title>.<ext>"
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// CSV column that keys the query list
    #[arg(long, value_enum)]
    pub key: Option<KeyMode>,

    /// What each query names
    #[arg(long, value_enum)]
    pub kind: Option<KindChoice>,

    /// Read detail pages from server HTML only (no browser; rating and count only)
    #[arg(long = "static")]
    pub static_mode: bool,

    #[arg(long)]
    pub prior_mean: Option<f64>,

    /// Prior weight, in equivalent ratings
    #[arg(long)]
    pub prior_count: Option<u64>,

    /// Pause between queries
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Wait after each rendered navigation
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// WebDriver server URL (chromedriver)
    #[arg(long)]
    pub webdriver: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file (default: out/goodreads_results.<ext>)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// TOML options file; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Options file (or defaults) with flags applied on top.
    pub fn options(&self) -> crate::error::Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };

        if let Some(p) = &self.input {
            opts.input.source = InputSource::Csv(p.clone());
        }
        if let Some(d) = &self.dir {
            opts.input.source = InputSource::Directory(d.clone());
        }
        if let Some(k) = self.key { opts.input.key = k; }
        if let Some(k) = self.kind { opts.input.kind = k; }

        let scrape = &mut opts.scrape;
        if self.static_mode { scrape.mode = ExtractMode::Static; }
        if let Some(m) = self.prior_mean { scrape.prior.mean = m; }
        if let Some(c) = self.prior_count { scrape.prior.count = c; }
        if let Some(ms) = self.pause_ms { scrape.pause_ms = ms; }
        if let Some(ms) = self.settle_ms { scrape.settle_ms = ms; }
        if let Some(url) = &self.webdriver { scrape.webdriver_url = url.clone(); }

        if let Some(f) = self.format { opts.export.format = f; }
        if let Some(o) = &self.out { opts.export.set_path(&o.to_string_lossy()); }

        opts.scrape.validate()?;
        Ok(opts)
    }
}

/// Prints one line per finished query.
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, index: usize, query: &str, success: bool) {
        let mark = if success { "ok" } else { "NO RESULTS FOUND" };
        println!("[{}/{}] {query}: {mark}", index + 1, self.total);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let mut clog = colog::default_builder();
    clog.filter(None, if args.verbose { LevelFilter::Debug } else { LevelFilter::Info });
    clog.init();

    let opts = args.options().wrap_err("invalid options")?;
    let queries = input::load_queries(&opts.input)
        .wrap_err_with(|| format!("could not read {}", opts.input.source.path().display()))?;

    let mut progress = ConsoleProgress { total: queries.len() };
    let results = scrape::run(&queries, &opts.scrape, Some(&mut progress))?;

    let path = file::export(&results, &opts.export, &opts.scrape.prior)?;
    let ok = results.iter().filter(|r| r.success).count();
    info!("{ok}/{} queries succeeded", results.len());
    println!("Wrote {}", path.display());
    Ok(())
}
