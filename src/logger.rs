// src/logger.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Appends `[hh:mm:ss.mmm][LEVEL] msg` lines to a file. Time is elapsed since
/// the logger started. Write failures are swallowed.
pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: PathBuf, level: LevelFilter) -> Self {
        Self { path, level, lock: Mutex::new(()) }
    }

    pub fn line(level: log::Level, msg: &str) -> String {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        format!("[{elapsed}][{level}] {msg}\n")
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::line(record.level(), &record.args().to_string());

        if let Ok(_guard) = self.lock.lock() {
            if let Some(parent) = self.path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger at `.store/debug.log`. Later calls are no-ops.
pub fn init(level: LevelFilter) {
    start();
    let logger = LOGGER.get_or_init(|| {
        FileLogger::new(PathBuf::from(STORE_DIR).join(LOG_FILE), level)
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
