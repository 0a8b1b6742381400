// src/gui/progress.rs
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use eframe::egui;

use crate::progress::Progress;

/// Writes batch progress into the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    stop: Arc<AtomicBool>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context, stop: Arc<AtomicBool>) -> Self {
        Self { status, ctx, stop, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Scraping {total} queries…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _index: usize, query: &str, success: bool) {
        self.done += 1;
        if !success { self.failed += 1; }
        let mark = if success { "ok" } else { "no results" };
        self.set_status(format!("{query}: {mark} ({}/{})", self.done, self.total));
    }
    fn cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Scrape complete"));
        } else {
            self.set_status(format!(
                "Scrape complete ({}/{}, {} failed)",
                self.done, self.total, self.failed
            ));
        }
    }
}
