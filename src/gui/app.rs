// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, TryRecvError},
        Arc, Mutex,
    },
    thread::JoinHandle,
    time::Duration,
};

use eframe::egui;
use log::{info, warn};

use crate::{
    config::{consts::OPTIONS_FILE, options::AppOptions, state::AppState},
    model::{Query, ResultRecord},
};

use super::components;

/// What the scrape worker sends back: records, or a fatal error message.
pub type BatchOutcome = Result<Vec<ResultRecord>, String>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = load_options();
    eframe::run_native(
        "Shelf Scrape",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(app_options))))),
    )?;
    Ok(())
}

/// `shelf_scrape.toml` next to the working directory, else defaults.
fn load_options() -> AppOptions {
    let path = Path::new(OPTIONS_FILE);
    if !path.exists() {
        return AppOptions::default();
    }
    match AppOptions::load(path) {
        Ok(o) => {
            info!("Init: options from {}", path.display());
            o
        }
        Err(e) => {
            warn!("Init: ignoring {}: {e}", path.display());
            AppOptions::default()
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub queries: Vec<Query>,
    pub results: Vec<ResultRecord>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<BatchOutcome>>,

    // set on exit; the worker stops before its next query and closes the browser
    pub stop: Arc<AtomicBool>,
    pub worker: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        info!("Init: input={}", state.options.input.source.path().display());
        Self {
            state,
            queries: Vec::new(),
            results: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
            stop: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Pick up the worker's result once it lands.
    fn poll_batch(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(records)) => {
                let ok = records.iter().filter(|r| r.success).count();
                info!("Scrape: {ok}/{} succeeded", records.len());
                self.results = records;
                self.finish_batch();
            }
            Ok(Err(msg)) => {
                self.status(format!("Error: {msg}"));
                self.finish_batch();
            }
            Err(TryRecvError::Empty) => ctx.request_repaint_after(Duration::from_millis(200)),
            Err(TryRecvError::Disconnected) => {
                warn!("Scrape: worker ended without a result");
                self.status("Error: scrape worker stopped");
                self.finish_batch();
            }
        }
    }

    fn finish_batch(&mut self) {
        self.pending = None;
        self.running = false;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    /// Ask a running batch to stop and wait for it, so the browser session
    /// is closed before the process goes away.
    fn stop_batch(&mut self) {
        let Some(worker) = self.worker.take() else { return };
        self.stop.store(true, Ordering::Relaxed);
        info!("Exit: waiting for the scrape worker");
        if worker.join().is_err() {
            warn!("Exit: scrape worker panicked");
        }
        self.pending = None;
        self.running = false;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_batch(ctx);

        egui::SidePanel::left("input")
            .resizable(false)
            .show(ctx, |ui| {
                components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::results_table::draw(ui, self);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.stop_batch();
    }
}
