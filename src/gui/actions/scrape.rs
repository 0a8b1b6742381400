// src/gui/actions/scrape.rs
use std::{
    sync::{atomic::Ordering, mpsc},
    thread,
};

use eframe::egui;
use log::{error, info};

use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Start the batch on a worker thread. Results are picked up by `App::update`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    if app.queries.is_empty() && !super::load(app) {
        return;
    }
    if app.queries.is_empty() {
        app.status("Nothing to scrape");
        return;
    }

    let opts = app.state.options.scrape.clone();
    if let Err(e) = opts.validate() {
        error!("Scrape: {e}");
        app.status(format!("Error: {e}"));
        return;
    }

    let queries = app.queries.clone();
    app.stop.store(false, Ordering::Relaxed);
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone(), app.stop.clone());
    let (tx, rx) = mpsc::channel();

    info!("Scrape: Begin queries={} mode={:?}", queries.len(), opts.mode);

    let worker = thread::spawn(move || {
        // → This is where the scrape happens ←
        let outcome = scrape::run(&queries, &opts, Some(&mut prog)).map_err(|e| {
            error!("Scrape: {e}");
            e.to_string()
        });
        let _ = tx.send(outcome);
    });

    app.results.clear();
    app.pending = Some(rx);
    app.worker = Some(worker);
    app.running = true;
}
