// src/gui/components/input_panel.rs
//
// Left panel: where queries come from and how pages are read.
// Edits go straight into `app.state.options`; the input path is applied on Load.

use std::path::PathBuf;

use eframe::egui;
use log::{debug, info};

use crate::{
    config::options::{ExtractMode, InputSource, KeyMode, KindChoice},
    gui::{actions, app::App},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum SourceKind { Csv, Directory }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Input");

    let prev_src = match app.state.options.input.source {
        InputSource::Csv(_) => SourceKind::Csv,
        InputSource::Directory(_) => SourceKind::Directory,
    };
    let mut src = prev_src;
    ui.horizontal(|ui| {
        ui.selectable_value(&mut src, SourceKind::Csv, "CSV file");
        ui.selectable_value(&mut src, SourceKind::Directory, "Folder");
    });
    if src != prev_src {
        let path = PathBuf::from(app.state.gui.input_text.trim());
        app.state.options.input.source = match src {
            SourceKind::Csv => InputSource::Csv(path),
            SourceKind::Directory => InputSource::Directory(path),
        };
        info!("UI: input source → {:?}", app.state.options.input.source);
    }

    ui.label("Path:");
    ui.add(egui::TextEdit::singleline(&mut app.state.gui.input_text).font(egui::TextStyle::Monospace));

    let input = &mut app.state.options.input;
    ui.add_enabled_ui(src == SourceKind::Csv, |ui| {
        ui.horizontal(|ui| {
            ui.label("Key:");
            ui.selectable_value(&mut input.key, KeyMode::Title, "Title");
            ui.selectable_value(&mut input.key, KeyMode::Author, "Author");
        });
    });
    ui.horizontal(|ui| {
        ui.label("Kind:");
        ui.selectable_value(&mut input.kind, KindChoice::Book, "Book");
        ui.selectable_value(&mut input.kind, KindChoice::Author, "Author");
        ui.selectable_value(&mut input.kind, KindChoice::Auto, "Auto");
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Load")).clicked() {
            actions::load(app);
        }
        ui.label(format!("{} queries", app.queries.len()));
    });

    ui.separator();
    ui.heading("Scrape");

    let scrape = &mut app.state.options.scrape;
    let prev_mode = scrape.mode;
    ui.horizontal(|ui| {
        ui.selectable_value(&mut scrape.mode, ExtractMode::Rendered, "Rendered")
            .on_hover_text("Browser session via WebDriver; all fields");
        ui.selectable_value(&mut scrape.mode, ExtractMode::Static, "Static")
            .on_hover_text("Server HTML only; rating and count");
    });
    if scrape.mode != prev_mode {
        info!("UI: extract mode → {:?}", scrape.mode);
    }

    egui::Grid::new("scrape_opts").num_columns(2).show(ui, |ui| {
        ui.label("Prior mean");
        ui.add(egui::DragValue::new(&mut scrape.prior.mean).range(0.0..=5.0).speed(0.01));
        ui.end_row();

        ui.label("Prior weight");
        ui.add(egui::DragValue::new(&mut scrape.prior.count).speed(100));
        ui.end_row();

        ui.label("Pause (ms)");
        ui.add(egui::DragValue::new(&mut scrape.pause_ms).speed(50));
        ui.end_row();

        ui.label("Settle (ms)");
        ui.add_enabled(
            scrape.mode == ExtractMode::Rendered,
            egui::DragValue::new(&mut scrape.settle_ms).speed(50),
        );
        ui.end_row();

        ui.label("WebDriver");
        if ui
            .add_enabled(
                scrape.mode == ExtractMode::Rendered,
                egui::TextEdit::singleline(&mut scrape.webdriver_url).desired_width(160.0),
            )
            .changed()
        {
            debug!("UI: webdriver → {}", scrape.webdriver_url);
        }
        ui.end_row();
    });
}
