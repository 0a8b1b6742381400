// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use log::{debug, info};

use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut export.format, ExportFormat::Report, "Report");
        });

        if export.format != prev_fmt {
            info!("UI: Export format → {:?}", export.format);

            // Default path and untouched field: follow the new extension.
            if !app.state.gui.out_path_dirty && export.is_default_path() {
                app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
                debug!("UI: out_path_text refreshed to match format (default path)");
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    // Actions: Export / Scrape
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            actions::scrape(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
