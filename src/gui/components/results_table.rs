// src/gui/components/results_table.rs
//
// One row per result record. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::UNKNOWN,
    gui::app::App,
    model::{Field, Payload, ResultRecord},
};

const HEADERS: [&str; 8] = ["Query", "Kind", "Status", "Author", "By-rating", "Raw", "Ratings", "URL"];
const WIDTHS: [f32; 8] = [220.0, 50.0, 60.0, 160.0, 70.0, 50.0, 80.0, 260.0];

/// Display cells for one record, in `HEADERS` order.
pub fn row_cells(r: &ResultRecord) -> [String; 8] {
    let status = if r.success { s!("ok") } else { s!("failed") };
    let blank = || s!("");

    match (&r.payload, r.success) {
        (Some(Payload::Book(b)), true) => [
            r.query.clone(),
            r.kind.to_string(),
            status,
            b.author.to_string(),
            match b.score {
                Field::Found(score) => format!("{score:.2}"),
                Field::Unknown => s!(UNKNOWN),
            },
            b.raw_rating.to_string(),
            b.rating_count.to_string(),
            b.url.clone(),
        ],
        (Some(Payload::Author(a)), true) => [
            r.query.clone(),
            r.kind.to_string(),
            status,
            a.author.clone(),
            blank(),
            blank(),
            format!("{} books", a.total_books()),
            a.url.clone(),
        ],
        _ => [
            r.query.clone(),
            r.kind.to_string(),
            status,
            r.failure.clone().unwrap_or_default(),
            blank(),
            blank(),
            blank(),
            blank(),
        ],
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.checkbox(&mut app.state.gui.hide_failed, "Hide failed");
        let ok = app.results.iter().filter(|r| r.success).count();
        ui.label(format!("{ok}/{} found", app.results.len()));
    });

    let rows: Vec<[String; 8]> = app
        .results
        .iter()
        .filter(|r| r.success || !app.state.gui.hide_failed)
        .map(row_cells)
        .collect();

    egui::ScrollArea::horizontal()
        .id_salt("results_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in HEADERS {
                        header.col(|ui| {
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let cells = &rows[row.index()];
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell.as_str());
                            });
                        }
                    });
                });
        });
}
