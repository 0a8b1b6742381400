// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use shelf_scrape::{gui, logger};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/shelf.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    logger::init(log::LevelFilter::Debug);

    let mut viewport = ViewportBuilder::default()
        .with_title("Shelf Scrape")
        .with_inner_size([1100.0, 700.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options) {
        log::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
