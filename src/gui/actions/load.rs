// src/gui/actions/load.rs
use std::path::PathBuf;

use log::{error, info};

use crate::{config::options::InputSource, gui::app::App, input};

/// Apply the typed input path and read the query list.
pub fn load(app: &mut App) -> bool {
    let path = PathBuf::from(app.state.gui.input_text.trim());
    let opts = &mut app.state.options.input;
    opts.source = match opts.source {
        InputSource::Csv(_) => InputSource::Csv(path),
        InputSource::Directory(_) => InputSource::Directory(path),
    };

    match input::load_queries(opts) {
        Ok(queries) => {
            info!("Load: {} queries", queries.len());
            app.status(format!("Loaded {} queries", queries.len()));
            app.queries = queries;
            app.results.clear();
            true
        }
        Err(e) => {
            error!("Load: {e}");
            app.status(format!("Error: {e}"));
            false
        }
    }
}
