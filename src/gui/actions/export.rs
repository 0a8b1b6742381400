// src/gui/actions/export.rs
use log::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        info!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.state.gui.out_path_dirty = false;
    }

    if app.results.is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let opts = &app.state.options;
    let status_msg = match file::export(&app.results, &opts.export, &opts.scrape.prior) {
        Ok(path) => format!("Exported {}: {}", file::format_label(opts.export.format), path.display()),
        Err(e) => {
            error!("Export: {e}");
            format!("Export failed: {e}")
        }
    };
    app.status(status_msg);
}
