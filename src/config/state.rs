// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Input path as typed; applied to `options.input` on Load/SCRAPE
    pub input_text: String,

    /// Output path as typed; applied to `options.export` on Export
    pub out_path_text: String,
    pub out_path_dirty: bool,

    /// Results table: hide failed queries
    pub hide_failed: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_text: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            hide_failed: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            input_text: options.input.source.path().to_string_lossy().into_owned(),
            out_path_text: options.export.out_path().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
