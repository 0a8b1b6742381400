// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load,scrape,export}.

mod export;
mod load;
mod scrape;

pub use export::export;
pub use load::load;
pub use scrape::scrape;
