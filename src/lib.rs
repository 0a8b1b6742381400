// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod rank;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod input;
pub mod logger;
pub mod progress;
pub mod scrape;

pub use error::ScrapeError;
pub use model::{Query, QueryKind, ResultRecord};
