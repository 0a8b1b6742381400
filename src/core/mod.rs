// src/core/mod.rs

pub mod net;
pub mod render;
pub mod sanitize;
pub mod url;
