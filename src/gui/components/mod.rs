// src/gui/components/mod.rs
pub mod action_bar;
pub mod input_panel;
pub mod results_table;
