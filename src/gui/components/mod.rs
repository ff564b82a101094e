// src/gui/components/mod.rs
pub mod alert;
pub mod data_table;
pub mod export_bar;
pub mod selection_bar;
