// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod data;
pub mod fetch;
pub mod format;
pub mod session;
pub mod view;

pub mod csv;
pub mod file;
pub mod html;
pub mod text;

pub mod cli;
pub mod gui;
