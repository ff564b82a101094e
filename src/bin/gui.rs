// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use attendance_view::{config::state::AppState, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    let state = AppState::default();
    let (w, h) = (state.gui.window_w as f32, state.gui.window_h as f32);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(gui::app::WINDOW_TITLE)
            .with_inner_size([w, h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
