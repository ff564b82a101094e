// src/gui/components/alert.rs
//
// Modal-style notice. While it is up, the panels are disabled (see App::update).

use eframe::egui::{self, Align2, Vec2};

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.alert.as_deref() else { return };

    let mut close = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(msg);
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        app.alert = None;
    }
}
