// src/gui/actions/copy.rs
use eframe::egui;

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let view = app.session.view();

    if view.is_placeholder() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::to_export_string(&app.session.state.options.export, view, app.session.subject());
    logf!(
        "Copy: subject={}, rows={}, format={:?}",
        app.session.subject(),
        view.nrows(),
        app.session.state.options.export.format
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
