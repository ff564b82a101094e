// src/gui/components/export_bar.rs

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    {
        let export = &mut app.session.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, ExportFormat::Html, "HTML");

            ui.add_enabled(
                fmt != ExportFormat::Html,
                egui::Checkbox::new(&mut export.include_headers, "Include headers"),
            );
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            let gui = &mut app.session.state.gui;
            if !gui.out_path_dirty {
                gui.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        let gui = &mut app.session.state.gui;
        if ui
            .add(egui::TextEdit::singleline(&mut gui.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", gui.out_path_text);
        }
    });

    // --- Actions (Copy / Export) + status ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        if app.running {
            ui.add(egui::Spinner::new().size(16.0));
        }
        ui.label(app.status.as_str());
    });
    ui.add_space(4.0);
}
