// src/gui/components/data_table.rs
//
// Draws the current TableView. Purely a view: the rows were already
// filtered and formatted by Session::rebuild_view.

use eframe::egui::{self, Align, Layout, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::view::TableBody;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading…");
        });
        return;
    }

    let view = app.session.view();
    let cols = view.ncols();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let col = if ci + 1 == cols {
            Column::remainder().at_least(80.0)
        } else {
            Column::auto().at_least(90.0).clip(true)
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for h in view.headers() {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|mut body| match &view.body {
            TableBody::Placeholder(msg) => {
                // egui tables have no colspan: message in the first cell, rest blank
                body.row(ROW_H, |mut row| {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(msg.as_str());
                    });
                    for _ in 1..cols {
                        row.col(|_| {});
                    }
                });
            }
            TableBody::Rows(rows) => {
                body.rows(ROW_H, rows.len(), |mut row| {
                    let Some(cells) = rows.get(row.index()) else { return };
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}
