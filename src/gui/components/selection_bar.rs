// src/gui/components/selection_bar.rs
//
// Subject selector + student search. Every change re-renders the table
// straight away; nothing here fetches.

use eframe::egui;

use crate::config::consts::SUGGESTION_LIMIT;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let search_enabled = app.session.state.options.profile.search_enabled();

    ui.horizontal(|ui| {
        ui.label("Subject:");

        let mut subject = app.session.subject().to_owned();
        egui::ComboBox::from_id_salt("subject_select")
            .selected_text(subject.as_str())
            .show_ui(ui, |ui| {
                for choice in app.session.subject_choices() {
                    let label = choice.clone();
                    ui.selectable_value(&mut subject, choice, label);
                }
            });
        if subject != app.session.subject() {
            app.session.set_subject(subject);
        }

        if !search_enabled {
            return;
        }

        ui.separator();
        ui.label("Student:");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text("Search by name")
                .desired_width(220.0),
        );
        if resp.changed() {
            app.apply_search();
        }

        if ui.button("Search").clicked() {
            logd!("UI: Search clicked ({:?})", app.search_text);
            app.apply_search();
        }

        if !app.search_text.is_empty() && ui.button("Clear").clicked() {
            app.search_text.clear();
            app.apply_search();
        }
    });

    if !search_enabled {
        return;
    }

    // Suggestions from the student index
    let suggestions: Vec<String> = app
        .session
        .students()
        .suggest(&app.search_text, SUGGESTION_LIMIT)
        .into_iter()
        .map(|s| s!(s))
        .collect();

    if !suggestions.is_empty() {
        ui.horizontal_wrapped(|ui| {
            ui.weak("Did you mean:");
            for name in suggestions {
                if ui.small_button(name.as_str()).clicked() {
                    logd!("UI: Suggestion picked → {}", name);
                    app.search_text = name;
                    app.apply_search();
                }
            }
        });
    }
}
