// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    if app.session.view().is_placeholder() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    let state = &mut app.session.state;
    if state.gui.out_path_dirty {
        state.options.export.set_path(&state.gui.out_path_text);
        logf!("Export: Out path set → {}", state.options.export.out_path().display());
        state.gui.out_path_dirty = false;
    }

    let res = file::write_export(
        &app.session.state.options.export,
        app.session.view(),
        app.session.subject(),
    );

    match res {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
