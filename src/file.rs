// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv;
use crate::html;
use crate::view::TableView;

/// Text for Copy/Export in the chosen format.
pub fn to_export_string(export: &ExportOptions, view: &TableView, subject: &str) -> String {
    match export.format {
        ExportFormat::Html => html::render_page(view, subject).into_string(),
        fmt => csv::to_export_string(view, export.include_headers, fmt.delim().unwrap_or(',')),
    }
}

/// Write the current view to `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    view: &TableView,
    subject: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if view.is_placeholder() {
        return Err("Nothing to export".into());
    }

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export, view, subject);
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
