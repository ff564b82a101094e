// src/html.rs
//
// TableView -> HTML. Everything goes through maud, so cell text is escaped.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::view::{TableBody, TableView};

const CSS: &str = "\
body { font-family: sans-serif; margin: 2rem; }\
table { border-collapse: collapse; }\
th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: left; }\
th { background: #f2f2f2; }";

/// `<tbody>` only; what the page swaps on every render.
pub fn render_body(view: &TableView) -> Markup {
    html! {
        tbody id="attendanceRecords" {
            @match &view.body {
                TableBody::Placeholder(msg) => {
                    tr { td colspan=(view.ncols()) { (msg) } }
                }
                TableBody::Rows(rows) => {
                    @for row in rows {
                        tr {
                            @for cell in row { td { (cell) } }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_table(view: &TableView) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for h in view.headers() { th { (h) } }
                }
            }
            (render_body(view))
        }
    }
}

/// Standalone document for export.
pub fn render_page(view: &TableView, subject: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Attendance - " (subject) }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { "Attendance: " (subject) }
                (render_table(view))
            }
        }
    }
}
