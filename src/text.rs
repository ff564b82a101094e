// src/text.rs
//
// Plain-text table for terminal output. Columns are padded to the widest
// cell (counted in chars); a placeholder is printed on its own line under
// the header.

use crate::view::{TableBody, TableView};

const GAP: &str = " | ";

fn pad(cell: &str, width: usize) -> String {
    let n = cell.chars().count();
    let mut out = s!(cell);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(n)));
    out
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| pad(c.as_ref(), *w))
        .collect();
    s!(parts.join(GAP).trim_end())
}

pub fn render_text(view: &TableView) -> String {
    let headers = view.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in view.rows() {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = line(headers, &widths);
    out.push('\n');

    let rule_len = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    match &view.body {
        TableBody::Placeholder(msg) => {
            out.push_str(msg);
            out.push('\n');
        }
        TableBody::Rows(rows) => {
            for row in rows {
                out.push_str(&line(row, &widths));
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ViewProfile;

    #[test]
    fn columns_line_up() {
        let view = TableView {
            profile: ViewProfile::Basic,
            body: TableBody::Rows(vec![vec![s!("Ann"), s!("01/05/2024"), s!("N/A"), s!("88%")]]),
        };
        let txt = render_text(&view);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Student Name | Date       | Time | Attendance");
        assert_eq!(lines[2], "Ann          | 01/05/2024 | N/A  | 88%");
    }
}
