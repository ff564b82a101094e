// src/view.rs
//! Record view: the filtered, formatted table for one subject.
//!
//! `render` is pure. It takes the dataset, the current selection and the
//! view profile, and returns a `TableView` that a frontend draws (egui
//! table, HTML, text, CSV). The displayed body is replaced wholesale with
//! each new result.

use crate::config::consts::NO_STUDENT_MATCH;
use crate::config::options::ViewProfile;
use crate::config::state::SelectionState;
use crate::data::{AttendanceDataset, AttendanceRecord};
use crate::format::{format_date, format_percent, format_time};

/// Table body contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    /// One formatted row per record, in dataset order.
    Rows(Vec<Vec<String>>),
    /// Single row spanning every column.
    Placeholder(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub profile: ViewProfile,
    pub body: TableBody,
}

impl TableView {
    pub fn placeholder(profile: ViewProfile, message: impl Into<String>) -> Self {
        Self { profile, body: TableBody::Placeholder(message.into()) }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.profile.headers()
    }

    pub fn ncols(&self) -> usize {
        self.profile.column_count()
    }

    /// Rendered row count; a placeholder counts as one row.
    pub fn nrows(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder(_) => 1,
        }
    }

    /// Record rows only; empty for a placeholder.
    pub fn rows(&self) -> &[Vec<String>] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder_message(&self) -> Option<&str> {
        match &self.body {
            TableBody::Placeholder(msg) => Some(msg),
            TableBody::Rows(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder(_))
    }
}

pub fn no_records_for(subject: &str) -> String {
    format!("No records found for {subject}")
}

/// Build one display row according to the profile's columns.
pub fn record_row(rec: &AttendanceRecord, profile: ViewProfile) -> Vec<String> {
    let mut row = Vec::with_capacity(profile.column_count());

    row.push(or_na!(rec.student_name.as_deref()));
    if profile.shows_roll_number() {
        row.push(or_na!(rec.roll_no.as_deref()));
    }
    row.push(format_date(rec.date.as_deref()));
    row.push(if profile.parses_time() {
        format_time(rec.time.as_deref())
    } else {
        or_na!(rec.time.as_deref())
    });
    row.push(format_percent(rec.attendance));

    row
}

pub fn render(ds: &AttendanceDataset, sel: &SelectionState, profile: ViewProfile) -> TableView {
    let Some(records) = ds.records(&sel.subject) else {
        return TableView::placeholder(profile, no_records_for(&sel.subject));
    };

    let query_lc = if profile.search_enabled() && sel.has_query() {
        Some(sel.query.to_lowercase())
    } else {
        None
    };

    let rows: Vec<Vec<String>> = records
        .iter()
        .filter(|r| match &query_lc {
            Some(q) => r.name_contains_lc(q),
            None => true,
        })
        .map(|r| record_row(r, profile))
        .collect();

    // Subject present but nothing left (filtered out, or an empty list)
    if rows.is_empty() {
        return TableView::placeholder(profile, NO_STUDENT_MATCH);
    }

    TableView { profile, body: TableBody::Rows(rows) }
}
