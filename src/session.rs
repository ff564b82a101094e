// src/session.rs
//
// Everything one "page" owns: options + selection, the fetched dataset, the
// derived student index and the current view. Frontends hold one Session
// and call into it from their input handlers; nothing here is global.

use crate::config::state::AppState;
use crate::data::{AttendanceDataset, StudentIndex};
use crate::fetch::FetchError;
use crate::view::{self, TableView};

#[derive(Clone, Debug)]
pub struct Session {
    pub state: AppState,
    dataset: AttendanceDataset,
    students: StudentIndex,
    view: TableView,
}

impl Session {
    pub fn new(state: AppState) -> Self {
        let dataset = AttendanceDataset::new();
        let view = view::render(&dataset, &state.selection, state.options.profile);
        Self { state, dataset, students: StudentIndex::default(), view }
    }

    /* ---------- read side ---------- */

    pub fn dataset(&self) -> &AttendanceDataset { &self.dataset }

    pub fn students(&self) -> &StudentIndex { &self.students }

    pub fn view(&self) -> &TableView { &self.view }

    pub fn subject(&self) -> &str { &self.state.selection.subject }

    pub fn query(&self) -> &str { &self.state.selection.query }

    /// Subjects offered by the selector: the dataset's keys, plus the current
    /// subject if the dataset does not have it.
    pub fn subject_choices(&self) -> Vec<String> {
        let mut out: Vec<String> = self.dataset.subjects().map(|s| s!(s)).collect();
        let cur = self.subject();
        if !out.iter().any(|s| s == cur) {
            out.insert(0, s!(cur));
        }
        out
    }

    /* ---------- write side ---------- */

    /// Take the outcome of the startup fetch.
    /// Success replaces the dataset wholesale; failure leaves it untouched
    /// and is handed back so the frontend can tell the user.
    pub fn apply_fetch(
        &mut self,
        result: Result<AttendanceDataset, FetchError>,
    ) -> Result<(), FetchError> {
        let ds = result?;
        self.dataset = ds;
        self.students = if self.state.options.profile.search_enabled() {
            StudentIndex::build(&self.dataset)
        } else {
            StudentIndex::default()
        };
        logd!("Session: student index rebuilt ({} names)", self.students.len());
        self.rebuild_view();
        Ok(())
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.state.selection.subject = subject.into();
        logf!("UI: Subject → {}", self.state.selection.subject);
        self.rebuild_view();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.selection.query = query.into();
        self.rebuild_view();
    }

    /// Re-run filter + render for the current selection.
    pub fn rebuild_view(&mut self) {
        self.view = view::render(&self.dataset, &self.state.selection, self.state.options.profile);
        logd!(
            "View: subject={} query={:?} rows={}",
            self.state.selection.subject,
            self.state.selection.query,
            self.view.nrows()
        );
    }
}
