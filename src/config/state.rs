// src/config/state.rs
use super::consts::DEFAULT_SUBJECT;
use super::options::AppOptions;

/// What the user is currently looking at. Only input handlers mutate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub subject: String,
    /// Case-insensitive student-name filter; empty means no filter.
    pub query: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            subject: s!(DEFAULT_SUBJECT),
            query: s!(),
        }
    }
}

impl SelectionState {
    pub fn new(subject: impl Into<String>, query: impl Into<String>) -> Self {
        Self { subject: subject.into(), query: query.into() }
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Output path text box contents (mapped to ExportOptions on Export)
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 600,
            out_path_text: s!(),
            out_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub selection: SelectionState,
    pub gui: GuiState,
}
