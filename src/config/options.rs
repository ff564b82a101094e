// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source_url: String,
    pub profile: ViewProfile,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source_url: s!(SHEET_API_URL),
            profile: ViewProfile::Full,
            export: ExportOptions::default(),
        }
    }
}

/// Which flavour of the record table to show.
///
/// `Full` is the student portal: roll numbers, parsed times and name search.
/// `Basic` is the plain subject listing with raw times and no search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewProfile {
    Full,
    Basic,
}

impl ViewProfile {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ViewProfile::Full => &["Student Name", "Roll No", "Date", "Time", "Attendance"],
            ViewProfile::Basic => &["Student Name", "Date", "Time", "Attendance"],
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers().len()
    }

    pub fn shows_roll_number(&self) -> bool {
        matches!(self, ViewProfile::Full)
    }

    pub fn search_enabled(&self) -> bool {
        matches!(self, ViewProfile::Full)
    }

    pub fn parses_time(&self) -> bool {
        matches!(self, ViewProfile::Full)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewProfile::Full => "full",
            ViewProfile::Basic => "basic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" | "student" => Some(ViewProfile::Full),
            "basic" | "simple" => Some(ViewProfile::Basic),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Html,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Html => "html",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Html => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "html" => Some(ExportFormat::Html),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        match &self.out_path.user_ext {
            Some(ext) => path.push(join!(stem, ".", &ext.to_string_lossy())),
            None => path.push(join!(stem, ".", self.format.ext())),
        }
        path
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
