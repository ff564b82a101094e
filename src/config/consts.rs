// src/config/consts.rs

// Net config
pub const SHEET_API_URL: &str = "https://script.google.com/macros/s/AKfycbxIPziqxPigZ2ptkqGsP8bgrpIV2LVGd0aqYILKpKMq_ciawhBxuFGqjoncWRYlozJM/exec";
pub const USER_AGENT: &str = "attendance_view/0.1";

// View
pub const DEFAULT_SUBJECT: &str = "DC";
pub const NA: &str = "N/A";
pub const NO_STUDENT_MATCH: &str = "No records found for the selected student";
pub const SUGGESTION_LIMIT: usize = 8;

// Time parsing anchors the raw value to this day
pub const REFERENCE_DATE: &str = "1970-01-01";

// User-facing notice for any fetch failure
pub const FETCH_FAILED_NOTICE: &str = "Error fetching attendance data. Please try again later.";

// Logging
pub const LOG_DIR: &str = ".attendance";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "attendance";
