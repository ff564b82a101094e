// src/format.rs
//
// Cell formatting for attendance rows.
//
// Dates and times arrive in whatever shape the sheet exported. Each is run
// through an ordered list of parser attempts; the first success wins.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::consts::{NA, REFERENCE_DATE};

/// A single parse attempt.
pub type Parser<T> = fn(&str) -> Option<T>;

/// Run `parsers` in order and return the first success.
pub fn first_parse<T>(input: &str, parsers: &[Parser<T>]) -> Option<T> {
    parsers.iter().find_map(|p| p(input))
}

/* ---------------- Dates ---------------- */

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d %b %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn date_plain(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Sheet exports dates as instants (`2024-01-05T00:00:00.000Z`); keep the
/// calendar day as written.
fn date_from_instant(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local().date())
}

fn date_from_datetime(s: &str) -> Option<NaiveDate> {
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .map(|dt| dt.date())
}

const DATE_PARSERS: &[Parser<NaiveDate>] = &[date_plain, date_from_instant, date_from_datetime];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    first_parse(raw.trim(), DATE_PARSERS)
}

/// `MM/DD/YYYY` when the date parses, the raw text otherwise, `N/A` when absent.
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => s!(NA),
        Some(r) => match parse_date(r) {
            Some(d) => d.format("%m/%d/%Y").to_string(),
            None => s!(r),
        },
    }
}

/* ---------------- Times ---------------- */

const ISO_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const SPACED_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M:%S%p",
    "%Y-%m-%d %I:%M%p",
];

/// `9 AM`, `11pm`: chrono needs a minute, so it is pinned to zero.
const HOUR_ONLY_FORMATS: &[&str] = &["%Y-%m-%d %I %p", "%Y-%m-%d %I%p"];

/// Reference date + `T` + raw, ISO style. Accepts a trailing offset.
fn time_iso(raw: &str) -> Option<NaiveTime> {
    let combined = format!("{REFERENCE_DATE}T{raw}");
    ISO_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(&combined, f).ok())
        .map(|dt| dt.time())
        .or_else(|| {
            DateTime::parse_from_rfc3339(&combined)
                .ok()
                .map(|dt| dt.naive_local().time())
        })
}

/// Reference date + space + raw; picks up 12-hour clock values.
fn time_spaced(raw: &str) -> Option<NaiveTime> {
    let combined = format!("{REFERENCE_DATE} {raw}");
    SPACED_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(&combined, f).ok())
        .map(|dt| dt.time())
        .or_else(|| HOUR_ONLY_FORMATS.iter().find_map(|f| hour_only(&combined, f)))
}

fn hour_only(combined: &str, fmt: &str) -> Option<NaiveTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, combined, StrftimeItems::new(fmt)).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_time().ok()
}

const TIME_PARSERS: &[Parser<NaiveTime>] = &[time_iso, time_spaced];

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    first_parse(raw.trim(), TIME_PARSERS)
}

/// 24-hour `HH:MM:SS`, or `N/A` when absent or unparseable.
pub fn format_time(raw: Option<&str>) -> String {
    raw.and_then(parse_time)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| s!(NA))
}

/* ---------------- Percentages ---------------- */

/// Fraction -> whole percent, e.g. `0.875` -> `88%`.
pub fn format_percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(v) => format!("{}%", (v * 100.0).round() as i64),
        None => s!(NA),
    }
}
