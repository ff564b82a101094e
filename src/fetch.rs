// src/fetch.rs
//
// Fetch the whole attendance dataset from the sheet endpoint.
// Called once at startup; the result replaces whatever the caller held.

use thiserror::Error;

use crate::config::consts::FETCH_FAILED_NOTICE;
use crate::core::net;
use crate::data::AttendanceDataset;

/// Anything that stops us from getting a dataset. Callers treat every
/// variant the same way; the variants only carry diagnostics for the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid attendance JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// The one message the user gets, whatever went wrong.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_NOTICE
    }
}

pub fn parse_dataset(body: &str) -> Result<AttendanceDataset, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub fn fetch_dataset(url: &str) -> Result<AttendanceDataset, FetchError> {
    logf!("Fetch: GET {}", url);

    let ds = net::http_get(url).and_then(|body| parse_dataset(&body));

    match &ds {
        Ok(ds) => {
            logf!(
                "Fetch: OK subjects={} records={}",
                ds.subject_count(),
                ds.record_count()
            );
            for (subject, records) in ds.iter() {
                logd!("Fetch: {} -> {} record(s)", subject, records.len());
            }
        }
        Err(e) => loge!("Fetch: Error fetching data: {}", e),
    }
    ds
}
