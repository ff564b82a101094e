// src/core/net.rs

// One blocking HTTPS GET. No retry and no timeout: the fetch either
// completes or fails on its own.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::consts::USER_AGENT;
use crate::fetch::FetchError;

/// GET `url` and return the body text.
///
/// Redirects are followed (the sheet endpoint answers with one). Any
/// non-2xx final status is an error.
pub fn http_get(url: &str) -> Result<String, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(Policy::limited(10))
        .timeout(None::<Duration>)
        .build()?;

    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    Ok(resp.text()?)
}
