// src/core/net.rs
//
// Fetch collaborator: one URL in, one opaque text blob out. No retries,
// no caching; failures surface to the caller untouched.

use std::error::Error;
use std::time::Duration;

use crate::params::{HOST, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    Ok(resp.text()?)
}

/// GET a path on the main host, e.g. "/current/2023ATPCincinnati.html".
pub fn get_path(path: &str) -> Result<String, Box<dyn Error>> {
    let url = if path.starts_with("http") {
        s!(path)
    } else if path.starts_with('/') {
        format!("{HOST}{path}")
    } else {
        format!("{HOST}/{path}")
    };
    http_get(&url)
}
