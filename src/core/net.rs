// src/core/net.rs

// Blocking HTTPS GET with fixed timeouts. All remote reads go through here.

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};

/// Build a client with the shared request settings. One handle per
/// adapter; no process-wide session.
pub fn client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn get(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
