use anyhow::{Context, Error, anyhow};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

const USER_AGENT: &str = "fintrack/1.0";

/// Builds a client with the crate's user agent and an optional request timeout.
pub fn http_client(timeout: Option<Duration>) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}

/// Issues a single GET and parses the body as `T`.
///
/// Non-success statuses and bodies that do not match `T` are errors; there is
/// no retry.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    source: &str,
) -> Result<T, Error> {
    debug!("Requesting {} quotes from {}", source, url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| anyhow!("Request error: {} for {} quotes", e, source))?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "HTTP error: {} for {} quotes",
            response.status(),
            source
        ));
    }

    let text = response
        .text()
        .await
        .with_context(|| format!("Failed to read {source} response body"))?;

    serde_json::from_str(&text).map_err(|e| {
        error!(error = ?e, response = %text, "Failed to parse {} response", source);
        anyhow!("Failed to parse JSON response for {} quotes: {}", source, e)
    })
}
