use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::FetchError;

const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; AuroraNav/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Build the blocking HTTP client used for catalog requests.
pub fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// GET `url` and decode the JSON body (blocking).
///
/// Non-success statuses are errors; the body is not inspected for them.
pub fn get_json<T: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    url: &Url,
) -> Result<T, FetchError> {
    let response = client
        .get(url.as_str())
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Request(format!("failed to read body: {}", e)))?;

    decode_json(&body)
}

/// Decode a JSON payload, mapping serde errors to [`FetchError::Decode`].
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
