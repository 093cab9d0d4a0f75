//! HTTP client for the remote user provider.
//!
//! Performs the single fetch the application ever makes: GET the user list,
//! decode it, and map it into student records. No retries, no caching -
//! a failed load is reported once and the session continues empty.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use roster_model::{RawUser, StudentRecord};

use crate::error::{IngestError, Result};

/// Default provider endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Environment variable that overrides the provider endpoint.
const ENDPOINT_ENV_VAR: &str = "ROSTER_ENDPOINT";

/// User agent string for provider requests.
const USER_AGENT_VALUE: &str = concat!("roster-studio/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the provider endpoint from the environment, falling back to
/// [`DEFAULT_ENDPOINT`].
pub fn endpoint_from_env() -> String {
    std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

/// Fetch all users from the provider and map them into student records.
pub async fn fetch_students(endpoint: &str) -> Result<Vec<StudentRecord>> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| IngestError::Network(format!("failed to create HTTP client: {e}")))?;

    tracing::debug!("Fetching users from {}", endpoint);

    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            status: status.as_u16(),
        });
    }

    let raw: Vec<RawUser> = response.json().await?;
    tracing::info!("Loaded {} users from provider", raw.len());

    Ok(raw.into_iter().map(StudentRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_points_at_the_users_collection() {
        assert!(DEFAULT_ENDPOINT.ends_with("/users"));
    }
}
