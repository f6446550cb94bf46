//! REST gateway for the historical facts API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors/`false` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses, and malformed JSON map to distinct
//! [`FetchError`] variants, but every call site collapses them into the
//! same generic error view; the distinction only reaches the developer
//! console. Requests are single best-effort attempts: no retries, no
//! backoff, no cancellation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FactsResponse, RandomFactResponse};
use crate::util::dates::month_name;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Production facts API. Overridable at build time with `FACTS_API_BASE_URL`.
const DEFAULT_API_BASE: &str = "https://historical-facts-api-morphvm-87kmb6bw.http.cloud.morph.so";

/// Base URL the gateway targets, fixed at build time.
pub fn api_base() -> &'static str {
    option_env!("FACTS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Why a fetch produced no usable payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (DNS, connection, CORS...).
    #[error("request could not complete: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The body was not the JSON shape we expected.
    #[error("malformed response payload: {0}")]
    Payload(String),
}

#[cfg(feature = "hydrate")]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Path for a specific date; `month`/`day` are interpolated unpadded,
/// exactly as the day selector produced them.
pub fn date_facts_path(month: u8, day: u8) -> String {
    format!("/historical-facts/{month}/{day}")
}

pub fn today_failed_message() -> String {
    "Failed to load today's historical facts. Please check your connection and try again.".to_owned()
}

pub fn random_failed_message() -> String {
    "Failed to load a random historical fact. Please check your connection and try again.".to_owned()
}

pub fn date_failed_message(month: u8, day: u8) -> String {
    match month_name(month) {
        Some(name) => format!("Failed to load historical facts for {name} {day}. Please try again."),
        None => "Failed to load historical facts for that date. Please try again.".to_owned(),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| FetchError::Payload(e.to_string()))
}

/// Probe `/health`. Returns `true` only on a 2xx answer.
pub async fn check_health() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get(&endpoint("/health")).send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Fetch today's facts from `/historical-facts/today`.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request fails, the server answers with
/// a non-2xx status, or the body does not decode.
pub async fn fetch_today() -> Result<FactsResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/historical-facts/today").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Network("not available on server".to_owned()))
    }
}

/// Fetch one random fact from `/historical-facts/random`.
///
/// # Errors
///
/// Same failure conditions as [`fetch_today`].
pub async fn fetch_random() -> Result<RandomFactResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/historical-facts/random").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Network("not available on server".to_owned()))
    }
}

/// Fetch facts for a specific date from `/historical-facts/{month}/{day}`.
///
/// # Errors
///
/// Same failure conditions as [`fetch_today`].
pub async fn fetch_for_date(month: u8, day: u8) -> Result<FactsResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&date_facts_path(month, day)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (month, day);
        Err(FetchError::Network("not available on server".to_owned()))
    }
}
