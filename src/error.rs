//! Fetch Errors
//!
//! Every variant is handled the same way by the list: logged, then dropped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid search endpoint: {0}")]
    Endpoint(String),
    /// Transport failure or malformed response body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}
