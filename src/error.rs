//! Common error type shared across the library.
//!
//! `AppError` covers the ways an upstream interaction can fail: transport
//! errors from `reqwest`, non-success responses from the Gemini API (with the
//! body captured for classification), a poll loop that outlives its deadline,
//! and responses that complete without usable payload.
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Non-success response from the Gemini API. Carries the status line and
    /// body text so the generator can classify the failure.
    #[error("gemini api error: {0}")]
    Gemini(String),

    #[error("generation did not complete within {0:?}")]
    PollTimeout(Duration),

    /// The upstream reported success but the payload held no result.
    #[error("empty result from upstream: {0}")]
    EmptyResult(String),
}

pub type AppResult<T> = Result<T, AppError>;
