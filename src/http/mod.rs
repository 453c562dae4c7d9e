//! HTTP client module
//!
//! Provides a thin wrapper over reqwest with base URL handling, default
//! headers, and error classification.
//!
//! There is deliberately no retry, backoff, or rate limiting here: a failed
//! request surfaces immediately to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
