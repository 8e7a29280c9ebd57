//! Error types shared across the workspace.
//!
//! Every failure inside a single lookup (transport, unreadable body, body that
//! is not JSON) ends up as one `LookupError` that the handler turns into the
//! `Error: ...` text shown to the user.
use std::io;

use thiserror::Error;

/// Unified error type for the ticker lookup client.
#[derive(Error, Debug)]
pub enum LookupError {
    /// I/O error originating from the standard library (ticker files, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// The HTTP request could not be built, sent, or its body read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON, or the value could not be re-encoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while parsing a ticker file into `Ticker` values.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),
}
