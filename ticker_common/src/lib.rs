//!
//! Common types and utilities shared by the ticker lookup client.
//!
//! This crate aggregates:
//! - `error` — unified error type `LookupError` used across the workspace.
//! - `result` — handy `Result<T, LookupError>` alias.
//! - `tickers` — the `Ticker` symbol type and ticker-file parsing.
//! - `net` — API path constants and URL helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod result;
pub mod tickers;

pub use error::LookupError;
pub use result::Result;
pub use tickers::Ticker;
