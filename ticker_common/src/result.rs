//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `LookupError`, so functions can simply return `Result<T>`.
use crate::error::LookupError;

/// Workspace-wide `Result` alias with `LookupError` as the default error.
pub type Result<T, E = LookupError> = std::result::Result<T, E>;
