//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`RoutingError`, `NetworkError`)
//! and may wrap `RtError` as one variant.

use thiserror::Error;

use crate::StopId;

/// Common error base for the `rt-*` crates.
#[derive(Debug, Error)]
pub enum RtError {
    #[error("stop {0} not found")]
    StopNotFound(StopId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rt-core`.
pub type RtResult<T> = Result<T, RtError>;
