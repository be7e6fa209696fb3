//! Stop-network error type.

use thiserror::Error;

use rt_core::RtError;
use rt_routing::RoutingError;

/// Errors produced by `rt-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("stop name is empty")]
    EmptyName,

    #[error("stop name `{0}` contains the `:` delimiter")]
    DelimiterInName(String),

    #[error("duplicate stop {0}")]
    DuplicateStop(String),

    #[error(transparent)]
    Core(#[from] RtError),

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
