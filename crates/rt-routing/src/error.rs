//! Routing error type.

use thiserror::Error;

use rt_core::StopId;

/// Errors produced by `rt-routing`.
///
/// Relaxation itself never fails; the only error is a synchronisation run
/// that hits the configured sweep limit.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("synchronisation from {home} did not converge within {sweeps} sweeps")]
    NotConverged { home: StopId, sweeps: u32 },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
