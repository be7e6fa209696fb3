//! `rt-network` — stops, the stop arena, and routing maintenance.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`stop`]     | `StopKey` (value identity + `name:x:y` text form), `Stop`   |
//! | [`network`]  | `StopNetwork` arena — owns stops, drives synchronisation    |
//! | [`snapshot`] | `RouteRow` — flat, serialisable view of every table         |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Identity
//!
//! Stops are equal when name and position are equal.  [`StopNetwork`]
//! interns every stop by its [`StopKey`] and rejects duplicates, so inside a
//! network [`StopId`](rt_core::StopId) equality *is* stop equality and the
//! routing tables can key on ids.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod snapshot;
pub mod stop;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::StopNetwork;
pub use snapshot::RouteRow;
pub use stop::{Stop, StopKey};
