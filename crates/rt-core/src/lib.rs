//! `rt-core` — foundational types for the stop-routing workspace.
//!
//! This crate is a dependency of every other `rt-*` crate.  It has no `rt-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `StopId`                                                  |
//! | [`geo`]     | `GridPoint`, Manhattan distance                           |
//! | [`cost`]    | `Cost`, the `INFINITE` sentinel, saturating helpers       |
//! | [`error`]   | `RtError`, `RtResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cost;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::{Cost, INFINITE};
pub use error::{RtError, RtResult};
pub use geo::GridPoint;
pub use ids::StopId;
