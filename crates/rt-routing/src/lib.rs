//! `rt-routing` — per-stop routing tables and their convergence protocol.
//!
//! Every stop owns a [`RoutingTable`] mapping destinations to a
//! [`RoutingEntry`] (next hop + cost).  Tables converge by pairwise
//! exchange: a stop pushes its entries into each neighbour's table, relaxed
//! through the connecting edge, and the [`Synchroniser`] repeats full sweeps
//! over the reachable component until nothing changes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`entry`]    | `RoutingEntry`                                            |
//! | [`table`]    | `RoutingTable` and its relaxation primitive               |
//! | [`topology`] | `Topology` trait — the graph the synchroniser walks       |
//! | [`sync`]     | `Synchroniser`, `SyncConfig`, `SyncReport`, traversal and transfer |
//! | [`observer`] | `SyncObserver` progress callbacks, `NoopObserver`         |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod entry;
pub mod error;
pub mod observer;
pub mod sync;
pub mod table;
pub mod topology;


pub use entry::RoutingEntry;
pub use error::{RoutingError, RoutingResult};
pub use observer::{NoopObserver, SyncObserver};
pub use sync::{reachable_stops, transfer_entries, SyncConfig, SyncReport, Synchroniser};
pub use table::RoutingTable;
pub use topology::Topology;
