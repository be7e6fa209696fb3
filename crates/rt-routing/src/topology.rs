//! The graph seam the synchroniser walks.
//!
//! The routing algorithm never owns stops.  It reaches adjacency, positions
//! and the per-stop tables through this trait, so any arena (the
//! `rt-network` `StopNetwork`, a test fixture, a simulation's stop store)
//! can be synchronised without the tables holding references to each other.

use rt_core::{GridPoint, StopId};

use crate::RoutingTable;

/// Adjacency and table storage for a set of stops addressed by [`StopId`].
///
/// Implementations may panic when handed an id they do not contain; callers
/// validate ids before entering the synchroniser.
pub trait Topology {
    /// Direct neighbours of `stop`, in insertion order.
    fn neighbours(&self, stop: StopId) -> &[StopId];

    /// Grid position of `stop`, used for the base weight of a new adjacency.
    fn position(&self, stop: StopId) -> GridPoint;

    fn table(&self, stop: StopId) -> &RoutingTable;

    fn table_mut(&mut self, stop: StopId) -> &mut RoutingTable;

    /// Append `neighbour` to `stop`'s adjacency (one direction only).
    ///
    /// Returns `false` and leaves the adjacency untouched if `neighbour` is
    /// already present.
    fn link(&mut self, stop: StopId, neighbour: StopId) -> bool;
}
