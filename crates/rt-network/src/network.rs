//! The stop arena and its routing maintenance.
//!
//! # Ownership
//!
//! Stops refer to each other (adjacency, next hops, table keys) only by
//! [`StopId`].  The network owns every [`Stop`] in a `Vec` indexed by id, so
//! the cyclic stop graph never needs shared ownership.

use rustc_hash::FxHashMap;
use tracing::debug;

use rt_core::{Cost, GridPoint, RtError, StopId};
use rt_routing::{
    NoopObserver, RoutingTable, SyncConfig, SyncObserver, SyncReport, Synchroniser, Topology,
    reachable_stops, transfer_entries,
};

use crate::{NetworkError, NetworkResult, RouteRow, Stop, StopKey};

// ── StopArena ─────────────────────────────────────────────────────────────────

/// Id-indexed stop storage; the [`Topology`] the synchroniser walks.
#[derive(Default)]
struct StopArena {
    stops: Vec<Stop>,
}

impl Topology for StopArena {
    fn neighbours(&self, stop: StopId) -> &[StopId] {
        self.stops[stop.index()].neighbours()
    }

    fn position(&self, stop: StopId) -> GridPoint {
        self.stops[stop.index()].position()
    }

    fn table(&self, stop: StopId) -> &RoutingTable {
        self.stops[stop.index()].routing_table()
    }

    fn table_mut(&mut self, stop: StopId) -> &mut RoutingTable {
        self.stops[stop.index()].table_mut()
    }

    fn link(&mut self, stop: StopId, neighbour: StopId) -> bool {
        self.stops[stop.index()].push_neighbour(neighbour)
    }
}

// ── StopNetwork ───────────────────────────────────────────────────────────────

/// A set of uniquely identified stops and their converging routing tables.
///
/// # Example
///
/// ```
/// use rt_network::StopNetwork;
///
/// let mut net = StopNetwork::new();
/// let a = net.add_stop("A", 0, 0).unwrap();
/// let b = net.add_stop("B", 0, 3).unwrap();
/// let c = net.add_stop("C", 3, 3).unwrap();
/// net.connect(a, b).unwrap();
/// net.connect(b, c).unwrap();
/// assert_eq!(net.cost_between(a, c).unwrap(), 6);
/// assert_eq!(net.next_hop(a, c).unwrap(), Some(b));
/// ```
#[derive(Default)]
pub struct StopNetwork {
    arena: StopArena,
    index: FxHashMap<StopKey, StopId>,
    sync:  Synchroniser,
}

impl StopNetwork {
    /// An empty network that synchronises without a sweep limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SyncConfig) -> Self {
        Self { sync: Synchroniser::new(config), ..Self::default() }
    }

    pub fn config(&self) -> &SyncConfig {
        self.sync.config()
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// Create a stop and return its id (sequential from 0).
    pub fn add_stop(&mut self, name: &str, x: i32, y: i32) -> NetworkResult<StopId> {
        self.insert(StopKey::new(name, x, y)?)
    }

    /// Add a stop described by `key`.
    ///
    /// Fails with [`NetworkError::DuplicateStop`] if an equal stop exists.
    pub fn insert(&mut self, key: StopKey) -> NetworkResult<StopId> {
        if self.index.contains_key(&key) {
            return Err(NetworkError::DuplicateStop(key.to_string()));
        }
        let id = StopId::try_from(self.arena.stops.len())
            .map_err(|_| RtError::Config("stop arena is full".into()))?;
        debug!(%id, stop = %key, "stop added");
        self.index.insert(key.clone(), id);
        self.arena.stops.push(Stop::new(id, key));
        Ok(id)
    }

    /// Id of the stop equal to `key`, if this network has one.
    pub fn resolve(&self, key: &StopKey) -> Option<StopId> {
        self.index.get(key).copied()
    }

    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.arena.stops.get(id.index())
    }

    pub fn stop(&self, id: StopId) -> NetworkResult<&Stop> {
        self.get(id).ok_or_else(|| RtError::StopNotFound(id).into())
    }

    pub fn stops(&self) -> &[Stop] {
        &self.arena.stops
    }

    pub fn len(&self) -> usize {
        self.arena.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.stops.is_empty()
    }

    // ── Topology changes ──────────────────────────────────────────────────

    /// Make `neighbour` adjacent to `home` (one direction) and resynchronise.
    pub fn add_neighbour(&mut self, home: StopId, neighbour: StopId) -> NetworkResult<SyncReport> {
        self.add_neighbour_with(home, neighbour, &mut NoopObserver)
    }

    pub fn add_neighbour_with(
        &mut self,
        home:      StopId,
        neighbour: StopId,
        observer:  &mut dyn SyncObserver,
    ) -> NetworkResult<SyncReport> {
        self.check(home)?;
        self.check(neighbour)?;
        Ok(self.sync.add_neighbour(&mut self.arena, home, neighbour, observer)?)
    }

    /// Two-way adjacency between `a` and `b`.
    pub fn connect(&mut self, a: StopId, b: StopId) -> NetworkResult<SyncReport> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.sync.connect(&mut self.arena, a, b, &mut NoopObserver)?)
    }

    /// Connect consecutive stops of `line` in both directions, in order.
    pub fn link_line(&mut self, line: &[StopId]) -> NetworkResult<SyncReport> {
        for &id in line {
            self.check(id)?;
        }
        let mut report = SyncReport::default();
        for pair in line.windows(2) {
            report += self.sync.connect(&mut self.arena, pair[0], pair[1], &mut NoopObserver)?;
        }
        Ok(report)
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Re-run synchronisation from `home` without changing topology.
    pub fn synchronise(&mut self, home: StopId) -> NetworkResult<SyncReport> {
        self.synchronise_with(home, &mut NoopObserver)
    }

    pub fn synchronise_with(
        &mut self,
        home:     StopId,
        observer: &mut dyn SyncObserver,
    ) -> NetworkResult<SyncReport> {
        self.check(home)?;
        Ok(self.sync.synchronise(&mut self.arena, home, observer)?)
    }

    /// Stops reachable from `home` along adjacency, `home` first.
    pub fn reachable_stops(&self, home: StopId) -> NetworkResult<Vec<StopId>> {
        self.check(home)?;
        Ok(reachable_stops(&self.arena, home))
    }

    /// Push `from`'s entries into `to`'s table once, without synchronising.
    pub fn transfer_entries(&mut self, from: StopId, to: StopId) -> NetworkResult<bool> {
        self.check(from)?;
        self.check(to)?;
        Ok(transfer_entries(&mut self.arena, from, to))
    }

    pub fn routing_table(&self, id: StopId) -> NetworkResult<&RoutingTable> {
        self.stop(id).map(Stop::routing_table)
    }

    /// `from`'s current cost to `to` (`INFINITE` if unknown).
    pub fn cost_between(&self, from: StopId, to: StopId) -> NetworkResult<Cost> {
        self.check(to)?;
        Ok(self.routing_table(from)?.cost_to(to))
    }

    /// First stop to visit from `from` toward `to`.
    pub fn next_hop(&self, from: StopId, to: StopId) -> NetworkResult<Option<StopId>> {
        self.check(to)?;
        Ok(self.routing_table(from)?.next_hop(to))
    }

    /// Every entry of every table, sorted by `(from, to)`.
    pub fn routing_snapshot(&self) -> Vec<RouteRow> {
        let mut rows: Vec<RouteRow> = self
            .arena
            .stops
            .iter()
            .flat_map(|stop| {
                let from = stop.id().0;
                stop.routing_table().iter().filter_map(move |(to, entry)| {
                    entry.next().map(|next| RouteRow {
                        from,
                        to: to.0,
                        cost: entry.cost(),
                        next: next.0,
                    })
                })
            })
            .collect();
        rows.sort_unstable();
        rows
    }

    fn check(&self, id: StopId) -> NetworkResult<()> {
        if id.index() < self.arena.stops.len() {
            Ok(())
        } else {
            Err(RtError::StopNotFound(id).into())
        }
    }
}
