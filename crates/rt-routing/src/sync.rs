//! Network-wide synchronisation of routing tables.
//!
//! # Algorithm
//!
//! One **sweep** visits every stop reachable from the triggering stop and
//! transfers that stop's entries into each of its neighbours' tables.  A
//! transfer offers the neighbour, for every destination `d` known to the
//! source, the cost `source.cost_to(neighbour) + source.cost_to(d)` with the
//! source as intermediate; the neighbour keeps the offer only if it is
//! strictly cheaper.
//!
//! Sweeps repeat until one completes without any table changing.  Costs are
//! bounded below and strictly decrease on every effective update, so the
//! loop terminates, but the number of sweeps can grow with the diameter of
//! the component.

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use rt_core::{cost, Cost, StopId};

use crate::{RoutingError, RoutingResult, SyncObserver, Topology};

// ── SyncConfig ────────────────────────────────────────────────────────────────

/// Synchronisation settings.
///
/// Typically loaded from a JSON file by the application crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncConfig {
    /// Abort with [`RoutingError::NotConverged`] if a run is still changing
    /// tables after this many sweeps.  `None` (the default) runs to the
    /// fixed point however long it takes.
    pub max_sweeps: Option<u32>,
}

// ── SyncReport ────────────────────────────────────────────────────────────────

/// Work done by one or more synchronisation runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncReport {
    /// Full sweeps performed, including the final no-change sweep.
    pub sweeps: u32,
    /// Stop → neighbour transfers attempted.
    pub transfers: usize,
    /// Transfers that modified the receiving table.
    pub effective_transfers: usize,
    /// Individual entries installed or lowered.
    pub entries_updated: usize,
}

impl SyncReport {
    /// `true` if no table changed.
    pub fn is_quiescent(&self) -> bool {
        self.entries_updated == 0
    }
}

impl std::ops::AddAssign for SyncReport {
    fn add_assign(&mut self, rhs: SyncReport) {
        self.sweeps              += rhs.sweeps;
        self.transfers           += rhs.transfers;
        self.effective_transfers += rhs.effective_transfers;
        self.entries_updated     += rhs.entries_updated;
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

/// Every stop reachable from `home` by following adjacency (not routing
/// entries), `home` first.
///
/// Depth-first with an explicit stack: pop a stop, push each of its
/// neighbours not yet recorded, then record the popped stop if it is new.
/// The order is fully determined by the adjacency lists.
pub fn reachable_stops<T: Topology + ?Sized>(topology: &T, home: StopId) -> Vec<StopId> {
    let mut seen:  FxHashSet<StopId> = FxHashSet::default();
    let mut order: Vec<StopId>       = Vec::new();
    let mut stack: Vec<StopId>       = vec![home];

    while let Some(current) = stack.pop() {
        for &neighbour in topology.neighbours(current) {
            if !seen.contains(&neighbour) {
                stack.push(neighbour);
            }
        }
        if seen.insert(current) {
            order.push(current);
        }
    }
    order
}

// ── Transfer ──────────────────────────────────────────────────────────────────

/// Push `from`'s entries into `to`'s table, relaxed through the `from → to`
/// adjacency.
///
/// Does nothing and returns `false` unless `to` is a direct neighbour of
/// `from`.  Returns `true` iff at least one entry of `to`'s table changed.
pub fn transfer_entries<T: Topology + ?Sized>(topology: &mut T, from: StopId, to: StopId) -> bool {
    relax_into(topology, from, to) > 0
}

/// Transfer implementation; returns the number of entries changed in `to`.
///
/// Source entries are snapshotted before the first write, so the whole
/// transfer observes one consistent view of `from`'s table even when
/// `from == to`.
fn relax_into<T: Topology + ?Sized>(topology: &mut T, from: StopId, to: StopId) -> usize {
    if !topology.neighbours(from).contains(&to) {
        return 0;
    }

    let source = topology.table(from);
    let hop = source.cost_to(to);
    if !cost::is_finite(hop) {
        return 0;
    }
    let offers: Vec<(StopId, Cost)> = source
        .iter()
        .map(|(dest, entry)| (dest, cost::add(hop, entry.cost())))
        .collect();

    let target = topology.table_mut(to);
    let mut updated = 0;
    for (dest, offered) in offers {
        if target.add_or_update_entry(dest, offered, from) {
            updated += 1;
        }
    }
    updated
}

// ── Synchroniser ──────────────────────────────────────────────────────────────

/// Drives routing tables to their fixed point.
///
/// # Example
///
/// ```rust,ignore
/// let sync = Synchroniser::new(SyncConfig::default());
/// sync.add_neighbour(&mut network, a, b, &mut NoopObserver)?;
/// let report = sync.synchronise(&mut network, a, &mut NoopObserver)?;
/// assert!(report.is_quiescent());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Synchroniser {
    config: SyncConfig,
}

impl Synchroniser {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Sweep the component reachable from `home` until no table changes.
    pub fn synchronise<T, O>(
        &self,
        topology: &mut T,
        home:     StopId,
        observer: &mut O,
    ) -> RoutingResult<SyncReport>
    where
        T: Topology + ?Sized,
        O: SyncObserver + ?Sized,
    {
        // Topology is fixed for the duration of the run.
        let frontier = reachable_stops(&*topology, home);
        let mut report = SyncReport::default();
        let mut neighbours: Vec<StopId> = Vec::new();

        loop {
            report.sweeps += 1;
            let mut changed = 0usize;

            for &stop in &frontier {
                neighbours.clear();
                neighbours.extend_from_slice(topology.neighbours(stop));
                for &neighbour in &neighbours {
                    report.transfers += 1;
                    let updated = relax_into(topology, stop, neighbour);
                    if updated > 0 {
                        trace!(%stop, %neighbour, updated, "transfer changed table");
                        changed += 1;
                        report.entries_updated += updated;
                    }
                }
            }

            report.effective_transfers += changed;
            observer.on_sweep_end(home, report.sweeps, changed);

            if changed == 0 {
                break;
            }
            if let Some(limit) = self.config.max_sweeps {
                if report.sweeps >= limit {
                    warn!(%home, sweeps = report.sweeps, "sweep limit reached before convergence");
                    return Err(RoutingError::NotConverged { home, sweeps: report.sweeps });
                }
            }
        }

        debug!(
            %home,
            stops = frontier.len(),
            sweeps = report.sweeps,
            updated = report.entries_updated,
            "routing tables converged"
        );
        observer.on_converged(home, &report);
        Ok(report)
    }

    /// Add `neighbour` to `home`'s adjacency, seed `home`'s table with the
    /// Manhattan distance to it, then synchronise from `home`.
    ///
    /// Only `home`'s adjacency changes; use [`connect`](Self::connect) for a
    /// two-way link.
    pub fn add_neighbour<T, O>(
        &self,
        topology:  &mut T,
        home:      StopId,
        neighbour: StopId,
        observer:  &mut O,
    ) -> RoutingResult<SyncReport>
    where
        T: Topology + ?Sized,
        O: SyncObserver + ?Sized,
    {
        topology.link(home, neighbour);
        let distance = topology.position(home).manhattan(topology.position(neighbour));
        topology
            .table_mut(home)
            .add_or_update_entry(neighbour, distance, neighbour);
        self.synchronise(topology, home, observer)
    }

    /// `add_neighbour(a, b)` followed by `add_neighbour(b, a)`.
    pub fn connect<T, O>(
        &self,
        topology: &mut T,
        a:        StopId,
        b:        StopId,
        observer: &mut O,
    ) -> RoutingResult<SyncReport>
    where
        T: Topology + ?Sized,
        O: SyncObserver + ?Sized,
    {
        let mut report = self.add_neighbour(topology, a, b, observer)?;
        report += self.add_neighbour(topology, b, a, observer)?;
        Ok(report)
    }
}
