//! Per-stop routing table.
//!
//! # Relaxation
//!
//! [`RoutingTable::add_or_update_entry`] is the only mutator.  It installs an
//! entry for an unknown destination and otherwise overwrites only on a
//! *strictly* lower cost, so every entry's cost is non-increasing for the
//! lifetime of the table and the home self-entry (cost 0) can never be
//! displaced.

use std::collections::BTreeMap;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use rt_core::{Cost, StopId, INFINITE};

use crate::RoutingEntry;

/// Destination → [`RoutingEntry`] map owned by a single home stop.
///
/// Destinations are keyed by [`StopId`].  Stop arenas intern stops by value
/// (name + position), so id equality is stop equality.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingTable {
    home:    StopId,
    entries: FxHashMap<StopId, RoutingEntry>,
}

impl RoutingTable {
    /// Create the table for `home`, seeded with the self-entry
    /// `home → (next: home, cost: 0)`.
    pub fn new(home: StopId) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(home, RoutingEntry::new(Some(home), 0));
        Self { home, entries }
    }

    /// The stop this table routes for.
    #[inline]
    pub fn home(&self) -> StopId {
        self.home
    }

    /// Number of known destinations (always ≥ 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the self-entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cost to `destination`, or [`INFINITE`] if it is unknown.
    pub fn cost_to(&self, destination: StopId) -> Cost {
        self.entries
            .get(&destination)
            .map_or(INFINITE, RoutingEntry::cost)
    }

    /// Snapshot of every known destination and its cost.
    ///
    /// The map is an owned copy; changing it has no effect on the table.
    pub fn costs(&self) -> BTreeMap<StopId, Cost> {
        self.entries
            .iter()
            .map(|(&dest, entry)| (dest, entry.cost()))
            .collect()
    }

    /// Stored next hop toward `destination`, or `None` if it is unknown.
    pub fn next_hop(&self, destination: StopId) -> Option<StopId> {
        self.entries.get(&destination).and_then(RoutingEntry::next)
    }

    /// The full entry for `destination`, if known.
    pub fn entry(&self, destination: StopId) -> Option<&RoutingEntry> {
        self.entries.get(&destination)
    }

    /// Known destinations in ascending id order.
    pub fn destinations(&self) -> Vec<StopId> {
        let mut dests: Vec<StopId> = self.entries.keys().copied().collect();
        dests.sort_unstable();
        dests
    }

    /// Iterator over `(destination, entry)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, &RoutingEntry)> + '_ {
        self.entries.iter().map(|(&dest, entry)| (dest, entry))
    }

    /// Relax the entry for `destination` with a route via `intermediate`
    /// costing `new_cost`.
    ///
    /// - unknown destination → install `(intermediate, new_cost)`;
    /// - known, `new_cost` strictly lower → overwrite;
    /// - otherwise → untouched.
    ///
    /// Returns `true` iff the table changed.  A `new_cost` of [`INFINITE`]
    /// describes no route at all and is never installed.
    pub fn add_or_update_entry(
        &mut self,
        destination:  StopId,
        new_cost:     Cost,
        intermediate: StopId,
    ) -> bool {
        let candidate = RoutingEntry::new(Some(intermediate), new_cost);
        if !candidate.is_reachable() {
            return false;
        }
        match self.entries.entry(destination) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
                true
            }
            Entry::Occupied(mut slot) => {
                if new_cost < slot.get().cost() {
                    slot.insert(candidate);
                    true
                } else {
                    false
                }
            }
        }
    }
}
