//! A single routing-table entry.

use rt_core::{Cost, StopId, INFINITE};

/// Best known route to one destination: the next stop to visit and the
/// total cost of getting there through it.
///
/// `next` is `None` exactly when `cost` is [`INFINITE`]; the constructors
/// are the only way to build an entry, so the two fields always agree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingEntry {
    next: Option<StopId>,
    cost: Cost,
}

impl RoutingEntry {
    /// "No known route".
    pub const UNREACHABLE: RoutingEntry = RoutingEntry { next: None, cost: INFINITE };

    #[inline]
    pub fn unreachable() -> Self {
        Self::UNREACHABLE
    }

    /// Build an entry routing via `next` at `cost`.
    ///
    /// A missing `next`, a negative `cost`, or a cost that does not fit
    /// below [`INFINITE`] all yield [`RoutingEntry::UNREACHABLE`] instead.
    pub fn new<C: TryInto<Cost>>(next: Option<StopId>, cost: C) -> Self {
        let cost = cost.try_into().ok().filter(|&c| c < INFINITE);
        match (next, cost) {
            (Some(next), Some(cost)) => Self { next: Some(next), cost },
            _ => Self::UNREACHABLE,
        }
    }

    /// Next stop toward the destination, or `None` if unreachable.
    #[inline]
    pub fn next(&self) -> Option<StopId> {
        self.next
    }

    /// Total cost, or [`INFINITE`] if unreachable.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.next.is_some()
    }
}

impl Default for RoutingEntry {
    fn default() -> Self {
        Self::UNREACHABLE
    }
}
