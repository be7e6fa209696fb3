//! Flat row view of every routing table in a network.

/// One routing-table entry: at stop `from`, destination `to` costs `cost`
/// and is reached by going to `next` first.
///
/// All stop fields are raw `StopId` values.  Only reachable entries are ever
/// stored, so `cost` is never `INFINITE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRow {
    pub from: u32,
    pub to:   u32,
    pub cost: u64,
    pub next: u32,
}
