//! Route cost arithmetic.
//!
//! Costs are non-negative integers.  `INFINITE` (`u64::MAX`) is reserved to
//! mean "no known route" and is never produced by a successful addition:
//! [`add`] saturates *to* `INFINITE`, so an overflowing candidate can never
//! win a strict-less-than comparison against a real cost.

/// Integer route cost (sum of Manhattan edge weights).
///
/// Wide enough to hold the distance between any two `i32` grid points
/// exactly, and sums of billions of such edges.
pub type Cost = u64;

/// Sentinel cost meaning "no known route".
pub const INFINITE: Cost = Cost::MAX;

/// Saturating cost addition.  `INFINITE` is absorbing.
#[inline]
pub fn add(a: Cost, b: Cost) -> Cost {
    a.saturating_add(b)
}

/// `true` if `cost` denotes a real route.
#[inline]
pub fn is_finite(cost: Cost) -> bool {
    cost != INFINITE
}
