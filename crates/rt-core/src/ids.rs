//! Stop identifier.

use std::fmt;

/// Position of a stop in its network's arena, assigned sequentially from 0.
///
/// Ids are only meaningful for the network that issued them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopId(pub u32);

impl StopId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

/// Fails once an arena outgrows `u32`.
impl TryFrom<usize> for StopId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(StopId)
    }
}
