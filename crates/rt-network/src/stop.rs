//! Stops and their value identity.
//!
//! # Text form
//!
//! A stop is written `name:x:y`, e.g. `Alpha:1:2`.  The name may not contain
//! `:`; surrounding whitespace around the coordinates is ignored.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rt_core::{Cost, GridPoint, RtError, StopId};
use rt_routing::RoutingTable;

use crate::{NetworkError, NetworkResult};

const DELIMITER: char = ':';

// ── StopKey ───────────────────────────────────────────────────────────────────

/// What makes a stop *that* stop: its name and grid position.
///
/// Construct with [`StopKey::new`], which normalises the name.  Two keys are
/// equal iff name, x and y all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopKey {
    name:     String,
    position: GridPoint,
}

impl StopKey {
    /// Build a key, stripping carriage returns and line feeds from `name`.
    ///
    /// Fails with [`NetworkError::EmptyName`] if nothing is left, and with
    /// [`NetworkError::DelimiterInName`] if the name contains `:`.
    /// Whitespace-only names are accepted.
    pub fn new(name: impl AsRef<str>, x: i32, y: i32) -> NetworkResult<Self> {
        let name: String = name
            .as_ref()
            .chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .collect();
        if name.is_empty() {
            return Err(NetworkError::EmptyName);
        }
        if name.contains(DELIMITER) {
            return Err(NetworkError::DelimiterInName(name));
        }
        Ok(Self { name, position: GridPoint::new(x, y) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }
}

impl fmt::Display for StopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}{DELIMITER}{}", self.name, self.position.x, self.position.y)
    }
}

impl FromStr for StopKey {
    type Err = NetworkError;

    fn from_str(s: &str) -> NetworkResult<Self> {
        let parts: Vec<&str> = s.split(DELIMITER).collect();
        let [name, x, y] = parts.as_slice() else {
            return Err(RtError::Parse(format!(
                "stop `{s}` has {} parts, expected name{DELIMITER}x{DELIMITER}y",
                parts.len()
            ))
            .into());
        };
        let coord = |part: &str, axis: &str| {
            part.trim().parse::<i32>().map_err(|e| {
                NetworkError::from(RtError::Parse(format!("stop `{s}` has invalid {axis} `{part}`: {e}")))
            })
        };
        StopKey::new(name, coord(*x, "x")?, coord(*y, "y")?)
    }
}

// ── Stop ──────────────────────────────────────────────────────────────────────

/// A stop living in a [`StopNetwork`](crate::StopNetwork): identity,
/// adjacency, and its routing table.
///
/// Equality and hashing use the [`StopKey`] only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    id:         StopId,
    key:        StopKey,
    neighbours: Vec<StopId>,
    table:      RoutingTable,
}

impl Stop {
    pub(crate) fn new(id: StopId, key: StopKey) -> Self {
        Self {
            id,
            key,
            neighbours: Vec::new(),
            table: RoutingTable::new(id),
        }
    }

    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn key(&self) -> &StopKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn position(&self) -> GridPoint {
        self.key.position()
    }

    /// Direct neighbours in the order they were added.
    pub fn neighbours(&self) -> &[StopId] {
        &self.neighbours
    }

    pub fn routing_table(&self) -> &RoutingTable {
        &self.table
    }

    /// Manhattan distance to `other`.
    pub fn distance_to(&self, other: &Stop) -> Cost {
        self.position().manhattan(other.position())
    }

    pub(crate) fn table_mut(&mut self) -> &mut RoutingTable {
        &mut self.table
    }

    /// Returns `false` if `neighbour` is already adjacent.
    pub(crate) fn push_neighbour(&mut self, neighbour: StopId) -> bool {
        if self.neighbours.contains(&neighbour) {
            return false;
        }
        self.neighbours.push(neighbour);
        true
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}
