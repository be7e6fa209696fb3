//! The Westeros stop network.
//!
//! Fourteen stops on a coarse grid joined by six lines.  Braavos has no line
//! and stays unreachable from everywhere else.

use rt_core::StopId;
use rt_network::{NetworkResult, StopNetwork};

/// `(name, x, y)` for every stop, in insertion order.
pub const STOPS: [(&str, i32, i32); 14] = [
    ("Castle Black",         0,  14),
    ("Winterfell",           0,  13),
    ("Harrenhal",            0,   3),
    ("Kings Landing",        0,   0),
    ("Kingswood",            0,  -1),
    ("Highgarden",           0,  -4),
    ("Horn Hill",            0,  -5),
    ("Dragonstone",          3,   3),
    ("Storms End",           3,   0),
    ("Riverrun",            -1,   3),
    ("Casterly Rock",       -4,   0),
    ("Lannisport",          -4,  -1),
    ("Eastwatch-by-the-Sea", 1,  14),
    ("Braavos",              8,   8),
];

/// Lines as sequences of stop names; consecutive stops are linked both ways.
pub const LINES: [(&str, &[&str]); 6] = [
    ("Kingsroad",  &["Castle Black", "Winterfell", "Harrenhal", "Kings Landing"]),
    ("Gold Road",  &["Casterly Rock", "Kings Landing", "Storms End"]),
    ("Roseroad",   &["Kings Landing", "Kingswood", "Highgarden", "Horn Hill"]),
    ("River Road", &["Lannisport", "Casterly Rock", "Riverrun", "Harrenhal"]),
    ("Narrow Sea", &["Winterfell", "Dragonstone", "Kings Landing"]),
    ("The Wall",   &["Castle Black", "Eastwatch-by-the-Sea"]),
];

/// Build the network, linking lines in the order listed.
pub fn build_network(net: &mut StopNetwork) -> NetworkResult<()> {
    for (name, x, y) in STOPS {
        net.add_stop(name, x, y)?;
    }
    for (line, names) in LINES {
        let ids: Vec<StopId> = names
            .iter()
            .map(|name| find(net, name))
            .collect::<NetworkResult<_>>()?;
        let report = net.link_line(&ids)?;
        tracing::info!(
            line,
            stops = ids.len(),
            sweeps = report.sweeps,
            updated = report.entries_updated,
            "line linked"
        );
    }
    Ok(())
}

/// Look a stop up by name alone.
pub fn find(net: &StopNetwork, name: &str) -> NetworkResult<StopId> {
    let (_, x, y) = STOPS
        .iter()
        .copied()
        .find(|(n, _, _)| *n == name)
        .ok_or_else(|| rt_core::RtError::Config(format!("no stop named `{name}`")))?;
    let key = rt_network::StopKey::new(name, x, y)?;
    net.resolve(&key)
        .ok_or_else(|| rt_core::RtError::Config(format!("stop `{key}` not in network")).into())
}
