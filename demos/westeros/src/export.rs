//! CSV export of a network's routing tables.
//!
//! Writes `routes.csv` with one row per table entry, stop names resolved.

use std::path::Path;

use anyhow::Result;
use csv::Writer;

use rt_network::StopNetwork;

/// Write every routing entry of `net` to `dir/routes.csv`; returns the row count.
pub fn write_routes(net: &StopNetwork, dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(dir)?;
    let mut out = Writer::from_path(dir.join("routes.csv"))?;
    out.write_record(["from", "to", "cost", "next"])?;

    let stops = net.stops();
    let name = |raw: u32| stops[raw as usize].name();

    let rows = net.routing_snapshot();
    for row in &rows {
        let cost = row.cost.to_string();
        out.write_record([name(row.from), name(row.to), cost.as_str(), name(row.next)])?;
    }
    out.flush()?;
    Ok(rows.len())
}
