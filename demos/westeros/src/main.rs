//! westeros — distance-vector routing over a small fictional stop network.
//!
//! Builds the network line by line, letting every link resynchronise the
//! routing tables, then prints the converged table of one stop and
//! demonstrates how a new shortcut propagates.

mod export;
mod network;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rt_core::StopId;
use rt_core::cost::is_finite;
use rt_network::StopNetwork;
use rt_routing::{SyncConfig, SyncObserver, SyncReport};

/// Converge and print the Westeros routing tables.
#[derive(Parser, Debug)]
#[command(name = "westeros", version, about = "Distance-vector routing demo")]
struct Args {
    /// Synchronisation config (JSON).  Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the default config as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Stop whose routing table is printed.
    #[arg(long, default_value = "Kings Landing")]
    from: String,

    /// Write `routes.csv` into this directory.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs each sweep of a synchronisation run.
struct SweepLogger;

impl SyncObserver for SweepLogger {
    fn on_sweep_end(&mut self, home: StopId, sweep: u32, changed: usize) {
        tracing::debug!(%home, sweep, changed, "sweep finished");
    }

    fn on_converged(&mut self, home: StopId, report: &SyncReport) {
        tracing::info!(
            %home,
            sweeps = report.sweeps,
            transfers = report.transfers,
            effective = report.effective_transfers,
            "converged"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&SyncConfig::default())?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SyncConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SyncConfig::default(),
    };

    println!("=== westeros — distance-vector routing ===");
    println!("Sweep limit: {:?}", config.max_sweeps);
    println!();

    // 1. Build and converge.
    let mut net = StopNetwork::with_config(config);
    network::build_network(&mut net)?;
    println!(
        "Network: {} stops, {} lines",
        net.len(),
        network::LINES.len()
    );

    // 2. Routing table of the chosen stop.
    let from = network::find(&net, &args.from)?;
    print_table(&net, from)?;

    // 3. A one-way shortcut and how far it spreads.
    let lannisport = network::find(&net, "Lannisport")?;
    let highgarden = network::find(&net, "Highgarden")?;
    let horn_hill = network::find(&net, "Horn Hill")?;
    let before = net.cost_between(horn_hill, lannisport)?;
    let report = net.add_neighbour_with(lannisport, highgarden, &mut SweepLogger)?;
    println!();
    println!(
        "Shortcut Lannisport → Highgarden: {} sweeps, {} effective transfers",
        report.sweeps, report.effective_transfers
    );
    println!(
        "Horn Hill → Lannisport: {before} before, {} after (via {})",
        net.cost_between(horn_hill, lannisport)?,
        hop_name(&net, net.next_hop(horn_hill, lannisport)?)
    );

    // 4. Export.
    if let Some(dir) = &args.export {
        let rows = export::write_routes(&net, dir)?;
        println!();
        println!("Wrote {rows} routes to {}", dir.join("routes.csv").display());
    }

    Ok(())
}

fn print_table(net: &StopNetwork, from: StopId) -> Result<()> {
    let table = net.routing_table(from)?;
    println!();
    println!("Routing table of {}:", net.stop(from)?.key());
    println!("  {:<22} {:>5}  {}", "destination", "cost", "next");
    for stop in net.stops() {
        let cost = table.cost_to(stop.id());
        if is_finite(cost) {
            println!(
                "  {:<22} {:>5}  {}",
                stop.name(),
                cost,
                hop_name(net, table.next_hop(stop.id()))
            );
        } else {
            println!("  {:<22} {:>5}  -", stop.name(), "∞");
        }
    }
    Ok(())
}

fn hop_name(net: &StopNetwork, hop: Option<StopId>) -> &str {
    hop.and_then(|id| net.get(id)).map_or("-", |stop| stop.name())
}
