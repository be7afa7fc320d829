//! europe: drive the household/venue epidemic over a map of Europe.
//!
//! Every house is relabelled as a country (48 of them with the stock
//! config), agents wander between home and the countries their border
//! policy allows, and the disease spreads wherever a sick agent shares a
//! venue.  Per-tick counts go to `tick_summaries.csv`; periodic agent
//! snapshots to `agent_snapshots.csv`.
//!
//! ```text
//! RUST_LOG=debug cargo run -p europe -- --config demos/europe/config.json --ticks 500
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use epi_core::{BorderPolicy, SimConfig, VenueId};
use epi_graph::{EuropeLayout, NodeKey};
use epi_output::{CsvWriter, HealthCounts, SimOutputObserver};
use epi_sim::SimBuilder;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Household/venue epidemic over a map of Europe")]
struct Args {
    /// JSON config file (camelCase fields); defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ticks to run.
    #[arg(short, long, default_value_t = 200)]
    ticks: u64,

    /// Output directory for the CSV files.
    #[arg(short, long, default_value = "output/europe")]
    output: PathBuf,

    /// Write agent snapshots every N ticks (0 disables them).
    #[arg(long, default_value_t = 10)]
    snapshot_every: u64,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    houses: Option<u32>,

    #[arg(long)]
    agents_per_house: Option<u32>,

    #[arg(long)]
    sick: Option<u32>,

    /// 0 = closed, 1 = partial, 2 = open.
    #[arg(long)]
    borders: Option<u8>,

    /// Mask wear percentage, 0..=100.
    #[arg(long)]
    masks: Option<u8>,

    /// Venue ids to quarantine before the first tick.
    #[arg(long, value_delimiter = ',')]
    quarantine: Vec<u32>,
}

impl Args {
    fn load_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(houses) = self.houses {
            config.houses = houses;
        }
        if let Some(n) = self.agents_per_house {
            config.agents_per_house = n;
        }
        if let Some(sick) = self.sick {
            config.initial_sick_agents = sick;
        }
        if let Some(level) = self.borders {
            config.closed_borders = BorderPolicy::try_from(level)?;
        }
        if let Some(masks) = self.masks {
            config.mask_wear_percentage = masks;
        }
        Ok(config)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.load_config()?;
    println!("=== europe: household/venue epidemic ===");
    println!(
        "Houses: {}  |  Agents/house: {}  |  Sick: {}  |  Borders: {}  |  Masks: {}%  |  Seed: {}",
        config.houses,
        config.agents_per_house,
        config.initial_sick_agents,
        config.closed_borders,
        config.mask_wear_percentage,
        config.seed,
    );

    // 1. Build sim.
    let mut sim = SimBuilder::new(config).layout(EuropeLayout::default()).build()?;
    for id in &args.quarantine {
        let venue = VenueId(*id);
        match sim.toggle_lock(NodeKey::Venue(venue)) {
            Some(_) => {
                let label = sim.graph().venue(venue).map(|v| v.kind.to_string()).unwrap_or_default();
                log::info!("quarantined {venue} ({label})");
            }
            None => log::warn!("no venue {venue}; quarantine ignored"),
        }
    }

    // 2. Set up output.
    let writer = CsvWriter::new(&args.output)
        .with_context(|| format!("creating output in {}", args.output.display()))?;
    let mut obs = SimOutputObserver::new(writer).snapshot_every(args.snapshot_every);
    obs.record_initial(sim.graph());

    // 3. Run.
    let t0 = Instant::now();
    sim.run_ticks(args.ticks, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let start = obs.history().first().copied().unwrap_or_default();
    let end = HealthCounts::tally(sim.graph());
    let (peak_tick, peak) = obs
        .history()
        .iter()
        .enumerate()
        .max_by_key(|(_, c)| c.sick)
        .map(|(t, c)| (t, c.sick))
        .unwrap_or_default();

    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), sim.tick().0);
    println!("  start : {start}");
    println!("  end   : {end}");
    println!("  peak  : {peak} sick at tick {peak_tick}");
    println!("  output: {}", args.output.display());
    println!();

    // 5. Where everyone is.
    println!("{:<8} {:<10} {:>6} {:>6}", "Venue", "Kind", "Agents", "Sick");
    println!("{}", "-".repeat(34));
    for venue in sim.graph().venues() {
        let here = sim.graph().occupants(venue.id);
        if here.is_empty() {
            continue;
        }
        let sick = HealthCounts::from_agents(here.iter().filter_map(|&a| sim.graph().agent(a))).sick;
        println!(
            "{:<8} {:<10} {:>6} {:>6}",
            venue.label(),
            format!("{}{}", venue.kind, if venue.locked { "*" } else { "" }),
            here.len(),
            sick,
        );
    }

    Ok(())
}
