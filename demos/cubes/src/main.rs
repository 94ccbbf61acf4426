//! cubes — terminal driver for the rollgrid engine.
//!
//! Places one cube on every cell of a target layout, then lets the shuffle
//! throttle keep swapping pairs of settled cubes while they roll to their
//! new homes.  The grid is printed as text at every snapshot:
//!
//! | Glyph | Phase    |
//! |-------|----------|
//! | `#`   | settled  |
//! | `o`   | ready    |
//! | `*`   | moving   |
//! | `^`   | landing  |
//!
//! Usage: `cubes [config.toml] [targets.csv]`.  Without arguments the
//! built-in defaults and the bundled "CUBES" layout are used.  Set
//! `RUST_LOG=rg_sim=debug` to see individual shuffle decisions.

mod render;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rg_core::SimConfig;
use rg_layout::{load_targets_csv, load_targets_reader};
use rg_sim::{SimBuilder, SimObserver};
use rg_spatial::AStarRouter;

use render::AsciiRenderer;

const BUNDLED_TARGETS: &str = include_str!("../targets.csv");

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    let targets = match args.next() {
        Some(path) => load_targets_csv(Path::new(&path), &config.bounds)
            .with_context(|| format!("loading targets from {path}"))?,
        None => load_targets_reader(Cursor::new(BUNDLED_TARGETS), &config.bounds)?,
    };

    info!(
        cubes = targets.len(),
        ticks = config.total_ticks,
        seed = config.seed,
        "starting"
    );

    let mut sim = SimBuilder::from_targets(config.clone(), targets, AStarRouter::default()).build()?;
    let mut renderer = AsciiRenderer::new(config.bounds);

    // The driver is the external clock: one tick per frame, with the
    // measured frame time fed back to the shuffle throttle.
    let t0 = Instant::now();
    while sim.clock.current_tick.0 < config.total_ticks {
        let frame = Instant::now();
        sim.run_ticks(1, &mut renderer);
        sim.record_frame_time(frame.elapsed().as_secs_f32() * 1_000.0);
    }
    renderer.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  moves completed : {}", renderer.moves);
    println!("  landings        : {}", renderer.landings);
    println!("  shuffles run    : {}", renderer.shuffles);
    println!("  swaps committed : {}", renderer.swaps);
    println!("  still travelling: {}", sim.agents.unsettled_count());

    anyhow::ensure!(sim.occupancy_is_consistent(), "two cubes ended on the same cell");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = toml::from_str(&content)?;
    Ok(config)
}
