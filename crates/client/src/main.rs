//! Headless demo client.
//!
//! Loads the bundled ambush-lane scenario, runs it for a fixed number of
//! ticks, and prints an end-of-run summary. Useful as a smoke test of the
//! whole stack (scenario loading, AI graphs, effect pools) without a
//! renderer attached.

use anyhow::Context;
use starbreak_runtime::Scenario;
use tracing_subscriber::EnvFilter;

/// Bundled demo encounter.
const AMBUSH_LANE: &str = include_str!("../scenarios/ambush_lane.ron");

/// 30 seconds at the default tick rate.
const RUN_TICKS: u64 = 1800;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scenario = Scenario::from_ron(AMBUSH_LANE).context("bundled scenario is malformed")?;
    let mut simulation = scenario
        .build()
        .context("failed to instantiate scenario")?;

    tracing::info!(scenario = %scenario.name, ticks = RUN_TICKS, "starting run");
    simulation.run(RUN_TICKS);

    let stats = simulation.stats();
    println!("── {} ──", scenario.name);
    println!("ticks run:        {}", simulation.current_tick());
    println!("shots fired:      {}", stats.shots_fired);
    println!("ships destroyed:  {}", stats.ships_destroyed);

    println!("pooled effects still active:");
    for (kind, active) in simulation.registry().active_counts() {
        println!("  {kind:<14} {active}");
    }

    println!("survivors:");
    for ship in simulation.world().ships() {
        if ship.is_alive() {
            println!(
                "  {} {} {} hull {}/{} at ({:.1}, {:.1})",
                ship.id,
                ship.faction,
                ship.class,
                ship.hull.current,
                ship.hull.maximum,
                ship.position.x,
                ship.position.y,
            );
        }
    }

    Ok(())
}
