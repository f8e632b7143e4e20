mod metrics;
mod snapshots;

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use metrics::{CycleDetector, MetricsWriter};
use petri_core::patterns;
use petri_core::{Grid, GridStats, SimulationConfig};
use snapshots::SnapshotWriter;

#[derive(Parser)]
#[command(name = "petri-headless")]
#[command(about = "Headless CLI runner for petri Game of Life experiments")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Output directory for results
    #[arg(short, long, value_name = "DIR")]
    out: PathBuf,

    /// Enable strict mode (snapshot write failures abort the run)
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let cli = Cli::parse();

    // Load configuration
    println!("Loading configuration from {}", cli.config.display());
    let config: SimulationConfig = serde_yaml::from_str(&std::fs::read_to_string(&cli.config)?)?;

    // Validate configuration
    let [w, h] = config.world.size;
    if w == 0 || h == 0 {
        anyhow::bail!("World size {}x{} has no cells.", w, h);
    }
    if config.world.steps == 0 {
        anyhow::bail!("Step count must be greater than 0.");
    }
    if !(0.0..=1.0).contains(&config.seeding.fill) {
        anyhow::bail!(
            "Seeding fill must be within [0, 1], got {}.",
            config.seeding.fill
        );
    }
    if config.output.metrics_interval == 0 {
        anyhow::bail!("Metrics interval must be greater than 0.");
    }

    // Create output directory
    std::fs::create_dir_all(&cli.out)?;

    // Seed the grid
    let mut grid = Grid::new(config.world.size);
    match &config.seeding.pattern {
        Some(name) => println!("Seeding {}x{} grid with pattern '{}'...", w, h, name),
        None => println!(
            "Seeding {}x{} grid randomly at fill {}...",
            w, h, config.seeding.fill
        ),
    }
    patterns::seed_from_config(&mut grid, &config.seeding, config.world.seed)?;

    let mut metrics_writer = MetricsWriter::new(&cli.out)?;
    let snapshot_writer = SnapshotWriter::new(&cli.out, config.output.cell_px);
    let mut cycle_detector = CycleDetector::new();

    // Main simulation loop
    println!("Starting simulation for {} generations...", config.world.steps);
    let start_time = Instant::now();

    for step in 0..=config.world.steps {
        let step_start = Instant::now();

        // Generation 0 is the seed itself
        let stats = if step == 0 {
            GridStats::of(&grid)
        } else {
            let next = grid.step();
            let stats = GridStats::from_transition(&grid, &next);
            grid = next;
            stats
        };
        let step_time = step_start.elapsed();

        if step % config.output.metrics_interval == 0 {
            metrics_writer.write_step(step, &stats, step_time)?;
            println!(
                "Generation {}: population={}, births={}, deaths={}, time={:?}",
                step, stats.population, stats.births, stats.deaths, step_time
            );
        }

        if config.output.snapshot_steps.contains(&step) {
            let result = snapshot_writer
                .write_grid_snapshot(step, &grid)
                .and_then(|_| snapshot_writer.write_cells_snapshot(step, &grid));
            match result {
                Ok(()) => println!("Snapshot written for generation {}", step),
                Err(err) if cli.strict => return Err(err),
                Err(err) => log::warn!("snapshot for generation {} failed: {}", step, err),
            }
        }

        if config.run.stop_on_extinction && stats.population == 0 {
            println!("Grid went extinct at generation {}", step);
            break;
        }

        if config.run.stop_on_cycle && cycle_detector.observe(&grid) {
            println!("Cycle detected at generation {}; stopping", step);
            break;
        }
    }

    let total_time = start_time.elapsed();
    println!("Simulation completed in {:?}", total_time);
    println!(
        "Wrote {} metrics rows and results to {}",
        metrics_writer.rows_written(),
        cli.out.display()
    );

    Ok(())
}
