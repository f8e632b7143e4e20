use std::collections::hash_map::DefaultHasher;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::Duration;

use csv::Writer;
use petri_core::{Grid, GridStats};

/// Metrics writer for CSV output and performance logging
pub struct MetricsWriter {
    csv_writer: Writer<File>,
    rows_written: u32,
}

impl MetricsWriter {
    /// Create a new metrics writer
    pub fn new(output_dir: &Path) -> Result<Self, anyhow::Error> {
        let csv_path = output_dir.join("metrics.csv");
        let file = File::create(csv_path)?;

        let mut csv_writer = Writer::from_writer(file);
        csv_writer.write_record([
            "step",
            "population",
            "births",
            "deaths",
            "density",
            "wall_time_ms",
            "fps_proxy",
        ])?;

        Ok(Self {
            csv_writer,
            rows_written: 0,
        })
    }

    /// Write metrics for a single generation
    pub fn write_step(
        &mut self,
        step: u32,
        stats: &GridStats,
        step_time: Duration,
    ) -> Result<(), anyhow::Error> {
        let wall_time_ms = step_time.as_secs_f64() * 1000.0;
        let fps_proxy = if wall_time_ms > 0.0 {
            1000.0 / wall_time_ms
        } else {
            0.0
        };

        self.csv_writer.write_record([
            step.to_string(),
            stats.population.to_string(),
            stats.births.to_string(),
            stats.deaths.to_string(),
            stats.density.to_string(),
            wall_time_ms.to_string(),
            fps_proxy.to_string(),
        ])?;

        self.csv_writer.flush()?;
        self.rows_written += 1;

        Ok(())
    }

    /// Number of metrics rows written so far
    pub fn rows_written(&self) -> u32 {
        self.rows_written
    }
}

/// Detects repeating configurations from a short history of grid hashes.
///
/// Still lifes and short-period oscillators revisit a configuration within
/// a few generations. A 64-bit hash collision can stop a run spuriously,
/// which is acceptable for an experiment runner.
pub struct CycleDetector {
    history: [u64; CYCLE_WINDOW],
    seen: usize,
}

/// Generations of hash history kept for cycle detection
const CYCLE_WINDOW: usize = 10;

impl CycleDetector {
    pub fn new() -> Self {
        Self {
            history: [0; CYCLE_WINDOW],
            seen: 0,
        }
    }

    /// Record the grid's configuration; true if it matches one of the
    /// previous `CYCLE_WINDOW` generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let tracked = self.seen.min(CYCLE_WINDOW);
        if self.history[..tracked].contains(&hash) {
            return true;
        }
        self.history[self.seen % CYCLE_WINDOW] = hash;
        self.seen += 1;
        false
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.size().hash(&mut hasher);
    grid.cells().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::patterns::{apply_pattern, find};

    #[test]
    fn blinker_cycles_within_window() {
        let mut grid = Grid::new([5, 5]);
        apply_pattern(&mut grid, find("blinker").unwrap(), [2, 1]);

        let mut detector = CycleDetector::new();
        let mut fired = false;
        for _ in 0..5 {
            if detector.observe(&grid) {
                fired = true;
                break;
            }
            grid = grid.step();
        }
        assert!(fired, "blinker revisits its configuration every two steps");
    }

    #[test]
    fn distinct_configurations_do_not_fire() {
        let mut grid = Grid::new([8, 8]);
        apply_pattern(&mut grid, find("glider").unwrap(), [0, 0]);

        let mut detector = CycleDetector::new();
        for _ in 0..4 {
            assert!(!detector.observe(&grid));
            grid = grid.step();
        }
    }
}
