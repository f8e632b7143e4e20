//! Shared parameter types for petri Game of Life experiments
//!
//! This crate contains the configuration structures used by both the engine
//! and the headless runner to ensure consistency and prevent parameter drift.

/// World configuration parameters
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    pub size: [u32; 2], // [width, height] in cells
    pub steps: u32,     // generations to run
    pub seed: u64,      // RNG seed for random seeding
}

/// Initial grid seeding
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedingConfig {
    pub pattern: Option<String>, // preset name; None seeds randomly
    pub origin: [i64; 2],        // top-left cell of a stamped pattern
    pub fill: f64,               // live probability for random seeding
}

/// Runner output configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputConfig {
    pub metrics_interval: u32,    // write a metrics row every N generations
    pub snapshot_steps: Vec<u32>, // generations to snapshot as PNG and CSV
    pub cell_px: u32,             // snapshot scale, pixels per cell
}

/// Early-stop behavior
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub stop_on_extinction: bool,
    pub stop_on_cycle: bool,
}

/// Complete simulation configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub world: WorldConfig,
    pub seeding: SeedingConfig,
    pub output: OutputConfig,
    pub run: RunConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                size: [64, 64],
                steps: 500,
                seed: 1337,
            },
            seeding: SeedingConfig {
                pattern: None,
                origin: [0, 0],
                fill: 0.33,
            },
            output: OutputConfig {
                metrics_interval: 10,
                snapshot_steps: vec![0, 100, 500],
                cell_px: 4,
            },
            run: RunConfig {
                stop_on_extinction: true,
                stop_on_cycle: true,
            },
        }
    }
}
