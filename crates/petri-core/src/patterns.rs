use log::warn;
use petri_params::SeedingConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::grid::{Cell, Grid};

/// A named still life, oscillator, or spaceship, with cells as
/// `[row, col]` offsets from the pattern's top-left origin.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [[i64; 2]],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[[0, 0], [0, 1], [1, 0], [1, 1]],
    },
    Pattern {
        name: "Blinker",
        cells: &[[0, 0], [0, 1], [0, 2]],
    },
    Pattern {
        name: "Toad",
        cells: &[[0, 1], [0, 2], [0, 3], [1, 0], [1, 1], [1, 2]],
    },
    Pattern {
        name: "Beacon",
        cells: &[[0, 0], [0, 1], [1, 0], [1, 1], [2, 2], [2, 3], [3, 2], [3, 3]],
    },
    Pattern {
        name: "Glider",
        cells: &[[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[[0, 1], [0, 2], [1, 0], [1, 1], [2, 1]],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            [0, 2], [0, 3], [0, 4], [0, 8], [0, 9], [0, 10],
            [2, 0], [2, 5], [2, 7], [2, 12],
            [3, 0], [3, 5], [3, 7], [3, 12],
            [4, 0], [4, 5], [4, 7], [4, 12],
            [5, 2], [5, 3], [5, 4], [5, 8], [5, 9], [5, 10],
            // Bottom half (mirrored)
            [7, 2], [7, 3], [7, 4], [7, 8], [7, 9], [7, 10],
            [8, 0], [8, 5], [8, 7], [8, 12],
            [9, 0], [9, 5], [9, 7], [9, 12],
            [10, 0], [10, 5], [10, 7], [10, 12],
            [12, 2], [12, 3], [12, 4], [12, 8], [12, 9], [12, 10],
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            [4, 0], [4, 1], [5, 0], [5, 1],
            [4, 10], [5, 10], [6, 10], [3, 11], [7, 11], [2, 12], [8, 12],
            [2, 13], [8, 13], [5, 14], [3, 15], [7, 15], [4, 16], [5, 16],
            [6, 16], [5, 17], [2, 20], [3, 20], [4, 20], [2, 21], [3, 21],
            [4, 21], [1, 22], [5, 22], [0, 24], [1, 24], [5, 24], [6, 24],
            [2, 34], [3, 34], [2, 35], [3, 35],
        ],
    },
];

/// Look up a preset by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

/// Clear the grid, then stamp `pattern` with its top-left corner at
/// `origin`. Cells landing outside the grid are skipped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, origin: [i64; 2]) {
    grid.clear();
    let mut skipped = 0usize;
    for &[dr, dc] in pattern.cells {
        if grid.set(origin[0] + dr, origin[1] + dc, Cell::Alive).is_err() {
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!(
            "pattern '{}' at {:?} has {} cell(s) outside the {}x{} grid",
            pattern.name,
            origin,
            skipped,
            grid.width(),
            grid.height()
        );
    }
}

/// Seed every cell independently: alive with probability `fill`.
/// The same seed always produces the same grid.
pub fn seed_random(grid: &mut Grid, fill: f64, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let fill = fill.clamp(0.0, 1.0);
    for cell in grid.cells.iter_mut() {
        *cell = if rng.gen_bool(fill) {
            Cell::Alive
        } else {
            Cell::Dead
        };
    }
}

/// Seed the grid as the configuration asks: a named preset stamped at its
/// configured origin, or a random fill.
pub fn seed_from_config(
    grid: &mut Grid,
    seeding: &SeedingConfig,
    seed: u64,
) -> Result<(), SeedError> {
    match &seeding.pattern {
        Some(name) => {
            let pattern = find(name).ok_or_else(|| SeedError::UnknownPattern(name.clone()))?;
            apply_pattern(grid, pattern, seeding.origin);
        }
        None => seed_random(grid, seeding.fill, seed),
    }
    Ok(())
}
