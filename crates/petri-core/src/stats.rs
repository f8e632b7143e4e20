use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Statistics for one generation, optionally relative to its predecessor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridStats {
    pub population: u32,
    pub births: u32,
    pub deaths: u32,
    pub density: f32,
}

impl GridStats {
    /// Stats of a single grid with no predecessor; births and deaths are
    /// zero.
    pub fn of(grid: &Grid) -> Self {
        let population = grid.population();
        Self {
            population,
            births: 0,
            deaths: 0,
            density: density(population, grid),
        }
    }

    /// Stats of `next` relative to the grid it was stepped from.
    pub fn from_transition(prev: &Grid, next: &Grid) -> Self {
        let mut population = 0;
        let mut births = 0;
        let mut deaths = 0;
        for (before, after) in prev.cells().iter().zip(next.cells()) {
            match (before.is_alive(), after.is_alive()) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
            if after.is_alive() {
                population += 1;
            }
        }
        Self {
            population,
            births,
            deaths,
            density: density(population, next),
        }
    }
}

fn density(population: u32, grid: &Grid) -> f32 {
    let cells = grid.cells().len();
    if cells == 0 {
        0.0
    } else {
        population as f32 / cells as f32
    }
}
