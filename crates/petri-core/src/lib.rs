//! Petri Core Engine
//!
//! Core engine for Conway's Game of Life: the cell grid, the step rule,
//! pattern seeding, and per-generation statistics.

pub mod grid;
pub mod life;
pub mod patterns;
pub mod stats;

// Re-export main types
pub use grid::{Cell, Grid, GridError};
pub use life::{neighbor_positions, NEIGHBOR_OFFSETS};
pub use patterns::{Pattern, SeedError, PATTERNS};
pub use stats::GridStats;

// Re-export params from petri-params
pub use petri_params::*;
