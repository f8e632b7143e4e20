use crate::grid::{Cell, Grid};

/// Offsets of the Moore neighborhood: the 8 positions around a cell.
pub const NEIGHBOR_OFFSETS: [[i64; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// The 8 neighbor positions of `(row, col)`.
///
/// Positions may fall outside any particular grid; they are not filtered
/// here, [`Grid::get`] resolves them to dead.
pub fn neighbor_positions(row: i64, col: i64) -> [[i64; 2]; 8] {
    NEIGHBOR_OFFSETS.map(|[dr, dc]| [row + dr, col + dc])
}

impl Grid {
    /// Living cells among the 8 Moore neighbors of `(row, col)`.
    pub fn count_living_neighbors(&self, row: i64, col: i64) -> u8 {
        neighbor_positions(row, col)
            .iter()
            .filter(|&&[r, c]| self.get(r, c).is_alive())
            .count() as u8
    }

    /// The Conway rule for a single cell: exactly 3 living neighbors means
    /// alive, exactly 2 keeps the current state, anything else dies.
    pub fn next_cell_state(&self, row: i64, col: i64) -> Cell {
        match self.count_living_neighbors(row, col) {
            3 => Cell::Alive,
            2 => self.get(row, col),
            _ => Cell::Dead,
        }
    }

    /// Advance one generation, returning a grid of identical dimensions.
    ///
    /// The next generation is built into fresh storage while `self` stays
    /// untouched, so every cell is derived from the same snapshot. An
    /// in-place update would let late cells observe already-updated
    /// neighbors.
    pub fn step(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..i64::from(self.height()) {
            for col in 0..i64::from(self.width()) {
                cells.push(self.next_cell_state(row, col));
            }
        }
        Grid {
            size: self.size,
            cells,
        }
    }
}
