use super::{CellState, EdgePolicy};
use crate::error::GridError;
use rayon::prelude::*;

/// Relative positions of the eight surrounding cells, row-major.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid owns the cell states of one generation.
/// It is never mutated: `tick` builds the next generation into fresh storage,
/// so every neighbor count reads the previous generation only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    edge: EdgePolicy,
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a grid from a row-major buffer of exactly `rows * cols` cells.
    pub fn new(
        rows: usize,
        cols: usize,
        cells: Vec<CellState>,
        edge: EdgePolicy,
    ) -> Result<Self, GridError> {
        let expected = Self::cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch { expected, actual: cells.len() });
        }
        Ok(Self { rows, cols, edge, cells })
    }

    /// Number of cells a `rows` x `cols` grid holds, if it can exist at all
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    /// Row-major view of the whole buffer
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// State at a signed coordinate, resolved through the edge policy.
    /// Positions that do not exist (clamped, out of range) read as dead.
    pub fn cell_at(&self, row: isize, col: isize) -> CellState {
        self.edge
            .resolve(row, col, self.rows, self.cols)
            .map_or(CellState::Dead, |(r, c)| self.cells[self.index(r, c)])
    }

    /// In-bounds positions that count as neighbors of (row, col).
    /// Always 8 on a torus; fewer along clamped edges.
    pub fn neighbor_positions(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            self.edge
                .resolve(row as isize + dr, col as isize + dc, self.rows, self.cols)
        })
    }

    /// Count live neighbors of an in-bounds cell
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbor_positions(row, col)
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    fn next_state(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)].evolve(self.live_neighbors(row, col))
    }

    /// Compute the next generation (serial, row-major scan)
    pub fn tick(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col))
            .collect();

        Self { cells, ..*self }
    }

    /// Same result as `tick`, with cells computed on the rayon pool.
    /// Reads go to `self` only, writes to the new buffer only.
    pub fn tick_parallel(&self) -> Self {
        let cols = self.cols;
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_state(idx / cols, idx % cols))
            .collect();

        Self { cells, ..*self }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
