use crate::domain::{CellState, EdgePolicy, Evolution, Grid, SeedSource, Seeder};
use crate::error::GridError;
use tracing::{debug, trace};

/// Simulation orchestrates the automaton.
/// It owns the current generation and replaces it wholesale on every tick.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    evolution: Evolution,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            edge = grid.edge_policy().name(),
            population = grid.population(),
            "simulation created"
        );
        Self {
            grid,
            generation: 0,
            evolution: Evolution::default(),
        }
    }

    /// Seed a fresh grid and wrap it
    pub fn seeded(
        rows: usize,
        cols: usize,
        source: &SeedSource,
        edge: EdgePolicy,
    ) -> Result<Self, GridError> {
        Grid::cell_count(rows, cols)?;
        let cells = Seeder::new(rows, cols).seed(source);
        Grid::new(rows, cols, cells, edge).map(Self::new)
    }

    /// Pick the tick strategy (builder pattern)
    pub fn with_evolution(mut self, evolution: Evolution) -> Self {
        self.evolution = evolution;
        self
    }

    pub const fn evolution(&self) -> Evolution {
        self.evolution
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        self.grid = self.evolution.advance(&self.grid);
        self.generation += 1;
        trace!(generation = self.generation, "tick");
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            generation: self.generation,
        }
    }
}

/// What a renderer sees of one generation.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
    generation: u64,
}

impl Snapshot<'_> {
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// State of an in-bounds cell; out-of-range coordinates read as dead
    pub fn cell_at(&self, row: usize, col: usize) -> CellState {
        if row < self.rows() && col < self.cols() {
            self.grid.cells()[row * self.cols() + col]
        } else {
            CellState::Dead
        }
    }

    /// One row of cells, left to right; `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[CellState]> {
        self.row_slices().nth(row)
    }

    /// Every row in order, top to bottom
    pub fn row_slices(&self) -> std::slice::Chunks<'_, CellState> {
        self.grid.cells().chunks(self.cols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Simulation {
        Simulation::seeded(5, 5, &SeedSource::pattern("\n\n xxx"), EdgePolicy::Clamped).unwrap()
    }

    #[test]
    fn test_seeded_rejects_empty_grid() {
        let err = Simulation::seeded(0, 4, &SeedSource::random(1, 0.5), EdgePolicy::Toroidal).unwrap_err();
        assert_eq!(err, GridError::InvalidDimensions { rows: 0, cols: 4 });
    }

    #[test]
    fn test_tick_increments_generation() {
        let mut sim = blinker();
        assert_eq!(sim.generation(), 0);
        sim.tick();
        sim.tick();
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_snapshot_follows_ticks() {
        let mut sim = blinker();
        assert_eq!(sim.snapshot().cell_at(2, 1), CellState::Alive);
        assert_eq!(sim.snapshot().cell_at(1, 2), CellState::Dead);

        sim.tick();
        let snap = sim.snapshot();
        assert_eq!(snap.generation(), 1);
        assert_eq!(snap.population(), 3);
        assert_eq!(snap.cell_at(1, 2), CellState::Alive);
        assert_eq!(snap.cell_at(2, 1), CellState::Dead);
        assert_eq!(snap.cell_at(9, 9), CellState::Dead);
    }

    #[test]
    fn test_snapshot_rows() {
        let sim = blinker();
        let snap = sim.snapshot();
        assert_eq!((snap.rows(), snap.cols()), (5, 5));
        assert_eq!(
            snap.row(2),
            Some(&[CellState::Dead, CellState::Alive, CellState::Alive, CellState::Alive, CellState::Dead][..])
        );
        assert_eq!(snap.row_slices().count(), 5);
    }

    #[test]
    fn test_snapshot_row_out_of_range_is_none() {
        let sim = blinker();
        let snap = sim.snapshot();
        assert!(snap.row(4).is_some());
        assert_eq!(snap.row(5), None);
        assert_eq!(snap.row(usize::MAX), None);
    }

    #[test]
    fn test_seeded_rejects_overflowing_size() {
        let rows = usize::MAX / 2 + 1;
        let err = Simulation::seeded(rows, 2, &SeedSource::random(1, 0.5), EdgePolicy::Clamped).unwrap_err();
        assert_eq!(err, GridError::TooLarge { rows, cols: 2 });
    }

    #[test]
    fn test_parallel_evolution_matches_serial() {
        let source = SeedSource::random(11, 0.4);
        let mut serial = Simulation::seeded(30, 40, &source, EdgePolicy::Toroidal).unwrap();
        let mut parallel = serial.clone().with_evolution(Evolution::Parallel);
        for _ in 0..5 {
            serial.tick();
            parallel.tick();
        }
        assert_eq!(serial.grid(), parallel.grid());
        assert_eq!(parallel.evolution(), Evolution::Parallel);
    }
}
