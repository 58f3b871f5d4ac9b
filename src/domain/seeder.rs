//! Initial cell buffers, either parsed from pattern text or sampled from a
//! seeded random generator.
//!
//! Both strategies always yield exactly `rows * cols` cells in row-major
//! order; seeding never fails. A size whose cell count overflows `usize`
//! yields an empty buffer, which `Grid::new` rejects.

use super::CellState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Which pattern characters mark a live cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AliveMarkers {
    /// ASCII letters, digits and underscore
    #[default]
    Word,
    /// Only `x` and `X`
    Cross,
    /// Any character that is not whitespace
    NonBlank,
}

impl AliveMarkers {
    /// Map one pattern character to a cell state. Unrecognized input is dead.
    pub fn state_of(self, ch: char) -> CellState {
        let alive = match self {
            AliveMarkers::Word => ch.is_ascii_alphanumeric() || ch == '_',
            AliveMarkers::Cross => matches!(ch, 'x' | 'X'),
            AliveMarkers::NonBlank => !ch.is_whitespace(),
        };
        CellState::from(alive)
    }
}

/// Where the initial generation comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedSource {
    Pattern { text: String, markers: AliveMarkers },
    Random { seed: u64, probability: f64 },
}

impl SeedSource {
    pub fn pattern(text: impl Into<String>) -> Self {
        SeedSource::Pattern { text: text.into(), markers: AliveMarkers::default() }
    }

    pub fn random(seed: u64, probability: f64) -> Self {
        SeedSource::Random { seed, probability }
    }
}

/// Produces initial buffers for a fixed target size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seeder {
    rows: usize,
    cols: usize,
}

impl Seeder {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn seed(&self, source: &SeedSource) -> Vec<CellState> {
        match source {
            SeedSource::Pattern { text, markers } => self.from_pattern(text, *markers),
            SeedSource::Random { seed, probability } => self.from_random(*seed, *probability),
        }
    }

    /// Overlay pattern text at the origin. Short lines, missing lines and
    /// anything past the pattern's extent are dead; characters past the
    /// target size are ignored.
    pub fn from_pattern(&self, text: &str, markers: AliveMarkers) -> Vec<CellState> {
        if self.cell_count().is_none() {
            return Vec::new();
        }
        let cols = self.cols;
        let mut lines = text.lines();

        (0..self.rows)
            .flat_map(|_| {
                let mut chars = lines.next().unwrap_or("").chars();
                (0..cols).map(move |_| chars.next().map_or(CellState::Dead, |ch| markers.state_of(ch)))
            })
            .collect()
    }

    /// One uniform draw per cell in row-major order; a cell is alive when its
    /// draw falls below `probability`. Probabilities outside [0, 1] are
    /// clamped, NaN counts as 0.
    pub fn from_random(&self, seed: u64, probability: f64) -> Vec<CellState> {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        (0..self.cell_count().unwrap_or(0))
            .map(|_| CellState::from(rng.random::<f64>() < probability))
            .collect()
    }
}
