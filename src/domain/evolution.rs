//! Selects how a generation is computed.
//!
//! Both strategies produce identical grids; they differ only in whether the
//! cells of the next generation are computed on one thread or on the rayon
//! pool.

use super::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Evolution {
    /// Row-major scan on the calling thread
    #[default]
    Serial,
    /// Cells computed in parallel with rayon
    Parallel,
}

impl Evolution {
    pub fn all() -> Vec<Evolution> {
        vec![Evolution::Serial, Evolution::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Evolution::Serial => "serial",
            Evolution::Parallel => "parallel",
        }
    }

    /// Short description for logs and the benchmark table
    pub fn description(&self) -> &'static str {
        match self {
            Evolution::Serial => "row-major scan, single thread",
            Evolution::Parallel => "per-cell rayon map into a fresh buffer",
        }
    }

    /// Produce the next generation of `grid`
    pub fn advance(self, grid: &Grid) -> Grid {
        match self {
            Evolution::Serial => grid.tick(),
            Evolution::Parallel => grid.tick_parallel(),
        }
    }
}
