mod cell;
mod edge;
mod grid;
mod seeder;
mod patterns;
mod evolution;

pub use cell::CellState;
pub use edge::EdgePolicy;
pub use grid::Grid;
pub use seeder::{AliveMarkers, SeedSource, Seeder};
pub use patterns::{Pattern, presets};
pub use evolution::Evolution;
