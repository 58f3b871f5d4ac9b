// Domain layer - the automaton itself
pub mod domain;

// Application layer - simulation and frame loop
pub mod application;

// Infrastructure layer - terminal output, keyboard, command line
pub mod rendering;
pub mod input;
pub mod config;

pub mod error;

// Re-exports for convenience
pub use domain::{AliveMarkers, CellState, EdgePolicy, Evolution, Grid, Pattern, SeedSource, Seeder, presets};
pub use application::{Clock, Control, FixedRateClock, Renderer, RunSummary, Simulation, Snapshot, run};
pub use config::Config;
pub use error::{Error, GridError, Result};
