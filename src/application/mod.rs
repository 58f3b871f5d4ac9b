mod simulation;
mod frame;
mod runner;

pub use simulation::{Simulation, Snapshot};
pub use frame::{Clock, Control, FixedRateClock, FrameDeadline, Renderer};
pub use runner::{RunSummary, run};
