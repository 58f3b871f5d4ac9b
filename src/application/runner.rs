use super::{Clock, Control, Renderer, Simulation};
use crate::error::Result;
use tracing::{debug, info};

/// How a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generation shown on the last frame
    pub generations: u64,
    /// Frames drawn, including repeated frames while paused
    pub frames: u64,
    pub final_population: usize,
    /// True when the clock asked to stop, false when the limit was reached
    pub quit_by_user: bool,
}

/// Drive the simulation: draw, stop once `limit` generations have been
/// computed, wait for the clock, then tick (or hold) and repeat.
pub fn run<R, C>(
    sim: &mut Simulation,
    renderer: &mut R,
    clock: &mut C,
    limit: Option<u64>,
) -> Result<RunSummary>
where
    R: Renderer + ?Sized,
    C: Clock + ?Sized,
{
    info!(limit, evolution = sim.evolution().name(), "starting simulation loop");

    let mut frames = 0;
    let quit_by_user = loop {
        renderer.draw(&sim.snapshot())?;
        frames += 1;

        if limit.is_some_and(|max| sim.generation() >= max) {
            break false;
        }

        match clock.wait_next_frame()? {
            Control::Advance => sim.tick(),
            Control::Hold => {}
            Control::Quit => {
                debug!(generation = sim.generation(), "quit requested");
                break true;
            }
        }
    };

    let summary = RunSummary {
        generations: sim.generation(),
        frames,
        final_population: sim.grid().population(),
        quit_by_user,
    };
    info!(
        generations = summary.generations,
        frames = summary.frames,
        population = summary.final_population,
        "simulation loop finished"
    );
    Ok(summary)
}
