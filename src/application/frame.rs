//! Seams between the simulation and the outside world: something that draws
//! snapshots and something that paces frames.

use super::Snapshot;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Draws one snapshot per frame
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

/// What the driver should do after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Tick, then draw the next generation
    Advance,
    /// Redraw without ticking
    Hold,
    /// Stop the loop
    Quit,
}

/// Paces the loop; blocks until the next frame is due
pub trait Clock {
    fn wait_next_frame(&mut self) -> io::Result<Control>;
}

/// Deadline bookkeeping shared by clocks.
/// Deadlines advance by one period; if the loop falls behind, the next
/// deadline is measured from now instead of trying to catch up.
#[derive(Clone, Copy, Debug)]
pub struct FrameDeadline {
    period: Duration,
    next: Instant,
}

impl FrameDeadline {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the current deadline
    pub fn remaining(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Move on to the following frame
    pub fn advance(&mut self) {
        let now = Instant::now();
        self.next = if self.next + self.period < now {
            now + self.period
        } else {
            self.next + self.period
        };
    }
}

/// Sleeps until each deadline and always advances
#[derive(Clone, Copy, Debug)]
pub struct FixedRateClock {
    deadline: FrameDeadline,
}

impl FixedRateClock {
    pub fn new(period: Duration) -> Self {
        Self {
            deadline: FrameDeadline::new(period),
        }
    }

    pub fn from_fps(fps: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / fps))
    }
}

impl Clock for FixedRateClock {
    fn wait_next_frame(&mut self) -> io::Result<Control> {
        thread::sleep(self.deadline.remaining());
        self.deadline.advance();
        Ok(Control::Advance)
    }
}
