mod session;

pub use session::{TerminalSession, terminal_size};

use crate::application::{Renderer, Snapshot};
use crate::domain::CellState;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use std::io::{self, Write};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Background colors for the two cell states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color::DarkRed,
            dead: Color::Reset,
        }
    }
}

impl Palette {
    pub fn color(&self, cell: CellState) -> Color {
        match cell {
            CellState::Alive => self.alive,
            CellState::Dead => self.dead,
        }
    }
}

/// Draws every cell as one colored blank, row by row, with an optional
/// status line under the grid.
pub struct TerminalRenderer<W: Write> {
    out: W,
    palette: Palette,
    show_status: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            palette: Palette::default(),
            show_status: true,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn status_line(&self, snapshot: &Snapshot<'_>) -> String {
        format!(
            "gen {}  pop {}  {}x{}  [space] pause/resume  [q] quit",
            snapshot.generation(),
            format_number(snapshot.population()),
            snapshot.rows(),
            snapshot.cols(),
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        // Rows past the terminal's u16 coordinate range are never visible
        for (row, cells) in snapshot.row_slices().enumerate() {
            let Ok(y) = u16::try_from(row) else { break };
            queue!(self.out, cursor::MoveTo(0, y))?;
            // One color change per run of equal cells
            for run in cells.chunk_by(|a, b| a == b) {
                queue!(
                    self.out,
                    SetBackgroundColor(self.palette.color(run[0])),
                    Print(" ".repeat(run.len()))
                )?;
            }
            queue!(self.out, ResetColor)?;
        }

        let status_row = u16::try_from(snapshot.rows()).ok().filter(|_| self.show_status);
        if let Some(y) = status_row {
            let status = self.status_line(snapshot);
            queue!(
                self.out,
                cursor::MoveTo(0, y),
                ResetColor,
                Print(status),
                Clear(ClearType::UntilNewLine)
            )?;
        }

        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

/// Writes frames as plain text, `#` for live cells and `.` for dead ones.
/// Used when no interactive terminal is wanted.
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        writeln!(self.out, "generation {}", snapshot.generation())?;
        for cells in snapshot.row_slices() {
            let line: String = cells
                .iter()
                .map(|cell| if cell.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Simulation;
    use crate::domain::{EdgePolicy, SeedSource};

    fn blinker() -> Simulation {
        Simulation::seeded(3, 4, &SeedSource::pattern("\nxxx"), EdgePolicy::Clamped).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_plain_renderer_output() {
        let mut sim = blinker();
        let mut renderer = PlainRenderer::new(Vec::new());
        renderer.draw(&sim.snapshot()).unwrap();
        sim.tick();
        renderer.draw(&sim.snapshot()).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            text,
            "generation 0\n....\n###.\n....\n\ngeneration 1\n.#..\n.#..\n.#..\n\n"
        );
    }

    #[test]
    fn test_terminal_renderer_emits_one_blank_per_cell() {
        let sim = blinker();
        let mut renderer = TerminalRenderer::new(Vec::new()).with_status(false);
        renderer.draw(&sim.snapshot()).unwrap();

        let bytes = renderer.into_inner();
        assert_eq!(bytes.iter().filter(|&&b| b == b' ').count(), 12);
        assert!(bytes.starts_with(b"\x1b["));
    }

    #[test]
    fn test_status_line_mentions_generation_and_population() {
        let mut sim = blinker();
        sim.tick();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&sim.snapshot()).unwrap();

        let text = String::from_utf8_lossy(&renderer.into_inner()).into_owned();
        assert!(text.contains("gen 1  pop 3  3x4  [space] pause/resume"));
    }

    #[test]
    fn test_terminal_renderer_stops_at_last_addressable_row() {
        let rows = usize::from(u16::MAX) + 10;
        let sim = Simulation::seeded(rows, 1, &SeedSource::pattern(""), EdgePolicy::Clamped).unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&sim.snapshot()).unwrap();

        // One blank per row 0..=65535; the status line would need row 65545
        let bytes = renderer.into_inner();
        assert_eq!(bytes.iter().filter(|&&b| b == b' ').count(), usize::from(u16::MAX) + 1);
        assert!(!String::from_utf8_lossy(&bytes).contains("gen 0"));
    }

    #[test]
    fn test_palette_maps_states() {
        let palette = Palette::default();
        assert_eq!(palette.color(CellState::Alive), Color::DarkRed);
        assert_eq!(palette.color(CellState::Dead), Color::Reset);
    }
}
