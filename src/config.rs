//! Command line configuration.
//!
//! Everything here resolves user input into the values the engine is built
//! from: grid size, edge policy, seed source, frame period and evolution
//! strategy.

use crate::domain::{AliveMarkers, EdgePolicy, Evolution, SeedSource, presets};
use crate::error::{Error, Result};
use crate::rendering::Palette;
use clap::{Parser, ValueEnum};
use crossterm::style::Color;
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Used when the terminal size cannot be read
pub const FALLBACK_SIZE: (usize, usize) = (24, 80);

#[derive(Parser, Debug, Clone)]
#[command(name = "terminal_life")]
#[command(version)]
#[command(about = "Conway's Game of Life, drawn in the terminal")]
pub struct Config {
    /// Grid rows [default: terminal height, minus the status line]
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns [default: terminal width]
    #[arg(long)]
    pub cols: Option<usize>,

    /// Frames per second
    #[arg(long, default_value_t = 100.0, value_parser = parse_fps)]
    pub fps: f64,

    /// What happens at the border of the grid
    #[arg(long, value_enum, default_value_t = EdgeArg::Clamped)]
    pub edge: EdgeArg,

    /// Read the initial generation from a text file
    #[arg(short, long, conflicts_with = "preset")]
    pub pattern: Option<PathBuf>,

    /// Start from a built-in pattern (see --list-presets)
    #[arg(long)]
    pub preset: Option<String>,

    /// Characters in a pattern file that mark live cells
    #[arg(long, value_enum, default_value_t = MarkerArg::Word)]
    pub markers: MarkerArg,

    /// Random seeding with this seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random seeding with a fresh seed
    #[arg(long)]
    pub random: bool,

    /// Chance of a cell starting alive when seeding randomly
    #[arg(long, default_value_t = 0.01, value_parser = parse_probability)]
    pub probability: f64,

    /// Compute generations on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Stop after this many generations
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Print plain text frames instead of driving the terminal
    #[arg(long)]
    pub headless: bool,

    /// Hide the status line
    #[arg(long)]
    pub no_status: bool,

    /// Color of live cells
    #[arg(long, value_enum, default_value_t = ColorArg::Red)]
    pub color: ColorArg,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List the built-in patterns and exit
    #[arg(long)]
    pub list_presets: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    Clamped,
    Toroidal,
}

impl From<EdgeArg> for EdgePolicy {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Clamped => EdgePolicy::Clamped,
            EdgeArg::Toroidal => EdgePolicy::Toroidal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MarkerArg {
    Word,
    Cross,
    NonBlank,
}

impl From<MarkerArg> for AliveMarkers {
    fn from(arg: MarkerArg) -> Self {
        match arg {
            MarkerArg::Word => AliveMarkers::Word,
            MarkerArg::Cross => AliveMarkers::Cross,
            MarkerArg::NonBlank => AliveMarkers::NonBlank,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Red => Color::DarkRed,
            ColorArg::Green => Color::DarkGreen,
            ColorArg::Blue => Color::DarkBlue,
            ColorArg::Yellow => Color::DarkYellow,
            ColorArg::Magenta => Color::DarkMagenta,
            ColorArg::Cyan => Color::DarkCyan,
            ColorArg::White => Color::Grey,
        }
    }
}

fn parse_fps(s: &str) -> std::result::Result<f64, String> {
    let fps: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(format!("frame rate must be a positive number, got {s}"))
    }
}

fn parse_probability(s: &str) -> std::result::Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("probability must be within 0..=1, got {s}"))
    }
}

impl Config {
    pub fn show_status(&self) -> bool {
        !self.no_status && !self.headless
    }

    /// Grid size as (rows, cols). Missing values come from the terminal
    /// size, leaving room for the status line.
    pub fn dimensions(&self, terminal: Option<(usize, usize)>) -> (usize, usize) {
        let (term_rows, term_cols) = terminal.unwrap_or_else(|| {
            if self.rows.is_none() || self.cols.is_none() {
                warn!(rows = FALLBACK_SIZE.0, cols = FALLBACK_SIZE.1, "terminal size unknown, using fallback");
            }
            FALLBACK_SIZE
        });
        let reserved = usize::from(self.show_status());

        (
            self.rows.unwrap_or(term_rows.saturating_sub(reserved)),
            self.cols.unwrap_or(term_cols),
        )
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge.into()
    }

    pub fn evolution(&self) -> Evolution {
        if self.parallel { Evolution::Parallel } else { Evolution::Serial }
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            alive: self.color.into(),
            ..Palette::default()
        }
    }

    /// Pick the seed source: pattern file, then preset, then random, then the
    /// default two-glider scene.
    pub fn seed_source(&self) -> Result<SeedSource> {
        if let Some(path) = &self.pattern {
            let text = fs::read_to_string(path).map_err(|source| Error::PatternFile {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "seeding from pattern file");
            return Ok(SeedSource::Pattern { text, markers: self.markers.into() });
        }

        if let Some(name) = &self.preset {
            let pattern = presets::find(name).ok_or_else(|| Error::UnknownPreset(name.clone()))?;
            info!(preset = pattern.name, "seeding from preset");
            return Ok(pattern.seed_source());
        }

        if self.seed.is_some() || self.random {
            let seed = self.seed.unwrap_or_else(|| rand::rng().random());
            info!(seed, probability = self.probability, "seeding randomly");
            return Ok(SeedSource::random(seed, self.probability));
        }

        Ok(presets::gliders().seed_source())
    }
}
