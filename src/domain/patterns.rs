use super::{AliveMarkers, SeedSource};

/// A named pattern, written as text with `x` for live cells and `.` for dead ones.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

impl Pattern {
    pub const fn new(name: &'static str, description: &'static str, text: &'static str) -> Self {
        Self { name, description, text }
    }

    /// Extent of the pattern as (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        let rows = self.text.lines().count();
        let cols = self.text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        (rows, cols)
    }

    pub fn seed_source(&self) -> SeedSource {
        SeedSource::Pattern { text: self.text.to_owned(), markers: AliveMarkers::Cross }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Two gliders, the scene shown when nothing else is asked for
    pub fn gliders() -> Pattern {
        Pattern::new(
            "gliders",
            "Two gliders (default scene)",
            "\n\
             \n\
             ...........x\n\
             ............x\n\
             ..........xxx\n\
             \n\
             \n\
             ..................x\n\
             .................x\n\
             .................xxx\n",
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            ".x.\n\
             ..x\n\
             xxx\n",
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            ".....\n\
             .....\n\
             .xxx.\n\
             .....\n\
             .....\n",
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            "......\n\
             ......\n\
             ..xxx.\n\
             .xxx..\n\
             ......\n\
             ......\n",
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            "......\n\
             .xx...\n\
             .x....\n\
             ....x.\n\
             ...xx.\n\
             ......\n",
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "pulsar",
            "Oscillator (period 3)",
            "...............\n\
             ...xxx...xxx...\n\
             ...............\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             ...xxx...xxx...\n\
             ...............\n\
             ...xxx...xxx...\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             ...............\n\
             ...xxx...xxx...\n\
             ...............\n",
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight spaceship (period 4)",
            "........\n\
             ..x..x..\n\
             .x......\n\
             .x...x..\n\
             .xxxx...\n\
             ........\n",
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah - stabilizes at gen 1103",
            ".xx\n\
             xx.\n\
             .x.\n",
        )
    }

    /// Acorn - small methuselah
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            ".x.....\n\
             ...x...\n\
             xx..xxx\n",
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            "....\n\
             .xx.\n\
             .xx.\n\
             ....\n",
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            gliders(),
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
