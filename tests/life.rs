//! Behavior of the engine through the public API

use std::collections::VecDeque;
use std::io;
use terminal_life::rendering::PlainRenderer;
use terminal_life::{
    AliveMarkers, CellState, Clock, Control, EdgePolicy, Grid, GridError, SeedSource, Seeder, Simulation, presets,
    run,
};

fn grid_from(text: &str, rows: usize, cols: usize, edge: EdgePolicy) -> Grid {
    let cells = Seeder::new(rows, cols).from_pattern(text, AliveMarkers::Cross);
    Grid::new(rows, cols, cells, edge).unwrap()
}

#[test]
fn tick_keeps_dimensions_for_any_buffer() {
    for (rows, cols) in [(1, 1), (1, 9), (7, 1), (13, 17)] {
        for edge in [EdgePolicy::Clamped, EdgePolicy::Toroidal] {
            let cells = Seeder::new(rows, cols).from_random(rows as u64 * 31 + cols as u64, 0.5);
            let mut grid = Grid::new(rows, cols, cells, edge).unwrap();
            for _ in 0..4 {
                grid = grid.tick();
                assert_eq!(grid.dimensions(), (rows, cols));
                assert_eq!(grid.cells().len(), rows * cols);
            }
        }
    }
}

#[test]
fn random_seeding_is_reproducible() {
    let a = Seeder::new(40, 60).from_random(2024, 0.2);
    let b = Seeder::new(40, 60).from_random(2024, 0.2);
    assert_eq!(a, b);
    assert_eq!(a.len(), 2400);
}

#[test]
fn pattern_example_places_cells_at_origin() {
    let cells = Seeder::new(2, 3).from_pattern("x \n xx", AliveMarkers::Word);
    let grid = Grid::new(2, 3, cells, EdgePolicy::Clamped).unwrap();
    assert_eq!(grid.live_cells(), vec![(0, 0), (1, 1), (1, 2)]);
}

#[test]
fn block_survives_on_torus() {
    let grid = grid_from("\n\n..xx\n..xx", 8, 8, EdgePolicy::Toroidal);
    assert_eq!(grid.tick(), grid);
    assert_eq!(grid.tick().tick(), grid);
}

#[test]
fn blinker_flips_and_returns() {
    let horizontal = grid_from("\n\n\n..xxx", 7, 7, EdgePolicy::Toroidal);
    let vertical = horizontal.tick();
    assert_eq!(vertical.live_cells(), vec![(2, 3), (3, 3), (4, 3)]);
    assert_eq!(vertical.tick(), horizontal);
}

#[test]
fn glider_wraps_around_torus() {
    let start = grid_from(".x.\n..x\nxxx", 6, 6, EdgePolicy::Toroidal);
    let mut grid = start.clone();
    // Every 4 generations the glider moves one cell down and right;
    // after 24 it has gone all the way round a 6x6 torus.
    for _ in 0..24 {
        grid = grid.tick();
        assert_eq!(grid.population(), 5);
    }
    assert_eq!(grid, start);
}

#[test]
fn glider_dies_against_clamped_corner() {
    let mut grid = grid_from(".x.\n..x\nxxx", 6, 6, EdgePolicy::Clamped);
    for _ in 0..40 {
        grid = grid.tick();
    }
    // It ends as a block stuck in the corner
    assert_eq!(grid.live_cells(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
}

#[test]
fn construction_errors_surface_before_running() {
    assert_eq!(
        Simulation::seeded(0, 0, &SeedSource::random(1, 0.5), EdgePolicy::Clamped).unwrap_err(),
        GridError::InvalidDimensions { rows: 0, cols: 0 }
    );
    assert_eq!(
        Grid::new(3, 3, vec![CellState::Dead; 8], EdgePolicy::Clamped).unwrap_err(),
        GridError::SizeMismatch { expected: 9, actual: 8 }
    );
}

struct Ticks(VecDeque<Control>);

impl Clock for Ticks {
    fn wait_next_frame(&mut self) -> io::Result<Control> {
        Ok(self.0.pop_front().unwrap_or(Control::Quit))
    }
}

#[test]
fn headless_run_prints_each_generation() {
    let pattern = presets::blinker();
    let (rows, cols) = pattern.size();
    let mut sim = Simulation::seeded(rows, cols, &pattern.seed_source(), EdgePolicy::Clamped).unwrap();
    let mut renderer = PlainRenderer::new(Vec::new());
    let mut clock = Ticks(VecDeque::from(vec![Control::Advance; 5]));

    let summary = run(&mut sim, &mut renderer, &mut clock, Some(2)).unwrap();

    assert_eq!(summary.generations, 2);
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.final_population, 3);
    assert!(!summary.quit_by_user);

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    let frames: Vec<Vec<&str>> = text
        .split("\n\n")
        .filter(|f| !f.is_empty())
        .map(|f| f.lines().collect())
        .collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0][0], "generation 0");
    assert_eq!(frames[2][0], "generation 2");
    assert_eq!(frames[0][1..], frames[2][1..]);
    assert_ne!(frames[0][1..], frames[1][1..]);
}
