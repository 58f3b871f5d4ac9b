//! Compare serial and parallel ticks over a range of grid sizes

use std::time::Instant;
use terminal_life::{EdgePolicy, Evolution, Grid, Seeder};

fn random_grid(size: usize) -> Grid {
    let cells = Seeder::new(size, size).from_random(42, 0.3);
    Grid::new(size, size, cells, EdgePolicy::Toroidal).expect("benchmark grid is non-empty")
}

/// Milliseconds per generation
fn benchmark(evolution: Evolution, size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolution.advance(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Tick Benchmark ===\n");

    let sizes = [25, 50, 100, 200, 400, 800];
    let iterations = 50;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Evolution::Serial, size, iterations);
        let parallel_ms = benchmark(Evolution::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!();
    for evolution in Evolution::all() {
        println!("{:<10} {}", evolution.name(), evolution.description());
    }
}
