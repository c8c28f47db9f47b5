//! Headless timing of the generation step at several board sizes

use std::time::Instant;

use padded_life::{Config, Grid, advance, init_tracing, presets};
use tracing::info;

const MARGIN: usize = 50;

/// Mean milliseconds per generation over `iterations` steps
fn time_generations(mut grid: Grid, iterations: u32) -> (f64, usize) {
    let start = Instant::now();
    let mut population = 0;
    for _ in 0..iterations {
        population = match advance(&mut grid) {
            Ok(stats) => stats.population,
            Err(err) => {
                tracing::error!(%err, "generation step failed");
                std::process::exit(1);
            }
        };
    }
    (start.elapsed().as_secs_f64() * 1000.0 / iterations as f64, population)
}

fn random_grid(size: usize, fill: f64) -> Option<Grid> {
    let mut grid = Grid::new(size, size, MARGIN).ok()?;
    grid.randomize(fill);
    Some(grid)
}

fn seeded_grid(size: usize) -> Option<Grid> {
    let mut grid = Grid::new(size, size, MARGIN).ok()?;
    let pattern = presets::r_pentomino();
    let (x, y) = pattern.centered_origin(&grid);
    pattern.place_on(&mut grid, x, y).ok()?;
    Some(grid)
}

fn main() {
    init_tracing();
    let fill = Config::default().random_fill;

    println!("=== Generation Step Benchmark (margin {}) ===\n", MARGIN);

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!(
        "{:>12} {:>12} {:>14} {:>14} {:>12}",
        "Visible", "Storage", "Random ms/gen", "Seeded ms/gen", "Mcells/s"
    );
    println!("{:-<68}", "");

    for size in sizes {
        let (Some(random), Some(seeded)) = (random_grid(size, fill), seeded_grid(size)) else {
            continue;
        };
        let cells = random.cell_count();
        let (random_ms, random_pop) = time_generations(random, iterations);
        let (seeded_ms, seeded_pop) = time_generations(seeded, iterations);

        println!(
            "{:>12} {:>12} {:>14.2} {:>14.2} {:>12.1}",
            format!("{}x{}", size, size),
            format!("{}x{}", size + MARGIN, size + MARGIN),
            random_ms,
            seeded_ms,
            cells as f64 / (random_ms / 1000.0) / 1_000_000.0,
        );
        info!(size, random_pop, seeded_pop, "final populations");
    }
}
