//! Serial vs rayon stepping over random soups of growing size

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::{Coord, Generation};

fn soup(side: u32) -> Generation {
    let mut rng = StdRng::seed_from_u64(u64::from(side));
    Generation::random_soup(&mut rng, Coord::new(-(i64::from(side) / 2), -(i64::from(side) / 2)), side, side, 0.3)
}

fn time_steps(start: &Generation, iterations: u32, step: fn(&Generation) -> Generation) -> (f64, Generation) {
    let mut generation = start.clone();
    let begin = Instant::now();
    for _ in 0..iterations {
        generation = step(&generation);
    }
    (begin.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations), generation)
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let sides = [16, 32, 64, 128, 256];
    let iterations = 20;

    println!("{:>8} {:>10} {:>10} {:>12} {:>12} {:>9}",
        "Side", "Live", "Tracked", "Serial ms", "Rayon ms", "Speedup");
    println!("{:-<66}", "");

    for side in sides {
        let start = soup(side);
        let (serial_ms, serial_end) = time_steps(&start, iterations, Generation::step);
        let (parallel_ms, parallel_end) = time_steps(&start, iterations, Generation::step_parallel);
        assert_eq!(serial_end, parallel_end, "serial and rayon diverged at side {side}");

        println!(
            "{:>8} {:>10} {:>10} {:>12.2} {:>12.2} {:>8.1}x",
            format!("{side}x{side}"),
            serial_end.population(),
            serial_end.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }
}
