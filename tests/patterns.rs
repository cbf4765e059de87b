use std::collections::BTreeSet;
use std::time::Duration;

use sparse_life::{Coord, Generation, Pattern, SimConfig, Simulation, presets};

fn live(generation: &Generation) -> BTreeSet<Coord> {
    generation.live_cells().collect()
}

fn shifted(cells: &BTreeSet<Coord>, dx: i64, dy: i64) -> BTreeSet<Coord> {
    cells.iter().map(|c| c.offset(dx, dy)).collect()
}

fn run(mut generation: Generation, steps: usize) -> Generation {
    for _ in 0..steps {
        generation = generation.step();
    }
    generation
}

fn placed(pattern: &Pattern, origin: Coord) -> Generation {
    let mut generation = Generation::new();
    pattern.place_on(&mut generation, origin);
    generation
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let start: BTreeSet<Coord> = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        .into_iter()
        .map(Coord::from)
        .collect();
    let generation: Generation = start.iter().copied().collect();

    let after = run(generation, 4);
    let expected: BTreeSet<Coord> = [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]
        .into_iter()
        .map(Coord::from)
        .collect();
    assert_eq!(live(&after), expected);
    assert_eq!(expected, shifted(&start, 1, 1));
}

#[test]
fn glider_keeps_flying_through_negative_space() {
    let glider = presets::glider();
    let origin = Coord::new(-40, -40);
    let start = placed(&glider, origin);
    let after = run(start.clone(), 40);
    assert_eq!(live(&after), shifted(&live(&start), 10, 10));
}

#[test]
fn lightweight_spaceship_moves_two_cells_left() {
    let start = placed(&presets::lwss(), Coord::ORIGIN);
    let after = run(start.clone(), 4);
    assert_eq!(live(&after), shifted(&live(&start), -2, 0));
}

#[test]
fn period_two_oscillators_return() {
    for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
        let start = placed(&pattern, Coord::new(7, -3));
        let once = start.step();
        assert_ne!(live(&once), live(&start), "{} did not change", pattern.name);
        assert_eq!(live(&once.step()), live(&start), "{} not period 2", pattern.name);
    }
}

#[test]
fn block_is_still_and_tracks_its_ring() {
    let start = placed(&presets::block(), Coord::ORIGIN);
    let after = run(start.clone(), 5);
    assert_eq!(live(&after), live(&start));
    // 4 live cells plus the 12-cell dead border
    assert_eq!(after.len(), 16);
}

#[test]
fn tracked_keys_only_grow() {
    let mut generation = placed(&presets::r_pentomino(), Coord::ORIGIN);
    for _ in 0..50 {
        let next = generation.step();
        assert!(generation.iter().all(|(c, _)| next.get(c).is_some()));
        assert!(next.len() >= generation.len());
        generation = next;
    }
}

#[test]
fn rle_glider_runs_like_preset() {
    let parsed = Pattern::from_rle("glider", "x = 3, y = 3\nbo$2bo$3o!").unwrap();
    let from_rle = run(placed(&parsed, Coord::new(5, 5)), 8);
    let from_preset = run(placed(&presets::glider(), Coord::new(5, 5)), 8);
    assert_eq!(live(&from_rle), live(&from_preset));
}

#[test]
fn simulation_drives_glider_on_timer() {
    let config = SimConfig::default();
    let mut sim = Simulation::new(&config);
    assert!(sim.place(&presets::glider(), Coord::ORIGIN));
    let start = live(&sim.generation);

    let mut sim = sim.start();
    // 4 intervals of 60ms, delivered as uneven frames
    for frame in [16, 16, 17, 16, 17, 16, 17, 16, 17, 16, 17, 16, 16, 17, 10] {
        sim.advance(Duration::from_millis(frame));
    }
    assert_eq!(sim.generation_count, 4);
    assert_eq!(live(&sim.generation), shifted(&start, 1, 1));

    // Clicks are ignored until paused again
    assert!(!sim.toggle(Coord::new(100, 100)));
    let mut sim = sim.stop();
    assert!(sim.toggle(Coord::new(100, 100)));
    assert!(sim.generation.is_alive(Coord::new(100, 100)));
}
