//! Sparse generation storage and the B3/S23 transition.
//!
//! A generation only stores coordinates it has ever "seen": cells toggled by the
//! user plus every neighbor of a cell that was alive at some step. Dead entries
//! are kept on purpose so a renderer can erase cells that just died. Nothing is
//! ever removed by stepping, so the key set only grows until `clear`.

use std::collections::HashMap;

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, Coord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashMap<Coord, Cell>,
}

impl Generation {
    /// Create an empty generation (nothing tracked, everything dead)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked coordinates, dead or alive
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_alive()).count()
    }

    /// Tracked state at `coord`, `None` if never tracked
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(&coord).copied()
    }

    /// Liveness at `coord`; untracked coordinates are dead
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_alive)
    }

    /// Track `coord` with an explicit state
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells.insert(coord, cell);
    }

    /// Flip liveness at `coord` in place and return the new state.
    /// Untracked coordinates count as dead and become alive; toggling one twice
    /// leaves it tracked as `Dead`, so the map differs from the original only
    /// by that explicit dead entry.
    pub fn toggle(&mut self, coord: Coord) -> Cell {
        let cell = self.cells.entry(coord).or_default();
        *cell = cell.toggle();
        *cell
    }

    /// Pure variant of [`Generation::toggle`]
    pub fn toggled(&self, coord: Coord) -> Self {
        let mut next = self.clone();
        next.toggle(coord);
        next
    }

    /// Iterate over every tracked coordinate with its state
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().map(|(&coord, &cell)| (coord, cell))
    }

    /// Iterate over live coordinates only
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(coord, _)| coord)
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Drop dead entries that have no live neighbor. Returns how many were removed.
    /// Stepping never calls this; callers opt in to compaction explicitly.
    pub fn prune_dead(&mut self) -> usize {
        let before = self.cells.len();
        let orphans: Vec<Coord> = self
            .iter()
            .filter(|&(coord, cell)| !cell.is_alive() && self.live_neighbor_count(coord) == 0)
            .map(|(coord, _)| coord)
            .collect();
        for coord in &orphans {
            self.cells.remove(coord);
        }
        before - self.cells.len()
    }

    /// Live cells among the 8 neighbors of `coord` in this generation
    pub fn live_neighbor_count(&self, coord: Coord) -> u8 {
        coord
            .neighbors()
            .into_iter()
            .filter(|&n| self.is_alive(n))
            .count() as u8
    }

    /// Copy of the current map plus a dead placeholder for every neighbor of a
    /// live cell. Only tracked coordinates can change state in the next step.
    fn expanded(&self) -> HashMap<Coord, Cell> {
        let mut next = self.cells.clone();
        for coord in self.live_cells() {
            for neighbor in coord.neighbors() {
                next.entry(neighbor).or_insert(Cell::Dead);
            }
        }
        next
    }

    /// Next state of a tracked coordinate, read from `self` only
    fn next_cell(&self, coord: Coord) -> Cell {
        let current = self.get(coord).unwrap_or_default();
        current.evolve(self.live_neighbor_count(coord))
    }

    /// Compute the next generation. `self` is the snapshot every cell reads from,
    /// so all cells update simultaneously.
    pub fn step(&self) -> Self {
        let mut cells = self.expanded();
        for (coord, cell) in cells.iter_mut() {
            *cell = self.next_cell(*coord);
        }
        Self { cells }
    }

    /// Same result as [`Generation::step`], evaluated with rayon
    pub fn step_parallel(&self) -> Self {
        let coords: Vec<Coord> = self.expanded().into_keys().collect();
        let cells = coords
            .into_par_iter()
            .map(|coord| (coord, self.next_cell(coord)))
            .collect();
        Self { cells }
    }

    /// Random soup filling a `width` x `height` area starting at `origin`.
    /// Every cell in the area is tracked; `density` is clamped to `[0, 1]`.
    pub fn random_soup<R: Rng>(
        rng: &mut R,
        origin: Coord,
        width: u32,
        height: u32,
        density: f64,
    ) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let mut generation = Self::new();
        for dy in 0..i64::from(height) {
            for dx in 0..i64::from(width) {
                let alive = rng.random_bool(density);
                generation.set(origin.offset(dx, dy), Cell::from(alive));
            }
        }
        generation
    }
}

impl FromIterator<Coord> for Generation {
    /// Build a generation where every given coordinate is alive
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|coord| (coord, Cell::Alive)).collect(),
        }
    }
}
