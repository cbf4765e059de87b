use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::application::SimConfig;
use crate::domain::{Coord, Generation, Pattern};

/// Most generations a single `advance` call will run to catch up
pub const MAX_CATCH_UP_STEPS: u32 = 4;

/// Whether generations are currently being advanced by the timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// How `Generation::step` is evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stepper {
    #[default]
    Serial,
    Parallel,
}

impl Stepper {
    pub fn name(&self) -> &'static str {
        match self {
            Stepper::Serial => "Serial",
            Stepper::Parallel => "Rayon",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Stepper::Serial => Stepper::Parallel,
            Stepper::Parallel => Stepper::Serial,
        }
    }
}

/// Simulation owns the current generation and the Paused/Running state machine.
/// The timer path (`advance`) and the edit path (`toggle`, `place`, `randomize`)
/// never overlap: edits are refused while running.
pub struct Simulation {
    pub generation: Generation,
    pub state: RunState,
    pub stepper: Stepper,
    /// Number of steps since the last reset
    pub generation_count: u64,
    pub tick_interval: Duration,
    pub last_step_time_ms: f32,
    elapsed: Duration,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            generation: Generation::new(),
            state: RunState::Paused,
            stepper: Stepper::default(),
            generation_count: 0,
            tick_interval: config.tick_interval,
            last_step_time_ms: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Paused -> Running
    pub fn start(mut self) -> Self {
        if !self.is_running() {
            info!("simulation started at generation {}", self.generation_count);
            self.state = RunState::Running;
            self.elapsed = Duration::ZERO;
        }
        self
    }

    /// Running -> Paused
    pub fn stop(mut self) -> Self {
        if self.is_running() {
            info!("simulation stopped at generation {}", self.generation_count);
            self.state = RunState::Paused;
        }
        self
    }

    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.stop() } else { self.start() }
    }

    /// Forget every cell, rewind the counter and pause
    pub fn reset(mut self) -> Self {
        info!("simulation reset ({} tracked cells dropped)", self.generation.len());
        self.generation.clear();
        self.generation_count = 0;
        self.state = RunState::Paused;
        self.elapsed = Duration::ZERO;
        self
    }

    /// Switch between serial and rayon stepping
    pub fn toggle_stepper(mut self) -> Self {
        self.stepper = self.stepper.other();
        info!("stepper: {}", self.stepper.name());
        self
    }

    /// Flip one cell. Ignored while running; returns whether the flip happened.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.is_running() {
            debug!("toggle at {coord:?} ignored while running");
            return false;
        }
        let cell = self.generation.toggle(coord);
        debug!("toggled {coord:?} -> {cell:?}");
        true
    }

    /// Stamp a pattern with its top-left corner at `origin`. Paused only.
    pub fn place(&mut self, pattern: &Pattern, origin: Coord) -> bool {
        if self.is_running() {
            return false;
        }
        pattern.place_on(&mut self.generation, origin);
        info!("placed {} at {origin:?}", pattern.name);
        true
    }

    /// Replace the generation with a random soup. Paused only.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, origin: Coord, width: u32, height: u32, density: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.generation = Generation::random_soup(rng, origin, width, height, density);
        self.generation_count = 0;
        info!(
            "random soup {width}x{height} at {origin:?}: {} live",
            self.generation.population()
        );
        true
    }

    /// Advance exactly one generation, whatever the run state
    pub fn tick(&mut self) {
        let start = Instant::now();
        self.generation = match self.stepper {
            Stepper::Serial => self.generation.step(),
            Stepper::Parallel => self.generation.step_parallel(),
        };
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation_count += 1;
        debug!(
            "generation {}: {} live / {} tracked in {:.2}ms",
            self.generation_count,
            self.generation.population(),
            self.generation.len(),
            self.last_step_time_ms
        );
    }

    /// Feed wall-clock time while running; steps once per elapsed interval,
    /// at most [`MAX_CATCH_UP_STEPS`] per call. Time beyond the cap is dropped.
    /// Returns the number of generations advanced.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        let mut steps = 0;
        while self.elapsed >= self.tick_interval {
            if steps == MAX_CATCH_UP_STEPS {
                debug!("dropping {:?} of backlog after a slow frame", self.elapsed);
                self.elapsed = Duration::ZERO;
                break;
            }
            self.elapsed -= self.tick_interval;
            self.tick();
            steps += 1;
        }
        steps
    }
}
