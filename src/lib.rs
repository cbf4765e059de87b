// Domain layer - sparse generation and the B3/S23 transition
pub mod domain;

// Application layer - simulation driver, camera, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, Generation, Pattern, PatternError, presets};
pub use application::{Camera, ConfigError, RunState, SimConfig, Simulation, Stepper};
pub use ui::Button;
