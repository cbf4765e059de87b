mod camera;
mod config;
mod simulation;

pub use camera::Camera;
pub use config::{ConfigError, SimConfig};
pub use simulation::{RunState, Simulation, Stepper};
