mod cell;
mod coord;
mod generation;
mod patterns;

pub use cell::Cell;
pub use coord::Coord;
pub use generation::Generation;
pub use patterns::{Pattern, PatternError, presets};
