mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{SimConfig, Simulation};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Gap kept between a narrow window's edge and the grid area
pub const GRID_MARGIN: f32 = 24.0;

/// X position where the side panel starts
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the grid area, capped by the configured maximum
pub fn grid_area_width(config: &SimConfig) -> f32 {
    config.grid_width_for(screen_width() - PANEL_WIDTH, GRID_MARGIN)
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons for the current simulation state.
/// Edit buttons are disabled while running.
pub fn create_buttons(sim: &Simulation, pattern_name: &str) -> Vec<Button> {
    let px = panel_x() + 10.0;
    let w = PANEL_WIDTH - 20.0;
    let paused = !sim.is_running();
    let start_stop = if paused { "Start" } else { "Stop" };
    vec![
        Button::new(px, 20.0, w, BUTTON_HEIGHT, start_stop, ButtonAction::StartStop),
        Button::new(px, 66.0, w, BUTTON_HEIGHT, "Step", ButtonAction::Step).enabled(paused),
        Button::new(px, 112.0, w, BUTTON_HEIGHT, "Reset", ButtonAction::Reset),
        Button::new(px, 158.0, w, BUTTON_HEIGHT, "Random", ButtonAction::Random).enabled(paused),
        Button::new(px, 204.0, w, BUTTON_HEIGHT, pattern_name, ButtonAction::NextPattern).enabled(paused),
    ]
}
