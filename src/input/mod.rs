use macroquad::prelude::*;

use crate::application::{Camera, SimConfig, Simulation};
use crate::domain::{Coord, Pattern, presets};
use crate::ui::{Button, ButtonAction, grid_area_height, grid_area_width};

/// Preset cycling and pending placement
pub struct PatternPicker {
    patterns: Vec<Pattern>,
    selected: usize,
    /// Next click on the grid stamps the selected pattern instead of toggling
    pub placing: bool,
}

impl PatternPicker {
    pub fn new() -> Self {
        Self {
            patterns: presets::all_patterns(),
            selected: 0,
            placing: false,
        }
    }

    pub fn selected(&self) -> &Pattern {
        &self.patterns[self.selected]
    }

    /// Select the next preset and arm placement
    pub fn next(&mut self) {
        if self.placing {
            self.selected = (self.selected + 1) % self.patterns.len();
        }
        self.placing = true;
    }
}

impl Default for PatternPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Pan with middle mouse drag; `last` remembers the previous drag position
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32), last: &mut Option<(f32, f32)>) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some((lx, ly)) = *last {
            camera.pan(mouse_pos.0 - lx, mouse_pos.1 - ly);
        }
        *last = Some(mouse_pos);
    } else {
        *last = None;
    }
}

fn in_grid_area(config: &SimConfig, mouse_pos: (f32, f32)) -> bool {
    mouse_pos.0 >= 0.0 && mouse_pos.0 < grid_area_width(config) && mouse_pos.1 >= 0.0
}

/// Left release on the grid: stamp the pending pattern, or toggle one cell.
/// Both are ignored while running.
pub fn handle_grid_click(
    sim: &mut Simulation,
    picker: &mut PatternPicker,
    camera: &Camera,
    config: &SimConfig,
    mouse_pos: (f32, f32),
) {
    if picker.placing && (is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape)) {
        picker.placing = false;
        return;
    }
    if !is_mouse_button_released(MouseButton::Left) || !in_grid_area(config, mouse_pos) {
        return;
    }

    let coord = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, config.cell_size);
    if picker.placing {
        let pattern = picker.selected();
        if sim.place(pattern, pattern.centered_at(coord)) {
            picker.placing = false;
        }
    } else {
        sim.toggle(coord);
    }
}

/// Fill the visible grid area with a random soup
fn randomize_visible(mut sim: Simulation, camera: &Camera, config: &SimConfig) -> Simulation {
    let (min, max) = camera.visible_cells(grid_area_width(config), grid_area_height(), config.cell_size);
    let width = u32::try_from(max.x - min.x + 1).unwrap_or(0);
    let height = u32::try_from(max.y - min.y + 1).unwrap_or(0);
    sim.randomize(&mut ::rand::rng(), min, width, height, config.soup_density);
    sim
}

/// Single step, only meaningful while paused
fn step_once(mut sim: Simulation) -> Simulation {
    if !sim.is_running() {
        sim.tick();
    }
    sim
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    sim: Simulation,
    camera: &mut Camera,
    picker: &mut PatternPicker,
    config: &SimConfig,
) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::reset),
        (KeyCode::N, step_once),
        (KeyCode::S, Simulation::toggle_stepper),
    ];

    let mut sim = actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        sim = randomize_visible(sim, camera, config);
    }
    if is_key_pressed(KeyCode::P) && !sim.is_running() {
        picker.next();
    }
    // Home
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    sim
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    camera: &Camera,
    picker: &mut PatternPicker,
    config: &SimConfig,
) -> Simulation {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(sim, |s, btn| match btn.action {
            ButtonAction::StartStop => s.toggle_running(),
            ButtonAction::Step => step_once(s),
            ButtonAction::Reset => s.reset(),
            ButtonAction::Random => randomize_visible(s, camera, config),
            ButtonAction::NextPattern => {
                picker.next();
                s
            }
        })
}

/// Origin where the pending pattern would land for the current cursor
pub fn placement_origin(picker: &PatternPicker, camera: &Camera, config: &SimConfig, mouse_pos: (f32, f32)) -> Coord {
    let coord = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, config.cell_size);
    picker.selected().centered_at(coord)
}
