use std::time::Duration;

use log::{error, info};
use macroquad::prelude::*;
use sparse_life::{
    Camera, SimConfig, Simulation,
    input::{self, PatternPicker},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Sparse".to_owned(),
        window_width: 800,
        window_height: 640,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SimConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    let mut sim = Simulation::new(&config);
    let mut camera = Camera::new();
    let mut picker = PatternPicker::new();
    let mut pan_anchor = None;
    info!("ready, paused with an empty grid");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&sim, &picker.selected().name);

        sim = input::process_button_clicks(sim, &buttons, mouse_pos, &camera, &mut picker, &config);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos, &mut pan_anchor);
        input::handle_grid_click(&mut sim, &mut picker, &camera, &config, mouse_pos);
        sim = input::process_keyboard_input(sim, &mut camera, &mut picker, &config);

        sim.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(&sim.generation, &camera, &config);
        if picker.placing && !sim.is_running() {
            let origin = input::placement_origin(&picker, &camera, &config, mouse_pos);
            rendering::draw_pattern_preview(picker.selected(), origin, &camera, &config);
        }
        rendering::draw_controls(&sim, &camera, &picker, &buttons, mouse_pos);

        next_frame().await;
    }
}
