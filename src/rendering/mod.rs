use macroquad::prelude::*;

use crate::application::{Camera, SimConfig, Simulation};
use crate::domain::{Coord, Generation, Pattern};
use crate::input::PatternPicker;
use crate::ui::{Button, grid_area_height, grid_area_width, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const TRACKED_DEAD_COLOR: Color = Color::new(0.09, 0.09, 0.09, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Grid lines over the visible area, then every tracked cell inside it.
/// Only reads the generation.
pub fn draw_grid(generation: &Generation, camera: &Camera, config: &SimConfig) {
    let area_width = grid_area_width(config);
    let area_height = grid_area_height();
    let cell_size = config.cell_size * camera.zoom;
    let (min, max) = camera.visible_cells(area_width, area_height, config.cell_size);

    if cell_size >= 4.0 {
        for x in min.x..=max.x + 1 {
            let (sx, _) = camera.cell_to_screen(Coord::new(x, min.y), config.cell_size);
            draw_line(sx, 0.0, sx, area_height, 1.0, GRID_LINE_COLOR);
        }
        for y in min.y..=max.y + 1 {
            let (_, sy) = camera.cell_to_screen(Coord::new(min.x, y), config.cell_size);
            draw_line(0.0, sy, area_width, sy, 1.0, GRID_LINE_COLOR);
        }
    }

    let visible = |c: Coord| c.x >= min.x && c.x <= max.x && c.y >= min.y && c.y <= max.y;
    for (coord, cell) in generation.iter().filter(|(c, _)| visible(*c)) {
        let (sx, sy) = camera.cell_to_screen(coord, config.cell_size);
        if cell.is_alive() {
            draw_rectangle(sx, sy, cell_size, cell_size, ALIVE_COLOR);
        } else {
            // Erase: tracked dead cells are redrawn as background
            draw_rectangle(sx + 1.0, sy + 1.0, cell_size - 1.0, cell_size - 1.0, TRACKED_DEAD_COLOR);
        }
    }

    // Clip anything that spilled past the grid area
    draw_rectangle(area_width, 0.0, panel_x() - area_width, area_height, BLACK);
}

/// Semi-transparent preview of a pattern about to be placed at `origin`
pub fn draw_pattern_preview(pattern: &Pattern, origin: Coord, camera: &Camera, config: &SimConfig) {
    let cell_size = config.cell_size * camera.zoom;

    for cell in &pattern.cells {
        let (sx, sy) = camera.cell_to_screen(origin.offset(cell.x, cell.y), config.cell_size);
        draw_rectangle(sx, sy, cell_size, cell_size, Color::from_rgba(0, 255, 150, 120));
        draw_rectangle_lines(sx, sy, cell_size, cell_size, 1.5, Color::from_rgba(0, 255, 150, 200));
    }

    let (bx, by) = camera.cell_to_screen(origin, config.cell_size);
    draw_rectangle_lines(
        bx,
        by,
        pattern.width as f32 * cell_size,
        pattern.height as f32 * cell_size,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

/// Side panel with buttons, status and help
pub fn draw_controls(
    sim: &Simulation,
    camera: &Camera,
    picker: &PatternPicker,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, crate::ui::PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let tx = px + 10.0;
    let (status, status_color) = if sim.is_running() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };

    let step_color = match sim.last_step_time_ms {
        t if t < 5.0 => Color::from_rgba(0, 255, 0, 255),
        t if t < 30.0 => Color::from_rgba(255, 255, 0, 255),
        _ => Color::from_rgba(255, 0, 0, 255),
    };

    let labels = [
        ("Status:".to_string(), 270.0, 16.0, WHITE),
        (status.to_string(), 290.0, 18.0, status_color),
        ("Generation:".to_string(), 320.0, 16.0, WHITE),
        (sim.generation_count.to_string(), 340.0, 20.0, ALIVE_COLOR),
        (format!("Live: {}", format_number(sim.generation.population())), 370.0, 14.0, GRAY),
        (format!("Tracked: {}", format_number(sim.generation.len())), 386.0, 14.0, GRAY),
        (format!("Step: {:.2}ms ({})", sim.last_step_time_ms, sim.stepper.name()), 402.0, 13.0, step_color),
        (format!("Tick: {}ms | FPS: {}", sim.tick_interval.as_millis(), get_fps()), 418.0, 13.0, GRAY),
        (format!("Zoom: {:.1}x", camera.zoom), 434.0, 13.0, GRAY),
    ];
    for (text, y, size, color) in labels.iter() {
        draw_text(text, tx, *y, *size, *color);
    }

    if picker.placing {
        draw_text(&format!("Placing {}", picker.selected().name), tx, 460.0, 13.0, YELLOW);
        draw_text("RMB/Esc: cancel", tx, 474.0, 12.0, GRAY);
    }

    let help = [
        "Controls:",
        "Click: toggle (paused)",
        "Space: start/stop",
        "N: step  C: reset",
        "R: random  P: pattern",
        "S: serial/rayon",
        "Wheel: zoom  H: home",
        "Mid-drag: pan",
    ];
    for (i, line) in help.iter().enumerate() {
        let size = if i == 0 { 14.0 } else { 12.0 };
        draw_text(line, tx, 510.0 + i as f32 * 14.0, size, if i == 0 { WHITE } else { GRAY });
    }
}
