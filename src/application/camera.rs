use crate::domain::Coord;

const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 8.0;

/// Camera manages viewport offset and zoom over the unbounded grid
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Screen pixel to the cell under it. Floors, so pixels left of or above
    /// the origin land on negative cells.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Coord {
        let scaled = cell_size * self.zoom;
        Coord::new(
            ((screen_x - self.offset_x) / scaled).floor() as i64,
            ((screen_y - self.offset_y) / scaled).floor() as i64,
        )
    }

    /// Top-left screen pixel of a cell
    pub fn cell_to_screen(&self, coord: Coord, cell_size: f32) -> (f32, f32) {
        let scaled = cell_size * self.zoom;
        (
            coord.x as f32 * scaled + self.offset_x,
            coord.y as f32 * scaled + self.offset_y,
        )
    }

    /// Inclusive cell bounds covering the viewport, for culling
    pub fn visible_cells(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> (Coord, Coord) {
        let min = self.screen_to_cell(0.0, 0.0, cell_size);
        let max = self.screen_to_cell(viewport_width, viewport_height, cell_size);
        (min, max)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_floors() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_cell(14.9, 15.0, 15.0), Coord::new(0, 1));
        assert_eq!(camera.screen_to_cell(-0.5, -15.5, 15.0), Coord::new(-1, -2));
    }

    #[test]
    fn test_pan_and_zoom_round_trip() {
        let mut camera = Camera::new();
        camera.pan(100.0, -40.0);
        camera.zoom_in(2.0);
        let coord = Coord::new(-3, 7);
        let (sx, sy) = camera.cell_to_screen(coord, 10.0);
        assert_eq!(camera.screen_to_cell(sx + 1.0, sy + 1.0, 10.0), coord);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new();
        for _ in 0..50 {
            camera.zoom_out(2.0);
        }
        assert_eq!(camera.zoom, MIN_ZOOM);
        for _ in 0..50 {
            camera.zoom_in(2.0);
        }
        assert_eq!(camera.zoom, MAX_ZOOM);
        camera.reset();
        assert_eq!(camera.zoom, 1.0);
    }
}
