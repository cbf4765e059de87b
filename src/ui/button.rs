use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    StartStop,
    Step,
    Reset,
    Random,
    NextPattern,
}

/// Clickable panel button
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    pub action: ButtonAction,
    enabled: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
            enabled: true,
        }
    }

    /// Greyed out buttons ignore clicks (edits while running)
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = match (self.enabled, self.contains(mouse_pos)) {
            (false, _) => Color::from_rgba(90, 90, 90, 255),
            (true, true) => Color::from_rgba(100, 149, 237, 255),
            (true, false) => Color::from_rgba(70, 130, 180, 255),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Left button pressed over an enabled button this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
