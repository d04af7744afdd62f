use macroquad::prelude::*;

/// Clickable control button with hover feedback.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// True when the left button went down over this widget this frame.
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(74, 148, 184, 255)
        } else {
            Color::from_rgba(47, 111, 143, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text.width) / 2.0,
            self.y + (self.height + text.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
