mod button;

pub use button::Button;

use crate::application::{EditMode, Simulation};
use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 7.0;

/// X position where the control panel starts (right side).
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the grid area left of the panel.
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Build the four control buttons with labels reflecting the current
/// state: Start/Pause for playback and Draw/Normal for the edit mode.
pub fn create_buttons(sim: &Simulation) -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;

    let playback_label = if sim.is_running() { "Pause" } else { "Start" };
    let draw_label = match sim.edit_mode() {
        EditMode::Toggle => "Draw",
        EditMode::Paint => "Normal",
    };

    vec![
        Button::new(px, 20.0, width, BUTTON_HEIGHT, playback_label),
        Button::new(px, 70.0, width, BUTTON_HEIGHT, "Reset"),
        Button::new(px, 120.0, width, BUTTON_HEIGHT, "Random"),
        Button::new(px, 170.0, width, BUTTON_HEIGHT, draw_label),
    ]
}
