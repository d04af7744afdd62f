use crate::application::{EditMode, Simulation};
use crate::ui::{Button, CELL_SIZE, grid_area_width};
use macroquad::prelude::*;

/// Map a screen position to a grid cell, if it lies over the grid area.
/// Coordinates handed to the simulation are always in range.
fn cell_at(sim: &Simulation, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if mouse_pos.0 < 0.0 || mouse_pos.1 < 0.0 || mouse_pos.0 >= grid_area_width() {
        return None;
    }
    let col = (mouse_pos.0 / CELL_SIZE) as usize;
    let row = (mouse_pos.1 / CELL_SIZE) as usize;
    (row < sim.grid().rows() && col < sim.grid().cols()).then_some((row, col))
}

/// Translate mouse input into edit events for the active mode: discrete
/// clicks in toggle mode, press-and-drag in paint mode. The drag state is
/// macroquad's held-button query; nothing of it reaches the simulation.
pub fn handle_mouse_edit(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    let Some((row, col)) = cell_at(sim, mouse_pos) else {
        return;
    };
    let fire = match sim.edit_mode() {
        EditMode::Toggle => is_mouse_button_pressed(MouseButton::Left),
        EditMode::Paint => is_mouse_button_down(MouseButton::Left),
    };
    if fire {
        sim.apply_edit(row, col);
    }
}

/// Dispatch button clicks to the four commands.
pub fn process_button_clicks(sim: &mut Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    for (idx, button) in buttons.iter().enumerate() {
        if !button.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => sim.toggle_playback(),
            1 => sim.reset(),
            2 => {
                sim.randomize();
            }
            3 => sim.toggle_edit_mode(),
            _ => {}
        }
    }
}

/// Keyboard shortcuts mirroring the buttons.
pub fn process_keyboard(sim: &mut Simulation) {
    if is_key_pressed(KeyCode::Space) {
        sim.toggle_playback();
    }
    if is_key_pressed(KeyCode::C) {
        sim.reset();
    }
    if is_key_pressed(KeyCode::R) {
        sim.randomize();
    }
    if is_key_pressed(KeyCode::D) {
        sim.toggle_edit_mode();
    }
}
