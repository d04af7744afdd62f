use crate::application::{EditMode, Simulation};
use crate::domain::GridState;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, panel_x};
use macroquad::prelude::*;

/// Draw the full grid, pulling the current generation cell by cell.
pub fn draw_grid(grid: &GridState) {
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_color = Color::from_rgba(15, 15, 15, 255);
    let line_color = Color::from_rgba(40, 40, 40, 255);

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * CELL_SIZE;
        let y = row as f32 * CELL_SIZE;
        let fill = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, fill);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, line_color);
    }
}

/// Draw the control panel: buttons plus a small status readout.
pub fn draw_panel(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(25, 25, 25, 255));

    for button in buttons {
        button.draw(mouse_pos);
    }

    let state = if sim.is_running() { "running" } else { "idle" };
    let mode = match sim.edit_mode() {
        EditMode::Toggle => "toggle",
        EditMode::Paint => "paint",
    };
    draw_text(&format!("State: {state}"), px + 10.0, 240.0, 18.0, LIGHTGRAY);
    draw_text(&format!("Edit: {mode}"), px + 10.0, 262.0, 18.0, LIGHTGRAY);
    draw_text(
        &format!("Alive: {}", sim.grid().live_count()),
        px + 10.0,
        284.0,
        18.0,
        LIGHTGRAY,
    );
}
