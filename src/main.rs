use std::time::Duration;

use macroquad::prelude::*;
use torus_life::{Simulation, input, rendering, ui};

// Reference deployment: 55x140 torus stepped every 110 ms.
const GRID_ROWS: usize = 55;
const GRID_COLS: usize = 140;

fn window_conf() -> Conf {
    Conf {
        window_title: "Life on a Torus".to_owned(),
        window_width: (GRID_COLS as f32 * ui::CELL_SIZE + ui::PANEL_WIDTH) as i32,
        window_height: (GRID_ROWS as f32 * ui::CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut sim = Simulation::new(GRID_ROWS, GRID_COLS);

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&sim);

        input::process_button_clicks(&mut sim, &buttons, mouse_pos);
        input::process_keyboard(&mut sim);
        input::handle_mouse_edit(&mut sim, mouse_pos);

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(sim.grid());
        rendering::draw_panel(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
