use macroquad::prelude::*;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;
use game_of_life::{SimulationConfig, SimulationController, rendering, input};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
    }

    let mut sim = match SimulationController::from_config(SimulationConfig::default()) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "cannot start simulation");
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();
        let viewport = rendering::current_viewport(&sim);

        input::process_keyboard_input(&mut sim, &viewport, mouse_pos);
        input::handle_mouse_paint(&mut sim, &viewport, mouse_pos);

        // Frame time is in seconds, the controller counts milliseconds
        sim.tick_if_due(get_frame_time() as f64 * 1000.0);

        clear_background(BLACK);
        rendering::draw_grid(&sim, &viewport);
        rendering::draw_panel(&sim);

        next_frame().await;
    }
}
