use macroquad::prelude::*;
use tracing::debug;

use crate::application::SimulationController;
use crate::domain::{LifeError, presets};
use crate::rendering::Viewport;

/// Tick interval change per frame while +/- is held
pub const SPEED_STEP_MS: f64 = 1.0;

/// Density used by the random soup key
pub const SOUP_DENSITY: f64 = 0.3;

const PATTERN_KEYS: [KeyCode; 8] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
];

/// Edits the controller rejects are expected input (clicks off the board,
/// keys pressed while running) and are dropped here.
fn ignore_rejected(result: Result<(), LifeError>) {
    if let Err(err) = result {
        debug!(%err, "input ignored");
    }
}

/// Handle mouse painting on the grid
pub fn handle_mouse_paint(sim: &mut SimulationController, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if sim.is_running() {
        return;
    }
    let Some((row, col)) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    if is_mouse_button_down(MouseButton::Left) {
        ignore_rejected(sim.set_cell(row, col));
    } else if is_mouse_button_down(MouseButton::Right) {
        ignore_rejected(sim.clear_cell(row, col));
    }
}

/// Process keyboard input
pub fn process_keyboard_input(sim: &mut SimulationController, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if is_key_pressed(KeyCode::Space) {
        sim.toggle_pause();
    }

    // Held keys change speed every frame
    if is_key_down(KeyCode::Equal) || is_key_down(KeyCode::KpAdd) {
        sim.adjust_speed(-SPEED_STEP_MS);
    }
    if is_key_down(KeyCode::Minus) || is_key_down(KeyCode::KpSubtract) {
        sim.adjust_speed(SPEED_STEP_MS);
    }

    if is_key_pressed(KeyCode::P) {
        sim.set_algorithm(sim.algorithm().toggled());
    }

    if sim.is_running() {
        return;
    }

    if is_key_pressed(KeyCode::C) {
        sim.reset();
    }
    if is_key_pressed(KeyCode::R) {
        ignore_rejected(sim.randomize(SOUP_DENSITY));
    }

    let Some((row, col)) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };
    let patterns = presets::all_patterns();
    for (key, pattern) in PATTERN_KEYS.iter().zip(&patterns) {
        if is_key_pressed(*key) {
            // Center pattern on the cursor
            let top = row.saturating_sub(pattern.height / 2);
            let left = col.saturating_sub(pattern.width / 2);
            ignore_rejected(sim.place_pattern(pattern, top, left));
        }
    }
}
