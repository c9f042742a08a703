use macroquad::prelude::*;
use crate::application::SimulationController;
use crate::domain::presets;

mod viewport;

pub use viewport::Viewport;

pub const PANEL_WIDTH: f32 = 180.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Viewport fitting the grid into the area left of the panel
pub fn current_viewport(sim: &SimulationController) -> Viewport {
    Viewport::fit(panel_x(), screen_height(), sim.dimensions())
}

/// Draw the board background and every live cell
pub fn draw_grid(sim: &SimulationController, viewport: &Viewport) {
    let (extent_w, extent_h) = viewport.extent();
    draw_rectangle(0.0, 0.0, extent_w, extent_h, Color::from_rgba(15, 15, 15, 255));

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let size = viewport.cell_size;
    for (row, col) in sim.grid().live_cells() {
        let (x, y) = viewport.cell_to_screen(row, col);
        draw_rectangle(x, y, size, size, alive_color);
    }

    // Grid lines only when cells are big enough to see them
    if size >= 6.0 {
        let line_color = Color::from_rgba(40, 40, 40, 255);
        let (height, width) = sim.dimensions();
        for row in 0..=height {
            let y = row as f32 * size;
            draw_line(0.0, y, extent_w, y, 1.0, line_color);
        }
        for col in 0..=width {
            let x = col as f32 * size;
            draw_line(x, 0.0, x, extent_h, 1.0, line_color);
        }
    }
}

/// Draw the status panel
pub fn draw_panel(sim: &SimulationController) {
    let px = panel_x() + 10.0;
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let (height, width) = sim.dimensions();
    let status = if sim.is_running() { "Running" } else { "Paused" };
    let status_color = if sim.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    draw_text(status, px, 30.0, 24.0, status_color);

    let lines = [
        format!("Generation: {}", sim.generation_count()),
        format!("Population: {}", sim.population()),
        format!("Interval: {:.0} ms", sim.tick_interval_ms()),
        format!("Grid: {}x{}", width, height),
        format!("Algorithm: {}", sim.algorithm().name()),
        format!("FPS: {}", get_fps()),
    ];
    lines.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, px, 60.0 + i as f32 * 18.0, 16.0, LIGHTGRAY);
    });

    let mut y = 190.0;
    let controls = [
        "Space: Play/Pause",
        "+ / -: Speed",
        "LMB: Paint  RMB: Erase",
        "C: Clear  R: Random",
        "P: Toggle algorithm",
    ];
    draw_text("Controls:", px, y, 16.0, WHITE);
    for line in controls {
        y += 15.0;
        draw_text(line, px, y, 13.0, GRAY);
    }

    y += 25.0;
    draw_text("Patterns (at cursor):", px, y, 16.0, WHITE);
    for (i, pattern) in presets::all_patterns().iter().enumerate() {
        y += 15.0;
        draw_text(&format!("{}: {}", i + 1, pattern.name), px, y, 13.0, GRAY);
    }
}
