/// Viewport maps between screen pixels and grid cells.
/// The simulation core only ever sees `(row, col)` indices; all pixel math lives here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
    height: usize,
    width: usize,
}

impl Viewport {
    /// Largest square cell size (at least 1px) that fits a `(height, width)` grid in the area
    pub fn fit(area_width: f32, area_height: f32, (height, width): (usize, usize)) -> Self {
        let cell_size = (area_width / width as f32)
            .min(area_height / height as f32)
            .floor()
            .max(1.0);
        Self { cell_size, height, width }
    }

    /// Convert screen coordinates to a grid cell, or `None` if the point is off the grid
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let row = (screen_y / self.cell_size) as usize;
        let col = (screen_x / self.cell_size) as usize;
        (row < self.height && col < self.width).then_some((row, col))
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Pixel size of the whole grid as `(width, height)`
    pub fn extent(&self) -> (f32, f32) {
        (self.width as f32 * self.cell_size, self.height as f32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_picks_smaller_axis() {
        let viewport = Viewport::fit(1000.0, 800.0, (100, 50));
        assert_eq!(viewport.cell_size, 8.0);
        assert_eq!(viewport.extent(), (400.0, 800.0));
    }

    #[test]
    fn test_fit_never_below_one_pixel() {
        let viewport = Viewport::fit(100.0, 100.0, (1000, 1000));
        assert_eq!(viewport.cell_size, 1.0);
    }

    #[test]
    fn test_screen_to_cell() {
        let viewport = Viewport::fit(100.0, 100.0, (10, 10));
        assert_eq!(viewport.screen_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(viewport.screen_to_cell(35.0, 12.0), Some((1, 3)));
        assert_eq!(viewport.screen_to_cell(99.9, 99.9), Some((9, 9)));
    }

    #[test]
    fn test_off_grid_clicks_are_discarded() {
        let viewport = Viewport::fit(100.0, 100.0, (10, 10));
        assert_eq!(viewport.screen_to_cell(-1.0, 5.0), None);
        assert_eq!(viewport.screen_to_cell(100.0, 5.0), None);
        assert_eq!(viewport.screen_to_cell(5.0, 250.0), None);
    }

    #[test]
    fn test_cell_to_screen() {
        let viewport = Viewport::fit(100.0, 100.0, (10, 10));
        assert_eq!(viewport.cell_to_screen(2, 7), (70.0, 20.0));
    }
}
