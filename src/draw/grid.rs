use crate::draw::Surface;
use crate::grid::Grid;

impl Grid {
    /// Draw the gridlines delimiting each tile.
    ///
    /// Lines sit half a unit before every tile boundary so that thin strokes land on a single row
    /// of pixels. There is one vertical line per column and one horizontal line per row, each
    /// spanning the whole surface.
    pub fn draw_gridlines<S: Surface + ?Sized>(&self, surface: &mut S, tile_size: f32) {
        let (width, height) = (surface.width() as f32, surface.height() as f32);

        // vertical lines
        for i in 0..self.width() {
            let delta = i as f32 * tile_size - 0.5;
            surface.stroke_line((delta, 0.0), (delta, height));
        }

        // horizontal lines
        for i in 0..self.height() {
            let delta = i as f32 * tile_size - 0.5;
            surface.stroke_line((0.0, delta), (width, delta));
        }
    }
}
