use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::grid::Grid;
use crate::settings::Rgb;
use crate::settings::Style;
use crate::simulation::Render;

pub mod canvas;
pub mod grid;

pub use self::canvas::Canvas;

/// Something tiles and gridlines can be drawn on. Coordinates are in surface units.
pub trait Surface {
    /// Width of the surface in units
    fn width(&self) -> u32;

    /// Height of the surface in units
    fn height(&self) -> u32;

    fn set_fill(&mut self, color: Rgb);

    fn set_stroke(&mut self, color: Rgb, width: f32);

    /// Erase everything drawn so far
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32));

    /// Make everything drawn since the last `clear` visible
    fn present(&mut self) -> Result<()>;
}

/// A line of text shown next to the surface
pub trait Display {
    fn show(&mut self, text: &str) -> Result<()>;
}

impl Grid {
    /// Fill a square tile for every live cell
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, tile_size: f32) {
        for (x, y) in self.cells() {
            surface.fill_rect(
                x as f32 * tile_size,
                y as f32 * tile_size,
                tile_size,
                tile_size,
            );
        }
    }
}

/// Draws each generation as a board of square tiles, and writes the generation number to a
/// display.
pub struct TileRenderer<S, D> {
    surface: S,
    display: D,
    tile_size: f32,
}

impl<S: Surface, D: Display> TileRenderer<S, D> {
    pub fn new(mut surface: S, display: D, tile_size: u32, style: Style) -> Self {
        surface.set_fill(style.fill);
        surface.set_stroke(style.stroke, style.line_width);

        Self {
            surface,
            display,
            tile_size: tile_size as f32,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<S: Surface, D: Display> Render for TileRenderer<S, D> {
    type Error = Error;

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        self.surface.clear();
        grid.draw(&mut self.surface, self.tile_size);
        grid.draw_gridlines(&mut self.surface, self.tile_size);
        self.surface.present()?;

        self.display.show(&generation.to_string())?;

        debug!(generation, "frame drawn");

        Ok(())
    }
}
