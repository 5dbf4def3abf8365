use std::time::Duration;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How tiles and gridlines look on a drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Color of live tiles
    pub fill: Rgb,

    /// Color of the gridlines
    pub stroke: Rgb,

    /// Gridline width in surface units
    pub line_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Rgb::new(100, 240, 150),
            stroke: Rgb::new(90, 90, 90),
            line_width: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Side length of a tile, in surface units
    pub tile_size: u32,

    /// Time to wait after a generation is drawn before the next one
    pub interval: Duration,

    /// Chance for each cell of the initial grid to be alive
    pub live_probability: f64,

    pub style: Style,
}

impl Default for Settings {
    fn default() -> Self {
        // these are probably fine constants
        Self {
            tile_size: 20,
            interval: Duration::from_millis(500),
            live_probability: 0.3,
            style: Style::default(),
        }
    }
}

impl Settings {
    /// Number of whole tiles that fit on a `width` by `height` surface. Leftover units on the
    /// right and bottom edges are left unused.
    pub fn tiles(&self, width: u32, height: u32) -> Result<(usize, usize)> {
        let tile_size = self.tile_size;

        if tile_size == 0 {
            return Err(Error::ZeroTileSize);
        }

        let (tx, ty) = (width / tile_size, height / tile_size);

        if tx == 0 || ty == 0 {
            return Err(Error::SurfaceTooSmall {
                width,
                height,
                tile_size,
            });
        }

        let (rx, ry) = (width % tile_size, height % tile_size);
        if rx != 0 || ry != 0 {
            debug!(rx, ry, "surface is not a multiple of the tile size, ignoring leftover units");
        }

        Ok((tx as usize, ty as usize))
    }
}

#[cfg(test)]
mod test {
    use super::Settings;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert_eq!(settings.tile_size, 20);
        assert_eq!(settings.interval.as_millis(), 500);
        assert_eq!(settings.live_probability, 0.3);
        assert_eq!(settings.style.line_width, 0.5);
    }

    #[test]
    fn tiles_exact() {
        let settings = Settings::default();

        assert_eq!(settings.tiles(800, 600).unwrap(), (40, 30));
    }

    #[test]
    fn tiles_floor_leftover_units() {
        let settings = Settings::default();

        assert_eq!(settings.tiles(819, 39).unwrap(), (40, 1));
    }

    #[test]
    fn tiles_too_small() {
        let settings = Settings::default();

        assert!(matches!(
            settings.tiles(19, 600),
            Err(Error::SurfaceTooSmall { width: 19, .. })
        ));
    }

    #[test]
    fn tiles_zero_tile_size() {
        let settings = Settings {
            tile_size: 0,
            ..Settings::default()
        };

        assert!(matches!(settings.tiles(800, 600), Err(Error::ZeroTileSize)));
    }
}
