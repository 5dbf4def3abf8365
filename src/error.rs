use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the environment the simulation runs in. Grid operations themselves can't fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No drawing surface available: {0}")]
    NoSurface(#[source] io::Error),

    #[error("No room for the generation counter, the terminal is {rows} rows tall")]
    NoDisplay { rows: u16 },

    #[error("Tile size must be non-zero")]
    ZeroTileSize,

    #[error("A {width}x{height} surface can't hold a single {tile_size} unit tile")]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        tile_size: u32,
    },

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
