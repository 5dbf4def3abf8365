pub mod draw;
pub mod error;
pub mod events;
pub mod grid;
pub mod io;
pub mod settings;
pub mod simulation;
pub mod term;

mod rule_set;

pub use error::Error;
pub use error::Result;
