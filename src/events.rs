#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    /// Stop the simulation and exit the application
    Exit,

    /// The terminal was resized. Grids keep their size for their whole life, so this is only
    /// reported.
    Resize { cols: u16, rows: u16 },
}
