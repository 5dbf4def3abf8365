use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::rule_set::B3S23;

/// Offsets of the Moore neighborhood, `(0, 0)` excluded.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed size board of cells.
///
/// Everything outside of `0..width` and `0..height` is considered permanently dead. Grids are
/// never updated in place by the simulation: [`Grid::next_generation`] builds a brand new grid
/// from a shared borrow of the current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cell buffer, row major. `cells[y * width + x]` is the state of cell `(x, y)`.
    cells: Vec<bool>,

    /// Width of the grid in cells
    width: usize,

    /// Height of the grid in cells
    height: usize,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Create a randomly seeded grid. See [`Grid::randomize`].
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, p: f64, rng: &mut R) -> Self {
        Self::new(width, height).randomize(p, rng)
    }

    /// Returns a new grid with the same dimensions, where each cell is independently alive with
    /// probability `p`.
    ///
    /// A cell is alive when a uniform sample from `[0, 1)` falls below `p`, so `p <= 0` always
    /// yields an empty grid and `p >= 1` a full one.
    pub fn randomize<R: Rng + ?Sized>(&self, p: f64, rng: &mut R) -> Self {
        let cells = (0..self.cells.len())
            .map(|_| rng.random::<f64>() < p)
            .collect();

        Self {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(x, y)` is alive. Out of bounds cells are always dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }

        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return false;
        }

        self.cells[self.xy_from(x, y)]
    }

    /// Number of live cells in the Moore neighborhood of `(x, y)`, between 0 and 8.
    pub fn neighbor_count(&self, x: isize, y: isize) -> u8 {
        NEIGHBORHOOD
            .iter()
            .filter(|&&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(x), Some(y)) => self.is_alive(x, y),

                // past the end of the coordinate space, so way out of bounds
                _ => false,
            })
            .count() as u8
    }

    /// Compute the next generation under B3/S23.
    pub fn next_generation(&self) -> Self {
        let mut next = Self::new(self.width, self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let (cx, cy) = (x as isize, y as isize);
                let alive = self.is_alive(cx, cy);
                let neighbors = self.neighbor_count(cx, cy);

                let i = next.xy_from(x, y);
                next.cells[i] = B3S23.next_state(alive, neighbors);
            }
        }

        next
    }

    /// Set the state of a single cell. Meant for building up patterns before a grid is handed to
    /// the simulation.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(x < self.width, "x is out of bounds");
        assert!(y < self.height, "y is out of bounds");

        let i = self.xy_from(x, y);
        self.cells[i] = alive;
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over the coordinates of every live cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(n, _)| self.xy_to(n))
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.width, n / self.width)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern has no rows")]
    Empty,

    #[error("Row {row} is {got} cells wide, expected {exp}")]
    RaggedRow { row: usize, exp: usize, got: usize },

    #[error("Unexpected character '{ch}' at row {row}, column {col}")]
    UnexpectedChar { ch: char, row: usize, col: usize },
}

/// Parse the plaintext pattern format: one line per row, `O` or `#` for live cells and `.` for
/// dead ones. Lines starting with `!` are comments.
///
/// See: https://conwaylife.com/wiki/Plaintext
impl FromStr for Grid {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .collect();

        let Some(first) = rows.first() else {
            return Err(PatternError::Empty);
        };

        let width = first.chars().count();
        let mut grid = Grid::new(width, rows.len());

        for (y, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != width {
                return Err(PatternError::RaggedRow {
                    row: y,
                    exp: width,
                    got,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                match ch {
                    'O' | '#' => grid.set(x, y, true),
                    '.' => {}
                    ch => return Err(PatternError::UnexpectedChar { ch, row: y, col: x }),
                }
            }
        }

        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }

            for x in 0..self.width {
                let ch = if self.cells[self.xy_from(x, y)] { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }

        Ok(())
    }
}
