//! Board cells and geometry
//!
//! A [`Cell`] addresses one tile of the board. "No cell" is `None`; there is
//! no magic coordinate standing in for an invalid tile.

pub mod geometry;

pub use geometry::{BoardGeometry, GridGeometry};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer coordinate of a board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Cell {
    /// Create a new cell
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Focus value meaning "no cell" / "outside board"
pub const INVALID_CELL: Option<Cell> = None;

/// Format an optional cell for log output
pub(crate) fn describe(cell: Option<Cell>) -> String {
    cell.map_or_else(|| "none".to_string(), |c| c.to_string())
}
