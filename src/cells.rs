//! Cells in the cellular automaton.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a single cell on the grid.
///
/// Both coordinates are 0-indexed. Equality and hashing are structural,
/// so a [`Cell`] can be used directly as a `HashSet` or `HashMap` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The column of the cell (x direction).
    pub column: i32,
    /// The row of the cell (y direction).
    pub row: i32,
}

impl Cell {
    /// Creates a new cell from its column and row.
    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The cell translated by the given offsets.
    #[inline]
    pub(crate) const fn offset(self, columns: i32, rows: i32) -> Self {
        Self::new(self.column + columns, self.row + rows)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
