//! Precomputed cell adjacency.

use crate::cells::Cell;
use std::collections::HashMap;

/// The eight offsets of the Moore neighborhood.
const NBHD: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A mapping from every cell of the grid to its in-bounds neighbors.
///
/// Cells on an edge have five neighbors, cells in a corner three;
/// there is no wraparound. The index is built once per grid size so
/// that advancing a generation never redoes boundary arithmetic, and
/// it is rebuilt in full whenever the grid is resized.
#[derive(Clone, Debug)]
pub(crate) struct NeighborIndex {
    neighbors: HashMap<Cell, Vec<Cell>>,
}

impl NeighborIndex {
    /// Builds the index for a `columns` × `rows` grid.
    ///
    /// The dimensions must already be validated as positive.
    pub(crate) fn new(columns: i32, rows: i32) -> Self {
        let mut neighbors = HashMap::with_capacity((columns * rows) as usize);
        for column in 0..columns {
            for row in 0..rows {
                let cell = Cell::new(column, row);
                let nbhd = NBHD
                    .iter()
                    .map(|&(dx, dy)| cell.offset(dx, dy))
                    .filter(|n| (0..columns).contains(&n.column) && (0..rows).contains(&n.row))
                    .collect();
                neighbors.insert(cell, nbhd);
            }
        }
        Self { neighbors }
    }

    /// The in-bounds neighbors of `cell`.
    ///
    /// A cell outside the grid has no entry and yields an empty slice.
    pub(crate) fn of(&self, cell: Cell) -> &[Cell] {
        self.neighbors.get(&cell).map_or(&[], Vec::as_slice)
    }
}
