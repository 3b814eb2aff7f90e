//! Predefined shapes and their placement on a grid.

use crate::{cells::Cell, error::Error, grid::Grid};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, finite seed pattern.
///
/// The live cells are relative to the shape's own bounding box;
/// [`Shape::place_on`] translates them onto the center of a grid.
/// Shapes are immutable once constructed and may be shared freely.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    name: String,
    columns: i32,
    rows: i32,
    cells: HashSet<Cell>,
}

impl Shape {
    /// Creates a shape from rows of ASCII art, with `X` marking live
    /// cells and `.` dead ones.
    ///
    /// # Panics
    ///
    /// Panics if `art` is empty, if its rows differ in width, or if a
    /// row contains a character other than `X` and `.`.
    pub fn new(name: &str, art: &[&str]) -> Self {
        assert!(!art.is_empty(), "a shape needs at least one row");
        let columns = art[0].chars().count() as i32;
        let mut cells = HashSet::new();
        for (row, line) in art.iter().enumerate() {
            assert_eq!(
                line.chars().count() as i32,
                columns,
                "all rows of a shape must have the same width"
            );
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    'X' => {
                        cells.insert(Cell::new(column as i32, row as i32));
                    }
                    '.' => (),
                    _ => panic!("shape rows may only contain '.' or 'X'"),
                }
            }
        }
        Self {
            name: name.to_owned(),
            columns,
            rows: art.len() as i32,
            cells,
        }
    }

    /// The name of the shape, in lower case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of the shape's bounding box.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Height of the shape's bounding box.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// The live cells of the shape, relative to its top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Clears `grid`, then sets this shape's cells alive, centered.
    ///
    /// The centering offsets are `(grid − shape) / 2` per dimension,
    /// with floor division. The shape must fit the grid in both
    /// dimensions; otherwise the call fails with
    /// [`Error::ShapeTooLarge`] and the grid is left untouched, prior
    /// population included. On success the generation counter is reset
    /// to 0 and subscribers are notified once.
    pub fn place_on(&self, grid: &Grid) -> Result<(), Error> {
        grid.place(self)
    }
}

/// The built-in shape catalog, in display order.
pub fn shapes() -> Vec<Shape> {
    vec![
        Shape::new("block", &["XX", "XX"]),
        Shape::new("boat", &["XX.", "X.X", ".X."]),
        Shape::new("blinker", &["XXX"]),
        Shape::new("toad", &[".XXX", "XXX."]),
        Shape::new("glider", &["XXX", "X..", ".X."]),
        Shape::new(
            "spaceship",
            &[".X..X", "X....", "X...X", "XXXX."],
        ),
        Shape::new(
            "pulsar",
            &[
                "..XX.....XX..",
                "...XX...XX...",
                "X..X.X.X.X..X",
                "XXX.XX.XX.XXX",
                ".X.X.X.X.X.X.",
                "..XXX...XXX..",
                ".............",
                "..XXX...XXX..",
                ".X.X.X.X.X.X.",
                "XXX.XX.XX.XXX",
                "X..X.X.X.X..X",
                "...XX...XX...",
                "..XX.....XX..",
            ],
        ),
    ]
}

/// Looks up a shape by name, ignoring case.
pub fn shape_by_name(name: &str) -> Result<Shape, Error> {
    shapes()
        .into_iter()
        .find(|shape| shape.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownShape(name.to_owned()))
}

/// The names of the built-in shapes, capitalized, in catalog order.
pub fn available_shapes() -> Vec<String> {
    shapes().iter().map(|shape| capitalize(&shape.name)).collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
