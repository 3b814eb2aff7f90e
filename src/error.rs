//! All kinds of errors in this crate.

use crate::cells::Cell;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every error is reported synchronously and leaves the grid's
/// observable state unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Number of columns and rows must be positive.
    InvalidDimension,
    /// Cell at {0} is outside the grid.
    OutOfBounds(Cell),
    /// The shape "{0}" does not fit on the grid.
    ShapeTooLarge(String),
    /// Unknown shape: {0}.
    UnknownShape(String),
    /// Unknown cell size preset: {0}.
    UnknownSizePreset(String),
    /// Stepping speed must be between 1 and 30, got {0}.
    InvalidSpeed(u32),
}
