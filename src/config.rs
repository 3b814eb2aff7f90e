//! Grid configuration and presentation presets.

use crate::{error::Error, grid::Grid};
use educe::Educe;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of columns of a grid built from [`Config::default`].
pub const INITIAL_COLUMNS: i32 = 50;

/// Number of rows of a grid built from [`Config::default`].
pub const INITIAL_ROWS: i32 = 30;

/// Slowest supported stepping speed, in generations per second.
pub const MIN_SPEED: u32 = 1;

/// Fastest supported stepping speed, in generations per second.
pub const MAX_SPEED: u32 = 30;

/// Dimensions used to construct a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of columns.
    pub columns: i32,
    /// Number of rows.
    pub rows: i32,
}

impl Config {
    /// Creates a new configuration from the number of columns and rows.
    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    /// Creates a grid from the configuration.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both dimensions
    /// are positive.
    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::new(self.columns, self.rows)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(INITIAL_COLUMNS, INITIAL_ROWS)
    }
}

/// Cell size presets for a presentation layer.
///
/// The engine itself has no opinion on pixels. The preset is part of
/// the crate surface only because the grid size a frontend derives
/// from it feeds back into the "shape fits the grid" check on
/// placement.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellSize {
    /// `small`, 10 pixels per cell.
    Small,
    /// `medium`, 20 pixels per cell.
    Medium,
    /// `large`, 30 pixels per cell.
    #[educe(Default)]
    Large,
}

impl CellSize {
    /// Edge length of a rendered cell, in pixels.
    pub const fn pixels(self) -> u32 {
        match self {
            CellSize::Small => 10,
            CellSize::Medium => 20,
            CellSize::Large => 30,
        }
    }
}

impl FromStr for CellSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(CellSize::Small),
            "medium" => Ok(CellSize::Medium),
            "large" => Ok(CellSize::Large),
            _ => Err(Error::UnknownSizePreset(s.to_owned())),
        }
    }
}
