mod cells;
mod config;
mod error;
mod grid;
mod neighborhood;
mod observer;
mod shapes;
mod stepper;

pub use cells::Cell;
pub use config::{CellSize, Config, INITIAL_COLUMNS, INITIAL_ROWS, MAX_SPEED, MIN_SPEED};
pub use error::Error;
pub use grid::Grid;
pub use observer::Observer;
pub use shapes::{available_shapes, shape_by_name, shapes, Shape};
pub use stepper::Stepper;
