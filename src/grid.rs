//! The grid.

use crate::{
    cells::Cell,
    error::Error,
    neighborhood::NeighborIndex,
    observer::{Observer, Registry},
    shapes::Shape,
};
use log::{debug, trace};
use rand::Rng;
use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
    sync::{Arc, Mutex, Weak},
};

// Staying alive in this range.
const STAY_ALIVE_MIN_NEIGHBORS: usize = 2;
const STAY_ALIVE_MAX_NEIGHBORS: usize = 3;

// Condition for getting newly born.
const NEWBORN_NEIGHBORS: usize = 3;

/// A finite, resizable Game of Life grid.
///
/// Every cell of the grid is in one of two states, alive or dead, and
/// interacts with its up to eight direct neighbors. On each call to
/// [`advance`](Grid::advance) the following transitions occur
/// simultaneously:
///
/// 1. Deaths. Every live cell with fewer than two or more than three
///    live neighbors dies of isolation or overcrowding.
/// 2. Survivals. Every live cell with two or three live neighbors
///    stays for the next generation.
/// 3. Births. Every dead cell with exactly three live neighbors, no
///    more and no fewer, is born.
///
/// Births and deaths happen at the same discrete moment, a tick: each
/// generation is a pure function of the one before. The grid has hard
/// edges, so cells on the border simply have fewer neighbors.
///
/// The grid is a passive, shared object. Every public operation takes
/// one exclusive lock over the whole state for its duration, so
/// concurrent callers (for example a [`Stepper`](crate::Stepper)
/// driving `advance` while another thread edits cells) never observe
/// a partially committed mutation. After each successful mutation all
/// subscribed [`Observer`]s are notified, after the lock is released,
/// before the mutating call returns.
#[derive(Debug)]
pub struct Grid {
    state: Mutex<State>,
    observers: Registry,
}

/// The state behind the grid's lock.
#[derive(Debug)]
struct State {
    columns: i32,
    rows: i32,
    generation: u64,
    /// The set of currently-live cells. Every member lies within the
    /// current dimensions; resizing purges members that fall out of
    /// range.
    population: HashSet<Cell>,
    neighbors: NeighborIndex,
}

impl State {
    fn check_bounds(&self, cell: Cell) -> Result<(), Error> {
        if cell.column < 0 || cell.row < 0 || cell.column >= self.columns || cell.row >= self.rows {
            Err(Error::OutOfBounds(cell))
        } else {
            Ok(())
        }
    }

    /// Cells that may change in the next generation: the live cells
    /// and everything adjacent to them. Every other cell is dead with
    /// fewer than three live neighbors and stays dead.
    fn candidates(&self) -> HashSet<Cell> {
        let mut candidates = self.population.clone();
        for cell in &self.population {
            candidates.extend(self.neighbors.of(*cell).iter().copied());
        }
        candidates
    }

    fn live_neighbors(&self, cell: Cell) -> usize {
        self.neighbors
            .of(cell)
            .iter()
            .filter(|n| self.population.contains(n))
            .count()
    }
}

impl Grid {
    /// Creates an empty grid at generation 0.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both dimensions
    /// are positive.
    pub fn new(columns: i32, rows: i32) -> Result<Self, Error> {
        if columns <= 0 || rows <= 0 {
            return Err(Error::InvalidDimension);
        }
        Ok(Self {
            state: Mutex::new(State {
                columns,
                rows,
                generation: 0,
                population: HashSet::new(),
                neighbors: NeighborIndex::new(columns, rows),
            }),
            observers: Registry::default(),
        })
    }

    /// Whether the cell at `(column, row)` is alive.
    pub fn is_alive(&self, column: i32, row: i32) -> Result<bool, Error> {
        let state = self.state.lock().unwrap();
        let cell = Cell::new(column, row);
        state.check_bounds(cell)?;
        Ok(state.population.contains(&cell))
    }

    /// Sets the cell at `(column, row)` alive.
    ///
    /// Setting an already-live cell leaves the population unchanged
    /// but still notifies subscribers: every successful mutating call
    /// fires exactly one notification.
    pub fn set_alive(&self, column: i32, row: i32) -> Result<(), Error> {
        self.set_cell(column, row, true)
    }

    /// Sets the cell at `(column, row)` dead.
    ///
    /// Like [`set_alive`](Grid::set_alive), this notifies subscribers
    /// even when the cell was already dead.
    pub fn set_dead(&self, column: i32, row: i32) -> Result<(), Error> {
        self.set_cell(column, row, false)
    }

    fn set_cell(&self, column: i32, row: i32, alive: bool) -> Result<(), Error> {
        {
            let mut state = self.state.lock().unwrap();
            let cell = Cell::new(column, row);
            state.check_bounds(cell)?;
            if alive {
                state.population.insert(cell);
            } else {
                state.population.remove(&cell);
            }
        }
        self.observers.notify();
        Ok(())
    }

    /// Empties the population and resets the generation counter to 0.
    pub fn clear(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.population.clear();
            state.generation = 0;
        }
        debug!("grid cleared");
        self.observers.notify();
    }

    /// Resizes the grid to `columns` × `rows`.
    ///
    /// Live cells that fall out of the new range are removed and the
    /// neighbor index is rebuilt for the new dimensions. The
    /// generation counter is untouched. Resizing to the current
    /// dimensions is a no-op and does not notify; otherwise
    /// subscribers are notified once.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both dimensions
    /// are positive.
    pub fn resize(&self, columns: i32, rows: i32) -> Result<(), Error> {
        if columns <= 0 || rows <= 0 {
            return Err(Error::InvalidDimension);
        }
        {
            let mut state = self.state.lock().unwrap();
            if state.columns == columns && state.rows == rows {
                return Ok(());
            }
            state
                .population
                .retain(|cell| cell.column < columns && cell.row < rows);
            state.neighbors = NeighborIndex::new(columns, rows);
            state.columns = columns;
            state.rows = rows;
            debug!("grid resized to {}x{}", columns, rows);
        }
        self.observers.notify();
        Ok(())
    }

    /// Advances the grid by one generation.
    ///
    /// The next generation is computed in two passes: first the live
    /// neighbor count of every candidate cell is recorded against the
    /// current population, then the transitions are applied from those
    /// recorded counts alone. No cell's transition ever sees another
    /// cell's already-updated state, so the result is independent of
    /// iteration order.
    pub fn advance(&self) {
        {
            let mut state = self.state.lock().unwrap();
            let transitions: Vec<(Cell, bool, usize)> = state
                .candidates()
                .into_iter()
                .map(|cell| {
                    (
                        cell,
                        state.population.contains(&cell),
                        state.live_neighbors(cell),
                    )
                })
                .collect();
            for (cell, was_alive, live_neighbors) in transitions {
                if was_alive {
                    if !(STAY_ALIVE_MIN_NEIGHBORS..=STAY_ALIVE_MAX_NEIGHBORS)
                        .contains(&live_neighbors)
                    {
                        state.population.remove(&cell);
                    }
                } else if live_neighbors == NEWBORN_NEIGHBORS {
                    state.population.insert(cell);
                }
            }
            state.generation += 1;
            trace!(
                "generation {}: {} cells alive",
                state.generation,
                state.population.len()
            );
        }
        self.observers.notify();
    }

    /// Empties the grid and sets each cell alive with probability
    /// `density`. The generation counter is reset to 0 and subscribers
    /// are notified once.
    ///
    /// # Panics
    ///
    /// Panics unless `density` lies in `[0, 1]`.
    pub fn randomize(&self, density: f64) {
        let mut rng = rand::thread_rng();
        {
            let mut state = self.state.lock().unwrap();
            state.population.clear();
            state.generation = 0;
            for column in 0..state.columns {
                for row in 0..state.rows {
                    if rng.gen_bool(density) {
                        state.population.insert(Cell::new(column, row));
                    }
                }
            }
            debug!("grid randomized, {} cells alive", state.population.len());
        }
        self.observers.notify();
    }

    /// Clears the grid, then places `shape` centered on it.
    ///
    /// Called through [`Shape::place_on`].
    pub(crate) fn place(&self, shape: &Shape) -> Result<(), Error> {
        {
            let mut state = self.state.lock().unwrap();
            if shape.columns() > state.columns || shape.rows() > state.rows {
                return Err(Error::ShapeTooLarge(shape.name().to_owned()));
            }
            let offset_columns = (state.columns - shape.columns()).div_euclid(2);
            let offset_rows = (state.rows - shape.rows()).div_euclid(2);
            state.population.clear();
            state.generation = 0;
            for cell in shape.cells() {
                state
                    .population
                    .insert(cell.offset(offset_columns, offset_rows));
            }
            debug!(
                "placed shape {:?} at offset ({}, {})",
                shape.name(),
                offset_columns,
                offset_rows
            );
        }
        self.observers.notify();
        Ok(())
    }

    /// Number of columns.
    pub fn columns(&self) -> i32 {
        self.state.lock().unwrap().columns
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.state.lock().unwrap().rows
    }

    /// Number of generations since construction or the last clear.
    pub fn generations(&self) -> u64 {
        self.state.lock().unwrap().generation
    }

    /// A snapshot of the currently-live cells.
    ///
    /// The returned set is a copy; mutating it does not affect the
    /// grid.
    pub fn population(&self) -> HashSet<Cell> {
        self.state.lock().unwrap().population.clone()
    }

    /// Subscribes `observer` to change notifications.
    ///
    /// The grid keeps only a weak reference, so dropping the observer
    /// ends the subscription. Subscribing the same observer twice is a
    /// no-op.
    pub fn subscribe<O: Observer + 'static>(&self, observer: &Arc<O>) {
        let weak: Weak<O> = Arc::downgrade(observer);
        let weak: Weak<dyn Observer> = weak;
        self.observers.subscribe(weak);
    }

    /// Removes `observer` from the notification registry.
    ///
    /// Unsubscribing an unknown observer is a no-op. Calling this from
    /// inside a notification callback is safe; the removal takes
    /// effect from the next notification cycle.
    pub fn unsubscribe<O: Observer + 'static>(&self, observer: &Arc<O>) {
        let weak: Weak<O> = Arc::downgrade(observer);
        let weak: Weak<dyn Observer> = weak;
        self.observers.unsubscribe(&weak);
    }
}

/// Renders the grid with `X` for live cells and `.` for dead ones,
/// one line per row.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap();
        for row in 0..state.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            for column in 0..state.columns {
                if state.population.contains(&Cell::new(column, row)) {
                    f.write_str("X")?;
                } else {
                    f.write_str(".")?;
                }
            }
        }
        Ok(())
    }
}
