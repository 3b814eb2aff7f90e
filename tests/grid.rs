use life_grid::{Cell, CellSize, Config, Error, Grid, INITIAL_COLUMNS, INITIAL_ROWS};
use std::collections::HashSet;

const COLUMNS: i32 = 5;
const ROWS: i32 = 5;

fn new_world() -> Grid {
    Grid::new(COLUMNS, ROWS).unwrap()
}

fn new_world_with(cells: &[(i32, i32)]) -> Grid {
    let world = new_world();
    for &(column, row) in cells {
        world.set_alive(column, row).unwrap();
    }
    world
}

/// Checks membership for every grid coordinate, not just the listed
/// ones.
fn world_is_exactly(world: &Grid, cells: &[(i32, i32)]) {
    let expected: HashSet<Cell> = cells.iter().map(|&(c, r)| Cell::new(c, r)).collect();
    assert_eq!(world.population(), expected);
    for column in 0..world.columns() {
        for row in 0..world.rows() {
            assert_eq!(
                world.is_alive(column, row).unwrap(),
                expected.contains(&Cell::new(column, row)),
                "wrong state at ({}, {})",
                column,
                row
            );
        }
    }
}

#[test]
fn new_rejects_non_positive_dimensions() {
    assert_eq!(Grid::new(0, ROWS).err(), Some(Error::InvalidDimension));
    assert_eq!(Grid::new(COLUMNS, 0).err(), Some(Error::InvalidDimension));
    assert_eq!(Grid::new(-1, ROWS).err(), Some(Error::InvalidDimension));
    assert_eq!(Grid::new(COLUMNS, -1).err(), Some(Error::InvalidDimension));
}

#[test]
fn new_world_is_empty() {
    let world = new_world();
    world_is_exactly(&world, &[]);
    assert_eq!(world.generations(), 0);
    assert_eq!(world.columns(), COLUMNS);
    assert_eq!(world.rows(), ROWS);
}

#[test]
fn default_config_matches_initial_size() {
    let world = Config::default().grid().unwrap();
    assert_eq!(world.columns(), INITIAL_COLUMNS);
    assert_eq!(world.rows(), INITIAL_ROWS);
    assert!(world.population().is_empty());
}

#[test]
fn is_alive_checks_bounds() {
    let world = new_world();
    assert_eq!(
        world.is_alive(-1, 0).err(),
        Some(Error::OutOfBounds(Cell::new(-1, 0)))
    );
    assert_eq!(
        world.is_alive(0, -1).err(),
        Some(Error::OutOfBounds(Cell::new(0, -1)))
    );
    assert_eq!(
        world.is_alive(COLUMNS, 0).err(),
        Some(Error::OutOfBounds(Cell::new(COLUMNS, 0)))
    );
    assert_eq!(
        world.is_alive(0, ROWS).err(),
        Some(Error::OutOfBounds(Cell::new(0, ROWS)))
    );
}

#[test]
fn set_alive_checks_bounds_and_leaves_state_unchanged() {
    let world = new_world_with(&[(1, 1)]);
    for (column, row) in [(-1, 0), (0, -1), (COLUMNS, 0), (0, ROWS)] {
        assert_eq!(
            world.set_alive(column, row).err(),
            Some(Error::OutOfBounds(Cell::new(column, row)))
        );
        assert_eq!(
            world.set_dead(column, row).err(),
            Some(Error::OutOfBounds(Cell::new(column, row)))
        );
    }
    world_is_exactly(&world, &[(1, 1)]);
}

#[test]
fn set_alive_sets_only_the_cells() {
    let cells = [(1, 2), (1, 3), (2, 4)];
    let world = new_world_with(&cells);
    world_is_exactly(&world, &cells);
}

#[test]
fn set_cell_is_idempotent_on_content() {
    let world = new_world_with(&[(2, 2)]);
    world.set_alive(2, 2).unwrap();
    world.set_dead(3, 3).unwrap();
    world_is_exactly(&world, &[(2, 2)]);
    world.set_dead(2, 2).unwrap();
    world_is_exactly(&world, &[]);
}

#[test]
fn resize_changes_dimensions() {
    let world = new_world();
    world.resize(5, 3).unwrap();
    assert_eq!(world.columns(), 5);
    assert_eq!(world.rows(), 3);
}

#[test]
fn resize_rejects_non_positive_dimensions() {
    let world = new_world_with(&[(1, 1)]);
    assert_eq!(world.resize(0, 3).err(), Some(Error::InvalidDimension));
    assert_eq!(world.resize(3, -1).err(), Some(Error::InvalidDimension));
    world_is_exactly(&world, &[(1, 1)]);
    assert_eq!(world.columns(), COLUMNS);
    assert_eq!(world.rows(), ROWS);
}

#[test]
fn resize_keeps_cells_in_range() {
    let world = new_world_with(&[(1, 1), (0, 2), (2, 1), (4, 2), (4, 3), (4, 4)]);

    world.resize(5, 3).unwrap();

    // Cells with row >= 3 are dropped.
    world_is_exactly(&world, &[(1, 1), (0, 2), (2, 1), (4, 2)]);
}

#[test]
fn resize_keeps_generation_counter() {
    let world = new_world_with(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
    world.advance();
    world.advance();
    world.resize(7, 7).unwrap();
    assert_eq!(world.generations(), 2);
}

#[test]
fn clear_resets_grid() {
    let world = new_world_with(&[(1, 1), (0, 2), (2, 1), (4, 2)]);
    world.advance();
    world.clear();
    world_is_exactly(&world, &[]);
    assert_eq!(world.generations(), 0);
}

#[test]
fn advance_kills_lonely_cell() {
    let world = new_world_with(&[(3, 3)]);
    world.advance();
    world_is_exactly(&world, &[]);
}

#[test]
fn advance_keeps_block_stable() {
    let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let world = new_world_with(&block);
    world.advance();
    world_is_exactly(&world, &block);
}

#[test]
fn advance_oscillates_blinker() {
    let line = [(1, 2), (2, 2), (3, 2)];
    let column = [(2, 1), (2, 2), (2, 3)];
    let world = new_world_with(&line);

    world.advance();
    world_is_exactly(&world, &column);

    world.advance();
    world_is_exactly(&world, &line);
}

#[test]
fn advance_births_at_hard_edge() {
    // A blinker against the top border: the cell above the line is out
    // of the grid and must not wrap around to the bottom row.
    let world = new_world_with(&[(1, 0), (2, 0), (3, 0)]);
    world.advance();
    world_is_exactly(&world, &[(2, 0), (2, 1)]);
}

#[test]
fn generations_counts_advances_only() {
    let world = new_world();
    assert_eq!(world.generations(), 0);
    for _ in 0..3 {
        world.advance();
    }
    world.set_alive(1, 1).unwrap();
    world.resize(6, 6).unwrap();
    assert_eq!(world.generations(), 3);
    world.clear();
    assert_eq!(world.generations(), 0);
}

#[test]
fn population_returns_a_snapshot() {
    let world = new_world_with(&[(1, 1)]);
    let mut snapshot = world.population();
    snapshot.insert(Cell::new(4, 4));
    world_is_exactly(&world, &[(1, 1)]);
}

#[test]
fn display_renders_rows() {
    let world = Grid::new(3, 2).unwrap();
    world.set_alive(0, 0).unwrap();
    world.set_alive(2, 1).unwrap();
    assert_eq!(world.to_string(), "X..\n..X");
}

#[test]
fn cell_size_parses_presets() {
    assert_eq!("small".parse::<CellSize>().unwrap(), CellSize::Small);
    assert_eq!("Medium".parse::<CellSize>().unwrap(), CellSize::Medium);
    assert_eq!("LARGE".parse::<CellSize>().unwrap(), CellSize::Large);
    assert_eq!(
        "tiny".parse::<CellSize>().err(),
        Some(Error::UnknownSizePreset("tiny".to_owned()))
    );
    assert_eq!(CellSize::Small.pixels(), 10);
    assert_eq!(CellSize::Medium.pixels(), 20);
    assert_eq!(CellSize::Large.pixels(), 30);
    assert_eq!(CellSize::default(), CellSize::Large);
}

#[test]
fn randomize_respects_density_extremes() {
    let world = new_world();
    world.randomize(1.0);
    assert_eq!(world.population().len(), (COLUMNS * ROWS) as usize);
    world.randomize(0.0);
    world_is_exactly(&world, &[]);
    assert_eq!(world.generations(), 0);
}
