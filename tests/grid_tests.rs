use navalgrid::{Cell, Grid, GridError};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(10);
    assert_eq!(grid.size(), 10);
    assert_eq!(grid.count(Cell::Empty), 100);
    assert_eq!(grid.count(Cell::Occupied), 0);
    assert_eq!(grid.rows().count(), 10);
}

#[test]
fn test_get_set_and_bounds() {
    let mut grid = Grid::new(4);
    grid.set(3, 1, Cell::Occupied).unwrap();
    assert_eq!(grid.get(3, 1).unwrap(), Cell::Occupied);
    assert_eq!(grid.cell_at(3, 1), Some(Cell::Occupied));
    assert_eq!(grid.cell_at(-1, 1), None);
    assert_eq!(
        grid.set(4, 0, Cell::Effect).unwrap_err(),
        GridError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert_eq!(
        grid.get(0, 4).unwrap_err(),
        GridError::IndexOutOfBounds { row: 0, col: 4 }
    );
}

#[test]
fn test_cells_with_is_row_major() {
    let mut grid = Grid::new(3);
    grid.set(2, 0, Cell::Effect).unwrap();
    grid.set(0, 2, Cell::Effect).unwrap();
    grid.set(1, 1, Cell::Occupied).unwrap();
    let effects: Vec<_> = grid.cells_with(Cell::Effect).collect();
    assert_eq!(effects, vec![(0, 2), (2, 0)]);
    assert_eq!(grid.count(Cell::Occupied), 1);

    grid.clear();
    assert_eq!(grid.count(Cell::Empty), 9);
}

#[test]
fn test_cell_tokens() {
    assert_eq!(Cell::Empty.to_string(), "0");
    assert_eq!(Cell::Occupied.to_string(), "3");
    assert_eq!(Cell::Effect.to_string(), "5");
    assert_eq!(Cell::default(), Cell::Empty);
    assert_eq!(Cell::Empty.code(), 0);
    assert_eq!(Cell::Occupied.code(), 3);
    assert_eq!(Cell::Effect.code(), 5);
}

#[test]
fn test_zero_sized_grid() {
    let grid = Grid::new(0);
    assert_eq!(grid.rows().count(), 0);
    assert_eq!(grid.cell_at(0, 0), None);
}
