use navalgrid::{Cell, Grid, Orientation, PlacementError, ShipDescriptor, REFERENCE_FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn occupied(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells_with(Cell::Occupied).collect()
}

#[test]
fn test_reference_fleet_places_twelve_cells() {
    let mut grid = Grid::new(10);
    for ship in REFERENCE_FLEET.iter() {
        assert!(grid.try_place(ship), "failed to place {}", ship);
    }
    assert_eq!(grid.count(Cell::Occupied), 12);

    let mut expected = vec![
        (1, 2), (1, 3), (1, 4),
        (4, 6), (5, 6), (6, 6),
        (0, 0), (1, 1), (2, 2),
        (0, 9), (1, 8), (2, 7),
    ];
    expected.sort();
    assert_eq!(occupied(&grid), expected);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    let mut grid = Grid::new(10);
    let cases = [
        ShipDescriptor::new(0, 8, Orientation::Horizontal, 3),
        ShipDescriptor::new(8, 0, Orientation::Vertical, 3),
        ShipDescriptor::new(8, 8, Orientation::DiagonalDownRight, 3),
        ShipDescriptor::new(0, 1, Orientation::DiagonalDownLeft, 3),
        ShipDescriptor::new(10, 0, Orientation::Horizontal, 1),
    ];
    for ship in cases.iter() {
        assert!(!grid.can_place(ship));
        assert!(!grid.try_place(ship));
    }
    assert_eq!(grid, Grid::new(10));

    assert_eq!(
        grid.check_placement(&cases[0]).unwrap_err(),
        PlacementError::OutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(
        grid.check_placement(&cases[3]).unwrap_err(),
        PlacementError::OutOfBounds { row: 2, col: -1 }
    );
}

#[test]
fn test_overlap_rejected_and_first_ship_kept() {
    let mut grid = Grid::new(10);
    let first = ShipDescriptor::new(3, 3, Orientation::Horizontal, 3);
    // vertical run through (3,4)
    let second = ShipDescriptor::new(2, 4, Orientation::Vertical, 3);
    assert!(grid.try_place(&first));
    assert_eq!(
        grid.try_place_checked(&second).unwrap_err(),
        PlacementError::Overlap { row: 3, col: 4 }
    );
    assert_eq!(occupied(&grid), vec![(3, 3), (3, 4), (3, 5)]);
}

#[test]
fn test_crossing_diagonals_overlap() {
    let mut grid = Grid::new(10);
    assert!(grid.try_place(&ShipDescriptor::new(0, 0, Orientation::DiagonalDownRight, 3)));
    // shares (1,1)
    assert!(!grid.can_place(&ShipDescriptor::new(0, 2, Orientation::DiagonalDownLeft, 3)));
}

#[test]
fn test_corner_contact_is_allowed() {
    let mut grid = Grid::new(10);
    assert!(grid.try_place(&ShipDescriptor::new(0, 0, Orientation::Horizontal, 3)));
    // touches (0,2) only diagonally
    assert!(grid.try_place(&ShipDescriptor::new(1, 3, Orientation::Vertical, 3)));
    // adjacent row, no shared cell
    assert!(grid.try_place(&ShipDescriptor::new(1, 0, Orientation::Horizontal, 3)));
    assert_eq!(grid.count(Cell::Occupied), 9);
}

#[test]
fn test_effect_cells_block_placement() {
    let mut grid = Grid::new(5);
    grid.set(2, 2, Cell::Effect).unwrap();
    assert_eq!(
        grid.check_placement(&ShipDescriptor::new(2, 0, Orientation::Horizontal, 3))
            .unwrap_err(),
        PlacementError::Overlap { row: 2, col: 2 }
    );
}

#[test]
fn test_zero_length_rejected() {
    let mut grid = Grid::new(10);
    let ship = ShipDescriptor::new(0, 0, Orientation::Horizontal, 0);
    assert_eq!(grid.check_placement(&ship).unwrap_err(), PlacementError::ZeroLength);
    assert!(!grid.try_place(&ship));
    assert_eq!(grid.count(Cell::Occupied), 0);
}

#[test]
fn test_retry_after_failure() {
    let mut grid = Grid::new(10);
    assert!(!grid.try_place(&ShipDescriptor::new(0, 9, Orientation::Horizontal, 3)));
    assert!(grid.try_place(&ShipDescriptor::new(0, 7, Orientation::Horizontal, 3)));
    assert_eq!(occupied(&grid), vec![(0, 7), (0, 8), (0, 9)]);
}

#[test]
fn test_ship_longer_than_grid() {
    let grid = Grid::new(3);
    assert!(grid.can_place(&ShipDescriptor::new(0, 0, Orientation::Horizontal, 3)));
    assert!(!grid.can_place(&ShipDescriptor::new(0, 0, Orientation::Horizontal, 4)));
}

#[test]
fn test_random_placement_is_placeable_and_reproducible() {
    let mut grid = Grid::new(10);
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    for _ in 0..5 {
        let a = grid.random_placement(&mut rng1, 3).unwrap();
        let b = grid.random_placement(&mut rng2, 3).unwrap();
        assert_eq!(a, b);
        assert!(grid.try_place(&a));
    }
    assert_eq!(grid.count(Cell::Occupied), 15);
}

#[test]
fn test_random_placement_gives_up_on_full_grid() {
    let mut grid = Grid::new(2);
    for r in 0..2 {
        for c in 0..2 {
            grid.set(r, c, Cell::Occupied).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        grid.random_placement(&mut rng, 1).unwrap_err(),
        PlacementError::UnableToPlaceShip
    );
    assert_eq!(
        Grid::new(4).random_placement(&mut rng, 0).unwrap_err(),
        PlacementError::ZeroLength
    );
}

#[test]
fn test_segments_iterator() {
    let ship = ShipDescriptor::new(0, 9, Orientation::DiagonalDownLeft, 3);
    let cells: Vec<_> = ship.segments().collect();
    assert_eq!(cells, vec![Some((0, 9)), Some((1, 8)), Some((2, 7))]);
    assert_eq!(ship.segments().len(), 3);
}

#[test]
fn test_huge_origin_is_out_of_bounds() {
    let mut grid = Grid::new(10);
    let edge = ShipDescriptor::new(0, isize::MAX as usize, Orientation::Horizontal, 3);
    let cells: Vec<_> = edge.segments().collect();
    assert_eq!(cells, vec![Some((0, isize::MAX)), None, None]);
    assert_eq!(
        grid.check_placement(&edge).unwrap_err(),
        PlacementError::OutOfBounds { row: 0, col: isize::MAX }
    );

    // a row past isize::MAX must not wrap to -1 and step back onto the grid
    let wrapped = ShipDescriptor::new(usize::MAX, 0, Orientation::Vertical, 3);
    assert_eq!(
        grid.check_placement(&wrapped).unwrap_err(),
        PlacementError::OutOfBounds {
            row: isize::MAX,
            col: isize::MAX
        }
    );
    assert!(!grid.try_place(&wrapped));
    assert!(!grid.try_place(&ShipDescriptor::new(0, usize::MAX, Orientation::DiagonalDownLeft, 3)));
    assert_eq!(grid, Grid::new(10));
}
