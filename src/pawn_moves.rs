//! Legal pawn destinations: single steps, straight jumps over an adjacent
//! pawn, and diagonal jumps when the straight jump is fenced or off the board.

use std::collections::BTreeSet;

use crate::cell::{Cell, Direction};
use crate::grid::Grid;

/// Compute every cell the pawn on `mover` may move to this turn.
///
/// `pawns` lists the cells of all pawns on the board, the mover included.
pub fn legal_destinations(grid: &Grid, mover: Cell, pawns: &[Cell]) -> BTreeSet<Cell> {
    let occupied = |cell: Cell| cell != mover && pawns.contains(&cell);
    let mut destinations = BTreeSet::new();

    for direction in Direction::ALL {
        let Some(next) = grid.open_neighbor(mover, direction) else {
            continue;
        };

        if !occupied(next) {
            destinations.insert(next);
            continue;
        }

        // Straight jump over the pawn rules out the diagonals
        if let Some(beyond) = grid.open_neighbor(next, direction) {
            destinations.insert(beyond);
            continue;
        }

        for side in direction.orthogonal() {
            if let Some(diagonal) = grid.open_neighbor(next, side) {
                destinations.insert(diagonal);
            }
        }
    }

    // Only matters with more than two pawns, where a jump could land on a third one
    destinations.retain(|&cell| !occupied(cell));
    destinations
}

/// Whether the pawn on `mover` may move to `target`.
pub fn is_legal_destination(grid: &Grid, mover: Cell, pawns: &[Cell], target: Cell) -> bool {
    legal_destinations(grid, mover, pawns).contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Orientation;

    fn cells(list: &[(usize, usize)]) -> BTreeSet<Cell> {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_simple_steps() {
        let grid = Grid::new(9, 9);
        let mover = Cell::new(4, 4);
        let pawns = [mover, Cell::new(4, 8)];

        assert_eq!(
            legal_destinations(&grid, mover, &pawns),
            cells(&[(3, 4), (5, 4), (4, 3), (4, 5)])
        );
    }

    #[test]
    fn test_corner_movements() {
        let grid = Grid::new(9, 9);
        let mover = Cell::new(0, 0);
        let pawns = [mover, Cell::new(8, 8)];

        assert_eq!(
            legal_destinations(&grid, mover, &pawns),
            cells(&[(1, 0), (0, 1)])
        );
    }

    #[test]
    fn test_movements_with_walls() {
        let mut grid = Grid::new(9, 9);
        // Fence east and south of e5
        grid.place_wall(Cell::new(4, 4), Orientation::Vertical);
        grid.place_wall(Cell::new(4, 4), Orientation::Horizontal);
        let mover = Cell::new(4, 4);
        let pawns = [mover, Cell::new(0, 8)];

        assert_eq!(
            legal_destinations(&grid, mover, &pawns),
            cells(&[(3, 4), (4, 3)])
        );
    }

    #[test]
    fn test_straight_jump() {
        // Mover on e5, opponent on e6
        let grid = Grid::new(9, 9);
        let mover = Cell::new(4, 4);
        let opponent = Cell::new(4, 5);
        let pawns = [mover, opponent];

        let destinations = legal_destinations(&grid, mover, &pawns);
        assert_eq!(destinations, cells(&[(3, 4), (5, 4), (4, 3), (4, 6)]));

        // The occupied square itself and the diagonals are not allowed
        assert!(!destinations.contains(&opponent));
        assert!(!destinations.contains(&Cell::new(3, 5)));
        assert!(!destinations.contains(&Cell::new(5, 5)));
    }

    #[test]
    fn test_diagonal_jump_behind_wall() {
        // Mover on e5, opponent on e6, fence between e6 and e7
        let mut grid = Grid::new(9, 9);
        grid.place_wall(Cell::new(4, 5), Orientation::Horizontal);
        let mover = Cell::new(4, 4);
        let pawns = [mover, Cell::new(4, 5)];

        let destinations = legal_destinations(&grid, mover, &pawns);
        assert_eq!(
            destinations,
            cells(&[(3, 4), (5, 4), (4, 3), (3, 5), (5, 5)])
        );
        assert!(!destinations.contains(&Cell::new(4, 6)));
    }

    #[test]
    fn test_diagonal_jump_at_board_edge() {
        // Opponent on the last row: the straight jump would leave the board
        let grid = Grid::new(9, 9);
        let mover = Cell::new(4, 7);
        let pawns = [mover, Cell::new(4, 8)];

        assert_eq!(
            legal_destinations(&grid, mover, &pawns),
            cells(&[(3, 7), (5, 7), (4, 6), (3, 8), (5, 8)])
        );
    }

    #[test]
    fn test_diagonal_jump_partially_fenced() {
        let mut grid = Grid::new(9, 9);
        grid.place_wall(Cell::new(4, 5), Orientation::Horizontal);
        // Vertical fence west of e6 (anchored at d5 it covers rows 5 and 6)
        grid.place_wall(Cell::new(3, 4), Orientation::Vertical);
        let mover = Cell::new(4, 4);
        let pawns = [mover, Cell::new(4, 5)];

        let destinations = legal_destinations(&grid, mover, &pawns);
        assert!(destinations.contains(&Cell::new(5, 5)));
        assert!(!destinations.contains(&Cell::new(3, 5)));
        // The same fence also blocks the step west from e5
        assert!(!destinations.contains(&Cell::new(3, 4)));
    }

    #[test]
    fn test_no_jump_through_wall() {
        let mut grid = Grid::new(9, 9);
        // Fence between e5 and e6
        grid.place_wall(Cell::new(4, 4), Orientation::Horizontal);
        let mover = Cell::new(4, 4);
        let pawns = [mover, Cell::new(4, 5)];

        let destinations = legal_destinations(&grid, mover, &pawns);
        assert_eq!(destinations, cells(&[(3, 4), (5, 4), (4, 3)]));
        assert!(is_legal_destination(&grid, mover, &pawns, Cell::new(4, 3)));
        assert!(!is_legal_destination(&grid, mover, &pawns, Cell::new(4, 6)));
    }

    #[test]
    fn test_jump_never_lands_on_third_pawn() {
        let grid = Grid::new(9, 9);
        let mover = Cell::new(4, 4);
        let pawns = [mover, Cell::new(4, 5), Cell::new(4, 6)];

        let destinations = legal_destinations(&grid, mover, &pawns);
        assert!(!destinations.contains(&Cell::new(4, 6)));
        assert!(!destinations.contains(&Cell::new(4, 5)));
    }
}
