use std::collections::{HashSet, VecDeque};

use crate::cell::Cell;
use crate::grid::Grid;

/// Check whether any cell of `goals` can be reached from `start` using BFS.
///
/// Only fences obstruct the search; pawns are ignored.
pub fn reachable(grid: &Grid, start: Cell, goals: &HashSet<Cell>) -> bool {
    distance_to_goal(grid, start, goals).is_some()
}

/// Calculate the fewest steps from `start` to any cell of `goals` using BFS.
///
/// # Arguments
/// * `grid` - The board with its current fences
/// * `start` - Starting cell (typically a pawn)
/// * `goals` - Target cells (typically a whole row)
///
/// # Returns
/// The minimum number of single steps, ignoring pawns, or `None` if every
/// route is fenced off.
pub fn distance_to_goal(grid: &Grid, start: Cell, goals: &HashSet<Cell>) -> Option<usize> {
    if goals.contains(&start) {
        return Some(0);
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    let index = |cell: Cell| cell.y * grid.width() + cell.x;

    let mut queue = VecDeque::new();
    visited[index(start)] = true;
    queue.push_back((start, 0));

    while let Some((cell, steps)) = queue.pop_front() {
        for next in grid.cardinal_open_neighbors(cell) {
            if visited[index(next)] {
                continue;
            }
            if goals.contains(&next) {
                return Some(steps + 1);
            }
            visited[index(next)] = true;
            queue.push_back((next, steps + 1));
        }
    }

    // No path found
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Orientation;

    fn goal_row(grid: &Grid, y: usize) -> HashSet<Cell> {
        grid.row(y).into_iter().collect()
    }

    #[test]
    fn test_distance_to_row_simple() {
        let grid = Grid::new(5, 5);
        let goals = goal_row(&grid, 4);

        // No walls between positions, should be direct distance
        assert_eq!(distance_to_goal(&grid, Cell::new(0, 0), &goals), Some(4));
        assert!(reachable(&grid, Cell::new(0, 0), &goals));
    }

    #[test]
    fn test_distance_to_row_same_position() {
        let grid = Grid::new(5, 5);
        let goals = goal_row(&grid, 2);
        assert_eq!(distance_to_goal(&grid, Cell::new(2, 2), &goals), Some(0));
    }

    #[test]
    fn test_detour_around_wall() {
        let mut grid = Grid::new(5, 5);
        // Fence off the south edge of b1 and c1
        grid.place_wall(Cell::new(1, 0), Orientation::Horizontal);
        let goals = goal_row(&grid, 4);

        // From c1 the pawn has to sidestep to d1 first
        assert_eq!(distance_to_goal(&grid, Cell::new(2, 0), &goals), Some(5));
        assert_eq!(distance_to_goal(&grid, Cell::new(0, 0), &goals), Some(4));
    }

    #[test]
    fn test_full_barrier_is_unreachable() {
        let mut grid = Grid::new(5, 5);
        for x in [0, 2, 4] {
            grid.place_wall(Cell::new(x, 1), Orientation::Horizontal);
        }
        let south = goal_row(&grid, 4);
        let north = goal_row(&grid, 0);

        assert!(!reachable(&grid, Cell::new(2, 0), &south));
        assert!(!reachable(&grid, Cell::new(2, 4), &north));
        assert_eq!(distance_to_goal(&grid, Cell::new(2, 4), &north), None);
        // Still fine on the same side of the barrier
        assert!(reachable(&grid, Cell::new(2, 4), &goal_row(&grid, 2)));
    }

    #[test]
    fn test_walls_never_open_paths() {
        // Fill the board with fences in a fixed order and make sure that a goal,
        // once unreachable, stays unreachable.
        let mut grid = Grid::new(6, 6);
        let start = Cell::new(3, 0);
        let goals = goal_row(&grid, 5);

        let mut anchors = Vec::new();
        for y in 0..6 {
            for x in 0..6 {
                let orientation = if (x * 7 + y * 3) % 2 == 0 {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                anchors.push((Cell::new((x * 5 + y) % 6, y), orientation));
            }
        }

        let mut previous = reachable(&grid, start, &goals);
        let mut previous_distance = distance_to_goal(&grid, start, &goals);
        for (anchor, orientation) in anchors {
            grid.place_wall(anchor, orientation);
            let now = reachable(&grid, start, &goals);
            assert!(previous || !now, "a fence at {} opened a path", anchor);

            // Distances can only grow
            let distance = distance_to_goal(&grid, start, &goals);
            if let (Some(before), Some(after)) = (previous_distance, distance) {
                assert!(after >= before);
            }
            previous = now;
            previous_distance = distance;
        }
    }
}
