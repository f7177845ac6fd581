//! Board storage and adjacency.
//!
//! Every cell carries two wall flags. A flag on an anchor cell stands for a
//! fence two grid units long:
//!
//! - vertical at `(x, y)` separates columns `x` and `x + 1` on rows `y` and `y + 1`
//! - horizontal at `(x, y)` separates rows `y` and `y + 1` on columns `x` and `x + 1`
//!
//! The half of a fence that hangs past the board edge blocks nothing.

use ndarray::Array2;

use crate::cell::{Cell, Direction, Orientation};

/// Wall flags stored on one anchor cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallFlags {
    pub horizontal: bool,
    pub vertical: bool,
}

impl WallFlags {
    fn get(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

/// Fixed-size board of wall flags, indexed `[[y, x]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    walls: Array2<WallFlags>,
}

impl Grid {
    /// Create an empty `width x height` board.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Self {
            walls: Array2::from_elem((height, width), WallFlags::default()),
        }
    }

    pub fn width(&self) -> usize {
        self.walls.ncols()
    }

    pub fn height(&self) -> usize {
        self.walls.nrows()
    }

    fn contains_signed(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width() && cell.y < self.height()
    }

    /// The cell at `(x, y)`, if it lies on the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        let cell = Cell::new(x, y);
        self.contains(cell).then_some(cell)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// All cells of row `y`.
    pub fn row(&self, y: usize) -> Vec<Cell> {
        assert!(y < self.height());
        (0..self.width()).map(|x| Cell::new(x, y)).collect()
    }

    /// Adjacent cell in `direction`, or `None` when it would leave the board.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = cell.x as isize + dx;
        let y = cell.y as isize + dy;
        if self.contains_signed(x, y) {
            Some(Cell::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Raw flag lookup; anchors outside the board never hold a wall.
    fn flag(&self, x: isize, y: isize, orientation: Orientation) -> bool {
        self.contains_signed(x, y) && self.walls[[y as usize, x as usize]].get(orientation)
    }

    /// Whether a fence of `orientation` is anchored at `cell`.
    pub fn has_wall(&self, cell: Cell, orientation: Orientation) -> bool {
        self.flag(cell.x as isize, cell.y as isize, orientation)
    }

    /// Whether the unit edge leaving `cell` towards `direction` is fenced.
    pub fn edge_blocked(&self, cell: Cell, direction: Direction) -> bool {
        use Orientation::{Horizontal, Vertical};

        let x = cell.x as isize;
        let y = cell.y as isize;
        match direction {
            // A vertical fence covers its anchor row and the row below it
            Direction::East => self.flag(x, y, Vertical) || self.flag(x, y - 1, Vertical),
            Direction::West => {
                self.flag(x - 1, y, Vertical) || self.flag(x - 1, y - 1, Vertical)
            }
            // A horizontal fence covers its anchor column and the column to its right
            Direction::South => self.flag(x, y, Horizontal) || self.flag(x - 1, y, Horizontal),
            Direction::North => {
                self.flag(x, y - 1, Horizontal) || self.flag(x - 1, y - 1, Horizontal)
            }
        }
    }

    /// Adjacent cell in `direction` if it exists and no fence is in the way.
    pub fn open_neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if self.edge_blocked(cell, direction) {
            return None;
        }
        self.neighbor(cell, direction)
    }

    /// Cells one open step away. Pawns are not obstacles here.
    pub fn cardinal_open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.open_neighbor(cell, direction))
    }

    /// Set the fence flag at `cell`. No legality checks are made here.
    pub fn place_wall(&mut self, cell: Cell, orientation: Orientation) {
        assert!(self.contains(cell), "wall anchor {} is off the board", cell);
        let flags = &mut self.walls[[cell.y, cell.x]];
        match orientation {
            Orientation::Horizontal => flags.horizontal = true,
            Orientation::Vertical => flags.vertical = true,
        }
    }

    /// Copy of this grid with one more fence, for tentative checks.
    pub fn with_wall(&self, cell: Cell, orientation: Orientation) -> Grid {
        let mut grid = self.clone();
        grid.place_wall(cell, orientation);
        grid
    }

    /// Number of fence flags set on the board.
    pub fn wall_count(&self) -> usize {
        self.walls
            .iter()
            .map(|flags| flags.horizontal as usize + flags.vertical as usize)
            .sum()
    }
}
