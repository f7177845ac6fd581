//! Board coordinates, cardinal points and fence orientations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A square on the board, addressed by column `x` and row `y` (both 0-indexed).
///
/// Row 0 is printed as row `1` in move notation and sits at the northern edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Column letter used in move notation (`a` for column 0).
    ///
    /// Only columns `a` to `z` have a name; anything further right shows as `?`.
    pub fn column_name(&self) -> char {
        match u8::try_from(self.x) {
            Ok(x) if x < 26 => char::from(b'a' + x),
            _ => '?',
        }
    }

    /// 1-based row number used in move notation.
    pub fn row_name(&self) -> usize {
        self.y + 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_name(), self.row_name())
    }
}

/// The four cardinal points. North decreases `y`, south increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// The two directions at a right angle to this one.
    pub fn orthogonal(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::West | Direction::East => [Direction::North, Direction::South],
        }
    }

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
        }
    }
}

/// Orientation of a two-unit fence segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Suffix used in move notation.
    pub fn suffix(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}
