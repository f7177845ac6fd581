//! The three kinds of move and their text notation.
//!
//! Notation is `<column><row>[<orientation>]`: a lowercase column letter, a
//! 1-based row number and an optional `h`/`v` for a fence anchored there.
//! `e8` moves a pawn, `e6h` places a horizontal fence anchored at e6.

use std::fmt;

use crate::cell::{Cell, Orientation};
use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move the acting player's pawn to the cell.
    Pawn(Cell),
    /// Place a horizontal fence anchored at the cell.
    FenceHorizontal(Cell),
    /// Place a vertical fence anchored at the cell.
    FenceVertical(Cell),
}

impl Move {
    pub fn fence(anchor: Cell, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Move::FenceHorizontal(anchor),
            Orientation::Vertical => Move::FenceVertical(anchor),
        }
    }

    /// The destination cell for pawn moves, the anchor for fences.
    pub fn target(&self) -> Cell {
        match *self {
            Move::Pawn(cell) | Move::FenceHorizontal(cell) | Move::FenceVertical(cell) => cell,
        }
    }

    /// Anchor and orientation if this move places a fence.
    pub fn as_fence(&self) -> Option<(Cell, Orientation)> {
        match *self {
            Move::Pawn(_) => None,
            Move::FenceHorizontal(anchor) => Some((anchor, Orientation::Horizontal)),
            Move::FenceVertical(anchor) => Some((anchor, Orientation::Vertical)),
        }
    }

    /// Parse a move in notation for a `width x height` board.
    pub fn parse(text: &str, width: usize, height: usize) -> Result<Self, ParseError> {
        let text = text.trim();
        let mut chars = text.chars();

        let column = chars.next().ok_or(ParseError::Empty)?;
        if !column.is_ascii_lowercase() {
            return Err(ParseError::InvalidColumn(column));
        }
        let x = (column as u8 - b'a') as usize;

        let rest = chars.as_str();
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, suffix) = rest.split_at(digits_end);
        let row: usize = digits
            .parse()
            .map_err(|_| ParseError::InvalidRow(digits.to_string()))?;

        let orientation = match suffix {
            "" => None,
            "h" => Some(Orientation::Horizontal),
            "v" => Some(Orientation::Vertical),
            other => return Err(ParseError::UnknownSuffix(other.to_string())),
        };

        if row == 0 || x >= width || row > height {
            return Err(ParseError::OutOfBounds {
                notation: format!("{}{}", column, digits),
                width,
                height,
            });
        }

        let cell = Cell::new(x, row - 1);
        Ok(match orientation {
            None => Move::Pawn(cell),
            Some(orientation) => Move::fence(cell, orientation),
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_fence() {
            None => write!(f, "{}", self.target()),
            Some((anchor, orientation)) => write!(f, "{}{}", anchor, orientation.suffix()),
        }
    }
}
