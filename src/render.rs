//! Text art for the board.
//!
//! Row 1 is drawn at the top. Every cell takes four characters: the pawn box
//! and whatever stands on its east edge. Under each row comes a fence line
//! showing blocked south edges and the flag stored on each anchor.

use std::fmt;

use crate::cell::{Cell, Direction, Orientation};
use crate::game::Game;

/// Borrowing wrapper that renders a game with `Display`.
pub struct Board<'a>(pub &'a Game);

const MARGIN: &str = "    ";

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let grid = game.grid();

        let mut header = String::from(MARGIN);
        for x in 0..grid.width() {
            header.push(' ');
            header.push(Cell::new(x, 0).column_name());
            header.push_str("  ");
        }
        writeln!(f, "{}", header.trim_end())?;

        for y in 0..grid.height() {
            let mut cells = format!("{:>3} ", y + 1);
            let mut fences = String::from(MARGIN);

            for x in 0..grid.width() {
                let cell = Cell::new(x, y);
                match game.pawn_at(cell) {
                    Some(player) => cells.push_str(&format!("[{}]", player)),
                    None => cells.push_str("[ ]"),
                }
                cells.push(if grid.edge_blocked(cell, Direction::East) {
                    '|'
                } else {
                    ' '
                });

                fences.push_str(if grid.edge_blocked(cell, Direction::South) {
                    "---"
                } else {
                    "   "
                });
                fences.push(if grid.has_wall(cell, Orientation::Horizontal) {
                    '-'
                } else if grid.has_wall(cell, Orientation::Vertical) {
                    '|'
                } else {
                    ' '
                });
            }

            writeln!(f, "{}", cells.trim_end())?;
            writeln!(f, "{}", fences.trim_end())?;
        }
        Ok(())
    }
}

/// Draw the board as lines of text, one row of cells and one of fences per board row.
pub fn draw(game: &Game) -> String {
    Board(game).to_string()
}
