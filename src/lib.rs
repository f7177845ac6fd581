//! Rules engine for Quoridor.
//!
//! [`game::Game`] holds the board and validates and applies moves for an
//! explicit acting player. [`session::Session`] adds turn order and win
//! detection on top, and [`render::draw`] turns a position into text.

pub mod cell;
pub mod config;
pub mod error;
pub mod fences;
pub mod game;
pub mod grid;
pub mod moves;
pub mod pathfinding;
pub mod pawn_moves;
pub mod render;
pub mod session;

pub use cell::{Cell, Direction, Orientation};
pub use config::{load_config, GameConfig};
pub use error::{ConfigError, IllegalMove, ParseError, SessionError};
pub use fences::{FenceRules, TrapCheck};
pub use game::{Game, Player};
pub use grid::Grid;
pub use moves::Move;
pub use render::draw;
pub use session::{Outcome, Session};
