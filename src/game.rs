//! Engine facade: the board, the players, and move validation and application.
//!
//! The game knows nothing about turns or winners; every operation takes the
//! acting player explicitly. See [`crate::session`] for turn sequencing.

use std::collections::HashSet;

use crate::cell::{Cell, Orientation};
use crate::config::GameConfig;
use crate::error::{ConfigError, IllegalMove, ParseError};
use crate::fences::{self, legal_fences};
use crate::grid::Grid;
use crate::moves::Move;
use crate::pathfinding;
use crate::pawn_moves::{is_legal_destination, legal_destinations};

/// One player's pawn, goal cells and fence inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pawn: Cell,
    pub goals: HashSet<Cell>,
    pub remaining_fences: usize,
}

impl Player {
    pub fn new(pawn: Cell, goals: HashSet<Cell>, remaining_fences: usize) -> Self {
        Self {
            pawn,
            goals,
            remaining_fences,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    players: Vec<Player>,
}

impl Game {
    /// Set up a new game.
    ///
    /// Player 0 starts in the middle of row 1 and heads for the last row;
    /// player 1 starts in the middle of the last row and heads for row 1.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.width, config.height);
        let column = config.width / 2;
        let last_row = config.height - 1;
        let fences = config.fences_per_player();
        let players = vec![
            Player::new(
                Cell::new(column, 0),
                grid.row(last_row).into_iter().collect(),
                fences,
            ),
            Player::new(
                Cell::new(column, last_row),
                grid.row(0).into_iter().collect(),
                fences,
            ),
        ];

        Ok(Self {
            config,
            grid,
            players,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn pawn(&self, player: usize) -> Cell {
        self.players[player].pawn
    }

    pub fn pawns(&self) -> Vec<Cell> {
        self.players.iter().map(|p| p.pawn).collect()
    }

    /// Index of the player whose pawn stands on `cell`.
    pub fn pawn_at(&self, cell: Cell) -> Option<usize> {
        self.players.iter().position(|p| p.pawn == cell)
    }

    pub fn remaining_fences(&self, player: usize) -> usize {
        self.players[player].remaining_fences
    }

    pub fn is_goal(&self, cell: Cell, player: usize) -> bool {
        self.players[player].goals.contains(&cell)
    }

    /// Check if a player has reached their goal row.
    pub fn has_won(&self, player: usize) -> bool {
        self.is_goal(self.pawn(player), player)
    }

    /// Put a pawn on an arbitrary free cell, for setting up positions.
    #[cfg(test)]
    fn place_pawn(&mut self, player: usize, cell: Cell) {
        assert!(self.grid.contains(cell), "{} is off the board", cell);
        assert!(
            self.pawn_at(cell).map_or(true, |other| other == player),
            "{} is already occupied",
            cell
        );
        self.players[player].pawn = cell;
    }

    /// Parse move notation against this board's dimensions.
    pub fn parse_move(&self, text: &str) -> Result<Move, ParseError> {
        Move::parse(text, self.grid.width(), self.grid.height())
    }

    /// Check whether `player` may make `mv`, and why not if they may not.
    /// Never changes the game.
    pub fn check(&self, player: usize, mv: &Move) -> Result<(), IllegalMove> {
        let target = mv.target();
        if !self.grid.contains(target) {
            return Err(IllegalMove::OffBoard { cell: target });
        }

        match *mv {
            Move::Pawn(target) => {
                let from = self.pawn(player);
                if is_legal_destination(&self.grid, from, &self.pawns(), target) {
                    Ok(())
                } else {
                    Err(IllegalMove::UnreachableSquare { from, to: target })
                }
            }
            Move::FenceHorizontal(anchor) => {
                self.check_fence(player, anchor, Orientation::Horizontal)
            }
            Move::FenceVertical(anchor) => {
                self.check_fence(player, anchor, Orientation::Vertical)
            }
        }
    }

    fn check_fence(
        &self,
        player: usize,
        anchor: Cell,
        orientation: Orientation,
    ) -> Result<(), IllegalMove> {
        fences::check_fence(
            &self.grid,
            &self.players,
            player,
            anchor,
            orientation,
            self.config.fence_rules(),
        )
    }

    pub fn validate(&self, player: usize, mv: &Move) -> bool {
        self.check(player, mv).is_ok()
    }

    /// Apply a move for `player`.
    ///
    /// Only call this after [`Game::validate`] returned true for the same move
    /// on the same state; nothing is checked here.
    pub fn apply(&mut self, player: usize, mv: &Move) {
        match *mv {
            Move::Pawn(target) => {
                self.players[player].pawn = target;
            }
            Move::FenceHorizontal(anchor) => {
                self.place_fence(player, anchor, Orientation::Horizontal)
            }
            Move::FenceVertical(anchor) => {
                self.place_fence(player, anchor, Orientation::Vertical)
            }
        }
    }

    fn place_fence(&mut self, player: usize, anchor: Cell, orientation: Orientation) {
        self.grid.place_wall(anchor, orientation);
        if self.config.enforce_fence_limit {
            let remaining = &mut self.players[player].remaining_fences;
            *remaining = remaining.saturating_sub(1);
        }
    }

    pub fn can_reach_goal(&self, player: usize) -> bool {
        let p = &self.players[player];
        pathfinding::reachable(&self.grid, p.pawn, &p.goals)
    }

    /// Fewest steps to the goal row, ignoring pawns.
    pub fn distance_to_goal(&self, player: usize) -> Option<usize> {
        let p = &self.players[player];
        pathfinding::distance_to_goal(&self.grid, p.pawn, &p.goals)
    }

    pub fn legal_pawn_moves(&self, player: usize) -> Vec<Move> {
        legal_destinations(&self.grid, self.pawn(player), &self.pawns())
            .into_iter()
            .map(Move::Pawn)
            .collect()
    }

    pub fn legal_fence_moves(&self, player: usize) -> Vec<Move> {
        legal_fences(&self.grid, &self.players, player, self.config.fence_rules())
            .into_iter()
            .map(|(anchor, orientation)| Move::fence(anchor, orientation))
            .collect()
    }

    /// All legal moves for `player`: pawn moves first, then fences.
    pub fn legal_moves(&self, player: usize) -> Vec<Move> {
        let mut moves = self.legal_pawn_moves(player);
        moves.extend(self.legal_fence_moves(player));
        moves
    }
}
