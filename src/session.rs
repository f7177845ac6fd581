//! Turn sequencing and win detection on top of [`Game`].
//!
//! The session owns the turn counter; the engine only ever sees an explicit
//! acting player. Turns are numbered from 1 and the current player is
//! `turn % players`, so player 1 (starting on the last row) moves first.

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{IllegalMove, SessionError};
use crate::game::Game;
use crate::moves::Move;

/// What happened to a move submitted to [`Session::play`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The move was applied and the turn passed on.
    Played { player: usize, mv: Move },
    /// The move was applied and put the pawn on its goal row.
    Won { player: usize, mv: Move },
    /// The move breaks the rules; nothing changed and the same player is up again.
    Rejected {
        player: usize,
        mv: Move,
        reason: IllegalMove,
    },
}

#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    game: Option<Game>,
    turn: usize,
    winner: Option<usize>,
}

impl Session {
    /// Create a session that has not started yet.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            game: None,
            turn: 0,
            winner: None,
        }
    }

    /// Set up a fresh board and begin at turn 1. Restarts a running game.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let game = Game::new(self.config.clone())?;
        info!(
            "Starting a {}x{} game with {} fences per player",
            self.config.width,
            self.config.height,
            self.config.fences_per_player()
        );
        self.game = Some(game);
        self.turn = 1;
        self.winner = None;
        Ok(())
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Started and nobody has won yet.
    pub fn is_running(&self) -> bool {
        self.game.is_some() && self.winner.is_none()
    }

    /// The player whose move is expected next.
    pub fn current_player(&self) -> Result<usize, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NotStarted)?;
        Ok(self.turn % game.player_count())
    }

    /// Parse, validate and apply a move for the current player.
    pub fn play(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NotStarted)?;
        if let Some(winner) = self.winner {
            return Err(SessionError::Finished { winner });
        }

        let player = self.turn % game.player_count();
        let mv = game.parse_move(text).map_err(|err| {
            warn!("Player {} sent an unreadable move {:?}: {}", player, text, err);
            err
        })?;

        if let Err(reason) = game.check(player, &mv) {
            debug!("Rejected {} from player {}: {}", mv, player, reason);
            return Ok(Outcome::Rejected { player, mv, reason });
        }

        game.apply(player, &mv);
        info!("Turn {}: player {} played {}", self.turn, player, mv);

        if game.has_won(player) {
            info!("Player {} has won on {}", player, game.pawn(player));
            self.winner = Some(player);
            return Ok(Outcome::Won { player, mv });
        }

        self.turn += 1;
        Ok(Outcome::Played { player, mv })
    }
}
