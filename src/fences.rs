//! Fence placement legality.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::{Cell, Direction, Orientation};
use crate::error::IllegalMove;
use crate::game::Player;
use crate::grid::Grid;
use crate::pathfinding::reachable;

/// Which board the no-trap check looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapCheck {
    /// Check paths with the candidate fence in place (standard rules).
    #[default]
    WithCandidate,
    /// Check paths on the board as it was before the candidate fence. This
    /// lets a fence through even if it is the one that closes the last path.
    PreExisting,
}

/// Switches that decide how strictly fences are validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FenceRules {
    pub enforce_fence_limit: bool,
    pub trap_check: TrapCheck,
}

impl Default for FenceRules {
    fn default() -> Self {
        Self {
            enforce_fence_limit: true,
            trap_check: TrapCheck::WithCandidate,
        }
    }
}

/// The next anchor along a fence's own direction; a fence there shares a unit edge.
fn extension(orientation: Orientation) -> Direction {
    match orientation {
        Orientation::Horizontal => Direction::East,
        Orientation::Vertical => Direction::South,
    }
}

/// Check whether `acting` may anchor a fence of `orientation` at `anchor`.
///
/// Checks run in order and stop at the first failure: anchor on the board,
/// fence inventory, duplicate anchor, collinear overlap with the next anchor,
/// and finally the no-trap rule for every player.
pub fn check_fence(
    grid: &Grid,
    players: &[Player],
    acting: usize,
    anchor: Cell,
    orientation: Orientation,
    rules: FenceRules,
) -> Result<(), IllegalMove> {
    if !grid.contains(anchor) {
        return Err(IllegalMove::OffBoard { cell: anchor });
    }

    if rules.enforce_fence_limit && players[acting].remaining_fences == 0 {
        return Err(IllegalMove::NoFencesLeft { player: acting });
    }

    if grid.has_wall(anchor, orientation) {
        return Err(IllegalMove::DuplicateFence);
    }

    let overlaps = grid
        .neighbor(anchor, extension(orientation))
        .is_some_and(|next| grid.has_wall(next, orientation));
    if overlaps {
        return Err(IllegalMove::OverlappingFence);
    }

    let board = match rules.trap_check {
        TrapCheck::WithCandidate => Cow::Owned(grid.with_wall(anchor, orientation)),
        TrapCheck::PreExisting => Cow::Borrowed(grid),
    };
    for (index, player) in players.iter().enumerate() {
        if !reachable(&board, player.pawn, &player.goals) {
            debug!(
                "Fence {:?} at {} would trap player {} on {}",
                orientation, anchor, index, player.pawn
            );
            return Err(IllegalMove::TrapsPlayer { player: index });
        }
    }

    Ok(())
}

/// Get every fence placement available to `acting`.
pub fn legal_fences(
    grid: &Grid,
    players: &[Player],
    acting: usize,
    rules: FenceRules,
) -> Vec<(Cell, Orientation)> {
    if rules.enforce_fence_limit && players[acting].remaining_fences == 0 {
        return Vec::new();
    }

    let mut placements = Vec::new();
    for anchor in grid.cells() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if check_fence(grid, players, acting, anchor, orientation, rules).is_ok() {
                placements.push((anchor, orientation));
            }
        }
    }
    placements
}
