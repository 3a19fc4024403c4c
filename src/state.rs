use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::types::{Player, SLOTS};

/// Relative index of the ball within a side's six slots.
pub const BALL_RELATIVE: u8 = 5;

/// A move expressed relative to the acting side: `relative_index` 0..=4
/// selects a block, 5 the ball.
///
/// Field order makes the derived `Ord` the canonical action order
/// (relative index, then target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub relative_index: u8,
    pub target: u8,
}

impl Action {
    #[inline]
    #[must_use]
    pub const fn new(relative_index: u8, target: u8) -> Self {
        Self {
            relative_index,
            target,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_ball(self) -> bool {
        self.relative_index == BALL_RELATIVE
    }

    #[inline]
    #[must_use]
    pub fn absolute_index(self, player: Player) -> usize {
        player.offset() + usize::from(self.relative_index)
    }
}

/// Board configuration tagged with the side to move. Equality and hashing
/// are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    pub positions: [u8; SLOTS],
    pub player: Player,
}

impl SearchState {
    #[inline]
    #[must_use]
    pub fn new(board: &BoardState, player: Player) -> Self {
        Self {
            positions: *board.positions(),
            player,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> BoardState {
        BoardState::from_positions(self.positions)
    }

    /// Copy-on-write transition: replace the acting side's slot and hand the
    /// move to the other side. No legality check.
    #[inline]
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        let mut positions = self.positions;
        positions[action.absolute_index(self.player)] = action.target;
        Self {
            positions,
            player: self.player.other(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.board().is_terminal()
    }
}
