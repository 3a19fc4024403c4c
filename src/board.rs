use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::{decode, Coord, Player, MAX_POS, N_COLS, N_ROWS, SLOTS};

/// Opening position: white blocks on row 0, black blocks on row 7,
/// each ball on the middle block.
pub const OPENING: [u8; SLOTS] = [1, 2, 3, 4, 5, 3, 50, 51, 52, 53, 54, 52];

/// The 12-slot piece configuration.
///
/// Slots 0..=4 are white blocks, 5 the white ball; 6..=10 black blocks,
/// 11 the black ball. Construction performs no validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    positions: [u8; SLOTS],
}

impl Default for BoardState {
    fn default() -> Self {
        Self { positions: OPENING }
    }
}

impl BoardState {
    #[inline]
    #[must_use]
    pub const fn from_positions(positions: [u8; SLOTS]) -> Self {
        Self { positions }
    }

    /// Build from raw integers (e.g. parsed JSON). Only the length and
    /// representability are checked here; call `validate` before trusting it.
    ///
    /// # Errors
    ///
    /// `WrongLength` unless there are 12 values, `OutOfRangeValue` for a
    /// value that does not fit a square index.
    pub fn from_slice(raw: &[i64]) -> Result<Self, BoardError> {
        if raw.len() != SLOTS {
            return Err(BoardError::WrongLength { len: raw.len() });
        }
        let mut positions = [0u8; SLOTS];
        for (i, &v) in raw.iter().enumerate() {
            positions[i] =
                u8::try_from(v).map_err(|_| BoardError::OutOfRangeValue { index: i, value: v })?;
        }
        Ok(Self { positions })
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[u8; SLOTS] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.positions[index]
    }

    #[inline]
    #[must_use]
    pub fn coord(&self, index: usize) -> Coord {
        decode(self.positions[index])
    }

    /// Overwrite one slot in place. No validity check.
    #[inline]
    pub fn update(&mut self, index: usize, pos: u8) {
        self.positions[index] = pos;
    }

    /// Copy with one slot replaced.
    #[inline]
    #[must_use]
    pub fn with_update(&self, index: usize, pos: u8) -> Self {
        let mut next = *self;
        next.positions[index] = pos;
        next
    }

    #[inline]
    #[must_use]
    pub fn ball_position(&self, player: Player) -> u8 {
        self.positions[player.ball_index()]
    }

    /// Absolute index of the block currently holding `player`'s ball.
    #[must_use]
    pub fn ball_holder(&self, player: Player) -> Option<usize> {
        let ball = self.ball_position(player);
        player.block_indices().find(|&i| self.positions[i] == ball)
    }

    /// Check every invariant.
    ///
    /// # Errors
    ///
    /// The first violated invariant, in slot order.
    pub fn validate(&self) -> Result<(), BoardError> {
        // Slot that first claimed each square, blocks only.
        let mut claimed: [Option<usize>; MAX_POS as usize + 1] = [None; MAX_POS as usize + 1];
        for (index, &pos) in self.positions.iter().enumerate() {
            if pos > MAX_POS {
                return Err(BoardError::OutOfRangeValue {
                    index,
                    value: i64::from(pos),
                });
            }
            if index == Player::White.ball_index() || index == Player::Black.ball_index() {
                continue;
            }
            if let Some(first) = claimed[usize::from(pos)] {
                return Err(BoardError::Overlap {
                    first,
                    second: index,
                    position: pos,
                });
            }
            claimed[usize::from(pos)] = Some(index);
        }
        for player in Player::all() {
            if self.ball_holder(player).is_none() {
                return Err(BoardError::BallNotHeld { player });
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Ball of `player` sits on its goal row. Ignores validity.
    #[inline]
    fn ball_on_goal_row(&self, player: Player) -> bool {
        decode(self.ball_position(player)).1 == player.goal_row()
    }

    /// Valid and either side's ball has reached its goal row.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_valid() && Player::all().iter().any(|&p| self.ball_on_goal_row(p))
    }

    /// Valid and `player`'s ball has reached its goal row.
    #[must_use]
    pub fn is_terminal_for(&self, player: Player) -> bool {
        self.is_valid() && self.ball_on_goal_row(player)
    }

    /// The side that satisfies its win condition, white checked first.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::all().into_iter().find(|&p| self.is_terminal_for(p))
    }
}

impl From<[u8; SLOTS]> for BoardState {
    fn from(positions: [u8; SLOTS]) -> Self {
        Self::from_positions(positions)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..N_ROWS).rev() {
            write!(f, "{row} ")?;
            for col in 0..N_COLS {
                let pos = row * N_COLS + col;
                let mut cell = '.';
                for player in Player::all() {
                    if player.block_indices().any(|i| self.positions[i] == pos) {
                        let holding = self.ball_position(player) == pos;
                        cell = match (player, holding) {
                            (Player::White, false) => 'W',
                            (Player::White, true) => 'w',
                            (Player::Black, false) => 'B',
                            (Player::Black, true) => 'b',
                        };
                    }
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  0123456")
    }
}
