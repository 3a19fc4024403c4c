use serde::{Deserialize, Serialize};

/// Board width (columns 0..=6).
pub const N_COLS: u8 = 7;
/// Board height (rows 0..=7).
pub const N_ROWS: u8 = 8;

pub const MIN_POS: u8 = 0;
pub const MAX_POS: u8 = 55;

/// Number of slots in a board configuration (6 per side).
pub const SLOTS: usize = 12;

/// A square as (col, row).
pub type Coord = (u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    #[must_use]
    pub const fn idx(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_idx(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Player::White),
            1 => Some(Player::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// First absolute slot of this side (0 or 6).
    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.idx() as usize * 6
    }

    #[inline]
    #[must_use]
    pub const fn ball_index(self) -> usize {
        self.offset() + 5
    }

    #[inline]
    #[must_use]
    pub fn block_indices(self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + 5
    }

    /// Row the ball must reach to win.
    #[inline]
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            Player::White => N_ROWS - 1,
            Player::Black => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn all() -> [Player; 2] {
        [Player::White, Player::Black]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "WHITE"),
            Player::Black => write!(f, "BLACK"),
        }
    }
}

/// Board indexing helpers (7x8 board, row-major).
#[inline]
#[must_use]
pub fn encode(col: u8, row: u8) -> u8 {
    debug_assert!(col < N_COLS && row < N_ROWS);
    row * N_COLS + col
}

#[inline]
#[must_use]
pub fn decode(pos: u8) -> Coord {
    (pos % N_COLS, pos / N_COLS)
}

/// Signed variant used by move generation; returns None off-board.
#[inline]
#[must_use]
pub fn encode_checked(col: i16, row: i16) -> Option<u8> {
    if !in_bounds(col, row) {
        return None;
    }
    Some(encode(u8::try_from(col).ok()?, u8::try_from(row).ok()?))
}

#[inline]
#[must_use]
pub fn in_bounds(col: i16, row: i16) -> bool {
    (0..i16::from(N_COLS)).contains(&col) && (0..i16::from(N_ROWS)).contains(&row)
}
