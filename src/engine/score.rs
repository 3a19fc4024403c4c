use crate::board::BoardState;
use crate::types::{decode, Player, N_ROWS};

/// Bonus per block standing on its side's goal row.
pub const PIECE_GOAL_BONUS: f64 = 7.0;
/// Bonus when the ball has reached the goal row (a won position).
pub const BALL_GOAL_BONUS: f64 = 20.0;

/// Rows travelled toward the goal row, 0..=7.
#[inline]
fn rows_advanced(player: Player, row: u8) -> u8 {
    match player {
        Player::White => row,
        Player::Black => (N_ROWS - 1) - row,
    }
}

/// How far `player` has pushed toward its goal row.
///
/// Mean progress of the five blocks (each in 0.0..=1.0), plus
/// `PIECE_GOAL_BONUS` for every block on the goal row and `BALL_GOAL_BONUS`
/// if the ball is there.
#[must_use]
pub fn team_progress(board: &BoardState, player: Player) -> f64 {
    let goal = player.goal_row();
    let max = f64::from(N_ROWS - 1);
    let mut progress = 0.0;
    let mut bonus = 0.0;
    for index in player.block_indices() {
        let row = board.coord(index).1;
        progress += f64::from(rows_advanced(player, row)) / max;
        if row == goal {
            bonus += PIECE_GOAL_BONUS;
        }
    }
    if decode(board.ball_position(player)).1 == goal {
        bonus += BALL_GOAL_BONUS;
    }
    progress / 5.0 + bonus
}

/// Static evaluation from `perspective`'s point of view. Zero-sum:
/// `heuristic(b, p) == -heuristic(b, p.other())`.
#[inline]
#[must_use]
pub fn heuristic(board: &BoardState, perspective: Player) -> f64 {
    team_progress(board, perspective) - team_progress(board, perspective.other())
}
