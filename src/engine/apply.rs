use crate::board::BoardState;
use crate::error::RulesError;
use crate::rules::check_action;
use crate::state::Action;
use crate::types::Player;

/// Apply an action as a pure transform: returns the next board on success.
/// Validates by membership in the legal set for `player`.
///
/// # Errors
///
/// `InvalidAction` when `action` is not legal for `player` on `board`.
pub fn apply_action(
    board: &BoardState,
    player: Player,
    action: Action,
) -> Result<BoardState, RulesError> {
    check_action(board, player, action)?;
    Ok(board.with_update(action.absolute_index(player), action.target))
}

/// In-place variant for the game loop, which owns its board. The board is
/// left untouched on error.
///
/// # Errors
///
/// As [`apply_action`].
pub fn apply_action_mut(
    board: &mut BoardState,
    player: Player,
    action: Action,
) -> Result<(), RulesError> {
    check_action(board, player, action)?;
    board.update(action.absolute_index(player), action.target);
    Ok(())
}
