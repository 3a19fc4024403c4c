use std::collections::{BTreeSet, VecDeque};

use crate::board::BoardState;
use crate::error::{RejectReason, RulesError};
use crate::state::{Action, BALL_RELATIVE};
use crate::types::{decode, encode, encode_checked, Coord, Player, MAX_POS, SLOTS};

/// Knight offsets as (dcol, drow).
const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (1, 2),
    (-1, 2),
    (-2, 1),
    (2, 1),
    (2, -1),
    (-2, -1),
    (-1, -2),
    (1, -2),
];

#[inline]
fn side_of(index: usize) -> Player {
    if index < 6 {
        Player::White
    } else {
        Player::Black
    }
}

#[inline]
fn is_ball_slot(index: usize) -> bool {
    index == Player::White.ball_index() || index == Player::Black.ball_index()
}

/// Slot currently standing on `pos`, ignoring `skip` and both ball slots.
fn occupant(board: &BoardState, pos: u8, skip: usize) -> Option<usize> {
    board
        .positions()
        .iter()
        .enumerate()
        .find(|&(i, &p)| i != skip && !is_ball_slot(i) && p == pos)
        .map(|(i, _)| i)
}

/// Knight jumps for a block slot already known to be a block. Empty when the
/// block is holding its ball.
fn knight_targets(board: &BoardState, index: usize) -> Vec<u8> {
    if board.ball_holder(side_of(index)) == Some(index) {
        return Vec::new();
    }
    let (col, row) = board.coord(index);
    let mut out: Vec<u8> = KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dc, dr)| encode_checked(i16::from(col) + dc, i16::from(row) + dr))
        .filter(|&target| {
            // Balls always share a block's square, so checking every other
            // slot is the same as checking every other piece.
            !board
                .positions()
                .iter()
                .enumerate()
                .any(|(i, &p)| i != index && p == target)
        })
        .collect();
    out.sort_unstable();
    out
}

/// Squares the block at absolute `index` can jump to, ascending.
///
/// The block holding its side's ball is pinned and has no moves.
///
/// # Errors
///
/// `InvalidPieceKind` for the two ball slots, `NoSuchPiece` past slot 11.
pub fn block_moves(board: &BoardState, index: usize) -> Result<Vec<u8>, RulesError> {
    if index >= SLOTS {
        return Err(RulesError::NoSuchPiece { index });
    }
    if is_ball_slot(index) {
        return Err(RulesError::InvalidPieceKind { index });
    }
    Ok(knight_targets(board, index))
}

/// Squares of `player`'s blocks, minus the square holding the ball.
#[must_use]
pub fn team_pieces(board: &BoardState, player: Player) -> Vec<Coord> {
    let ball = board.coord(player.ball_index());
    let set: BTreeSet<Coord> = player
        .block_indices()
        .map(|i| board.coord(i))
        .filter(|&c| c != ball)
        .collect();
    set.into_iter().collect()
}

/// Squares of every block on the other side, ball holder included.
#[must_use]
pub fn opposing_pieces(board: &BoardState, player: Player) -> Vec<Coord> {
    let set: BTreeSet<Coord> = player
        .other()
        .block_indices()
        .map(|i| board.coord(i))
        .collect();
    set.into_iter().collect()
}

/// A single pass from `from` to `to` is possible: the squares share a
/// column, row or diagonal and no opposing block stands strictly between.
#[must_use]
pub fn lane_clear(from: Coord, to: Coord, opposing: &[Coord]) -> bool {
    let dc = i16::from(to.0) - i16::from(from.0);
    let dr = i16::from(to.1) - i16::from(from.1);
    if dc == 0 && dr == 0 {
        return false;
    }
    if !(dc == 0 || dr == 0 || dc.abs() == dr.abs()) {
        return false;
    }
    let steps = dc.abs().max(dr.abs());
    let (sc, sr) = (dc.signum(), dr.signum());
    (1..steps).all(|i| {
        let col = i16::from(from.0) + sc * i;
        let row = i16::from(from.1) + sr * i;
        !opposing
            .iter()
            .any(|&(c, r)| i16::from(c) == col && i16::from(r) == row)
    })
}

/// Teammate squares reachable from `from` with one pass.
#[must_use]
pub fn pass_options(from: Coord, team: &[Coord], opposing: &[Coord]) -> BTreeSet<Coord> {
    team.iter()
        .copied()
        .filter(|&catch| catch != from && lane_clear(from, catch, opposing))
        .collect()
}

/// Teammate squares reachable from `from` by chaining any number of passes.
/// Opposing blocks stay put for the whole chain; `from` itself is excluded.
#[must_use]
pub fn pass_closure(from: Coord, team: &[Coord], opposing: &[Coord]) -> BTreeSet<Coord> {
    let mut reached: BTreeSet<Coord> = BTreeSet::new();
    let mut q: VecDeque<Coord> = VecDeque::new();
    q.push_back(from);
    while let Some(at) = q.pop_front() {
        for next in pass_options(at, team, opposing) {
            if next != from && reached.insert(next) {
                q.push_back(next);
            }
        }
    }
    reached
}

/// Squares `player`'s ball can end on this turn, ascending.
#[must_use]
pub fn ball_moves(board: &BoardState, player: Player) -> Vec<u8> {
    let team = team_pieces(board, player);
    let opposing = opposing_pieces(board, player);
    let start = board.coord(player.ball_index());
    // BTreeSet iterates (col, row); re-sort by encoded square.
    let mut out: Vec<u8> = pass_closure(start, &team, &opposing)
        .into_iter()
        .map(|(c, r)| encode(c, r))
        .collect();
    out.sort_unstable();
    out
}

/// Every action `player` may take, in canonical order (relative index, then
/// target).
#[must_use]
pub fn legal_actions(board: &BoardState, player: Player) -> Vec<Action> {
    let mut actions: Vec<Action> = Vec::with_capacity(40);
    for (rel, index) in (0u8..).zip(player.block_indices()) {
        for target in knight_targets(board, index) {
            actions.push(Action::new(rel, target));
        }
    }
    for target in ball_moves(board, player) {
        actions.push(Action::new(BALL_RELATIVE, target));
    }
    actions
}

/// Accept `action` iff it belongs to the legal set.
///
/// # Errors
///
/// `InvalidAction` carrying the reason the action was rejected, including
/// an invalid board.
pub fn check_action(board: &BoardState, player: Player, action: Action) -> Result<(), RulesError> {
    let reject = |reason| RulesError::InvalidAction {
        player,
        action,
        reason,
    };
    if let Err(e) = board.validate() {
        return Err(reject(RejectReason::InvalidBoard(e)));
    }
    if action.relative_index > BALL_RELATIVE {
        return Err(reject(RejectReason::NoSuchPiece(action.relative_index)));
    }
    if action.target > MAX_POS {
        return Err(reject(RejectReason::TargetOutOfRange(action.target)));
    }
    if legal_actions(board, player).binary_search(&action).is_ok() {
        return Ok(());
    }
    Err(reject(diagnose(board, player, action)))
}

fn diagnose(board: &BoardState, player: Player, action: Action) -> RejectReason {
    let target = decode(action.target);
    if action.is_ball() {
        if team_pieces(board, player).contains(&target) {
            RejectReason::PassBlocked
        } else {
            RejectReason::NoTeammateAtTarget
        }
    } else {
        let index = action.absolute_index(player);
        if board.ball_holder(player) == Some(index) {
            return RejectReason::HolderPinned;
        }
        let (col, row) = board.coord(index);
        let dc = i16::from(target.0) - i16::from(col);
        let dr = i16::from(target.1) - i16::from(row);
        if !KNIGHT_OFFSETS.contains(&(dc, dr)) {
            return RejectReason::NotAKnightJump;
        }
        // A ball always shares its holder's square, so on a valid board an
        // unreachable knight jump always lands on some block.
        occupant(board, action.target, index)
            .map_or(RejectReason::NotLegal, RejectReason::Occupied)
    }
}
