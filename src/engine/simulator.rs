use log::{debug, info};

use crate::board::BoardState;
use crate::engine::apply::apply_action_mut;
use crate::engine::player::Policy;
use crate::error::{BoardError, RulesError};
use crate::state::Action;
use crate::types::Player;

pub const DEFAULT_MAX_ROUNDS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// A ball reached its goal row.
    Completed,
    /// The side to move proposed an action outside the legal set.
    InvalidAction(RulesError),
    /// The side to move had no action to offer.
    NoLegalContinuation,
    /// Round limit reached without a winner.
    RoundLimit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    /// Rounds played (accepted moves plus a final rejected one, if any).
    pub rounds: u32,
    pub winner: Option<Player>,
    pub status: GameStatus,
    pub moves: Vec<(Player, Action)>,
    pub final_board: BoardState,
}

/// Drives two policies from a starting board to a result. White moves on
/// even rounds, Black on odd rounds.
pub struct GameSimulator {
    board: BoardState,
    players: [Box<dyn Policy>; 2],
    max_rounds: u32,
}

impl GameSimulator {
    #[must_use]
    pub fn new(white: Box<dyn Policy>, black: Box<dyn Policy>) -> Self {
        Self {
            board: BoardState::default(),
            players: [white, black],
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Start from `board` instead of the opening.
    ///
    /// # Errors
    ///
    /// The first invariant `board` violates.
    pub fn with_board(mut self, board: BoardState) -> Result<Self, BoardError> {
        board.validate()?;
        self.board = board;
        Ok(self)
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn run(&mut self) -> GameOutcome {
        let mut moves: Vec<(Player, Action)> = Vec::new();
        let mut round: u32 = 0;

        while !self.board.is_terminal() {
            if round >= self.max_rounds {
                info!("round limit {} reached", self.max_rounds);
                return self.finish(round, None, GameStatus::RoundLimit, moves);
            }
            let player = if round % 2 == 0 {
                Player::White
            } else {
                Player::Black
            };
            let policy = &mut self.players[usize::from(player.idx())];
            let decision = policy.decide(&self.board, player);
            debug!(
                "round={round} player={player} policy={} state={:?} action={:?} value={:?}",
                policy.name(),
                self.board.positions(),
                decision.action,
                decision.value
            );
            round += 1;

            let Some(action) = decision.action else {
                info!("{player} has no legal continuation");
                return self.finish(
                    round,
                    Some(player.other()),
                    GameStatus::NoLegalContinuation,
                    moves,
                );
            };
            if let Err(e) = apply_action_mut(&mut self.board, player, action) {
                info!("{e}");
                return self.finish(
                    round,
                    Some(player.other()),
                    GameStatus::InvalidAction(e),
                    moves,
                );
            }
            moves.push((player, action));
        }

        let winner = self.board.winner();
        info!("game over after {round} rounds, winner {winner:?}");
        self.finish(round, winner, GameStatus::Completed, moves)
    }

    fn finish(
        &self,
        rounds: u32,
        winner: Option<Player>,
        status: GameStatus,
        moves: Vec<(Player, Action)>,
    ) -> GameOutcome {
        GameOutcome {
            rounds,
            winner,
            status,
            moves,
            final_board: self.board,
        }
    }
}
