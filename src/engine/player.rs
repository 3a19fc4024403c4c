use rand::seq::SliceRandom;

use crate::board::BoardState;
use crate::rng::rng_for_state;
use crate::rules::legal_actions;
use crate::solver::{AdversarialSearch, GameStateProblem, SearchLimits, SearchProblem};
use crate::state::{Action, SearchState};
use crate::types::Player;

/// What a policy proposes for one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Option<Action>,
    pub value: Option<f64>,
}

/// Anything that can pick a move for the side to play.
pub trait Policy {
    fn decide(&mut self, board: &BoardState, player: Player) -> Decision;

    fn name(&self) -> &'static str;
}

/// Plays the depth-limited minimax choice.
#[derive(Debug, Clone, Default)]
pub struct AdversarialPlayer {
    search: AdversarialSearch,
}

impl AdversarialPlayer {
    #[must_use]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            search: AdversarialSearch::new(limits),
        }
    }
}

impl Policy for AdversarialPlayer {
    fn decide(&mut self, board: &BoardState, player: Player) -> Decision {
        let problem = GameStateProblem::from_state(SearchState::new(board, player));
        let result = self.search.search(&problem, problem.initial_state());
        Decision {
            action: result.best_action,
            value: result.value,
        }
    }

    fn name(&self) -> &'static str {
        "adversarial"
    }
}

/// Picks uniformly among legal actions; reproducible for a fixed seed.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    seed: u64,
    game_id: u64,
    round: u32,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64, game_id: u64) -> Self {
        Self {
            seed,
            game_id,
            round: 0,
        }
    }
}

impl Policy for RandomPlayer {
    fn decide(&mut self, board: &BoardState, player: Player) -> Decision {
        let mut rng = rng_for_state(self.seed, self.game_id, self.round);
        self.round = self.round.wrapping_add(1);
        let actions = legal_actions(board, player);
        Decision {
            action: actions.choose(&mut rng).copied(),
            value: None,
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
