use std::hash::Hash;

use crate::board::BoardState;
use crate::engine::score::heuristic;
use crate::rules::legal_actions;
use crate::state::{Action, SearchState};
use crate::types::Player;

use super::FastSet;

/// A state space: actions, transitions and a goal test.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Copy + Eq + Ord;

    fn initial_state(&self) -> &Self::State;
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    fn transition(&self, state: &Self::State, action: Self::Action) -> Self::State;
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A two-player state space with a static evaluation.
pub trait AdversarialProblem: SearchProblem {
    fn to_move(&self, state: &Self::State) -> Player;
    fn is_terminal(&self, state: &Self::State) -> bool;
    /// `player` has won in `state`.
    fn wins(&self, state: &Self::State, player: Player) -> bool;
    /// Value of `state` for `perspective`; higher is better.
    fn evaluate(&self, state: &Self::State, perspective: Player) -> f64;
}

/// The board game as a state space.
///
/// The goal set holds the goal board tagged with both players, since a
/// configuration is reached regardless of whose turn follows.
#[derive(Clone)]
pub struct GameStateProblem {
    initial: SearchState,
    goals: FastSet<SearchState>,
    heuristic: fn(&BoardState, Player) -> f64,
}

impl GameStateProblem {
    #[must_use]
    pub fn new(initial: &BoardState, goal: &BoardState, player: Player) -> Self {
        let goals = Player::all()
            .into_iter()
            .map(|p| SearchState::new(goal, p))
            .collect();
        Self {
            initial: SearchState::new(initial, player),
            goals,
            heuristic,
        }
    }

    /// A problem with an empty goal set, for move selection only.
    #[must_use]
    pub fn from_state(initial: SearchState) -> Self {
        Self {
            initial,
            goals: FastSet::default(),
            heuristic,
        }
    }

    #[must_use]
    pub fn with_heuristic(mut self, f: fn(&BoardState, Player) -> f64) -> Self {
        self.heuristic = f;
        self
    }

    pub fn goals(&self) -> impl Iterator<Item = &SearchState> {
        self.goals.iter()
    }
}

impl std::fmt::Debug for GameStateProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStateProblem")
            .field("initial", &self.initial)
            .field("goals", &self.goals)
            .finish_non_exhaustive()
    }
}

impl SearchProblem for GameStateProblem {
    type State = SearchState;
    type Action = Action;

    #[inline]
    fn initial_state(&self) -> &SearchState {
        &self.initial
    }

    fn actions(&self, state: &SearchState) -> Vec<Action> {
        legal_actions(&state.board(), state.player)
    }

    #[inline]
    fn transition(&self, state: &SearchState, action: Action) -> SearchState {
        state.apply(action)
    }

    #[inline]
    fn is_goal(&self, state: &SearchState) -> bool {
        self.goals.contains(state)
    }
}

impl AdversarialProblem for GameStateProblem {
    #[inline]
    fn to_move(&self, state: &SearchState) -> Player {
        state.player
    }

    #[inline]
    fn is_terminal(&self, state: &SearchState) -> bool {
        state.is_terminal()
    }

    #[inline]
    fn wins(&self, state: &SearchState, player: Player) -> bool {
        state.board().is_terminal_for(player)
    }

    #[inline]
    fn evaluate(&self, state: &SearchState, perspective: Player) -> f64 {
        (self.heuristic)(&state.board(), perspective)
    }
}
