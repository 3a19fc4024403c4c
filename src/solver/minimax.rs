use std::cell::Cell;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rayon::prelude::*;

use crate::board::BoardState;
use crate::state::{Action, SearchState};
use crate::types::Player;

use super::move_order::{order_actions, rank_candidates};
use super::problem::{AdversarialProblem, GameStateProblem, SearchProblem};
use super::SearchLimits;

/// Number of ranked root candidates written to the debug log.
const LOGGED_CANDIDATES: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    /// None at terminal roots and when the side to move has no action.
    pub best_action: Option<A>,
    /// Minimax value from the root player's perspective; None when no
    /// subtree finished within the budget.
    pub value: Option<f64>,
    pub nodes: u64,
    pub depth: u8,
    /// Root actions in canonical order with their values.
    pub candidates: Vec<(A, Option<f64>)>,
}

/// Node counter and soft cutoffs for one root subtree. Each root child
/// gets its own budget, so which subtrees are cut does not depend on how
/// root children are scheduled.
struct Budget {
    nodes: Cell<u64>,
    max_nodes: Option<u64>,
    deadline: Option<Instant>,
}

impl Budget {
    fn new(max_nodes: Option<u64>, deadline: Option<Instant>) -> Self {
        Self {
            nodes: Cell::new(0),
            max_nodes,
            deadline,
        }
    }

    #[inline]
    fn visit(&self) -> u64 {
        let visited = self.nodes.get() + 1;
        self.nodes.set(visited);
        visited
    }

    #[inline]
    fn exhausted(&self, visited: u64) -> bool {
        self.max_nodes.is_some_and(|cap| visited > cap)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    #[inline]
    fn total(&self) -> u64 {
        self.nodes.get()
    }
}

/// Depth-limited minimax with alternating MAX/MIN layers.
///
/// MAX layers are the root player's turns. Leaves (ply budget spent or a
/// terminal board) return the evaluation from the root player's
/// perspective. A node without actions returns its layer's identity
/// element: `-inf` for MAX, `+inf` for MIN. Subtrees cut by the soft budget
/// return None and are left out of their parent's aggregation.
#[derive(Debug, Clone, Default)]
pub struct AdversarialSearch {
    limits: SearchLimits,
}

impl AdversarialSearch {
    #[inline]
    #[must_use]
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    #[inline]
    #[must_use]
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Search from `state` for the side to move.
    ///
    /// With only a node cap, the result is the same whether root children
    /// run in parallel or not. A wall-clock cap depends on timing either way.
    #[must_use]
    pub fn search<P>(&self, problem: &P, state: &P::State) -> SearchResult<P::Action>
    where
        P: AdversarialProblem + Sync,
        P::State: Send + Sync,
        P::Action: Send + Sync + std::fmt::Debug,
    {
        let depth = self.limits.max_depth.max(1);
        let me = problem.to_move(state);

        if problem.is_terminal(state) {
            return SearchResult {
                best_action: None,
                value: Some(problem.evaluate(state, me)),
                nodes: 1,
                depth: 0,
                candidates: Vec::new(),
            };
        }

        let mut actions = problem.actions(state);
        order_actions(&mut actions);
        if actions.is_empty() {
            debug!("no legal continuation for {me}");
            return SearchResult {
                best_action: None,
                value: Some(f64::NEG_INFINITY),
                nodes: 1,
                depth,
                candidates: Vec::new(),
            };
        }

        if let Some((action, value)) = immediate_win(problem, state, me, &actions) {
            debug!("{me} wins immediately with {action:?}");
            return SearchResult {
                best_action: Some(action),
                value: Some(value),
                nodes: 1,
                depth: 1,
                candidates: vec![(action, Some(value))],
            };
        }

        let deadline = self
            .limits
            .time_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));
        // The root node itself takes one unit of the node cap.
        let share = self
            .limits
            .max_nodes
            .map(|cap| cap.saturating_sub(1) / u64::try_from(actions.len()).unwrap_or(u64::MAX));
        let child_value = |action: &P::Action| -> (Option<f64>, u64) {
            let budget = Budget::new(share, deadline);
            let next = problem.transition(state, *action);
            let value = self.value(problem, &next, me, depth - 1, &budget);
            (value, budget.total())
        };
        // Collected in canonical order either way, so the tie-break below
        // sees the same sequence.
        let results: Vec<(Option<f64>, u64)> = if self.limits.parallel {
            actions.par_iter().map(child_value).collect()
        } else {
            actions.iter().map(child_value).collect()
        };
        let nodes = 1 + results.iter().map(|&(_, n)| n).sum::<u64>();
        let values: Vec<Option<f64>> = results.into_iter().map(|(v, _)| v).collect();

        let mut best: Option<(P::Action, f64)> = None;
        for (action, value) in actions.iter().zip(&values) {
            let Some(v) = *value else { continue };
            if !matches!(best, Some((_, b)) if v <= b) {
                best = Some((*action, v));
            }
        }

        let candidates: Vec<(P::Action, Option<f64>)> =
            actions.iter().copied().zip(values).collect();
        if log::log_enabled!(log::Level::Debug) {
            let mut ranked = candidates.clone();
            rank_candidates(&mut ranked);
            ranked.truncate(LOGGED_CANDIDATES);
            debug!("{me} depth={depth} nodes={nodes} top={ranked:?}");
        }

        let (best_action, value) = match best {
            Some((a, v)) => (Some(a), Some(v)),
            // Nothing finished inside the budget.
            None => (actions.first().copied(), None),
        };
        SearchResult {
            best_action,
            value,
            nodes,
            depth,
            candidates,
        }
    }

    fn value<P: AdversarialProblem>(
        &self,
        problem: &P,
        state: &P::State,
        root: Player,
        remaining: u8,
        budget: &Budget,
    ) -> Option<f64> {
        let visited = budget.visit();
        if remaining == 0 || problem.is_terminal(state) {
            return Some(problem.evaluate(state, root));
        }
        if budget.exhausted(visited) {
            trace!("budget exhausted after {visited} nodes");
            return None;
        }

        let maximizing = problem.to_move(state) == root;
        let mut actions = problem.actions(state);
        order_actions(&mut actions);
        if actions.is_empty() {
            return Some(if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }

        let mut best: Option<f64> = None;
        for action in actions {
            let next = problem.transition(state, action);
            let Some(v) = self.value(problem, &next, root, remaining - 1, budget) else {
                continue;
            };
            best = Some(match best {
                None => v,
                Some(b) if maximizing => b.max(v),
                Some(b) => b.min(v),
            });
        }
        best
    }
}

/// First action, in canonical order, after which `me` has won, with the
/// evaluation of the resulting state.
fn immediate_win<P: AdversarialProblem>(
    problem: &P,
    state: &P::State,
    me: Player,
    actions: &[P::Action],
) -> Option<(P::Action, f64)> {
    actions.iter().find_map(|&action| {
        let next = problem.transition(state, action);
        problem
            .wins(&next, me)
            .then(|| (action, problem.evaluate(&next, me)))
    })
}

/// Pick a move for `player` on `board` with a `plies` budget.
/// Returns the action (None if there is none) and its value.
#[must_use]
pub fn choose_action(board: &BoardState, player: Player, plies: u8) -> (Option<Action>, Option<f64>) {
    let problem = GameStateProblem::from_state(SearchState::new(board, player));
    let result = AdversarialSearch::new(SearchLimits::with_depth(plies))
        .search(&problem, problem.initial_state());
    (result.best_action, result.value)
}
