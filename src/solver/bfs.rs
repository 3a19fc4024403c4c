use std::collections::VecDeque;

use log::debug;

use crate::error::SearchError;

use super::move_order::order_actions;
use super::problem::SearchProblem;
use super::{FastSet, PathLimits};

/// Arena slot: a discovered state, its first-discovered parent and the
/// action that led here from it.
struct Node<S, A> {
    state: S,
    parent: Option<usize>,
    via: Option<A>,
}

/// One step of a solution path: the state and the action taken from it
/// (None on the final, goal state).
pub type PathStep<S, A> = (S, Option<A>);

/// Breadth-first solver from a problem's initial state to any goal state.
///
/// States live in an index arena; the frontier is a queue of arena indices.
/// Each state is discovered at most once and tested against the goal when
/// discovered, so the returned path has the fewest actions and any goal
/// found within `max_states` is returned. Children are expanded in
/// canonical action order.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    limits: PathLimits,
}

impl PathSearch {
    #[inline]
    #[must_use]
    pub fn new(limits: PathLimits) -> Self {
        Self { limits }
    }

    /// Shortest path from the initial state to a goal.
    ///
    /// # Errors
    ///
    /// `StateCapReached` when `max_states` states were discovered without
    /// meeting a goal; `SearchExhausted` when the reachable space holds none.
    pub fn solve<P: SearchProblem>(
        &self,
        problem: &P,
    ) -> Result<Vec<PathStep<P::State, P::Action>>, SearchError> {
        let cap = self.limits.max_states.max(1);
        let start = problem.initial_state().clone();

        let start_is_goal = problem.is_goal(&start);
        let mut seen: FastSet<P::State> = FastSet::default();
        seen.insert(start.clone());
        let mut arena: Vec<Node<P::State, P::Action>> = vec![Node {
            state: start,
            parent: None,
            via: None,
        }];
        if start_is_goal {
            return Ok(reconstruct(&arena, 0));
        }
        let mut frontier: VecDeque<usize> = VecDeque::new();
        frontier.push_back(0);

        while let Some(id) = frontier.pop_front() {
            let mut actions = problem.actions(&arena[id].state);
            order_actions(&mut actions);
            for action in actions {
                let next = problem.transition(&arena[id].state, action);
                if seen.contains(&next) {
                    continue;
                }
                if arena.len() >= cap {
                    debug!("state cap {cap} reached");
                    return Err(SearchError::StateCapReached { cap });
                }
                seen.insert(next.clone());
                let is_goal = problem.is_goal(&next);
                arena.push(Node {
                    state: next,
                    parent: Some(id),
                    via: Some(action),
                });
                let child = arena.len() - 1;
                // Levels are discovered in order, so the first goal seen is
                // at minimal depth.
                if is_goal {
                    debug!("goal reached after discovering {} states", arena.len());
                    return Ok(reconstruct(&arena, child));
                }
                frontier.push_back(child);
            }
        }

        Err(SearchError::SearchExhausted {
            explored: arena.len(),
        })
    }
}

/// Walk parent links back from `goal` and emit (state, action) pairs in
/// start-to-goal order.
fn reconstruct<S: Clone, A: Copy>(arena: &[Node<S, A>], goal: usize) -> Vec<PathStep<S, A>> {
    let mut ids = vec![goal];
    let mut at = goal;
    while let Some(parent) = arena[at].parent {
        ids.push(parent);
        at = parent;
    }
    ids.reverse();

    ids.iter()
        .enumerate()
        .map(|(i, &id)| {
            let action = ids.get(i + 1).and_then(|&child| arena[child].via);
            (arena[id].state.clone(), action)
        })
        .collect()
}

/// Solve with default limits.
///
/// # Errors
///
/// See [`PathSearch::solve`].
pub fn solve<P: SearchProblem>(
    problem: &P,
) -> Result<Vec<PathStep<P::State, P::Action>>, SearchError> {
    PathSearch::default().solve(problem)
}
