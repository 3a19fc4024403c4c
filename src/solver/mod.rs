use std::hash::BuildHasherDefault;

use serde::{Deserialize, Serialize};

pub mod bfs;
pub mod minimax;
pub mod move_order;
pub mod problem;

pub use bfs::PathSearch;
pub use minimax::{choose_action, AdversarialSearch, SearchResult};
pub use problem::{AdversarialProblem, GameStateProblem, SearchProblem};

/// Hash set used for state membership (goal sets, visited sets).
pub type FastSet<T> = hashbrown::HashSet<T, BuildHasherDefault<ahash::AHasher>>;

/// Limits for the adversarial search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Ply budget, counting the root move.
    pub max_depth: u8,
    /// Soft cap on expanded nodes, split evenly across root moves;
    /// unfinished subtrees are ignored.
    pub max_nodes: Option<u64>,
    /// Soft wall-clock cap in milliseconds.
    pub time_ms: Option<u64>,
    /// Evaluate root children on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_nodes: None,
            time_ms: None,
            parallel: false,
        }
    }
}

impl SearchLimits {
    #[inline]
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Limits for the breadth-first path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLimits {
    /// Hard cap on discovered states.
    pub max_states: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_states: 1_000_000,
        }
    }
}
