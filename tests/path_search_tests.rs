use knightball::solver::bfs::solve;
use knightball::{
    apply_action, Action, BoardState, GameStateProblem, PathLimits, PathSearch, Player,
    SearchError, SearchProblem, SearchState,
};

#[test]
fn start_already_at_goal() {
    let board = BoardState::default();
    let problem = GameStateProblem::new(&board, &board, Player::White);
    let path = solve(&problem).unwrap();
    assert_eq!(path, vec![(SearchState::new(&board, Player::White), None)]);
}

#[test]
fn single_move_goal() {
    let start = BoardState::default();
    let goal = start.with_update(0, 14);
    let problem = GameStateProblem::new(&start, &goal, Player::White);
    let path = solve(&problem).unwrap();

    assert_eq!(path.len(), 2);
    assert_eq!(path[0], (SearchState::new(&start, Player::White), Some(Action::new(0, 14))));
    assert_eq!(path[1], (SearchState::new(&goal, Player::Black), None));
}

#[test]
fn two_move_goal_alternates_sides() {
    let start = BoardState::default();
    let goal = BoardState::from_positions([14, 2, 3, 4, 5, 3, 35, 51, 52, 53, 54, 52]);
    let problem = GameStateProblem::new(&start, &goal, Player::White);
    let path = solve(&problem).unwrap();

    let actions: Vec<Option<Action>> = path.iter().map(|(_, a)| *a).collect();
    assert_eq!(
        actions,
        vec![Some(Action::new(0, 14)), Some(Action::new(0, 35)), None]
    );
    assert_eq!(path[2].0.board(), goal);
    assert_eq!(path[2].0.player, Player::White);
}

#[test]
fn every_step_is_a_legal_move() {
    let start = BoardState::default();
    let goal = BoardState::from_positions([14, 2, 3, 4, 5, 3, 35, 51, 52, 53, 54, 52]);
    let problem = GameStateProblem::new(&start, &goal, Player::White);
    let path = solve(&problem).unwrap();

    assert_eq!(path[0].0, *problem.initial_state());
    assert!(problem.is_goal(&path[path.len() - 1].0));
    for pair in path.windows(2) {
        let (state, action) = &pair[0];
        let action = action.expect("every non-final step carries an action");
        let next = apply_action(&state.board(), state.player, action).unwrap();
        assert_eq!(SearchState::new(&next, state.player.other()), pair[1].0);
    }
}

#[test]
fn unreachable_goal_hits_the_state_cap() {
    let start = BoardState::default();
    // Overlapping blocks: never produced by a legal move.
    let goal = BoardState::from_positions([1, 1, 3, 4, 5, 3, 50, 51, 52, 53, 54, 52]);
    let problem = GameStateProblem::new(&start, &goal, Player::White);
    let err = PathSearch::new(PathLimits { max_states: 500 })
        .solve(&problem)
        .unwrap_err();
    assert_eq!(err, SearchError::StateCapReached { cap: 500 });
}

/// Counts from the start up to 5 and stops; 5 is not a goal.
struct Line;

impl SearchProblem for Line {
    type State = u8;
    type Action = u8;

    fn initial_state(&self) -> &u8 {
        &0
    }

    fn actions(&self, state: &u8) -> Vec<u8> {
        if *state < 5 {
            vec![1]
        } else {
            Vec::new()
        }
    }

    fn transition(&self, state: &u8, action: u8) -> u8 {
        state + action
    }

    fn is_goal(&self, _state: &u8) -> bool {
        false
    }
}

#[test]
fn finite_space_without_goal_is_exhausted() {
    assert_eq!(solve(&Line), Err(SearchError::SearchExhausted { explored: 6 }));
}

/// 0 branches to 1 and 2; 1 branches to 3, 4 and 5. Only 2 is a goal.
struct Fork;

impl SearchProblem for Fork {
    type State = u8;
    type Action = u8;

    fn initial_state(&self) -> &u8 {
        &0
    }

    fn actions(&self, state: &u8) -> Vec<u8> {
        match state {
            0 => vec![1, 2],
            1 => vec![3, 4, 5],
            _ => Vec::new(),
        }
    }

    fn transition(&self, _state: &u8, action: u8) -> u8 {
        action
    }

    fn is_goal(&self, state: &u8) -> bool {
        *state == 2
    }
}

#[test]
fn goal_found_within_the_cap_is_returned() {
    // The goal is the third state discovered; expanding its sibling first
    // would overflow a cap of three.
    let path = PathSearch::new(PathLimits { max_states: 3 })
        .solve(&Fork)
        .unwrap();
    assert_eq!(path, vec![(0, Some(2)), (2, None)]);
}

#[test]
fn cap_below_the_goal_still_fails() {
    let err = PathSearch::new(PathLimits { max_states: 2 })
        .solve(&Fork)
        .unwrap_err();
    assert_eq!(err, SearchError::StateCapReached { cap: 2 });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Step {
    Inc,
    Double,
}

/// Reach 10 from 1 with +1 and *2, never exceeding 10.
struct Numbers {
    start: u32,
}

impl SearchProblem for Numbers {
    type State = u32;
    type Action = Step;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn actions(&self, state: &u32) -> Vec<Step> {
        let mut out = Vec::new();
        if state * 2 <= 10 {
            out.push(Step::Double);
        }
        if state + 1 <= 10 {
            out.push(Step::Inc);
        }
        out
    }

    fn transition(&self, state: &u32, action: Step) -> u32 {
        match action {
            Step::Inc => state + 1,
            Step::Double => state * 2,
        }
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == 10
    }
}

#[test]
fn shortest_path_in_a_toy_space() {
    let problem = Numbers { start: 1 };
    let path = solve(&problem).unwrap();
    // 1 -> 2 -> 4 -> 5 -> 10
    assert_eq!(path.len(), 5);
    assert_eq!(path.first().map(|(s, _)| *s), Some(1));
    assert_eq!(path.last(), Some(&(10, None)));
    for pair in path.windows(2) {
        let (state, action) = pair[0];
        assert_eq!(problem.transition(&state, action.unwrap()), pair[1].0);
    }
}
