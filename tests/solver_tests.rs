use knightball::solver::{AdversarialProblem, SearchResult};
use knightball::{
    apply_action, choose_action, heuristic, legal_actions, Action, AdversarialSearch, BoardState,
    GameStateProblem, Player, SearchLimits, SearchProblem, SearchState,
};

/// White ball on 41 with a teammate on 55: passing up the column wins.
fn white_wins_in_one() -> BoardState {
    BoardState::from_positions([49, 37, 46, 41, 55, 41, 50, 51, 52, 53, 54, 52])
}

/// Black ball on 20 with a teammate on 6 straight below.
fn black_wins_in_one() -> BoardState {
    BoardState::from_positions([1, 2, 3, 4, 5, 3, 0, 16, 11, 20, 6, 20])
}

fn search(board: &BoardState, player: Player, limits: SearchLimits) -> SearchResult<Action> {
    let problem = GameStateProblem::from_state(SearchState::new(board, player));
    AdversarialSearch::new(limits).search(&problem, problem.initial_state())
}

#[test]
fn takes_an_immediate_win() {
    let board = white_wins_in_one();
    assert!(board.is_valid());
    assert!(!board.is_terminal());

    for plies in [1, 2, 3] {
        let (action, value) = choose_action(&board, Player::White, plies);
        assert_eq!(action, Some(Action::new(5, 55)), "plies={plies}");
        assert!(value.unwrap() > 20.0);
    }

    let result = search(&board, Player::White, SearchLimits::with_depth(3));
    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, 1);
}

#[test]
fn black_takes_an_immediate_win() {
    let board = black_wins_in_one();
    assert!(board.is_valid());
    let (action, _) = choose_action(&board, Player::Black, 3);
    assert_eq!(action, Some(Action::new(5, 6)));
    let next = apply_action(&board, Player::Black, Action::new(5, 6)).unwrap();
    assert_eq!(next.winner(), Some(Player::Black));
}

#[test]
fn terminal_root_has_no_action() {
    let board = BoardState::from_positions([1, 2, 3, 4, 49, 49, 50, 51, 52, 53, 54, 52]);
    let result = search(&board, Player::Black, SearchLimits::default());
    assert_eq!(result.best_action, None);
    assert_eq!(result.depth, 0);
    assert_eq!(result.value, Some(heuristic(&board, Player::Black)));
}

#[test]
fn depth_one_is_greedy_over_the_heuristic() {
    let board = BoardState::default();
    let mut expected: Option<(Action, f64)> = None;
    for action in legal_actions(&board, Player::White) {
        let next = apply_action(&board, Player::White, action).unwrap();
        let v = heuristic(&next, Player::White);
        if expected.map_or(true, |(_, b)| v > b) {
            expected = Some((action, v));
        }
    }
    let (action, value) = choose_action(&board, Player::White, 1);
    let (exp_action, exp_value) = expected.unwrap();
    assert_eq!(action, Some(exp_action));
    assert_eq!(value, Some(exp_value));
}

#[test]
fn ties_keep_the_first_canonical_action() {
    // Every knight jump of a row-0 block to row 1 scores the same at depth 1;
    // the first of them in canonical order must win the tie.
    let board = BoardState::default();
    let result = search(&board, Player::White, SearchLimits::with_depth(1));
    let best = result.value.unwrap();
    let first_best = result
        .candidates
        .iter()
        .find(|(_, v)| *v == Some(best))
        .map(|(a, _)| *a);
    assert_eq!(result.best_action, first_best);
}

#[test]
fn candidates_follow_canonical_order() {
    let board = BoardState::default();
    let result = search(&board, Player::White, SearchLimits::with_depth(2));
    let actions: Vec<Action> = result.candidates.iter().map(|(a, _)| *a).collect();
    assert_eq!(actions, legal_actions(&board, Player::White));
    assert!(result.candidates.iter().all(|(_, v)| v.is_some()));
}

#[test]
fn parallel_root_matches_sequential() {
    let board = BoardState::from_positions([44, 37, 46, 41, 40, 41, 1, 2, 52, 4, 5, 52]);
    let sequential = search(&board, Player::White, SearchLimits::with_depth(3));
    let parallel = search(
        &board,
        Player::White,
        SearchLimits {
            parallel: true,
            ..SearchLimits::with_depth(3)
        },
    );
    assert_eq!(parallel.best_action, sequential.best_action);
    assert_eq!(parallel.value, sequential.value);
    assert_eq!(parallel.candidates, sequential.candidates);
    assert_eq!(parallel.nodes, sequential.nodes);
}

#[test]
fn parallel_root_matches_sequential_under_a_node_cap() {
    let board = BoardState::from_positions([44, 37, 46, 41, 40, 41, 1, 2, 52, 4, 5, 52]);
    for cap in [40, 500, 5_000] {
        let limits = SearchLimits {
            max_nodes: Some(cap),
            ..SearchLimits::with_depth(3)
        };
        let sequential = search(&board, Player::White, limits);
        let parallel = search(
            &board,
            Player::White,
            SearchLimits {
                parallel: true,
                ..limits
            },
        );
        assert_eq!(parallel.best_action, sequential.best_action, "cap={cap}");
        assert_eq!(parallel.value, sequential.value, "cap={cap}");
        assert_eq!(parallel.candidates, sequential.candidates, "cap={cap}");
        assert_eq!(parallel.nodes, sequential.nodes, "cap={cap}");
    }
}

#[test]
fn search_is_deterministic() {
    let board = BoardState::default();
    let a = choose_action(&board, Player::Black, 2);
    let b = choose_action(&board, Player::Black, 2);
    assert_eq!(a, b);
}

#[test]
fn exhausted_node_budget_falls_back_to_first_action() {
    let board = BoardState::default();
    let limits = SearchLimits {
        max_nodes: Some(1),
        ..SearchLimits::with_depth(3)
    };
    let result = search(&board, Player::White, limits);
    assert_eq!(result.value, None);
    assert_eq!(result.best_action, Some(Action::new(0, 10)));
    assert!(result.candidates.iter().all(|(_, v)| v.is_none()));
}

#[test]
fn zero_plies_still_looks_one_move_ahead() {
    let board = white_wins_in_one();
    let (action, _) = choose_action(&board, Player::White, 0);
    assert_eq!(action, Some(Action::new(5, 55)));
}

#[test]
fn goal_set_tags_both_players() {
    let start = BoardState::default();
    let goal = start.with_update(0, 14);
    let problem = GameStateProblem::new(&start, &goal, Player::White);
    assert_eq!(problem.initial_state(), &SearchState::new(&start, Player::White));
    assert!(problem.is_goal(&SearchState::new(&goal, Player::White)));
    assert!(problem.is_goal(&SearchState::new(&goal, Player::Black)));
    assert!(!problem.is_goal(problem.initial_state()));
    assert_eq!(problem.goals().count(), 2);
}

#[test]
fn transition_flips_the_side_to_move() {
    let start = SearchState::new(&BoardState::default(), Player::White);
    let problem = GameStateProblem::from_state(start);
    let next = problem.transition(&start, Action::new(0, 14));
    assert_eq!(next.player, Player::Black);
    assert_eq!(next.positions[0], 14);
    assert_eq!(start.positions[0], 1);
    assert_eq!(problem.actions(&start), legal_actions(&BoardState::default(), Player::White));
}

#[test]
fn custom_heuristic_drives_the_choice() {
    // Prefer moving the rightmost white block as far right as possible.
    fn rightmost(board: &BoardState, player: Player) -> f64 {
        let col = board.coord(player.offset() + 4).0;
        if player == Player::White {
            f64::from(col)
        } else {
            -f64::from(col)
        }
    }
    let board = BoardState::default();
    let problem = GameStateProblem::from_state(SearchState::new(&board, Player::White))
        .with_heuristic(rightmost);
    let result = AdversarialSearch::new(SearchLimits::with_depth(1))
        .search(&problem, problem.initial_state());
    // Slot 4 on (5, 0) can reach (6, 2) = 20.
    assert_eq!(result.best_action, Some(Action::new(4, 20)));
}

/// Two-node toy game: from 0 the only move leads to 1, where the side to
/// move has nothing to play.
struct Dead;

impl SearchProblem for Dead {
    type State = u8;
    type Action = u8;

    fn initial_state(&self) -> &u8 {
        &0
    }

    fn actions(&self, state: &u8) -> Vec<u8> {
        match state {
            0 => vec![1],
            _ => Vec::new(),
        }
    }

    fn transition(&self, _state: &u8, action: u8) -> u8 {
        action
    }

    fn is_goal(&self, _state: &u8) -> bool {
        false
    }
}

impl AdversarialProblem for Dead {
    fn to_move(&self, state: &u8) -> Player {
        if state % 2 == 0 {
            Player::White
        } else {
            Player::Black
        }
    }

    fn is_terminal(&self, _state: &u8) -> bool {
        false
    }

    fn wins(&self, _state: &u8, _player: Player) -> bool {
        false
    }

    fn evaluate(&self, _state: &u8, _perspective: Player) -> f64 {
        0.0
    }
}

#[test]
fn no_actions_yield_layer_identity() {
    let search = AdversarialSearch::new(SearchLimits::with_depth(3));

    // Root itself is stuck: the MAX identity.
    let stuck = search.search(&Dead, &1);
    assert_eq!(stuck.best_action, None);
    assert_eq!(stuck.value, Some(f64::NEG_INFINITY));

    // The opponent is stuck after our move: the MIN identity.
    let result = search.search(&Dead, &0);
    assert_eq!(result.best_action, Some(1));
    assert_eq!(result.value, Some(f64::INFINITY));
}
