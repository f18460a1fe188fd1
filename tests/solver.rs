use rand::{rngs::StdRng, Rng, SeedableRng};
use slider_puzzle::{Board, Heuristic, Solver};
use std::collections::{HashSet, VecDeque};

/// Breadth-first distance to the goal, or `None` if the goal is unreachable.
fn shortest_distance(start: &Board) -> Option<usize> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((board, distance)) = queue.pop_front() {
        if board.is_goal() {
            return Some(distance);
        }
        for next in board.neighbors() {
            if seen.insert(next.clone()) {
                queue.push_back((next, distance + 1));
            }
        }
    }
    None
}

fn assert_valid_solution(solver: &Solver) {
    let solution = solver.solution().unwrap();
    let moves = solver.moves().unwrap();
    assert_eq!(solution.len() - 1, moves);
    assert_eq!(&solution[0], solver.initial());
    assert!(solution[moves].is_goal());

    for pair in solution.windows(2) {
        assert!(pair[0].neighbors().contains(&pair[1]), "{}{}", pair[0], pair[1]);
    }
    assert_eq!(solver.solution_moves().unwrap().len(), moves);
}

#[test]
fn test_matches_breadth_first_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let steps = rng.gen_range(0..=16);
        let board = Board::scrambled(3, steps, &mut rng).unwrap();
        let solver = Solver::new(board.clone());

        assert!(solver.is_solvable(), "{board}");
        assert_eq!(solver.moves(), shortest_distance(&board), "{board}");
        assert!(solver.moves().unwrap() <= steps);
        assert_valid_solution(&solver);
    }
}

#[test]
fn test_twin_of_solvable_board_is_unsolvable() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..3 {
        let board = Board::scrambled(3, 14, &mut rng).unwrap();
        let twin = board.twin();

        let solver = Solver::new(twin.clone());
        assert!(!solver.is_solvable(), "{twin}");
        assert_eq!(solver.moves(), None);
        assert_eq!(solver.solution(), None);
        assert_eq!(shortest_distance(&twin), None);
    }
}

#[test]
fn test_two_by_two_matches_breadth_first_search() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..30 {
        let board = Board::shuffled(2, &mut rng).unwrap();
        let solver = Solver::new(board.clone());
        assert_eq!(solver.moves(), shortest_distance(&board), "{board}");
        assert_eq!(solver.is_solvable(), board.is_solvable());
        if solver.is_solvable() {
            assert_valid_solution(&solver);
        }
    }
}

#[test]
fn test_parity_flips_under_twin() {
    let mut rng = StdRng::seed_from_u64(5);
    for size in 2..=5 {
        for _ in 0..20 {
            let board = Board::shuffled(size, &mut rng).unwrap();
            assert_ne!(board.is_solvable(), board.twin().is_solvable(), "{board}");
            assert_eq!(board.twin().twin(), board);
        }
    }
}

#[test]
fn test_heuristics_agree_on_move_count() {
    let mut rng = StdRng::seed_from_u64(13);
    for size in [3, 4] {
        for _ in 0..5 {
            let board = Board::scrambled(size, 14, &mut rng).unwrap();
            let manhattan = Solver::with_heuristic(board.clone(), Heuristic::Manhattan);
            let conflict = Solver::with_heuristic(board.clone(), Heuristic::LinearConflict);

            assert_eq!(manhattan.moves(), conflict.moves(), "{board}");
            assert_valid_solution(&conflict);
        }
    }
}

#[test]
fn test_hamming_search_is_optimal() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..5 {
        let board = Board::scrambled(3, 8, &mut rng).unwrap();
        let solver = Solver::with_heuristic(board.clone(), Heuristic::Hamming);
        assert_eq!(solver.moves(), shortest_distance(&board), "{board}");
    }
}

#[test]
fn test_heuristics_never_overestimate() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..15 {
        let steps = rng.gen_range(0..=20);
        let board = Board::scrambled(3, steps, &mut rng).unwrap();
        let Some(distance) = shortest_distance(&board) else {
            panic!("scrambled board must be solvable: {board}");
        };
        assert!(board.hamming() <= distance);
        assert!(board.manhattan() <= distance);
        assert!(Heuristic::LinearConflict.evaluate(&board) <= distance, "{board}");
    }
}

#[test]
fn test_four_by_four_one_move() {
    let board = Board::new(
        4,
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15],
    )
    .unwrap();
    let solver = Solver::new(board);
    assert_eq!(solver.moves(), Some(1));
    assert_valid_solution(&solver);
}
