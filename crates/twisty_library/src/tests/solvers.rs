use pretty_assertions::assert_eq;

use super::*;
use crate::solvers::cube::{CenterSolver, oll_solver, pll_solver};

fn solve_and_replay(size: u16, seed: &str) {
    let (mut p, scramble) = scrambled(PuzzleKind::Cube, size, seed);
    let progress = SolveProgress::new();
    let solution = solve(&mut p, &progress).unwrap();
    assert!(p.is_solved(), "size {size} seed {seed:?} not solved:\n{p}");
    assert_eq!(1.0, progress.value());

    let mut replay = puzzle(PuzzleKind::Cube, size);
    replay.execute_algorithm(&scramble).unwrap();
    replay.execute_algorithm(&solution).unwrap();
    assert!(replay.is_solved(), "size {size} seed {seed:?} replay not solved");
}

#[test]
fn test_solve_small_cubes() {
    for size in 2..=4 {
        for seed in 0..8 {
            solve_and_replay(size, &format!("small {seed}"));
        }
    }
}

#[test]
fn test_solve_big_cubes() {
    for size in 5..=7 {
        for seed in 0..2 {
            solve_and_replay(size, &format!("big {seed}"));
        }
    }
}

#[test]
fn test_solve_solved_cube() {
    for size in 2..=5 {
        let mut p = puzzle(PuzzleKind::Cube, size);
        solve(&mut p, &SolveProgress::new()).unwrap();
        assert!(p.is_solved());
    }
}

#[test]
fn test_solve_keeps_move_log() {
    // Not logging: the log stays empty.
    let (mut p, _) = scrambled(PuzzleKind::Cube, 3, "log");
    solve(&mut p, &SolveProgress::new()).unwrap();
    assert!(p.move_log().is_empty());
    assert!(!p.is_logging_moves());

    // Logging: the solution is appended after the scramble.
    let mut p = puzzle(PuzzleKind::Cube, 3);
    p.set_log_moves(true);
    let params = ScrambleParams::with_seed(ScrambleType::Full, "log");
    let scramble = scramble(&mut p, &params).unwrap();
    let solution = solve(&mut p, &SolveProgress::new()).unwrap();
    assert!(p.is_logging_moves());

    let mut expected = scramble;
    expected.append(&solution);
    assert_eq!(&expected, p.move_log());
}

#[test]
fn test_center_opposite_pair_is_idempotent() {
    let (mut p, _) = scrambled(PuzzleKind::Cube, 5, "centers");
    p.set_log_moves(true);
    p.clear_move_log();
    CenterSolver::new(&mut p).solve_opposite_pair().unwrap();
    assert!(!p.move_log().is_empty());

    p.clear_move_log();
    let before = p.to_string();
    CenterSolver::new(&mut p).solve_opposite_pair().unwrap();
    assert_eq!(Algorithm::new(), *p.move_log());
    assert_eq!(before, p.to_string());
}

#[test]
fn test_last_layer_recognition_is_deterministic() {
    for solver in [oll_solver(3).unwrap(), pll_solver(3).unwrap()] {
        let skip = solver.cases.last().unwrap();
        assert!(solver.recognize(&puzzle(PuzzleKind::Cube, 3), skip));

        for case in &solver.cases {
            let mut p = puzzle(PuzzleKind::Cube, 3);
            p.execute_algorithm(&case.algorithm.inverse()).unwrap();
            assert!(solver.recognize(&p, case), "{} not recognized", case.name);

            // The first declared case with the same observation wins.
            let first = solver
                .cases
                .iter()
                .find(|c| c.pattern == case.pattern)
                .unwrap();
            assert_eq!(first.name, solver.find_case(&p).unwrap().name);
            for other in solver.cases.iter().filter(|c| c.pattern != case.pattern) {
                assert!(!solver.recognize(&p, other));
            }
        }
    }
}

#[test]
fn test_last_layer_solvers_solve_their_cases() {
    let solver = oll_solver(3).unwrap();
    for case in &solver.cases {
        let mut p = puzzle(PuzzleKind::Cube, 3);
        p.execute_algorithm(&case.algorithm.inverse()).unwrap();
        p.execute_notation("U2").unwrap();
        solver.solve(&mut p).unwrap();
        let u = p.reference_color(Axis::U);
        for i in 0..4 {
            assert_eq!(u, p.piece(PieceType::Corner, i, 0).colors[0], "after {}", case.name);
        }
    }
}

#[test]
fn test_even_cube_parity_algorithms() {
    let solver = oll_solver(4).unwrap();
    assert!(solver.parity.is_some());
    assert!(oll_solver(5).unwrap().parity.is_none());
    assert!(pll_solver(6).unwrap().parity.is_some());

    // Each parity algorithm leaves centers and corners alone.
    for parity in [solver.parity.unwrap(), pll_solver(4).unwrap().parity.unwrap()] {
        let mut p = puzzle(PuzzleKind::Cube, 4);
        p.execute_algorithm(&parity).unwrap();
        assert!(!p.is_solved());
        for group in puzzle(PuzzleKind::Cube, 4).groups() {
            if group.key().ty == PieceType::Center {
                assert!(p.is_group_solved(group.key()), "{} moved", group.key());
            }
        }
    }
}
