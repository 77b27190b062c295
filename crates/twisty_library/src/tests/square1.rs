use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::solvers::square1::{PuzzleState, edge_orientation_solver};
use crate::square1::{BOTTOM, SLOTS, TOP};

fn square1() -> GroupedPuzzle {
    puzzle(PuzzleKind::Square1, 1)
}

fn slash() -> Move {
    Move::turn(Axis::Slash, 0, true)
}

#[test]
fn test_locked_slice_is_rejected() {
    let mut p = square1();
    p.execute_notation("(-1,0)").unwrap();
    let before = p.to_string();
    assert_eq!(Err(MoveError::Blocked(slash())), p.try_make_move(slash()));
    assert_eq!(before, p.to_string());

    let mut p = square1();
    p.execute_notation("(0,1)").unwrap();
    assert_eq!(Err(MoveError::Blocked(slash())), p.try_make_move(slash()));

    let mut p = square1();
    assert!(p.try_make_move(Move::rotation(Axis::Top, true)).is_err());
    assert!(p.try_make_move(Move::turn(Axis::U, 0, true)).is_err());
}

#[test]
fn test_slash_is_self_inverse() {
    let mut p = square1();
    p.execute_notation("(1,0)/").unwrap();
    assert!(!p.is_solved());
    p.execute_notation("/(-1,0)").unwrap();
    assert!(p.is_solved());

    let mut p = square1();
    p.execute_notation("(6,-6)(6,-6)").unwrap();
    assert!(p.is_solved());
}

#[test]
fn test_slash_flips_middle_layer() {
    let mut p = square1();
    p.execute_notation("/").unwrap();
    assert!(PuzzleState::read(&p, false).flipped);
    p.execute_notation("/").unwrap();
    assert!(!PuzzleState::read(&p, false).flipped);
}

#[test]
fn test_square1_notation() {
    let p = square1();
    let alg = p.parse_algorithm("(1,0)/(-3,3)/(0,-1)").unwrap();
    let turn = |axis, clockwise, count| Move::new(axis, Layer::Slice(0), clockwise, count);
    assert_eq!(
        Algorithm::from(vec![
            turn(Axis::Top, true, 1),
            slash(),
            turn(Axis::Top, false, 3),
            turn(Axis::Bottom, true, 3),
            slash(),
            turn(Axis::Bottom, false, 1),
        ]),
        alg,
    );
    assert_eq!("(1,0)/(-3,3)/(0,-1)", p.format_algorithm(&alg));
    assert!(matches!(
        p.parse_algorithm("R U"),
        Err(NotationError::UnknownFamily(_)),
    ));
}

#[test]
fn test_inverted_slash_prints_as_slash() {
    let p = square1();
    let alg = p.parse_algorithm("(1,0)/(3,0)").unwrap().inverse();
    assert_eq!(slash(), alg[1]);
    assert_eq!("(-3,0)/(-1,0)", p.format_algorithm(&alg));
    assert_eq!(Ok(alg), p.parse_algorithm("(-3,0)/(-1,0)"));
}

#[test]
fn test_identity_turns_are_not_printed() {
    let p = square1();
    let turn = |axis, count| Move::new(axis, Layer::Slice(0), true, count);
    let alg = Algorithm::from(vec![
        turn(Axis::Top, 0),
        slash(),
        turn(Axis::Bottom, 12),
        slash().repeated(2),
        turn(Axis::Top, 13),
    ]);
    assert_eq!("/(1,0)", p.format_algorithm(&alg));
}

#[test]
fn test_edge_orientation_cases() {
    let solver = edge_orientation_solver().unwrap();
    assert_eq!("solved", solver.cases[0].name);
    assert_eq!(8, solver.cases.len());

    // Every case is recognized from the position its algorithm solves.
    for case in &solver.cases[1..] {
        let mut p = square1();
        p.execute_algorithm(&case.algorithm.inverse()).unwrap();
        assert!(solver.recognize(&p, case), "{} not recognized", case.name);
        assert!(!solver.recognize(&p, &solver.cases[0]));
    }
}

/// Asserts that a Square-1 is in cube shape, with white on top and yellow
/// on the bottom.
fn assert_oriented(p: &GroupedPuzzle) {
    let state = PuzzleState::read(p, true);
    assert_eq!(&b"ew.ew.ew.ew."[..], &state.top[..]);
    assert_eq!(&b"ey.ey.ey.ey."[..], &state.bottom[..]);
    assert!(!state.flipped);
    for (position, color) in [(TOP, Color::White), (BOTTOM, Color::Yellow)] {
        for i in (0..SLOTS).step_by(3) {
            assert_eq!(color, p.piece(PieceType::Edge, position, i).colors[0]);
        }
    }
}

#[test]
fn test_solve_square1() {
    for seed in 0..16 {
        let (mut p, scramble) = scrambled(PuzzleKind::Square1, 1, &seed.to_string());
        let solution = solve(&mut p, &SolveProgress::new()).unwrap();
        assert_oriented(&p);

        let mut replay = square1();
        replay.execute_algorithm(&scramble).unwrap();
        replay.execute_algorithm(&solution).unwrap();
        assert_eq!(p.to_string(), replay.to_string());
    }
}

#[test]
fn test_solve_oriented_square1_is_empty() {
    let mut p = square1();
    let solution = solve(&mut p, &SolveProgress::new()).unwrap();
    assert_eq!(Algorithm::new(), solution);
    assert!(p.is_solved());
}

/// Random turns and slashes, skipping slashes that a corner blocks.
fn arb_square1_alg() -> impl Strategy<Value = Algorithm> {
    let turn = (
        prop::sample::select(vec![Axis::Top, Axis::Bottom]),
        any::<bool>(),
        1..SLOTS as u16,
    )
        .prop_map(|(axis, clockwise, count)| Move::new(axis, Layer::Slice(0), clockwise, count));
    let mv = prop_oneof![3 => turn, 1 => Just(slash())];
    prop::collection::vec(mv, 0..16).prop_map(|moves| {
        let mut p = square1();
        moves
            .into_iter()
            .filter(|&mv| p.try_make_move(mv).is_ok())
            .collect()
    })
}

proptest! {
    #[test]
    fn proptest_square1_notation_roundtrip(alg in arb_square1_alg()) {
        let p = square1();
        for alg in [alg.clone(), alg.inverse()] {
            assert_eq!(p.parse_algorithm(&p.format_algorithm(&alg)), Ok(alg));
        }
    }

    #[test]
    fn proptest_square1_inverse_cancels(alg in arb_square1_alg()) {
        assert_inverse_cancels(square1(), &alg);
    }
}
