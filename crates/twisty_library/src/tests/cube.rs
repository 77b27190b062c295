use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::cube::RULES;

fn cube(size: u16) -> GroupedPuzzle {
    puzzle(PuzzleKind::Cube, size)
}

#[test]
fn test_sexy_move_order() {
    let mut p = cube(3);
    p.execute_notation("R U R' U'").unwrap();
    assert!(!p.is_solved());
    p.execute_notation("(R U R' U')5").unwrap();
    assert!(p.is_solved());
}

#[test]
fn test_quarter_turn_order() {
    for size in 2..=5 {
        let fresh = cube(size).to_string();
        for &axis in RULES.axes {
            for layer in 0..size {
                let mut p = cube(size);
                let mv = Move::turn(axis, layer, true);
                p.make_move(mv);
                assert_ne!(fresh, p.to_string(), "{mv} did nothing on size {size}");
                p.make_move(mv.repeated(3));
                assert_eq!(fresh, p.to_string(), "{mv} has order 4 on size {size}");

                p.make_move(mv.repeated(2));
                p.make_move(mv.repeated(2).inverse());
                assert_eq!(fresh, p.to_string());
            }
        }
    }
}

#[test]
fn test_rotations_keep_cube_solved() {
    let mut p = cube(4);
    p.execute_notation("x y' z2 1-4L").unwrap();
    assert!(p.is_solved());

    let mut p = cube(5);
    p.execute_notation("M E S").unwrap();
    assert!(!p.is_solved());
    p.execute_notation("S' E' M'").unwrap();
    assert!(p.is_solved());
}

#[test]
fn test_parse_cube_notation() {
    let p = cube(4);
    let turn = Move::turn;
    assert_eq!(
        Algorithm::from(vec![
            turn(Axis::R, 0, true),
            turn(Axis::U, 2, false),
            turn(Axis::F, 1, true).repeated(2),
            turn(Axis::F, 2, true).repeated(2),
            Move::rotation(Axis::U, true),
        ]),
        p.parse_algorithm("R 3U' 2-3F2 y").unwrap(),
    );
    assert_eq!(
        Algorithm::from(vec![Move::rotation(Axis::R, true), turn(Axis::L, 0, true)]),
        p.parse_algorithm("r").unwrap(),
    );
    assert_eq!(
        Algorithm::from(vec![Move::rotation(Axis::L, false)]),
        p.parse_algorithm("1-4L'").unwrap(),
    );
    assert_eq!(
        p.parse_algorithm("R U R' U'").unwrap().inverse(),
        p.parse_algorithm("[R, U]'").unwrap(),
    );
}

#[test]
fn test_cube_notation_errors() {
    let p = cube(3);
    assert_eq!(
        Err(NotationError::LayerOutOfRange { layer: 4, size: 3 }),
        p.parse_algorithm("4R"),
    );
    assert!(matches!(
        p.parse_algorithm("Q"),
        Err(NotationError::UnknownFamily(_)),
    ));
    assert!(matches!(
        p.parse_algorithm("(1,0)/"),
        Err(NotationError::Syntax(_)),
    ));
    assert!(matches!(
        p.parse_algorithm("3-2R"),
        Err(NotationError::Syntax(_)),
    ));
    assert!(matches!(p.parse_algorithm("2x"), Err(NotationError::Unsupported(_))));
}

#[test]
fn test_solved_after_move_log_round_trip() {
    let mut p = cube(4);
    p.set_log_moves(true);
    p.execute_notation("R 2U F' 3L2 y").unwrap();
    let log = p.take_move_log();
    assert_eq!(5, log.len());

    let mut replay = cube(4);
    replay
        .execute_algorithm(&replay.parse_algorithm(&p.format_algorithm(&log)).unwrap())
        .unwrap();
    assert_eq!(p.to_string(), replay.to_string());
}

fn arb_cube_move(size: u16) -> impl Strategy<Value = Move> {
    let axis = prop::sample::select(RULES.axes);
    let layer = prop_oneof![
        4 => (0..size).prop_map(Layer::Slice),
        1 => Just(Layer::Whole),
    ];
    (axis, layer, any::<bool>(), 1..=3_u16).prop_map(|(axis, layer, clockwise, count)| {
        Move::new(axis, layer, clockwise, count)
    })
}

fn arb_cube_alg() -> impl Strategy<Value = (u16, Algorithm)> {
    (2..=7_u16).prop_flat_map(|size| {
        (
            Just(size),
            prop::collection::vec(arb_cube_move(size), 0..12).prop_map(Algorithm),
        )
    })
}

proptest! {
    #[test]
    fn proptest_cube_notation_roundtrip((size, alg) in arb_cube_alg()) {
        let p = cube(size);
        let s = p.format_algorithm(&alg);
        assert_eq!(p.parse_algorithm(&s), Ok(alg));
    }

    #[test]
    fn proptest_cube_inverse_cancels((size, alg) in arb_cube_alg()) {
        assert_inverse_cancels(cube(size), &alg);
    }

    #[test]
    fn proptest_simplify_preserves_state((size, alg) in arb_cube_alg()) {
        let mut a = cube(size);
        let mut b = cube(size);
        a.execute_algorithm(&alg).unwrap();
        b.execute_algorithm(&alg.simplify(&RULES)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }
}
