use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::pyraminx::{RULES, VERTICES};

fn pyraminx(size: u16) -> GroupedPuzzle {
    puzzle(PuzzleKind::Pyraminx, size)
}

#[test]
fn test_turn_order() {
    for size in 3..=5 {
        let fresh = pyraminx(size).to_string();
        for axis in VERTICES {
            for layer in 0..size {
                let mut p = pyraminx(size);
                let mv = Move::turn(axis, layer, true);
                p.make_move(mv);
                assert_ne!(fresh, p.to_string(), "{mv} did nothing on size {size}");
                p.make_move(mv.repeated(2));
                assert_eq!(fresh, p.to_string(), "{mv} has order 3 on size {size}");
            }
            let mut p = pyraminx(size);
            p.make_move(Move::rotation(axis, false));
            assert!(p.is_solved());
        }
    }
}

#[test]
fn test_tips_move_alone() {
    for size in 3..=5 {
        let mut p = pyraminx(size);
        p.execute_notation("u r' l b").unwrap();
        for group in pyraminx(size).groups() {
            let key = group.key();
            let solved = p.is_group_solved(key);
            if key.ty == PieceType::Corner {
                assert!(!solved, "tip {key} did not turn on size {size}");
            } else {
                assert!(solved, "{key} moved with a tip on size {size}");
            }
        }
    }
}

#[test]
fn test_piece_counts() {
    let count = |size, ty| {
        pyraminx(size)
            .groups()
            .filter(|g| g.key().ty == ty)
            .map(|g| g.pieces().count())
            .sum::<usize>()
    };
    assert_eq!(4, count(3, PieceType::Corner));
    assert_eq!(6, count(3, PieceType::Edge));
    assert_eq!(4, count(3, PieceType::Axial));
    assert_eq!(0, count(3, PieceType::Center));
    assert_eq!(12, count(4, PieceType::Edge));
    assert_eq!(4, count(4, PieceType::Center));
}

#[test]
fn test_pyraminx_notation() {
    let p = pyraminx(3);
    assert_eq!(
        Algorithm::from(vec![Move::turn(Axis::U, 0, true), Move::turn(Axis::U, 1, true)]),
        p.parse_algorithm("U").unwrap(),
    );
    assert_eq!(
        Algorithm::from(vec![Move::turn(Axis::L, 0, false)]),
        p.parse_algorithm("l'").unwrap(),
    );
    assert_eq!(
        Algorithm::from(vec![Move::turn(Axis::R, 2, true)]),
        p.parse_algorithm("3R").unwrap(),
    );
    assert_eq!(
        Algorithm::from(vec![Move::rotation(Axis::B, true)]),
        p.parse_algorithm("1-3B").unwrap(),
    );
    assert_eq!(
        Err(NotationError::LayerOutOfRange { layer: 4, size: 3 }),
        p.parse_algorithm("4U"),
    );
    assert!(matches!(p.parse_algorithm("2u"), Err(NotationError::Unsupported(_))));
    assert!(matches!(p.parse_algorithm("F"), Err(NotationError::UnknownFamily(_))));
}

#[test]
fn test_no_pyraminx_solver() {
    let mut p = pyraminx(3);
    assert_eq!(
        Err(SolveError::Unsupported { puzzle: "Pyraminx" }),
        solve(&mut p, &SolveProgress::new()),
    );
}

fn arb_pyraminx_alg() -> impl Strategy<Value = (u16, Algorithm)> {
    (3..=6_u16).prop_flat_map(|size| {
        let layer = prop_oneof![
            4 => (0..size).prop_map(Layer::Slice),
            1 => Just(Layer::Whole),
        ];
        let mv = (prop::sample::select(RULES.axes), layer, any::<bool>(), 1..=2_u16)
            .prop_map(|(axis, layer, clockwise, count)| Move::new(axis, layer, clockwise, count));
        (Just(size), prop::collection::vec(mv, 0..12).prop_map(Algorithm))
    })
}

proptest! {
    #[test]
    fn proptest_pyraminx_notation_roundtrip((size, alg) in arb_pyraminx_alg()) {
        let p = pyraminx(size);
        assert_eq!(p.parse_algorithm(&p.format_algorithm(&alg)), Ok(alg));
    }

    #[test]
    fn proptest_pyraminx_inverse_cancels((size, alg) in arb_pyraminx_alg()) {
        assert_inverse_cancels(pyraminx(size), &alg);
    }
}
