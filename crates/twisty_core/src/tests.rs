use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

// Turntable with `size` single-sticker pieces in a ring, turned by `U`. `D`
// exists only so that there is a second axis that commutes with `U`.
const RING_COLORS: [Color; 4] = [Color::White, Color::Yellow, Color::Green, Color::Blue];

static RING_BEHAVIORS: [PieceBehavior; 1] = [PieceBehavior {
    ty: PieceType::Center,
    position_count: |_| 1,
    piece_count: |size, _| size as usize,
    create_piece: |size, position, index| {
        Some(Piece::new(
            PieceType::Center,
            position,
            index,
            [RING_COLORS[index % 4]],
            size,
        ))
    },
    affected_pieces: |mv, group, _| {
        if mv.axis == Axis::U {
            (0..group.len()).collect()
        } else {
            vec![]
        }
    },
    move_piece: |mv, piece| {
        if mv.axis == Axis::U {
            piece.index = (piece.index + 1) % piece.puzzle_size as usize;
        }
    },
}];

static RING: PuzzleRules = PuzzleRules {
    name: "Ring",
    min_size: 4,
    max_size: 4,
    behaviors: &RING_BEHAVIORS,
    axes: &[Axis::U, Axis::D],
    faces: &[],
    axis_order: |_| 4,
    rotate_face: |_, face| face,
    moves_reference: |_, _| false,
    commutes: |a, b| a.axis != b.axis,
    check_move: |puzzle, mv| puzzle.rules().check_move_shape(mv, 1),
    parse_algorithm: |s, _| {
        s.split_whitespace()
            .map(|token| match token {
                "U" => Ok(Move::turn(Axis::U, 0, true)),
                "U'" => Ok(Move::turn(Axis::U, 0, false)),
                "D" => Ok(Move::turn(Axis::D, 0, true)),
                "D'" => Ok(Move::turn(Axis::D, 0, false)),
                "y" => Ok(Move::rotation(Axis::U, true)),
                _ => Err(NotationError::UnknownFamily(token.to_owned())),
            })
            .collect()
    },
    format_algorithm: |alg, _| alg.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" "),
};

// Ring whose `U` sends every piece past the end of its group.
static BROKEN_BEHAVIORS: [PieceBehavior; 1] = [PieceBehavior {
    ty: PieceType::Center,
    position_count: |_| 1,
    piece_count: |size, _| size as usize,
    create_piece: |size, position, index| {
        Some(Piece::new(PieceType::Center, position, index, [Color::White], size))
    },
    affected_pieces: |_, group, _| (0..group.len()).collect(),
    move_piece: |_, piece| piece.index = 99,
}];

static BROKEN: PuzzleRules = PuzzleRules {
    name: "Broken ring",
    min_size: 4,
    max_size: 4,
    behaviors: &BROKEN_BEHAVIORS,
    axes: &[Axis::U],
    faces: &[],
    axis_order: |_| 4,
    rotate_face: |_, face| face,
    moves_reference: |_, _| false,
    commutes: |_, _| false,
    check_move: |puzzle, mv| puzzle.rules().check_move_shape(mv, 1),
    parse_algorithm: |_, _| Ok(Algorithm::new()),
    format_algorithm: |_, _| String::new(),
};

fn ring() -> GroupedPuzzle {
    GroupedPuzzle::new(&RING, 4).unwrap()
}

fn white_slot(puzzle: &GroupedPuzzle) -> Vec<i8> {
    let group = puzzle.group(GroupKey::new(PieceType::Center, 0)).unwrap();
    let slot = group.pieces().find(|p| p.has_color(Color::White)).unwrap().index;
    vec![slot as i8]
}

#[test]
fn test_unit_steps() {
    let r = Move::turn(Axis::R, 0, true);
    assert_eq!(r.unit_steps(4), 1);
    assert_eq!(r.inverse().unit_steps(4), 3);
    assert_eq!(r.repeated(2).unit_steps(4), 2);
    assert_eq!(r.repeated(2).inverse().unit_steps(4), 2);
    assert_eq!(r.repeated(4).unit_steps(4), 0);
    assert_eq!(r.repeated(4).inverse().unit_steps(4), 0);
    assert_eq!(r.inverse().repeated(5).unit_steps(12), 7);

    assert_eq!(r.with_steps(3, 4), r.inverse());
    assert_eq!(r.with_steps(2, 4), r.repeated(2));
    assert_eq!(r.with_steps(7, 12), r.inverse().repeated(5));
    assert_eq!(r.with_steps(6, 12), r.repeated(6));
}

#[test]
fn test_algorithm_inverse() {
    let alg = RING.parse_algorithm_for_test("U D U'");
    assert_eq!(alg.inverse(), RING.parse_algorithm_for_test("U D' U'"));
    assert_eq!(alg.inverse().inverse(), alg);
    assert_eq!(alg.repeated(2).len(), 6);
}

#[test]
fn test_simplify() {
    let simplified = |s: &str| RING.parse_algorithm_for_test(s).simplify(&RING);

    assert_eq!(simplified("U U U U"), Algorithm::new());
    assert_eq!(simplified("U U"), Algorithm(vec![Move::turn(Axis::U, 0, true).repeated(2)]));
    assert_eq!(simplified("U U U"), Algorithm(vec![Move::turn(Axis::U, 0, false)]));
    assert_eq!(simplified("U D U'"), RING.parse_algorithm_for_test("D"));
    assert_eq!(simplified("U y U'"), RING.parse_algorithm_for_test("U y U'"));
}

#[test]
fn test_unsupported_size() {
    assert_eq!(
        GroupedPuzzle::new(&RING, 3).unwrap_err(),
        PuzzleError::UnsupportedSize {
            puzzle: "Ring",
            size: 3,
            min: 4,
            max: 4,
        },
    );
}

#[test]
fn test_make_move() {
    let mut puzzle = ring();
    assert!(puzzle.is_solved());

    puzzle.make_move(Move::turn(Axis::U, 0, true));
    assert_eq!(white_slot(&puzzle), [1]);
    assert!(!puzzle.is_solved());
    let group = puzzle.group(GroupKey::new(PieceType::Center, 0)).unwrap();
    assert!(group.is_settled());
    for (i, slot) in group.slots().iter().enumerate() {
        assert_eq!(slot.as_ref().unwrap().index, i);
    }

    puzzle.make_move(Move::turn(Axis::U, 0, true).repeated(3));
    assert!(puzzle.is_solved());

    puzzle.make_move(Move::turn(Axis::U, 0, false));
    assert_eq!(white_slot(&puzzle), [3]);
}

#[test]
fn test_illegal_move() {
    let mut puzzle = ring();
    let before = puzzle.to_string();
    assert_eq!(
        puzzle.try_make_move(Move::turn(Axis::R, 0, true)),
        Err(MoveError::ForeignAxis {
            puzzle: "Ring",
            axis: Axis::R,
        }),
    );
    assert_eq!(
        puzzle.try_make_move(Move::turn(Axis::U, 1, true)),
        Err(MoveError::LayerOutOfRange { layer: 1, size: 1 }),
    );
    assert_eq!(puzzle.to_string(), before);
}

#[test]
#[should_panic = "illegal move"]
fn test_illegal_move_panics() {
    ring().make_move(Move::turn(Axis::F, 0, true));
}

#[test]
#[should_panic = "out of range"]
fn test_lost_piece_panics() {
    let mut puzzle = GroupedPuzzle::new(&BROKEN, 4).unwrap();
    let _ = puzzle.try_make_move(Move::turn(Axis::U, 0, true));
}

#[test]
fn test_slash_inverse_is_clockwise() {
    let slash = Move::turn(Axis::Slash, 0, true);
    assert_eq!(slash.inverse(), slash);
    assert_eq!(Algorithm(vec![slash]).inverse(), Algorithm(vec![slash]));
    assert!(!Move::turn(Axis::Top, 0, true).inverse().clockwise);
}

#[test]
fn test_move_log() {
    let mut puzzle = ring();
    puzzle.make_move(Move::turn(Axis::U, 0, true));
    assert!(puzzle.move_log().is_empty());

    puzzle.set_log_moves(true);
    puzzle.execute_algorithm(&RING.parse_algorithm_for_test("U D")).unwrap();
    assert_eq!(*puzzle.move_log(), RING.parse_algorithm_for_test("U D"));

    puzzle.clear_move_log();
    assert!(puzzle.move_log().is_empty());
}

#[test]
fn test_rotation_stack() {
    let mut puzzle = ring();
    puzzle.set_log_moves(true);
    puzzle.make_move(Move::turn(Axis::D, 0, true));

    puzzle.push_rotations();
    puzzle.make_rotation(Axis::U, true);
    puzzle.make_move(Move::turn(Axis::U, 0, true));
    puzzle.push_rotations();
    puzzle.make_rotation(Axis::U, true);
    puzzle.pop_rotations();
    puzzle.pop_rotations();

    // Both rotations are undone and dropped from the log.
    assert_eq!(white_slot(&puzzle), [1]);
    assert_eq!(*puzzle.move_log(), RING.parse_algorithm_for_test("D U"));
}

#[test]
fn test_case_solver() {
    let solved = ring();
    let u = Move::turn(Axis::U, 0, true);
    let solver = CaseSolver {
        phase: "ring",
        cases: vec![
            Case::from_algorithm("solved", &solved, Algorithm::new(), white_slot).unwrap(),
            Case::from_algorithm("one", &solved, Algorithm(vec![u]), white_slot).unwrap(),
        ],
        observe: white_slot,
        outer: Move::rotation(Axis::D, true),
        inner: u,
        outer_count: 1,
        inner_count: 4,
        parity: None,
    };
    assert_eq!(solver.cases[1].pattern, [3]);

    let mut puzzle = ring();
    assert!(solver.recognize(&puzzle, &solver.cases[0]));
    assert!(!solver.recognize(&puzzle, &solver.cases[1]));
    assert_eq!(solver.find_case(&puzzle).unwrap().name, "solved");

    // Recognized after one inner pre-move.
    puzzle.make_move(u.repeated(2));
    assert_eq!(solver.find_case(&puzzle), None);
    assert_eq!(solver.solve(&mut puzzle).unwrap().name, "one");
    assert!(puzzle.is_solved());

    // The first declared case wins.
    let mut shadowed = solver.clone();
    shadowed.cases.insert(0, Case::new("shadow", vec![3], Algorithm(vec![u])));
    puzzle.make_move(u.inverse());
    assert_eq!(shadowed.find_case(&puzzle).unwrap().name, "shadow");
}

#[test]
fn test_case_solver_no_match() {
    let solved = ring();
    let solver = CaseSolver {
        phase: "ring",
        cases: vec![Case::new("impossible", vec![7], Algorithm::new())],
        observe: white_slot,
        outer: Move::rotation(Axis::D, true),
        inner: Move::turn(Axis::U, 0, true),
        outer_count: 2,
        inner_count: 4,
        parity: Some(RING.parse_algorithm_for_test("U")),
    };
    let mut puzzle = solved.clone();
    assert_eq!(
        solver.solve(&mut puzzle),
        Err(SolveError::NoMatchingCase { phase: "ring" }),
    );
    // Only the parity algorithm remains.
    assert_eq!(white_slot(&puzzle), [1]);
}

#[test]
fn test_progress() {
    let progress = SolveProgress::new();
    progress.set_total(4);
    progress.advance();
    progress.set_progress(3);
    progress.set_progress(2);
    assert_eq!(progress.fraction(), (3, 4));
    assert_eq!(progress.value(), 0.75);
}

#[test]
fn test_color_names() {
    assert_eq!(Color::Green.to_string(), "G");
    assert_eq!("orange".parse(), Ok(Color::Orange));
    assert_eq!("w".parse(), Ok(Color::White));
}

impl PuzzleRules {
    fn parse_algorithm_for_test(&self, s: &str) -> Algorithm {
        (self.parse_algorithm)(s, 4).unwrap()
    }
}

proptest! {
    #[test]
    fn proptest_ring_inverse_cancels(moves in prop::collection::vec((any::<bool>(), 0..6_u16), 0..20)) {
        let alg: Algorithm = moves
            .into_iter()
            .map(|(cw, count)| Move::new(Axis::U, Layer::Slice(0), cw, count))
            .collect();
        let mut puzzle = ring();
        puzzle.execute_algorithm(&alg).unwrap();
        puzzle.execute_algorithm(&alg.inverse()).unwrap();
        prop_assert!(puzzle.is_solved());
        prop_assert!(alg.simplify(&RING).len() <= 1);
    }
}
