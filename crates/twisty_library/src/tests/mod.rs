use pretty_assertions::assert_eq;

use crate::*;

mod cube;
mod pyraminx;
mod solvers;
mod square1;

fn puzzle(kind: PuzzleKind, size: u16) -> GroupedPuzzle {
    kind.new_puzzle(size).unwrap()
}

fn scrambled(kind: PuzzleKind, size: u16, seed: &str) -> (GroupedPuzzle, Algorithm) {
    let mut p = puzzle(kind, size);
    let params = ScrambleParams::with_seed(ScrambleType::Full, seed);
    let scramble = scramble(&mut p, &params).unwrap();
    (p, scramble)
}

/// Asserts that `alg` followed by its inverse leaves a puzzle unchanged.
fn assert_inverse_cancels(mut p: GroupedPuzzle, alg: &Algorithm) {
    let before = p.to_string();
    p.execute_algorithm(alg).unwrap();
    p.execute_algorithm(&alg.inverse()).unwrap();
    assert_eq!(before, p.to_string());
}

#[test]
fn test_puzzle_kind() {
    assert_eq!(Ok(PuzzleKind::Square1), "sq1".parse());
    assert_eq!(Ok(PuzzleKind::Square1), "Square-1".parse());
    assert_eq!(Ok(PuzzleKind::Cube), "cube".parse());
    assert_eq!("pyraminx", PuzzleKind::Pyraminx.to_string());

    for kind in [PuzzleKind::Cube, PuzzleKind::Pyraminx, PuzzleKind::Square1] {
        assert_eq!(Some(kind), PuzzleKind::from_rules(kind.rules()));
        assert!(puzzle(kind, kind.default_size()).is_solved());
    }
}

#[test]
fn test_unsupported_sizes() {
    for (kind, size) in [
        (PuzzleKind::Cube, 1),
        (PuzzleKind::Cube, 18),
        (PuzzleKind::Pyraminx, 2),
        (PuzzleKind::Square1, 2),
    ] {
        assert!(matches!(
            kind.new_puzzle(size),
            Err(PuzzleError::UnsupportedSize { .. })
        ));
    }
}

#[test]
fn test_scramble_is_reproducible() {
    for kind in [PuzzleKind::Cube, PuzzleKind::Pyraminx, PuzzleKind::Square1] {
        let size = kind.default_size();
        let (a, alg_a) = scrambled(kind, size, "seed");
        let (b, alg_b) = scrambled(kind, size, "seed");
        let (_, alg_c) = scrambled(kind, size, "other seed");
        assert_eq!(alg_a, alg_b);
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(alg_a, alg_c);
        assert!(!a.is_solved());
    }
}

#[test]
fn test_scramble_length() {
    let mut p = puzzle(PuzzleKind::Cube, 4);
    let params = ScrambleParams::with_seed(ScrambleType::Full, "length");
    assert_eq!(40, scramble(&mut p, &params).unwrap().len());
    assert_eq!(40, full_scramble_length(PuzzleKind::Cube, 4));

    let mut p = puzzle(PuzzleKind::Cube, 3);
    let params = ScrambleParams::with_seed(ScrambleType::Partial(5), "length");
    assert_eq!(5, scramble(&mut p, &params).unwrap().len());
}
