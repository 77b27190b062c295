//! Last layer: orientation (OLL) and permutation (PLL) case solvers.
//!
//! Case patterns are generated from a cube of at most 3x3x3, which is all a
//! reduced cube looks like to the observations. Algorithms are parsed for
//! the real size so that wide and slice moves keep the inner layers
//! together.

use twisty_core::{
    Algorithm, Axis, Case, CaseSolver, Color, GroupedPuzzle, Layer, Move, Observation, PieceType,
    SolveError,
};

use crate::cube::RULES;
use crate::cube::geometry::FACES;

/// OLL algorithms; the empty one at the end recognizes an oriented layer.
const OLL_ALGORITHMS: &[&str] = &[
    "R U2 R2 F R F' U2 R' F R F'",
    "F R U R' U' F' f R U R' U' f'",
    "f R U R' U' f' U' F R U R' U' F'",
    "f R U R' U' f' U F R U R' U' F'",
    "r' U2 R U R' U r",
    "r U2 R' U' R U' r'",
    "r U R' U R U2 r'",
    "r' U' R U' R' U2 r",
    "R U R' U' R' F R2 U R' U' F'",
    "R U R' U R' F R F' R U2 R'",
    "r U R' U R' F R F' R U2 r'",
    "M' R' U' R U' R' U2 R U' M",
    "F U R U' R2 F' R U R U' R'",
    "R' F R U R' F' R F U' F'",
    "r' U' r R' U' R U r' U r",
    "r U r' R U R' U' r U' r'",
    "R U R' U R' F R F' U2 R' F R F'",
    "r U R' U R U2 r2 U' R U' R' U2 r",
    "M U R U R' U' M' R' F R F'",
    "r U R' U' M2 U R U' R' U' M'",
    "R U2 R' U' R U R' U' R U' R'",
    "R U2 R2 U' R2 U' R2 U2 R",
    "R2 D' R U2 R' D R U2 R",
    "r U R' U' r' F R F'",
    "F' r U R' U' r' F R",
    "R U2 R' U' R U' R'",
    "R U R' U R U2 R'",
    "r U R' U' M U R U' R'",
    "R U R' U' R U' R' F' U' F R U R'",
    "F R' F R2 U' R' U' R U R' F2",
    "R' U' F U R U' R' F' R",
    "L U F' U' L' U L F L'",
    "R U R' U' R' F R F'",
    "R U R2 U' R' F R U R U' F'",
    "R U2 R2 F R F' R U2 R'",
    "L' U' L U' L' U L U L F' L' F",
    "F R' F' R U R U' R'",
    "R U R' U R U' R' U' R' F R F'",
    "L F' L' U' L U F U' L'",
    "R' F R U R' U' F' U R",
    "R U R' U R U2 R' F R U R' U' F'",
    "R' U' R U' R' U2 R F R U R' U' F'",
    "F' U' L' U L F",
    "F U R U' R' F'",
    "F R U R' U' F'",
    "R' U' R' F R F' U R",
    "R' U' R' F R F' R' F R F' U R",
    "F R U R' U' R U R' U' F'",
    "r U' r2 U r2 U r2 U' r",
    "r' U r2 U' r2 U' r2 U r'",
    "F U R U' R' U R U' R' F'",
    "R U R' U R U' B U' B' R'",
    "r' U' R U' R' U R U' R' U2 r",
    "r U R' U R U' R' U R U2 r'",
    "R' F R U R U' R2 F' R2 U' R' U R U R'",
    "r' U' r U' R' U R U' R' U R r' U r",
    "R U R' U' M' U R U' r'",
    "",
];

/// PLL algorithms; the empty one at the end recognizes a permuted layer.
const PLL_ALGORITHMS: &[&str] = &[
    "x L2 D2 L' U' L D2 L' U L' x'",
    "x' L2 D2 L U L' D2 L U' L x",
    "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R",
    "R2 U R' U R' U' R U' R2 U' D R' U R D'",
    "R' U' R U D' R2 U R' U R U' R U' R2 D",
    "R2 U' R U' R U R' U R2 U D' R U' R' D",
    "R U R' U' D R2 U' R U' R' U R' U R2 D'",
    "x R2 F R F' R U2 r' U r U2 x'",
    "R U R' F' R U R' U' R' F R2 U' R'",
    "R U' R' U' R U R D R' U' R D' R' U2 R'",
    "R2 F R U R U' R' F' R U2 R' U2 R",
    "R U R' U' R' F R2 U' R' U' R U R' F'",
    "x' L' U L D' L' U' L D L' U' L D' L' U L D x",
    "z U R' D R2 U' R D' U R' D R2 U' R D' z' U'",
    "R' U R U' R' F' U' F R U R' F R' F' R U' R",
    "R' U R' U' y R' F' R2 U' R' U R' F R F y'",
    "F R U' R' U' R U R' F' R U R' U' R' F R F'",
    "M2 U M2 U2 M2 U M2",
    "R U' R U R U R U' R' U' R2",
    "R2 U R U R' U' R' U' R' U R'",
    "M' U M2 U M2 U M' U2 M2",
    "",
];

/// Observes which facelet of each top-layer piece shows the `U` color, or
/// `-1` if none does.
fn observe_orientation(puzzle: &GroupedPuzzle) -> Vec<i8> {
    let u = puzzle.reference_color(Axis::U);
    top_layer_pieces(puzzle)
        .map(|colors| colors.iter().position(|&c| c == u).map_or(-1, |i| i as i8))
        .collect()
}

/// Observes which face each sticker of each top-layer piece belongs on.
fn observe_permutation(puzzle: &GroupedPuzzle) -> Vec<i8> {
    let faces = FACES.map(|f| puzzle.reference_color(f));
    top_layer_pieces(puzzle)
        .flatten()
        .map(|c| faces.iter().position(|f| f == c).map_or(-1, |i| i as i8))
        .collect()
}

/// Iterates over the colors of the four top corners, then the first wing of
/// each of the four top edges if there are any.
fn top_layer_pieces(puzzle: &GroupedPuzzle) -> impl Iterator<Item = &[Color]> {
    let corners = (0..4).map(move |i| &puzzle.piece(PieceType::Corner, i, 0).colors[..]);
    let edges = (0..4)
        .filter_map(move |i| puzzle.get_piece(PieceType::Edge, i, 0))
        .map(|p| &p.colors[..]);
    corners.chain(edges)
}

fn has_parity(size: u16) -> bool {
    size >= 4 && size % 2 == 0
}

/// Inner `R` slices turned by the parity algorithms.
fn inner_layers(size: u16) -> Vec<u16> {
    (1..size / 2).collect()
}

fn half_turns(axis: Axis, layers: &[u16]) -> impl Iterator<Item = Move> + '_ {
    layers
        .iter()
        .map(move |&k| Move::new(axis, Layer::Slice(k), true, 2))
}

/// Flips a pair of wings on the given inner layers, fixing OLL parity.
///
/// `r2 B2 U2 l U2 r' U2 r U2 F2 r F2 l' B2 r2`, where `r` and `l` turn every
/// layer in `layers`.
pub fn oll_parity(layers: &[u16]) -> Algorithm {
    let slices = |axis, clockwise| {
        layers
            .iter()
            .map(move |&k| Move::new(axis, Layer::Slice(k), clockwise, 1))
    };
    let outer = |axis| Move::new(axis, Layer::Slice(0), true, 2);

    let mut alg = Algorithm::new();
    alg.extend(half_turns(Axis::R, layers));
    alg.extend([outer(Axis::B), outer(Axis::U)]);
    alg.extend(slices(Axis::L, true));
    alg.push(outer(Axis::U));
    alg.extend(slices(Axis::R, false));
    alg.push(outer(Axis::U));
    alg.extend(slices(Axis::R, true));
    alg.extend([outer(Axis::U), outer(Axis::F)]);
    alg.extend(slices(Axis::R, true));
    alg.push(outer(Axis::F));
    alg.extend(slices(Axis::L, false));
    alg.push(outer(Axis::B));
    alg.extend(half_turns(Axis::R, layers));
    alg
}

/// Swaps two pairs of edges on an even cube, fixing PLL parity.
///
/// `R' U R U' r2 U2 r2 Uw2 r2 u2 U R' U' R`, where `r` and `u` turn every
/// inner layer up to the middle and `Uw` turns every layer up to the
/// middle.
pub fn pll_parity(size: u16) -> Algorithm {
    let inner = inner_layers(size);
    let wide: Vec<u16> = (0..size / 2).collect();
    let turn = |axis, clockwise| Move::turn(axis, 0, clockwise);

    let mut alg = Algorithm::from(vec![
        turn(Axis::R, false),
        turn(Axis::U, true),
        turn(Axis::R, true),
        turn(Axis::U, false),
    ]);
    alg.extend(half_turns(Axis::R, &inner));
    alg.push(Move::new(Axis::U, Layer::Slice(0), true, 2));
    alg.extend(half_turns(Axis::R, &inner));
    alg.extend(half_turns(Axis::U, &wide));
    alg.extend(half_turns(Axis::R, &inner));
    alg.extend(half_turns(Axis::U, &inner));
    alg.extend([
        turn(Axis::U, true),
        turn(Axis::R, false),
        turn(Axis::U, false),
        turn(Axis::R, true),
    ]);
    alg
}

fn case_solver(
    phase: &'static str,
    algorithms: &[&str],
    observe: Observation,
    size: u16,
    parity: Option<Algorithm>,
) -> Result<CaseSolver, SolveError> {
    let pattern_size = size.min(3);
    let solved = GroupedPuzzle::new(&RULES, pattern_size)?;
    let cases = algorithms
        .iter()
        .enumerate()
        .map(|(i, &notation)| -> Result<Case, SolveError> {
            let name = if notation.is_empty() {
                format!("{phase} skip")
            } else {
                format!("{phase} {}", i + 1)
            };
            let pattern_alg = (RULES.parse_algorithm)(notation, pattern_size)?;
            let mut case = Case::from_algorithm(name, &solved, pattern_alg, observe)?;
            case.algorithm = (RULES.parse_algorithm)(notation, size)?;
            Ok(case)
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::trace!("built {} {phase} cases for size {size}", cases.len());

    Ok(CaseSolver {
        phase,
        cases,
        observe,
        outer: Move::rotation(Axis::U, true),
        inner: Move::turn(Axis::U, 0, true),
        outer_count: 4,
        inner_count: 4,
        parity,
    })
}

/// Constructs the OLL case solver for a cube size.
pub fn oll_solver(size: u16) -> Result<CaseSolver, SolveError> {
    let parity = has_parity(size).then(|| oll_parity(&inner_layers(size)));
    case_solver("OLL", OLL_ALGORITHMS, observe_orientation, size, parity)
}

/// Constructs the PLL case solver for a cube size.
pub fn pll_solver(size: u16) -> Result<CaseSolver, SolveError> {
    let parity = has_parity(size).then(|| pll_parity(size));
    case_solver("PLL", PLL_ALGORITHMS, observe_permutation, size, parity)
}
