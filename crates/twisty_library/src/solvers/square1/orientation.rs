//! Edge orientation: a case solver over the top/bottom colors of the eight
//! edges, for a Square-1 in cube shape with oriented corners.

use twisty_core::{
    Algorithm, Axis, Case, CaseSolver, Color, GroupedPuzzle, Layer, Move, PieceType, SolveError,
};

use crate::square1::{BOTTOM, RULES, TOP};

const PHASE: &str = "edge orientation";

/// Algorithms for every edge orientation case, up to turning each layer by
/// 90°.
const ALGORITHMS: &[&str] = &[
    "(1,0)/(3,0)/(3,0)/(-1,-1)/(-2,1)/(-3,0)/(-1,0)",
    "(0,-1)/(1,1)/(-1,0)",
    "(1,0)/(-4,-1)/(1,1)/(3,0)/(-1,0)",
    "(1,0)/(3,0)/(3,0)/(-1,-1)/(-2,1)/(-4,-1)/(0,1)",
    "(0,-1)/(3,0)/(3,0)/(1,1)/(-3,0)/(-3,0)/(-1,0)",
    "(1,0)/(-1,-1)/(3,3)/(1,1)/(-1,0)",
    "(1,0)/(-3,0)/(3,0)/(-1,-1)/(-3,0)/(3,0)/(0,1)",
];

/// Observes which color each edge shows on its top or bottom facelet: `0`
/// for white, `1` for yellow, and `-1` for a slot without an edge.
fn observe_edges(puzzle: &GroupedPuzzle) -> Vec<i8> {
    [TOP, BOTTOM]
        .into_iter()
        .flat_map(|position| (0..4).map(move |i| (position, i * 3)))
        .map(|(position, slot)| {
            match puzzle.get_piece(PieceType::Edge, position, slot) {
                Some(edge) if edge.colors[0] == Color::White => 0,
                Some(_) => 1,
                None => -1,
            }
        })
        .collect()
}

/// Constructs the edge orientation case solver. The solved case comes
/// first, so an oriented puzzle is left alone.
pub fn edge_orientation_solver() -> Result<CaseSolver, SolveError> {
    let solved = GroupedPuzzle::new(&RULES, 1)?;
    let mut cases = vec![Case::new("solved", observe_edges(&solved), Algorithm::new())];
    for (i, notation) in ALGORITHMS.iter().enumerate() {
        let alg = (RULES.parse_algorithm)(notation, 1)?;
        cases.push(Case::from_algorithm(
            format!("EO {}", i + 1),
            &solved,
            alg,
            observe_edges,
        )?);
    }

    let quarter_turn = |axis| Move::new(axis, Layer::Slice(0), true, 3);
    Ok(CaseSolver {
        phase: PHASE,
        cases,
        observe: observe_edges,
        outer: quarter_turn(Axis::Top),
        inner: quarter_turn(Axis::Bottom),
        outer_count: 4,
        inner_count: 4,
        parity: None,
    })
}
