//! Reduction solver for NxN cubes.
//!
//! Phases run strictly in sequence, each relying on the previous one:
//! centers, edge pairing, cross, first-layer corners, middle-layer edges,
//! OLL, and PLL. Parity is handled inside edge pairing and the last-layer
//! case solvers.

mod centers;
mod corners;
mod cross;
mod edges;
mod f2l;
mod last_layer;

pub use centers::CenterSolver;
pub use corners::solve_corners;
pub use cross::solve_cross;
pub use edges::EdgeSolver;
pub use f2l::solve_middle_layer;
pub use last_layer::{oll_parity, oll_solver, pll_parity, pll_solver};

use twisty_core::{
    Algorithm, Axis, Color, GroupedPuzzle, Layer, Move, MoveError, Piece, PieceType, SolveError,
    SolveProgress,
};

use super::guard;
use crate::cube::geometry::{self, FACES, Vec3};

/// Number of phases reported to [`SolveProgress`].
const PHASE_COUNT: u32 = 7;

/// Every single-layer outer move: each face a quarter turn either way or a
/// half turn.
pub(crate) fn outer_moves() -> impl Iterator<Item = Move> {
    FACES.into_iter().flat_map(|face| {
        [(true, 1), (false, 1), (true, 2)]
            .map(|(clockwise, count)| Move::new(face, Layer::Slice(0), clockwise, count))
    })
}

/// Solves a cube and returns the moves made, simplified.
///
/// If the puzzle was logging moves, the solution is appended to its log;
/// otherwise the log is left untouched.
pub fn solve(
    puzzle: &mut GroupedPuzzle,
    progress: &SolveProgress,
) -> Result<Algorithm, SolveError> {
    let solution = super::record_solution(puzzle, |p| solve_phases(p, progress))?;
    log::debug!("solved {0}x{0}x{0} cube in {1} moves", puzzle.size(), solution.len());
    Ok(solution)
}

fn solve_phases(puzzle: &mut GroupedPuzzle, progress: &SolveProgress) -> Result<(), SolveError> {
    let n = puzzle.size();
    progress.set_total(PHASE_COUNT);

    if n > 3 {
        CenterSolver::new(puzzle).solve()?;
    }
    progress.advance();
    if n > 3 {
        EdgeSolver::new(puzzle).solve()?;
    }
    progress.advance();
    if n > 2 {
        solve_cross(puzzle)?;
    }
    progress.advance();
    solve_corners(puzzle)?;
    progress.advance();
    if n > 2 {
        solve_middle_layer(puzzle)?;
    }
    progress.advance();
    oll_solver(n)?.solve(puzzle)?;
    progress.advance();
    pll_solver(n)?.solve(puzzle)?;
    progress.advance();
    Ok(())
}

/// Turns one layer of the cube, carrying a copy of a piece along so that
/// the caller can keep track of where it went.
pub(super) fn turn_tracked(
    puzzle: &mut GroupedPuzzle,
    face: Axis,
    layer: u16,
    clockwise: bool,
    tracked: &mut Piece,
) -> Result<(), MoveError> {
    puzzle.try_make_move(Move::turn(face, layer, clockwise))?;
    if geometry::layer(tracked, face) == layer {
        let steps = if clockwise { 1 } else { 3 };
        for _ in 0..steps {
            geometry::turn_piece(face, tracked);
        }
    }
    Ok(())
}

/// Applies an algorithm to a lone piece, as if it were on a cube.
pub(super) fn trace(piece: &Piece, moves: &[Move]) -> Piece {
    let mut p = piece.clone();
    for mv in moves {
        for _ in 0..mv.unit_steps(4) {
            let moved = match mv.layer {
                Layer::Whole => true,
                Layer::Slice(layer) => geometry::layer(&p, mv.axis) == layer,
            };
            if moved {
                geometry::turn_piece(mv.axis, &mut p);
            }
        }
    }
    p
}

/// Returns whether a corner or edge at `signs` shows the reference color of
/// every face it touches.
pub(super) fn is_home(puzzle: &GroupedPuzzle, piece: &Piece, signs: Vec3) -> bool {
    let faces = geometry::facelet_faces(signs);
    faces.len() == piece.colors.len()
        && std::iter::zip(&faces, &piece.colors).all(|(&f, &c)| puzzle.reference_color(f) == c)
}

/// Returns the slot of the corner with a set of colors.
pub(super) fn find_corner(
    puzzle: &GroupedPuzzle,
    colors: &[Color],
    phase: &'static str,
) -> Result<usize, SolveError> {
    (0..geometry::CORNERS.len())
        .find(|&i| puzzle.piece(PieceType::Corner, i, 0).has_color_set(colors))
        .ok_or(SolveError::Stuck { phase })
}

/// Returns the slot of the edge with a set of colors, judged by its first
/// wing.
pub(super) fn find_edge(
    puzzle: &GroupedPuzzle,
    colors: &[Color],
    phase: &'static str,
) -> Result<usize, SolveError> {
    (0..geometry::EDGES.len())
        .find(|&i| puzzle.piece(PieceType::Edge, i, 0).has_color_set(colors))
        .ok_or(SolveError::Stuck { phase })
}
