//! Square-1 solver: cube shape, then corner orientation, then edge
//! orientation.
//!
//! The first two phases walk down a table of distances over layer shapes;
//! the last one is a case solver.

mod orientation;
mod shape;

pub use orientation::edge_orientation_solver;
pub use shape::{LayerState, PuzzleState, solve_corner_orientation, solve_shape};

use twisty_core::{Algorithm, GroupedPuzzle, SolveError, SolveProgress};

/// Number of phases reported to [`SolveProgress`].
const PHASE_COUNT: u32 = 3;

/// Brings a Square-1 to cube shape with every piece oriented, and returns
/// the moves made, simplified.
///
/// If the puzzle was logging moves, the solution is appended to its log;
/// otherwise the log is left untouched.
pub fn solve(
    puzzle: &mut GroupedPuzzle,
    progress: &SolveProgress,
) -> Result<Algorithm, SolveError> {
    let solution = super::record_solution(puzzle, |p| solve_phases(p, progress))?;
    log::debug!("solved Square-1 in {} moves", solution.len());
    Ok(solution)
}

fn solve_phases(puzzle: &mut GroupedPuzzle, progress: &SolveProgress) -> Result<(), SolveError> {
    progress.set_total(PHASE_COUNT);
    solve_shape(puzzle)?;
    progress.advance();
    solve_corner_orientation(puzzle)?;
    progress.advance();
    edge_orientation_solver()?.solve(puzzle)?;
    progress.advance();
    Ok(())
}
