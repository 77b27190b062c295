//! Layered solvers.
//!
//! Each solver works on a [`GroupedPuzzle`] in place. Moves are recorded in
//! the puzzle's move log while the solver runs and returned as a simplified
//! [`Algorithm`].

pub mod cube;
pub mod square1;

use twisty_core::{Algorithm, GroupedPuzzle, SolveError};

/// Runs `solve_phases` with move logging enabled and returns the moves it
/// made, simplified.
///
/// If the puzzle was logging moves, the solution is appended to its log;
/// otherwise the log is left untouched. The moves are returned even for a
/// partial solve so that the log stays consistent, but the error wins.
fn record_solution(
    puzzle: &mut GroupedPuzzle,
    solve_phases: impl FnOnce(&mut GroupedPuzzle) -> Result<(), SolveError>,
) -> Result<Algorithm, SolveError> {
    let was_logging = puzzle.is_logging_moves();
    let mut log = puzzle.take_move_log();
    puzzle.set_log_moves(true);

    let result = solve_phases(puzzle);

    let solution = puzzle.take_move_log().simplify(puzzle.rules());
    if was_logging {
        log.append(&solution);
    }
    puzzle.replace_move_log(log);
    puzzle.set_log_moves(was_logging);

    result.map(|()| solution)
}

/// Counts an iteration of a search loop, failing once there have been more
/// than `limit`.
fn guard(phase: &'static str, count: &mut u32, limit: u32) -> Result<(), SolveError> {
    *count += 1;
    if *count > limit {
        log::warn!("{phase}: giving up after {limit} iterations");
        return Err(SolveError::Stuck { phase });
    }
    Ok(())
}
