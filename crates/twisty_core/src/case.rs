//! Pattern-recognition solver for the last steps of a layered method.

use crate::{Algorithm, GroupedPuzzle, Move, SolveError};

/// Function extracting the features of a puzzle that a case depends on.
pub type Observation = fn(&GroupedPuzzle) -> Vec<i8>;

/// Known configuration of a puzzle together with the algorithm that solves
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Name of the case, for logging.
    pub name: String,
    /// Observation of a puzzle in this case.
    pub pattern: Vec<i8>,
    /// Algorithm that solves the case.
    pub algorithm: Algorithm,
}

impl Case {
    /// Constructs a case from an explicit pattern.
    pub fn new(name: impl Into<String>, pattern: Vec<i8>, algorithm: Algorithm) -> Self {
        Self {
            name: name.into(),
            pattern,
            algorithm,
        }
    }

    /// Constructs a case by applying the inverse of `algorithm` to a copy of
    /// `solved` and observing the result.
    pub fn from_algorithm(
        name: impl Into<String>,
        solved: &GroupedPuzzle,
        algorithm: Algorithm,
        observe: Observation,
    ) -> Result<Self, SolveError> {
        let mut puzzle = solved.clone();
        puzzle.set_log_moves(false);
        puzzle.execute_algorithm(&algorithm.inverse())?;
        Ok(Self::new(name, observe(&puzzle), algorithm))
    }
}

/// Solver that recognizes one of a list of cases, trying every combination
/// of `outer` and `inner` pre-moves.
#[derive(Debug, Clone)]
pub struct CaseSolver {
    /// Name of the phase, used in errors.
    pub phase: &'static str,
    /// Cases in priority order. The first matching case wins.
    pub cases: Vec<Case>,
    /// Observation compared against each case's pattern.
    pub observe: Observation,
    /// Outer pre-move, usually a whole-puzzle rotation.
    pub outer: Move,
    /// Inner pre-move, usually a turn of the layer being solved.
    pub inner: Move,
    /// Number of outer pre-moves to try.
    pub outer_count: usize,
    /// Number of inner pre-moves to try for each outer pre-move.
    pub inner_count: usize,
    /// Algorithm to apply once if no case matches.
    pub parity: Option<Algorithm>,
}

impl CaseSolver {
    /// Returns whether the puzzle is in a case, without any pre-moves.
    pub fn recognize(&self, puzzle: &GroupedPuzzle, case: &Case) -> bool {
        (self.observe)(puzzle) == case.pattern
    }

    /// Returns the first case that the puzzle is in, without any pre-moves.
    pub fn find_case(&self, puzzle: &GroupedPuzzle) -> Option<&Case> {
        let observation = (self.observe)(puzzle);
        self.cases.iter().find(|case| case.pattern == observation)
    }

    /// Solves whichever case the puzzle is in and returns it.
    ///
    /// If no case matches under any combination of pre-moves, the parity
    /// algorithm is applied and recognition is retried once.
    pub fn solve(&self, puzzle: &mut GroupedPuzzle) -> Result<&Case, SolveError> {
        if let Some(case) = self.try_solve(puzzle)? {
            return Ok(case);
        }
        if let Some(parity) = &self.parity {
            log::warn!("{}: no case matched; applying parity", self.phase);
            puzzle.execute_algorithm(parity)?;
            if let Some(case) = self.try_solve(puzzle)? {
                return Ok(case);
            }
        }
        Err(SolveError::NoMatchingCase { phase: self.phase })
    }

    fn try_solve(&self, puzzle: &mut GroupedPuzzle) -> Result<Option<&Case>, SolveError> {
        puzzle.push_rotations();
        for _ in 0..self.outer_count {
            for _ in 0..self.inner_count {
                if let Some(case) = self.find_case(puzzle) {
                    log::trace!("{}: recognized {}", self.phase, case.name);
                    let result = puzzle.execute_algorithm(&case.algorithm);
                    puzzle.pop_rotations();
                    result?;
                    return Ok(Some(case));
                }
                if let Err(e) = puzzle.try_make_move(self.inner) {
                    puzzle.pop_rotations();
                    return Err(e.into());
                }
            }
            if let Err(e) = puzzle.try_make_move(self.outer) {
                puzzle.pop_rotations();
                return Err(e.into());
            }
        }
        puzzle.pop_rotations();
        Ok(None)
    }
}
