//! Rule sets, scrambler, and layered solvers for NxN cubes, the Pyraminx,
//! and the Square-1.
//!
//! For convenience, this crate also re-exports all of `twisty_core`.
//!
//! # Example
//!
//! ```rust
//! use twisty_library::{PuzzleKind, ScrambleParams, ScrambleType, SolveProgress};
//!
//! let mut puzzle = PuzzleKind::Cube.new_puzzle(3).unwrap();
//! let params = ScrambleParams::with_seed(ScrambleType::Full, "example");
//! twisty_library::scramble(&mut puzzle, &params).unwrap();
//!
//! twisty_library::solve(&mut puzzle, &SolveProgress::new()).unwrap();
//! assert!(puzzle.is_solved());
//! ```

pub mod cube;
mod notation;
pub mod pyraminx;
mod scramble;
pub mod solvers;
pub mod square1;

pub use scramble::{ScrambleParams, ScrambleType, full_scramble_length, scramble};
use strum::{Display, EnumIter, EnumString};
pub use twisty_core::*;

/// Kind of puzzle with built-in rules.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PuzzleKind {
    /// NxN Rubik's cube.
    Cube,
    /// Tetrahedral puzzle of any size, including the Master Pyraminx.
    Pyraminx,
    /// Square-1.
    #[strum(to_string = "square1", serialize = "sq1", serialize = "square-1")]
    Square1,
}

impl PuzzleKind {
    /// Returns the rules for the puzzle kind.
    pub fn rules(self) -> &'static PuzzleRules {
        match self {
            PuzzleKind::Cube => &cube::RULES,
            PuzzleKind::Pyraminx => &pyraminx::RULES,
            PuzzleKind::Square1 => &square1::RULES,
        }
    }

    /// Returns the kind of puzzle that uses `rules`, if they are built in.
    pub fn from_rules(rules: &PuzzleRules) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|kind| std::ptr::eq(kind.rules(), rules))
    }

    /// Returns the size to use when none is given.
    pub fn default_size(self) -> u16 {
        match self {
            PuzzleKind::Cube | PuzzleKind::Pyraminx => 3,
            PuzzleKind::Square1 => 1,
        }
    }

    /// Constructs a solved puzzle.
    pub fn new_puzzle(self, size: u16) -> Result<GroupedPuzzle, PuzzleError> {
        GroupedPuzzle::new(self.rules(), size)
    }
}

/// Solves a puzzle with the solver for its kind and returns the moves made,
/// simplified.
///
/// If the puzzle was logging moves, the solution is appended to its log;
/// otherwise the log is left untouched.
pub fn solve(
    puzzle: &mut GroupedPuzzle,
    progress: &SolveProgress,
) -> Result<Algorithm, SolveError> {
    match PuzzleKind::from_rules(puzzle.rules()) {
        Some(PuzzleKind::Cube) => solvers::cube::solve(puzzle, progress),
        Some(PuzzleKind::Square1) => solvers::square1::solve(puzzle, progress),
        Some(PuzzleKind::Pyraminx) | None => Err(SolveError::Unsupported {
            puzzle: puzzle.rules().name,
        }),
    }
}

#[cfg(test)]
mod tests;
