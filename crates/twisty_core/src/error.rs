//! Error types.

use crate::{Axis, Move};

/// Error produced while parsing notation for a specific puzzle.
///
/// Notation that fails to parse is never partially applied.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The text is not well-formed notation.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// The move family does not exist on this puzzle.
    #[error("unknown move {0:?}")]
    UnknownFamily(String),
    /// The layer prefix names a layer the puzzle does not have.
    #[error("layer {layer} out of range on size {size}")]
    LayerOutOfRange {
        /// 1-indexed layer number.
        layer: u16,
        /// Size of the puzzle.
        size: u16,
    },
    /// The multiplier cannot be applied to this move.
    #[error("unsupported multiplier {0}")]
    Multiplier(i32),
    /// A move of another puzzle's notation was used.
    #[error("unsupported notation {0:?}")]
    Unsupported(String),
    /// Inverting a group overflowed.
    #[error(transparent)]
    Invert(#[from] twisty_notation::InvertError),
}

/// Error produced by a move that the puzzle cannot perform.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The axis does not exist on this puzzle.
    #[error("{puzzle} has no axis {axis}")]
    ForeignAxis {
        /// Name of the puzzle.
        puzzle: &'static str,
        /// Axis of the move.
        axis: Axis,
    },
    /// The layer does not exist on this puzzle.
    #[error("layer {layer} out of range on size {size}")]
    LayerOutOfRange {
        /// 0-indexed layer of the move.
        layer: u16,
        /// Size of the puzzle.
        size: u16,
    },
    /// The puzzle cannot be rotated as a whole.
    #[error("{puzzle} has no whole-puzzle rotations")]
    NoRotations {
        /// Name of the puzzle.
        puzzle: &'static str,
    },
    /// A piece straddles the plane that the move would cut through.
    #[error("{0} is blocked by a piece crossing the cut")]
    Blocked(Move),
}

/// Error produced while constructing a puzzle.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The size is outside the range supported by the puzzle.
    #[error("{puzzle} does not support size {size} (expected {min}..={max})")]
    UnsupportedSize {
        /// Name of the puzzle.
        puzzle: &'static str,
        /// Requested size.
        size: u16,
        /// Smallest supported size.
        min: u16,
        /// Largest supported size.
        max: u16,
    },
}

/// Error produced by a solver. A failed phase aborts the whole solve.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No case of a case-based phase matched the puzzle, even after applying
    /// the parity algorithm.
    #[error("no case matched in {phase}")]
    NoMatchingCase {
        /// Name of the phase.
        phase: &'static str,
    },
    /// A bounded search loop ran out of iterations.
    #[error("{phase} made no progress")]
    Stuck {
        /// Name of the phase.
        phase: &'static str,
    },
    /// A solver produced an illegal move.
    #[error(transparent)]
    Move(#[from] MoveError),
    /// A built-in algorithm failed to parse.
    #[error(transparent)]
    Notation(#[from] NotationError),
    /// The puzzle cannot be constructed.
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    /// No solver exists for this puzzle.
    #[error("no solver for {puzzle}")]
    Unsupported {
        /// Name of the puzzle.
        puzzle: &'static str,
    },
}
