//! Twisty puzzle notation parser and serializer.
//!
//! This crate only knows the shape of notation: moves with optional layer
//! prefixes, multipliers, groups, commutators, conjugates, and Square-1
//! tuples. Deciding what a move family such as `R` or `u` means is left to
//! each puzzle.

pub mod charsets;
pub mod common;
pub mod error;
pub mod layer;
mod node;
mod parse;

pub use common::*;
pub use error::{InvertError, SyntaxError};
pub use layer::{Layer, LayerPrefix};
pub use node::*;

/// String type.
pub type Str = lean_string::LeanString;

/// Set of features to enable when parsing puzzle notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Features {
    /// Whether to allow layer ranges in layer prefixes.
    ///
    /// Example: `2-3R`
    pub layer_ranges: bool,

    /// Whether to allow Square-1 notation.
    ///
    /// Example: `(1,0)/(3,3)/(-1,0)`
    pub sq1: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self::MAXIMAL
    }
}

impl Features {
    /// Notation for puzzles turned by face and layer, such as cubes and
    /// Pyraminx.
    pub const LAYERED: Self = Self {
        layer_ranges: true,
        sq1: false,
    };

    /// Square-1 notation only.
    pub const SQ1: Self = Self {
        layer_ranges: false,
        sq1: true,
    };

    /// Every notation feature.
    pub const MAXIMAL: Self = Self {
        layer_ranges: true,
        sq1: true,
    };
}

#[cfg(test)]
mod tests;
