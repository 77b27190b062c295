//! Types for working with layer numbers.
//!
//! Layers on an axis are numbered increasing starting from 1, the shallowest
//! layer. On any axis of a 3x3x3 Rubik's cube there are three layers:
//!
//! - outer face (1)
//! - middle layer (2)
//! - opposite outer face (3)

use std::fmt;
use std::num::NonZeroU16;
use std::ops::RangeInclusive;

/// 1-indexed layer number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Layer(NonZeroU16);

impl Layer {
    /// Shallowest layer on any axis (layer number 1).
    pub const SHALLOWEST: Self = Self(NonZeroU16::MIN);

    /// Constructs a new layer.
    ///
    /// Returns `None` if `i` is zero.
    pub const fn new(i: u16) -> Option<Self> {
        match NonZeroU16::new(i) {
            Some(inner) => Some(Self(inner)),
            None => None,
        }
    }

    /// Constructs a layer from its zero-based index, saturating at the
    /// largest representable layer.
    pub fn from_index(index: u16) -> Self {
        Self(NonZeroU16::MIN.saturating_add(index))
    }

    /// Returns the layer number as a `u16`.
    pub const fn to_u16(self) -> u16 {
        self.0.get()
    }

    /// Returns the zero-based index corresponding to the layer.
    pub const fn index(self) -> u16 {
        self.0.get() - 1
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layer prefix for a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayerPrefix {
    /// Single layer.
    ///
    /// Example: `3` in `3R`
    Single(Layer),
    /// Inclusive range of layers, written with `-` between the endpoints.
    ///
    /// Example: `2-3` in `2-3R`
    Range(Layer, Layer),
}

impl fmt::Display for LayerPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerPrefix::Single(l) => write!(f, "{l}"),
            LayerPrefix::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

impl LayerPrefix {
    /// Returns the 1-indexed layers covered by the prefix. The range is empty
    /// if the endpoints are reversed.
    pub fn layers(self) -> RangeInclusive<u16> {
        match self {
            LayerPrefix::Single(l) => l.to_u16()..=l.to_u16(),
            LayerPrefix::Range(lo, hi) => lo.to_u16()..=hi.to_u16(),
        }
    }
}
