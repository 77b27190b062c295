use std::fmt;

use strum::{Display, EnumIter, EnumString};

/// Axis that a move turns around.
///
/// Cube axes are named by the face they turn, Pyraminx axes by the vertex
/// they turn around (`U`, `L`, `R`, `B`), and Square-1 axes by layer.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Axis {
    R,
    L,
    U,
    D,
    F,
    B,
    Top,
    Bottom,
    Slash,
}

/// Layers affected by a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Single layer, counted from 0 at the face the axis is named after.
    Slice(u16),
    /// Every layer, reorienting the whole puzzle.
    Whole,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Slice(i) => write!(f, "{i}"),
            Layer::Whole => write!(f, "*"),
        }
    }
}

/// Turn of one layer (or the whole puzzle) around an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Axis to turn around.
    pub axis: Axis,
    /// Layer to turn.
    pub layer: Layer,
    /// Direction of each step.
    pub clockwise: bool,
    /// Number of steps.
    pub count: u16,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            axis,
            layer,
            clockwise,
            count,
        } = self;
        let dir = if *clockwise { "" } else { "'" };
        write!(f, "{axis}[{layer}]{count}{dir}")
    }
}

impl Move {
    /// Constructs a new move.
    pub const fn new(axis: Axis, layer: Layer, clockwise: bool, count: u16) -> Self {
        Self {
            axis,
            layer,
            clockwise,
            count,
        }
    }

    /// Constructs a single-step turn of layer `layer`.
    pub const fn turn(axis: Axis, layer: u16, clockwise: bool) -> Self {
        Self::new(axis, Layer::Slice(layer), clockwise, 1)
    }

    /// Constructs a single-step whole-puzzle rotation.
    pub const fn rotation(axis: Axis, clockwise: bool) -> Self {
        Self::new(axis, Layer::Whole, clockwise, 1)
    }

    /// Returns whether the move reorients the whole puzzle.
    pub fn is_rotation(self) -> bool {
        self.layer == Layer::Whole
    }

    /// Returns the move repeated `n` times.
    pub fn repeated(self, n: u16) -> Self {
        Self {
            count: self.count.saturating_mul(n),
            ..self
        }
    }

    /// Returns the move in the opposite direction. A slash is a half turn,
    /// so it is always written clockwise.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise || self.axis == Axis::Slash,
            ..self
        }
    }

    /// Returns the number of unit clockwise steps equivalent to the move on
    /// an axis of order `order`.
    pub fn unit_steps(self, order: u16) -> u16 {
        let order = order.max(1);
        let n = self.count % order;
        if self.clockwise { n } else { (order - n) % order }
    }

    /// Returns the move with the same axis and layer that performs `steps`
    /// unit clockwise steps, turning counterclockwise when that is shorter.
    pub fn with_steps(self, steps: u16, order: u16) -> Self {
        let order = order.max(1);
        let steps = steps % order;
        let (clockwise, count) = if steps <= order / 2 {
            (true, steps)
        } else {
            (false, order - steps)
        };
        Self {
            clockwise,
            count,
            ..self
        }
    }
}
