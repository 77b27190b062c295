use std::fmt;

use strum::{Display, EnumIter};

use crate::{GroupKey, PieceColors};

/// Kind of piece, which determines how many stickers it has.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    /// Cube or Square-1 corner, or Pyraminx tip.
    Corner,
    /// Cube wing or Square-1 edge, or Pyraminx outer edge.
    Edge,
    /// Face center.
    Center,
    /// Pyraminx piece directly beneath a tip.
    Axial,
    /// Pyraminx edge piece between two axials.
    InnerEdge,
    /// Square-1 middle layer half.
    Middle,
}

impl PieceType {
    /// Returns the number of stickers on a piece of this type.
    pub const fn facelet_count(self) -> usize {
        match self {
            PieceType::Corner | PieceType::Axial => 3,
            PieceType::Edge | PieceType::InnerEdge | PieceType::Middle => 2,
            PieceType::Center => 1,
        }
    }
}

/// Single physical piece of a puzzle.
///
/// `position` and `index` together name the slot the piece currently
/// occupies. Moves mutate them in place, along with the order of `colors`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Type of the piece.
    pub ty: PieceType,
    /// Position of the group containing the piece.
    pub position: usize,
    /// Slot of the piece within its group.
    pub index: usize,
    /// Colors in facelet order. The length always equals
    /// [`PieceType::facelet_count()`].
    pub colors: PieceColors,
    /// Size of the puzzle the piece belongs to.
    pub puzzle_size: u16,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}[{}] ", self.ty, self.position, self.index)?;
        for c in &self.colors {
            write!(f, "{}", c.letter())?;
        }
        Ok(())
    }
}

impl Piece {
    /// Constructs a new piece.
    pub fn new(
        ty: PieceType,
        position: usize,
        index: usize,
        colors: impl IntoIterator<Item = crate::Color>,
        puzzle_size: u16,
    ) -> Self {
        let colors: PieceColors = colors.into_iter().collect();
        debug_assert_eq!(colors.len(), ty.facelet_count(), "wrong facelet count for {ty}");
        Self {
            ty,
            position,
            index,
            colors,
            puzzle_size,
        }
    }

    /// Returns the key of the group the piece currently belongs to.
    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.ty, self.position)
    }

    /// Returns whether the piece has a sticker of color `c`.
    pub fn has_color(&self, c: crate::Color) -> bool {
        self.colors.contains(&c)
    }

    /// Returns the facelet showing color `c`, if any.
    pub fn facelet_of(&self, c: crate::Color) -> Option<usize> {
        self.colors.iter().position(|&x| x == c)
    }

    /// Returns whether the piece has exactly the colors in `colors`, in any
    /// order.
    pub fn has_color_set(&self, colors: &[crate::Color]) -> bool {
        self.colors.len() == colors.len() && colors.iter().all(|&c| self.has_color(c))
    }
}
