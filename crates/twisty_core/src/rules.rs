use std::fmt;

use crate::{
    Algorithm, Axis, Color, GroupedPuzzle, Move, MoveError, NotationError, Piece, PieceGroup,
    PieceType,
};

/// Geometry of one piece type on one kind of puzzle.
///
/// Every function is pure and total for legal `(move, size)` pairs. Sizes are
/// passed explicitly so that one behavior serves every size of a puzzle.
#[derive(Copy, Clone)]
pub struct PieceBehavior {
    /// Piece type handled by this behavior.
    pub ty: PieceType,
    /// Number of groups (positions) of this type.
    pub position_count: fn(size: u16) -> usize,
    /// Number of slots in the group at `position`.
    pub piece_count: fn(size: u16, position: usize) -> usize,
    /// Constructs the piece that belongs in a slot of the solved puzzle, or
    /// `None` if the slot starts vacant.
    pub create_piece: fn(size: u16, position: usize, index: usize) -> Option<Piece>,
    /// Returns the indices of every piece in `group` that `mv` displaces.
    pub affected_pieces: fn(mv: &Move, group: &PieceGroup, size: u16) -> Vec<usize>,
    /// Moves a piece one unit clockwise step around the axis of `mv`,
    /// updating its position, index, and color order.
    pub move_piece: fn(mv: &Move, piece: &mut Piece),
}

impl fmt::Debug for PieceBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieceBehavior")
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

/// Everything that distinguishes one kind of puzzle from another.
pub struct PuzzleRules {
    /// Human-friendly name of the puzzle.
    pub name: &'static str,
    /// Smallest supported size.
    pub min_size: u16,
    /// Largest supported size.
    pub max_size: u16,
    /// Behavior of each piece type that the puzzle has.
    pub behaviors: &'static [PieceBehavior],
    /// Axes that moves may turn around.
    pub axes: &'static [Axis],
    /// Faces of the puzzle with their solved colors. Colors that belong to no
    /// face here are checked literally.
    pub faces: &'static [(Axis, Color)],
    /// Number of unit steps that make a full turn around an axis.
    pub axis_order: fn(axis: Axis) -> u16,
    /// Returns the face that `face` moves to after one unit clockwise
    /// rotation of the whole puzzle around `axis`.
    pub rotate_face: fn(axis: Axis, face: Axis) -> Axis,
    /// Returns whether a move changes which color each face should show
    /// once solved.
    pub moves_reference: fn(mv: &Move, size: u16) -> bool,
    /// Returns whether two moves can be swapped without changing the result.
    pub commutes: fn(a: &Move, b: &Move) -> bool,
    /// Checks that a move is legal in the current state of the puzzle.
    pub check_move: fn(puzzle: &GroupedPuzzle, mv: &Move) -> Result<(), MoveError>,
    /// Parses notation for a puzzle of a given size.
    pub parse_algorithm: fn(s: &str, size: u16) -> Result<Algorithm, NotationError>,
    /// Formats an algorithm as notation for a puzzle of a given size.
    pub format_algorithm: fn(alg: &Algorithm, size: u16) -> String,
}

impl fmt::Debug for PuzzleRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleRules")
            .field("name", &self.name)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("behaviors", &self.behaviors)
            .finish_non_exhaustive()
    }
}

impl PuzzleRules {
    /// Returns the behavior for a piece type.
    pub fn behavior(&self, ty: PieceType) -> Option<&PieceBehavior> {
        self.behaviors.iter().find(|b| b.ty == ty)
    }

    /// Returns the index of a face in [`PuzzleRules::faces`].
    pub fn face_index(&self, face: Axis) -> Option<usize> {
        self.faces.iter().position(|&(f, _)| f == face)
    }

    /// Returns whether the puzzle has an axis.
    pub fn has_axis(&self, axis: Axis) -> bool {
        self.axes.contains(&axis)
    }

    /// Checks the parts of a move that do not depend on puzzle state: the
    /// axis must exist and the layer must be in range.
    pub fn check_move_shape(&self, mv: &Move, layer_count: u16) -> Result<(), MoveError> {
        if !self.has_axis(mv.axis) {
            return Err(MoveError::ForeignAxis {
                puzzle: self.name,
                axis: mv.axis,
            });
        }
        if let crate::Layer::Slice(layer) = mv.layer
            && layer >= layer_count
        {
            return Err(MoveError::LayerOutOfRange {
                layer,
                size: layer_count,
            });
        }
        Ok(())
    }
}
