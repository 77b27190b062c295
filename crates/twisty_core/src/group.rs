use std::fmt;
use std::ops::Index;

use crate::{Piece, PieceType};

/// Key identifying a [`PieceGroup`] within a puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Type of every piece in the group.
    pub ty: PieceType,
    /// Position shared by every piece in the group.
    pub position: usize,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ty, self.position)
    }
}

impl GroupKey {
    /// Constructs a new group key.
    pub const fn new(ty: PieceType, position: usize) -> Self {
        Self { ty, position }
    }
}

/// Ordered set of slots sharing a piece type and position, such as the
/// wings on one cube edge or the centers of one face.
///
/// During a move, pieces arriving in the group are buffered until every
/// group has been processed, then committed all at once by
/// [`PieceGroup::apply_moves()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceGroup {
    key: GroupKey,
    slots: Vec<Option<Piece>>,
    pending: Vec<Piece>,
}

impl Index<usize> for PieceGroup {
    type Output = Piece;

    /// Returns the piece in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range or vacant.
    fn index(&self, index: usize) -> &Self::Output {
        match self.slots.get(index) {
            Some(Some(piece)) => piece,
            Some(None) => panic!("slot {index} of {} is vacant", self.key),
            None => panic!("slot {index} out of range for {}", self.key),
        }
    }
}

impl PieceGroup {
    /// Constructs a group from its initial slots.
    pub fn new(key: GroupKey, slots: Vec<Option<Piece>>) -> Self {
        Self {
            key,
            slots,
            pending: vec![],
        }
    }

    /// Returns the key of the group.
    pub fn key(&self) -> GroupKey {
        self.key
    }

    /// Returns the number of slots in the group, including vacant ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the group has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the piece in slot `index`, or `None` if the slot is vacant or
    /// out of range.
    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.slots.get(index)?.as_ref()
    }

    /// Returns every slot in order.
    pub fn slots(&self) -> &[Option<Piece>] {
        &self.slots
    }

    /// Iterates over the pieces in occupied slots.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    /// Removes the piece from slot `index`, leaving it vacant.
    pub(crate) fn take(&mut self, index: usize) -> Option<Piece> {
        self.slots.get_mut(index)?.take()
    }

    /// Buffers a piece that a move has brought into this group.
    pub(crate) fn push_pending(&mut self, piece: Piece) {
        debug_assert_eq!(piece.key(), self.key);
        self.pending.push(piece);
    }

    /// Commits every pending piece to the slot named by its index.
    pub(crate) fn apply_moves(&mut self) {
        for piece in self.pending.drain(..) {
            let i = piece.index;
            let key = self.key;
            let Some(slot) = self.slots.get_mut(i) else {
                panic!("piece {piece} moved out of range of {key}");
            };
            assert!(slot.is_none(), "slot {i} of {key} overwritten");
            *slot = Some(piece);
        }
    }

    /// Returns whether no moved pieces are waiting to be committed.
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }
}
