use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    Algorithm, Axis, Color, GroupKey, Move, MoveError, NotationError, Piece, PieceGroup,
    PieceType, PuzzleError, PuzzleRules,
};

/// Rotations made since a call to [`GroupedPuzzle::push_rotations()`].
#[derive(Debug, Clone)]
struct RotationFrame {
    /// Length of the move log when the frame was pushed.
    log_mark: usize,
    /// Whole-puzzle rotations, oldest first.
    rotations: Vec<Move>,
}

/// Puzzle state stored as piece groups.
#[derive(Clone)]
pub struct GroupedPuzzle {
    rules: &'static PuzzleRules,
    size: u16,
    groups: IndexMap<GroupKey, PieceGroup>,
    /// Color that each face must show when solved, parallel to
    /// `rules.faces`.
    reference: Vec<Color>,
    rotation_stack: Vec<RotationFrame>,
    log_moves: bool,
    move_log: Algorithm,
}

impl fmt::Debug for GroupedPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedPuzzle")
            .field("rules", &self.rules.name)
            .field("size", &self.size)
            .field("reference", &self.reference)
            .field("move_log", &self.move_log.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for GroupedPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.groups.values() {
            let pieces = group.slots().iter().map(|slot| match slot {
                Some(p) => p.colors.iter().map(|c| c.letter()).collect::<String>(),
                None => "-".to_owned(),
            });
            writeln!(f, "{}: {}", group.key(), pieces.format(" "))?;
        }
        Ok(())
    }
}

impl GroupedPuzzle {
    /// Constructs a solved puzzle.
    pub fn new(rules: &'static PuzzleRules, size: u16) -> Result<Self, PuzzleError> {
        if !(rules.min_size..=rules.max_size).contains(&size) {
            return Err(PuzzleError::UnsupportedSize {
                puzzle: rules.name,
                size,
                min: rules.min_size,
                max: rules.max_size,
            });
        }

        let mut groups = IndexMap::new();
        for behavior in rules.behaviors {
            for position in 0..(behavior.position_count)(size) {
                let count = (behavior.piece_count)(size, position);
                if count == 0 {
                    continue;
                }
                let key = GroupKey::new(behavior.ty, position);
                let slots = (0..count)
                    .map(|index| (behavior.create_piece)(size, position, index))
                    .collect();
                groups.insert(key, PieceGroup::new(key, slots));
            }
        }
        log::trace!("constructed {} size {size} with {} groups", rules.name, groups.len());

        Ok(Self {
            rules,
            size,
            groups,
            reference: rules.faces.iter().map(|&(_, c)| c).collect(),
            rotation_stack: vec![],
            log_moves: false,
            move_log: Algorithm::new(),
        })
    }

    /// Returns the rules of the puzzle.
    pub fn rules(&self) -> &'static PuzzleRules {
        self.rules
    }
    /// Returns the size of the puzzle.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Returns a group, or `None` if the puzzle has no such group.
    pub fn group(&self, key: GroupKey) -> Option<&PieceGroup> {
        self.groups.get(&key)
    }
    /// Iterates over every group in construction order.
    pub fn groups(&self) -> impl Iterator<Item = &PieceGroup> {
        self.groups.values()
    }
    /// Returns the piece in a slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not exist or is vacant.
    pub fn piece(&self, ty: PieceType, position: usize, index: usize) -> &Piece {
        match self.groups.get(&GroupKey::new(ty, position)) {
            Some(group) => &group[index],
            None => panic!("{} has no group {ty}{position}", self.rules.name),
        }
    }
    /// Returns the piece in a slot, or `None` if the slot does not exist or
    /// is vacant.
    pub fn get_piece(&self, ty: PieceType, position: usize, index: usize) -> Option<&Piece> {
        self.groups.get(&GroupKey::new(ty, position))?.get(index)
    }

    /// Returns the color that a face must show once solved. This follows
    /// whole-puzzle rotations and, on puzzles with fixed centers, the moves
    /// of the center layers.
    ///
    /// # Panics
    ///
    /// Panics if `face` is not a face of the puzzle.
    pub fn reference_color(&self, face: Axis) -> Color {
        match self.rules.face_index(face) {
            Some(i) => self.reference[i],
            None => panic!("{} has no face {face}", self.rules.name),
        }
    }

    /// Returns the color that a sticker must show once solved if it shows
    /// `home` on a freshly constructed puzzle.
    fn solved_color(&self, home: Color) -> Color {
        match self.rules.faces.iter().position(|&(_, c)| c == home) {
            Some(i) => self.reference[i],
            None => home,
        }
    }

    /// Returns whether every slot of a group holds a piece colored the way a
    /// solved puzzle would be in the current orientation.
    pub fn is_group_solved(&self, key: GroupKey) -> bool {
        let Some(group) = self.groups.get(&key) else {
            return true;
        };
        let Some(behavior) = self.rules.behavior(key.ty) else {
            return true;
        };
        group.slots().iter().enumerate().all(|(index, slot)| {
            let home = (behavior.create_piece)(self.size, key.position, index);
            match (slot, home) {
                (None, None) => true,
                (Some(piece), Some(home)) => {
                    piece.colors.len() == home.colors.len()
                        && std::iter::zip(&piece.colors, &home.colors)
                            .all(|(&c, &h)| c == self.solved_color(h))
                }
                _ => false,
            }
        })
    }
    /// Returns whether every group is solved.
    pub fn is_solved(&self) -> bool {
        self.groups.keys().all(|&key| self.is_group_solved(key))
    }

    /// Applies a move.
    ///
    /// # Panics
    ///
    /// Panics if the move is illegal. Use [`GroupedPuzzle::try_make_move()`]
    /// for moves that have not already been validated.
    pub fn make_move(&mut self, mv: Move) {
        if let Err(e) = self.try_make_move(mv) {
            panic!("illegal move {mv}: {e}");
        }
    }

    /// Applies a move, or returns an error without modifying the puzzle if
    /// the move is illegal.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        (self.rules.check_move)(self, &mv)?;

        let steps = mv.unit_steps((self.rules.axis_order)(mv.axis));
        for _ in 0..steps {
            self.step(&mv);
        }
        if (self.rules.moves_reference)(&mv, self.size) {
            self.rotate_reference(mv.axis, steps);
        }

        if mv.is_rotation()
            && let Some(frame) = self.rotation_stack.last_mut()
        {
            frame.rotations.push(mv);
        }
        if self.log_moves {
            self.move_log.push(mv);
        }
        Ok(())
    }

    /// Applies one unit clockwise step of a move to every group.
    fn step(&mut self, mv: &Move) {
        let rules = self.rules;
        let size = self.size;

        // Pieces are only committed once every group has given up its moved
        // pieces, so a slot is never read after being overwritten.
        let mut moved = vec![];
        for group in self.groups.values_mut() {
            let Some(behavior) = rules.behavior(group.key().ty) else {
                continue;
            };
            for index in (behavior.affected_pieces)(mv, group, size) {
                if let Some(mut piece) = group.take(index) {
                    (behavior.move_piece)(mv, &mut piece);
                    moved.push(piece);
                }
            }
        }
        for piece in moved {
            let Some(group) = self.groups.get_mut(&piece.key()) else {
                panic!("{mv} moved {piece} into a missing group");
            };
            group.push_pending(piece);
        }
        for group in self.groups.values_mut() {
            group.apply_moves();
        }
    }

    fn rotate_reference(&mut self, axis: Axis, steps: u16) {
        let faces = self.rules.faces;
        for _ in 0..steps {
            let mut new_reference = self.reference.clone();
            for (i, &(face, _)) in faces.iter().enumerate() {
                let target = (self.rules.rotate_face)(axis, face);
                if let Some(j) = self.rules.face_index(target) {
                    new_reference[j] = self.reference[i];
                }
            }
            self.reference = new_reference;
        }
    }

    /// Rotates the whole puzzle one step around an axis.
    pub fn make_rotation(&mut self, axis: Axis, clockwise: bool) {
        self.make_move(Move::rotation(axis, clockwise));
    }

    /// Starts tracking whole-puzzle rotations.
    ///
    /// Solver phases bracket themselves with `push_rotations()` and
    /// [`GroupedPuzzle::pop_rotations()`] so that they can reorient the
    /// puzzle freely without leaving it reoriented.
    pub fn push_rotations(&mut self) {
        self.rotation_stack.push(RotationFrame {
            log_mark: self.move_log.len(),
            rotations: vec![],
        });
    }

    /// Undoes every rotation made since the matching
    /// [`GroupedPuzzle::push_rotations()`], newest first.
    ///
    /// If moves are being logged, the moves logged since the push are
    /// rewritten as if the rotations had never happened: rotations are
    /// dropped from the log and the axis of every other move is relabeled to
    /// the axis it actually turned in the outer orientation.
    pub fn pop_rotations(&mut self) {
        let Some(frame) = self.rotation_stack.pop() else {
            log::warn!("pop_rotations() called without matching push_rotations()");
            return;
        };

        for &rotation in frame.rotations.iter().rev() {
            let undo = rotation.inverse();
            let steps = undo.unit_steps((self.rules.axis_order)(undo.axis));
            for _ in 0..steps {
                self.step(&undo);
            }
            if (self.rules.moves_reference)(&undo, self.size) {
                self.rotate_reference(undo.axis, steps);
            }
        }

        if self.log_moves {
            let mark = frame.log_mark.min(self.move_log.len());
            let segment = self.move_log.split_off(mark);
            let relabeled = self.relabel_rotated(segment);
            self.move_log.extend(relabeled);
        }
    }

    /// Removes rotations from `moves` and re-expresses each remaining move
    /// in the orientation before the first rotation.
    fn relabel_rotated(&self, moves: Vec<Move>) -> Vec<Move> {
        let faces: Vec<Axis> = self.rules.faces.iter().map(|&(f, _)| f).collect();
        // `image[i]` is where `faces[i]` has been carried by the rotations so
        // far.
        let mut image = faces.clone();
        let mut ret = vec![];
        for mv in moves {
            if mv.is_rotation() {
                let steps = mv.unit_steps((self.rules.axis_order)(mv.axis));
                for _ in 0..steps {
                    for f in &mut image {
                        *f = (self.rules.rotate_face)(mv.axis, *f);
                    }
                }
            } else {
                let axis = match image.iter().position(|&f| f == mv.axis) {
                    Some(i) => faces[i],
                    None => mv.axis,
                };
                ret.push(Move { axis, ..mv });
            }
        }
        ret
    }

    /// Applies every move of an algorithm, stopping at the first illegal
    /// move.
    pub fn execute_algorithm(&mut self, alg: &Algorithm) -> Result<(), MoveError> {
        for &mv in alg {
            self.try_make_move(mv)?;
        }
        Ok(())
    }

    /// Parses notation and applies it.
    pub fn execute_notation(&mut self, s: &str) -> Result<(), crate::SolveError> {
        let alg = self.parse_algorithm(s)?;
        self.execute_algorithm(&alg)?;
        Ok(())
    }

    /// Returns every move made while logging was enabled.
    pub fn move_log(&self) -> &Algorithm {
        &self.move_log
    }
    /// Enables or disables logging of moves.
    pub fn set_log_moves(&mut self, log_moves: bool) {
        self.log_moves = log_moves;
    }
    /// Returns whether moves are being logged.
    pub fn is_logging_moves(&self) -> bool {
        self.log_moves
    }
    /// Clears the move log.
    pub fn clear_move_log(&mut self) {
        self.move_log.clear();
    }
    /// Takes the move log, leaving it empty.
    pub fn take_move_log(&mut self) -> Algorithm {
        std::mem::take(&mut self.move_log)
    }
    /// Replaces the move log and returns the old one.
    pub fn replace_move_log(&mut self, log: Algorithm) -> Algorithm {
        std::mem::replace(&mut self.move_log, log)
    }

    /// Parses notation for this puzzle.
    pub fn parse_algorithm(&self, s: &str) -> Result<Algorithm, NotationError> {
        (self.rules.parse_algorithm)(s, self.size)
    }
    /// Formats an algorithm as notation for this puzzle.
    pub fn format_algorithm(&self, alg: &Algorithm) -> String {
        (self.rules.format_algorithm)(alg, self.size)
    }
}
