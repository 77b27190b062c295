//! Shape and corner orientation phases.
//!
//! A layer is summarized as 12 bytes, one per angular slot: `e` for an edge,
//! `c` (or `w`/`y` for the color on its top or bottom facelet) for the slot
//! where a corner starts, and `.` for the second slot of a corner. States
//! that differ only by turning a layer are the same class, so each layer is
//! stored in its smallest rotation. Distances to the goal are computed once
//! by breadth-first search backwards from it.

use std::collections::{HashMap, VecDeque};

use lazy_static::lazy_static;
use twisty_core::{Axis, Color, GroupedPuzzle, Move, MoveError, PieceType, SolveError};

use super::super::guard;
use crate::square1::{BOTTOM, SLOTS, TOP};

/// Slots of one layer.
pub type LayerState = [u8; SLOTS];

const HALF: usize = SLOTS / 2;

/// Shape of a Square-1, optionally with the orientation of its corners.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleState {
    /// Slots of the top layer, clockwise from the cut.
    pub top: LayerState,
    /// Slots of the bottom layer, counterclockwise from the cut.
    pub bottom: LayerState,
    /// Whether the middle layer is flipped.
    pub flipped: bool,
}

impl PuzzleState {
    /// Reads the state of a puzzle. If `colored` is set, corners record
    /// whether they show white or yellow on their top or bottom facelet.
    pub fn read(puzzle: &GroupedPuzzle, colored: bool) -> Self {
        let layer = |position: usize| -> LayerState {
            std::array::from_fn(|i| {
                if puzzle.get_piece(PieceType::Edge, position, i).is_some() {
                    b'e'
                } else if let Some(corner) = puzzle.get_piece(PieceType::Corner, position, i) {
                    match corner.colors[0] {
                        _ if !colored => b'c',
                        Color::White => b'w',
                        _ => b'y',
                    }
                } else {
                    b'.'
                }
            })
        };
        let flipped = puzzle
            .get_piece(PieceType::Middle, 0, 1)
            .is_some_and(|half| half.colors[0] != Color::Blue);
        Self {
            top: layer(TOP),
            bottom: layer(BOTTOM),
            flipped,
        }
    }

    fn from_strs(top: &str, bottom: &str) -> Self {
        let layer = |s: &str| -> LayerState { std::array::from_fn(|i| s.as_bytes()[i % s.len()]) };
        Self {
            top: layer(top),
            bottom: layer(bottom),
            flipped: false,
        }
    }

    /// Returns the state after turning the top layer `t` steps and the
    /// bottom layer `b` steps clockwise.
    fn turned(self, t: usize, b: usize) -> Self {
        Self {
            top: std::array::from_fn(|i| self.top[(i + t) % SLOTS]),
            bottom: std::array::from_fn(|i| self.bottom[(i + SLOTS - b % SLOTS) % SLOTS]),
            ..self
        }
    }

    fn can_slice(&self) -> bool {
        [self.top, self.bottom]
            .iter()
            .all(|layer| layer[0] != b'.' && layer[HALF] != b'.')
    }

    /// Returns the state after a slash. The slash must not be blocked.
    fn sliced(self) -> Self {
        let mut top = self.top;
        let mut bottom = self.bottom;
        top[..HALF].copy_from_slice(&flip_half(&self.bottom[..HALF]));
        bottom[..HALF].copy_from_slice(&flip_half(&self.top[..HALF]));
        Self {
            top,
            bottom,
            flipped: !self.flipped,
        }
    }

    /// Returns the representative of the state's class.
    fn canonical(self) -> Self {
        let smallest = |layer: LayerState| {
            (0..SLOTS)
                .map(|t| -> LayerState { std::array::from_fn(|i| layer[(i + t) % SLOTS]) })
                .min()
                .unwrap_or(layer)
        };
        Self {
            top: smallest(self.top),
            bottom: smallest(self.bottom),
            flipped: self.flipped,
        }
    }

    /// Iterates over every `(t, b)/` move that can be made from this state,
    /// along with the state it leads to.
    fn neighbors(self) -> impl Iterator<Item = ((usize, usize), Self)> {
        (0..SLOTS)
            .flat_map(|t| (0..SLOTS).map(move |b| (t, b)))
            .filter_map(move |(t, b)| {
                let turned = self.turned(t, b);
                turned.can_slice().then(|| ((t, b), turned.sliced()))
            })
    }
}

/// Reverses the pieces of half a layer, keeping each corner's two slots in
/// order.
fn flip_half(half: &[u8]) -> [u8; HALF] {
    let mut pieces: Vec<&[u8]> = vec![];
    let mut i = 0;
    while i < half.len() {
        let width = if half[i] == b'e' { 1 } else { 2 };
        let end = (i + width).min(half.len());
        pieces.push(&half[i..end]);
        i = end;
    }
    let mut ret = [b'.'; HALF];
    for (dst, &src) in ret.iter_mut().zip(pieces.iter().rev().flat_map(|p| p.iter())) {
        *dst = src;
    }
    ret
}

/// Distance to a goal state for every reachable class of states.
struct ShapeTable {
    phase: &'static str,
    colored: bool,
    goal: PuzzleState,
    distances: HashMap<PuzzleState, u8>,
}

lazy_static! {
    static ref SHAPE_TABLE: ShapeTable = ShapeTable::build("shape", false, "ec.", "ec.");
    static ref CORNER_TABLE: ShapeTable =
        ShapeTable::build("corner orientation", true, "ew.", "ey.");
}

impl ShapeTable {
    fn build(phase: &'static str, colored: bool, top: &str, bottom: &str) -> Self {
        let goal = PuzzleState::from_strs(top, bottom);
        let start = goal.canonical();
        let mut distances = HashMap::from([(start, 0_u8)]);
        let mut queue = VecDeque::from([start]);
        while let Some(state) = queue.pop_front() {
            let d = distances[&state];
            for (_, next) in state.neighbors() {
                let next = next.canonical();
                distances.entry(next).or_insert_with(|| {
                    queue.push_back(next);
                    d + 1
                });
            }
        }
        log::trace!(
            "built {phase} table with {} states, deepest {}",
            distances.len(),
            distances.values().max().copied().unwrap_or(0),
        );

        Self {
            phase,
            colored,
            goal,
            distances,
        }
    }

    fn distance(&self, state: PuzzleState) -> Option<u8> {
        self.distances.get(&state.canonical()).copied()
    }

    /// Walks the puzzle down to distance zero, then turns both layers to
    /// line up with the goal.
    fn solve(&self, puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
        let phase = self.phase;
        let mut iterations = 0;
        loop {
            let state = PuzzleState::read(puzzle, self.colored);
            let d = self.distance(state).ok_or(SolveError::Stuck { phase })?;
            if d == 0 {
                break;
            }
            guard(phase, &mut iterations, 64)?;
            let ((t, b), _) = state
                .neighbors()
                .find(|&(_, next)| self.distance(next) == Some(d - 1))
                .ok_or(SolveError::Stuck { phase })?;
            turn_layers(puzzle, t, b)?;
            puzzle.try_make_move(Move::turn(Axis::Slash, 0, true))?;
        }

        let state = PuzzleState::read(puzzle, self.colored);
        let aligned = (0..SLOTS)
            .flat_map(|t| (0..SLOTS).map(move |b| (t, b)))
            .find(|&(t, b)| {
                let turned = state.turned(t, b);
                turned.top == self.goal.top && turned.bottom == self.goal.bottom
            });
        let (t, b) = aligned.ok_or(SolveError::Stuck { phase })?;
        turn_layers(puzzle, t, b)?;
        log::trace!("{phase}: done after {iterations} slashes");
        Ok(())
    }
}

/// Turns the top layer `t` steps and the bottom layer `b` steps clockwise,
/// going counterclockwise when that is shorter.
fn turn_layers(puzzle: &mut GroupedPuzzle, t: usize, b: usize) -> Result<(), MoveError> {
    for (axis, steps) in [(Axis::Top, t), (Axis::Bottom, b)] {
        let steps = (steps % SLOTS) as u16;
        if steps != 0 {
            puzzle.try_make_move(Move::turn(axis, 0, true).with_steps(steps, SLOTS as u16))?;
        }
    }
    Ok(())
}

/// Brings a Square-1 to cube shape, with the middle layer solved.
pub fn solve_shape(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    SHAPE_TABLE.solve(puzzle)
}

/// Moves every white corner to the top and every yellow corner to the
/// bottom, keeping cube shape. The puzzle must already be in cube shape.
pub fn solve_corner_orientation(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    CORNER_TABLE.solve(puzzle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_flip_half() {
        assert_eq!(&flip_half(b"ec.ec."), b"c.ec.e");
        assert_eq!(&flip_half(b"eeec.e"), b"ec.eee");
    }

    #[test]
    fn test_slice_twice_is_identity() {
        let state = PuzzleState::from_strs("ec.", "ec.");
        assert!(state.can_slice());
        assert_eq!(state.sliced().sliced(), state);
        assert_ne!(state.sliced(), state);
    }

    #[test]
    fn test_goal_distance() {
        let goal = PuzzleState::from_strs("ec.", "ec.");
        assert_eq!(SHAPE_TABLE.distance(goal), Some(0));
        assert_eq!(SHAPE_TABLE.distance(goal.turned(1, 0)), Some(0));
        let mut flipped = goal;
        flipped.flipped = true;
        assert!(SHAPE_TABLE.distance(flipped).is_some_and(|d| d > 0));
    }
}
