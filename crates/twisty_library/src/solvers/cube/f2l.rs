//! Middle-layer edges.

use twisty_core::{Axis, GroupedPuzzle, Move, PieceType, SolveError};

use super::{find_edge, guard, is_home};
use crate::cube::geometry::EDGES;

const PHASE: &str = "middle layer";

/// Front-right edge slot.
const FR: usize = 4;
/// Up-front edge slot.
const UF: usize = 0;
/// Up-right edge slot.
const UR: usize = 3;

const RIGHT_INSERT: &str = "U R U' R' U' F' U F";
const LEFT_INSERT: &str = "U' F' U F U R U' R'";

/// Solves the four middle-layer edges, one at a time into the front-right
/// slot.
pub fn solve_middle_layer(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    log::debug!("solving middle layer");
    puzzle.push_rotations();
    let result = (0..4).try_for_each(|_| -> Result<(), SolveError> {
        insert_edge(puzzle)?;
        puzzle.try_make_move(Move::rotation(Axis::U, true))?;
        Ok(())
    });
    puzzle.pop_rotations();
    result
}

fn fr_solved(puzzle: &GroupedPuzzle) -> bool {
    is_home(puzzle, puzzle.piece(PieceType::Edge, FR, 0), EDGES[FR])
}

fn insert_edge(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    if fr_solved(puzzle) {
        return Ok(());
    }
    let (front, right) = (
        puzzle.reference_color(Axis::F),
        puzzle.reference_color(Axis::R),
    );
    let colors = [front, right];
    let mut slot = find_edge(puzzle, &colors, PHASE)?;

    // Kick the edge out of the middle layer into the top layer.
    if EDGES[slot][1] == 0 {
        let mut rotations = 0;
        while slot != FR {
            guard(PHASE, &mut rotations, 4)?;
            puzzle.try_make_move(Move::rotation(Axis::U, true))?;
            slot = find_edge(puzzle, &colors, PHASE)?;
        }
        puzzle.execute_notation(RIGHT_INSERT)?;
        for _ in 0..rotations {
            puzzle.try_make_move(Move::rotation(Axis::U, false))?;
        }
    }

    for _ in 0..4 {
        let uf = puzzle.piece(PieceType::Edge, UF, 0);
        if uf.has_color_set(&colors) && uf.colors[1] == front {
            puzzle.execute_notation(RIGHT_INSERT)?;
            break;
        }
        let ur = puzzle.piece(PieceType::Edge, UR, 0);
        if ur.has_color_set(&colors) && ur.colors[1] == right {
            puzzle.execute_notation(LEFT_INSERT)?;
            break;
        }
        puzzle.try_make_move(Move::turn(Axis::U, 0, true))?;
    }

    if fr_solved(puzzle) {
        Ok(())
    } else {
        Err(SolveError::Stuck { phase: PHASE })
    }
}
