//! First-layer corners.

use twisty_core::{Axis, GroupedPuzzle, Move, PieceType, SolveError};

use super::{find_corner, guard, is_home};
use crate::cube::geometry::CORNERS;

const PHASE: &str = "corners";

/// Down-front-right corner slot.
const DFR: usize = 4;
/// Up-front-right corner slot.
const UFR: usize = 0;

/// Solves the four `D` corners, one at a time from the front-right slot.
pub fn solve_corners(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    log::debug!("solving first-layer corners");
    puzzle.push_rotations();
    let result = (0..4).try_for_each(|_| -> Result<(), SolveError> {
        insert_corner(puzzle)?;
        puzzle.try_make_move(Move::rotation(Axis::U, true))?;
        Ok(())
    });
    puzzle.pop_rotations();
    result
}

fn insert_corner(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    let colors = [
        puzzle.reference_color(Axis::D),
        puzzle.reference_color(Axis::F),
        puzzle.reference_color(Axis::R),
    ];
    let mut slot = find_corner(puzzle, &colors, PHASE)?;

    // Pop the corner out of the wrong bottom slot.
    if CORNERS[slot][1] == -1 && slot != DFR {
        let mut rotations = 0;
        while slot != DFR {
            guard(PHASE, &mut rotations, 4)?;
            puzzle.try_make_move(Move::rotation(Axis::U, true))?;
            slot = find_corner(puzzle, &colors, PHASE)?;
        }
        puzzle.execute_notation("R U R'")?;
        for _ in 0..rotations {
            puzzle.try_make_move(Move::rotation(Axis::U, false))?;
        }
        slot = find_corner(puzzle, &colors, PHASE)?;
    }

    let mut tries = 0;
    while CORNERS[slot][1] == 1 && slot != UFR {
        guard(PHASE, &mut tries, 4)?;
        puzzle.try_make_move(Move::turn(Axis::U, 0, true))?;
        slot = find_corner(puzzle, &colors, PHASE)?;
    }

    let mut tries = 0;
    while !is_home(puzzle, puzzle.piece(PieceType::Corner, DFR, 0), CORNERS[DFR]) {
        guard(PHASE, &mut tries, 6)?;
        puzzle.execute_notation("R U R' U'")?;
    }
    Ok(())
}
