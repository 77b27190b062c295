//! Center reduction for cubes larger than 3x3x3.
//!
//! Step 1 builds the `U` center one column at a time, then the `D` center
//! after turning the cube over. Step 2 builds two side centers one row at a
//! time. Step 3 swaps pieces between the last two centers with a 4-move
//! commutator. Each step runs twice; the second pass uses the "safe" move
//! variants that never break a finished center.

use twisty_core::{Axis, Color, GroupedPuzzle, Move, Piece, PieceType, SolveError};

use super::{guard, turn_tracked};
use crate::cube::geometry::{self, FACES};

const PHASE: &str = "centers";

/// Returns where an index on an `m`x`m` face goes after a clockwise quarter
/// turn of that face.
fn rotate_index(i: usize, m: usize) -> usize {
    let (row, col) = (i / m, i % m);
    col * m + (m - 1 - row)
}

fn face_of(p: &Piece) -> Axis {
    FACES[p.position]
}

fn layer(p: &Piece, face: Axis) -> u16 {
    geometry::layer(p, face)
}

/// Solver that groups the center pieces of every face.
pub struct CenterSolver<'a> {
    puzzle: &'a mut GroupedPuzzle,
    /// Number of center pieces along each side of a face.
    m: usize,
}

impl<'a> CenterSolver<'a> {
    /// Constructs a center solver for a puzzle.
    pub fn new(puzzle: &'a mut GroupedPuzzle) -> Self {
        let m = usize::from(puzzle.size().saturating_sub(2));
        Self { puzzle, m }
    }

    /// Solves every center. Does nothing on cubes with at most one center
    /// piece per face.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        if self.puzzle.size() <= 3 {
            return Ok(());
        }
        log::debug!("solving centers");
        self.puzzle.push_rotations();
        let result = self
            .step1()
            .and_then(|()| self.step2())
            .and_then(|()| self.step3());
        self.puzzle.pop_rotations();
        result
    }

    fn is_odd(&self) -> bool {
        self.m % 2 == 1
    }

    /// Index of the fixed center on odd cubes.
    fn middle(&self) -> usize {
        self.m * self.m / 2
    }

    fn center(&self, face: Axis, index: usize) -> &Piece {
        self.puzzle
            .piece(PieceType::Center, geometry::face_position(face), index)
    }

    fn target_color(&self) -> Color {
        self.puzzle.reference_color(Axis::U)
    }

    fn turn(&mut self, face: Axis, layer: usize, clockwise: bool) -> Result<(), SolveError> {
        self.puzzle
            .try_make_move(Move::turn(face, layer as u16, clockwise))?;
        Ok(())
    }

    fn turn_tracking(
        &mut self,
        face: Axis,
        layer: u16,
        clockwise: bool,
        p: &mut Piece,
    ) -> Result<(), SolveError> {
        turn_tracked(self.puzzle, face, layer, clockwise, p)?;
        Ok(())
    }

    fn rotate(&mut self, axis: Axis) -> Result<(), SolveError> {
        self.puzzle.try_make_move(Move::rotation(axis, true))?;
        Ok(())
    }

    /// Returns whether column `line` of the `U` center is finished.
    fn line_done(&self, color: Color, line: usize) -> bool {
        (0..self.m).all(|row| self.center(Axis::U, row * self.m + line).colors[0] == color)
    }

    /// Returns every piece of color `color` in the orbit of `index`, face by
    /// face.
    fn find_pieces(&self, index: usize, color: Color) -> Vec<Piece> {
        let mut ret = vec![];
        for face in FACES {
            let mut j = index;
            for _ in 0..4 {
                let p = self.center(face, j);
                if p.colors[0] == color {
                    ret.push(p.clone());
                }
                j = rotate_index(j, self.m);
            }
        }
        ret
    }

    /// Returns the first piece of `pieces` that is neither in a finished
    /// line of `U` nor already waiting on `F`, or `None` if the slot at
    /// `index` on `F` already holds a suitable piece.
    fn unsolved(
        &self,
        pieces: Vec<Piece>,
        line: usize,
        index: usize,
        vertical: bool,
    ) -> Option<Piece> {
        let m = self.m;
        for p in pieces {
            if self.is_odd() && p.index == self.middle() {
                return None;
            }
            let face = face_of(&p);
            if !(p.index % m < line && face == Axis::U) {
                let waiting = face == Axis::F
                    && if vertical {
                        p.index % m == line
                    } else {
                        p.index / m == m - line - 1
                    };
                if !waiting {
                    return Some(p);
                }
            }
            if p.index == index && face == Axis::F {
                return None;
            }
        }
        None
    }

    /// Moves a piece from `U` or `D` onto a side face.
    fn move_ud(&mut self, p: &mut Piece, line: usize, safe: bool) -> Result<(), SolveError> {
        let line = line as i32;
        let half = (self.m / 2) as i32;
        let l_depth = i32::from(layer(p, Axis::L)) - 1;
        if !safe && l_depth > line && (!self.is_odd() || l_depth != half) {
            match face_of(p) {
                Axis::U => self.turn_tracking(Axis::R, layer(p, Axis::R), true, p)?,
                Axis::D => self.turn_tracking(Axis::R, layer(p, Axis::R), false, p)?,
                _ => (),
            }
            return Ok(());
        }

        self.turn_tracking(Axis::U, 0, true, p)?;
        let f_layer = layer(p, Axis::F);
        self.turn_tracking(Axis::F, f_layer, true, p)?;
        if safe
            || i32::from(layer(p, Axis::B)) - 1 < line
            || (self.is_odd() && i32::from(layer(p, Axis::F)) - 1 == half)
        {
            let mut tries = 0;
            while layer(p, Axis::F) == f_layer {
                guard(PHASE, &mut tries, 4)?;
                self.turn_tracking(Axis::R, layer(p, Axis::R), true, p)?;
            }
            self.turn_tracking(Axis::F, f_layer, false, p)?;
        }
        self.turn_tracking(Axis::U, 0, false, p)?;
        self.turn_tracking(Axis::R, layer(p, Axis::R), true, p)
    }

    /// Moves a piece already on `F` out of the way of the column being
    /// built.
    fn move_vertical_f(&mut self, p: &mut Piece, index: usize) -> Result<(), SolveError> {
        if usize::from(layer(p, Axis::U)) < index + 1 {
            self.turn_tracking(Axis::F, 0, true, p)?;
            self.turn_tracking(Axis::U, layer(p, Axis::U), true, p)?;
            self.turn_tracking(Axis::F, 0, false, p)
        } else {
            self.turn_tracking(Axis::U, layer(p, Axis::U), true, p)
        }
    }

    /// Moves a piece already on `F` out of the way of the row being built.
    fn move_horizontal_f(&mut self, p: &mut Piece) -> Result<(), SolveError> {
        self.turn_tracking(Axis::F, 0, true, p)?;
        let r_layer = layer(p, Axis::R);
        self.turn_tracking(Axis::R, r_layer, false, p)?;
        let mut tries = 0;
        while layer(p, Axis::R) == r_layer {
            guard(PHASE, &mut tries, 4)?;
            self.turn_tracking(Axis::D, 0, true, p)?;
        }
        self.turn_tracking(Axis::R, r_layer, true, p)?;
        self.turn_tracking(Axis::F, 0, false, p)
    }

    /// Moves a piece from `U` down to the side faces without breaking the
    /// finished `U` center more than necessary.
    fn move_horizontal_u(
        &mut self,
        p: &mut Piece,
        index: usize,
        safe: bool,
    ) -> Result<(), SolveError> {
        let r_layer = layer(p, Axis::R);
        let mut tries = 0;
        if safe {
            self.turn_tracking(Axis::R, r_layer, true, p)?;
            self.turn_tracking(Axis::R, r_layer, true, p)?;
            while layer(p, Axis::R) == r_layer {
                guard(PHASE, &mut tries, 4)?;
                self.turn_tracking(Axis::D, 0, true, p)?;
            }
            self.turn_tracking(Axis::R, r_layer, false, p)?;
            self.turn_tracking(Axis::R, r_layer, false, p)
        } else {
            self.turn_tracking(Axis::R, r_layer, true, p)?;
            if (self.m as i32) - i32::from(r_layer) - 2 < (index % self.m) as i32 {
                while layer(p, Axis::R) == r_layer {
                    guard(PHASE, &mut tries, 4)?;
                    self.turn_tracking(Axis::B, 0, true, p)?;
                }
                self.turn_tracking(Axis::R, r_layer, false, p)?;
            }
            Ok(())
        }
    }

    /// Inserts the column waiting on `F` into column `line` of `U`.
    fn insert_vertical_line(&mut self, line: usize, safe: bool) -> Result<(), SolveError> {
        let half = self.m / 2;
        if line == half && self.is_odd() {
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::R, half + 1, false)?;
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::R, half + 1, true)
        } else if safe {
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::L, line + 1, true)?;
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::L, line + 1, false)
        } else {
            self.turn(Axis::L, line + 1, false)
        }
    }

    /// Inserts the row waiting on `F` into column `line` of `U`.
    fn insert_horizontal_line(
        &mut self,
        color: Color,
        line: usize,
        safe: bool,
    ) -> Result<(), SolveError> {
        let half = self.m / 2;
        if line == half && self.is_odd() {
            let mut tries = 0;
            while self.center(Axis::F, self.middle()).colors[0] != color {
                guard(PHASE, &mut tries, 4)?;
                self.turn(Axis::R, half + 1, false)?;
            }
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::R, half + 1, true)
        } else if safe {
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::L, line + 1, true)?;
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::F, 0, false)?;
            self.turn(Axis::L, line + 1, false)
        } else {
            self.turn(Axis::F, 0, true)?;
            self.turn(Axis::L, line + 1, false)
        }
    }

    /// Builds the `U` center and the one opposite it, leaving the cube in
    /// its original orientation. Finished columns are skipped, so running
    /// this on a cube where both are already built makes no moves.
    pub fn solve_opposite_pair(&mut self) -> Result<(), SolveError> {
        if self.puzzle.size() <= 3 {
            return Ok(());
        }
        self.puzzle.push_rotations();
        let result = self.step1();
        self.puzzle.pop_rotations();
        result
    }

    /// Builds the `U` center, then turns the cube over and builds the
    /// opposite one. Leaves the cube rotated.
    fn step1(&mut self) -> Result<(), SolveError> {
        let m = self.m;
        for pass in 0..2 {
            let color = self.target_color();
            let safe = pass == 1;
            for line in 0..m {
                if self.line_done(color, line) {
                    continue;
                }
                for index in (line..m * m).step_by(m) {
                    let pieces = self.find_pieces(index, color);
                    let Some(mut p) = self.unsolved(pieces, line, index, true) else {
                        continue;
                    };
                    match face_of(&p) {
                        Axis::U | Axis::D => self.move_ud(&mut p, line, safe)?,
                        Axis::F => self.move_vertical_f(&mut p, index)?,
                        _ => (),
                    }
                    let mut tries = 0;
                    while p.index != index {
                        guard(PHASE, &mut tries, 4)?;
                        self.turn_tracking(face_of(&p), 0, true, &mut p)?;
                    }
                    let mut tries = 0;
                    while face_of(&p) != Axis::F {
                        guard(PHASE, &mut tries, 4)?;
                        self.turn_tracking(Axis::U, layer(&p, Axis::U), true, &mut p)?;
                    }
                }
                self.insert_vertical_line(line, safe)?;
            }
            self.rotate(Axis::F)?;
            self.rotate(Axis::F)?;
        }
        self.rotate(Axis::F)
    }

    /// Builds the two centers on `U` and then `F` (after one rotation), row
    /// by row.
    fn step2(&mut self) -> Result<(), SolveError> {
        let m = self.m;
        for pass in 0..2 {
            let color = self.target_color();
            let safe = pass == 1;
            for line in 0..m {
                if self.line_done(color, line) {
                    continue;
                }
                for index in m * (m - line - 1)..m * (m - line) {
                    let pieces = self.find_pieces(index, color);
                    let Some(mut p) = self.unsolved(pieces, line, index, false) else {
                        continue;
                    };
                    self.bring_to_front_row(&mut p, line, index, safe)?;
                }
                self.insert_horizontal_line(color, line, safe)?;
            }
            self.rotate(Axis::R)?;
        }
        Ok(())
    }

    fn bring_to_front_row(
        &mut self,
        p: &mut Piece,
        line: usize,
        index: usize,
        safe: bool,
    ) -> Result<(), SolveError> {
        match face_of(p) {
            Axis::U => self.move_horizontal_u(p, index, safe)?,
            Axis::F => self.move_horizontal_f(p)?,
            _ => (),
        }

        let mut tries = 0;
        while index_on_front(p)? != index {
            guard(PHASE, &mut tries, 4)?;
            self.turn_tracking(face_of(p), 0, true, p)?;
        }

        let r_layer = layer(p, Axis::R);
        let mut r_turns = 0;
        while face_of(p) != Axis::F {
            guard(PHASE, &mut r_turns, 4)?;
            self.turn_tracking(Axis::R, r_layer, true, p)?;
        }
        if index % self.m < line || safe {
            let mut f_turns = 0;
            while layer(p, Axis::R) == r_layer || f_turns % 2 == 0 {
                guard(PHASE, &mut f_turns, 8)?;
                self.turn_tracking(Axis::F, 0, true, p)?;
            }
            for _ in 0..r_turns {
                self.turn_tracking(Axis::R, r_layer, false, p)?;
            }
            for _ in 0..f_turns {
                self.turn_tracking(Axis::F, 0, false, p)?;
            }
        }
        Ok(())
    }

    /// Solves the last two centers, on `U` and `F`, by swapping mismatched
    /// pieces between them.
    fn step3(&mut self) -> Result<(), SolveError> {
        let color = self.target_color();
        for i in 0..self.m * self.m {
            if self.center(Axis::U, i).colors[0] == color {
                continue;
            }
            let mut tm = self
                .find_pieces(i, color)
                .into_iter()
                .find(|p| face_of(p) == Axis::F)
                .ok_or(SolveError::Stuck { phase: PHASE })?;

            let mut tries = 0;
            while tm.index != i {
                guard(PHASE, &mut tries, 4)?;
                self.turn_tracking(Axis::F, 0, true, &mut tm)?;
            }

            let l1 = layer(&tm, Axis::R);
            self.turn_tracking(Axis::R, l1, true, &mut tm)?;
            self.turn_tracking(Axis::U, 0, true, &mut tm)?;
            let mut cw = true;
            if layer(&tm, Axis::R) == l1 {
                self.turn_tracking(Axis::U, 0, false, &mut tm)?;
                self.turn_tracking(Axis::U, 0, false, &mut tm)?;
                cw = false;
            }
            let l2 = layer(&tm, Axis::R);
            for (face, l, dir) in [
                (Axis::R, l2, true),
                (Axis::U, 0, !cw),
                (Axis::R, l1, false),
                (Axis::U, 0, cw),
                (Axis::R, l2, false),
                (Axis::U, 0, !cw),
            ] {
                self.turn_tracking(face, l, dir, &mut tm)?;
            }
        }
        self.rotate(Axis::R)
    }
}

/// Returns the index a center piece would have on `F` after rotating the
/// whole cube around `R` until it gets there.
fn index_on_front(p: &Piece) -> Result<usize, SolveError> {
    let mut q = p.clone();
    for _ in 0..4 {
        if face_of(&q) == Axis::F {
            return Ok(q.index);
        }
        geometry::turn_piece(Axis::R, &mut q);
    }
    Err(SolveError::Stuck { phase: PHASE })
}
