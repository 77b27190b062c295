//! Edge pairing for cubes larger than 3x3x3.
//!
//! Wings are paired one orbit at a time. An orbit holds two wings per edge
//! slot, one on each side of the middle; a wing location is written
//! `(slot, side)`. Every change is made with a single three-cycle of wing
//! locations, conjugated by outer moves so that it hits any three
//! locations. A table of shortest setups is built once by breadth-first
//! search on a 4x4x4, where the locations of an orbit move the same way
//! under outer moves as on any larger cube.

use std::collections::{HashMap, VecDeque};

use lazy_static::lazy_static;
use twisty_core::{Algorithm, Axis, Color, GroupedPuzzle, Move, Piece, PieceType, SolveError};

use super::{guard, oll_parity, outer_moves, trace};
use crate::cube::geometry::{self, EDGES};

const PHASE: &str = "edges";

/// Number of wing locations in one orbit.
const LOC_COUNT: usize = EDGES.len() * 2;

/// `(slot, side)` packed as `slot * 2 + side`.
type Loc = u8;
type Triple = [Loc; 3];

fn loc(slot: usize, side: usize) -> Loc {
    (slot * 2 + side) as u8
}

fn slot_of(l: Loc) -> usize {
    usize::from(l / 2)
}

fn mate(l: Loc) -> Loc {
    l ^ 1
}

/// `R U R' F R' F' R`, which swaps two wings across `UF` when bracketed by
/// an inner `U` slice.
const RHO: [(Axis, bool); 7] = [
    (Axis::R, true),
    (Axis::U, true),
    (Axis::R, false),
    (Axis::F, true),
    (Axis::R, false),
    (Axis::F, false),
    (Axis::R, true),
];

/// Three-cycle of wing locations in orbit `j`, using inner `U` slice
/// `j + 1`.
fn tool(j: u16) -> Algorithm {
    let rho: Algorithm = RHO.iter().map(|&(face, cw)| Move::turn(face, 0, cw)).collect();
    let mut alg = Algorithm::new();
    alg.push(Move::turn(Axis::U, j + 1, false));
    alg.append(&rho);
    alg.push(Move::turn(Axis::U, j + 1, true));
    alg.append(&rho.inverse());
    alg
}

/// Setup moves for every ordered triple of wing locations.
struct WingTable {
    moves: Vec<Move>,
    /// Where each location goes under each move.
    perms: Vec<[Loc; LOC_COUNT]>,
    /// For each triple, a move in `moves` and the triple it leads to, one
    /// step closer to the triple that the tool cycles. That triple maps to
    /// `None`.
    next: HashMap<Triple, Option<(usize, Triple)>>,
}

lazy_static! {
    static ref WING_TABLE: WingTable = WingTable::build();
}

/// Returns the location of a wing of a 4x4x4 after applying `moves`.
fn trace_loc(l: Loc, moves: &[Move]) -> Loc {
    let p = Piece::new(
        PieceType::Edge,
        slot_of(l),
        usize::from(l % 2),
        [Color::White, Color::Yellow],
        4,
    );
    let q = trace(&p, moves);
    loc(q.position, q.index.min(1))
}

impl WingTable {
    fn build() -> Self {
        let moves: Vec<Move> = outer_moves().collect();
        let perms: Vec<[Loc; LOC_COUNT]> = moves
            .iter()
            .map(|&mv| std::array::from_fn(|l| trace_loc(l as Loc, &[mv])))
            .collect();

        let three_cycle = tool(0);
        let moved: Vec<Loc> = (0..LOC_COUNT as Loc)
            .filter(|&l| trace_loc(l, &three_cycle) != l)
            .collect();
        let a = moved.first().copied().unwrap_or_default();
        let b = trace_loc(a, &three_cycle);
        let canonical = [a, b, trace_loc(b, &three_cycle)];
        debug_assert_eq!(moved.len(), 3, "tool must be a three-cycle");

        let inverse_perms: Vec<[Loc; LOC_COUNT]> = perms
            .iter()
            .map(|perm| {
                let mut inv = [0; LOC_COUNT];
                for (from, &to) in perm.iter().enumerate() {
                    inv[usize::from(to)] = from as Loc;
                }
                inv
            })
            .collect();

        let mut next = HashMap::new();
        next.insert(canonical, None);
        let mut queue = VecDeque::from([canonical]);
        while let Some(state) = queue.pop_front() {
            for (i, inv) in inverse_perms.iter().enumerate() {
                let pre = state.map(|l| inv[usize::from(l)]);
                next.entry(pre).or_insert_with(|| {
                    queue.push_back(pre);
                    Some((i, state))
                });
            }
        }
        log::trace!("built wing table with {} triples", next.len());

        Self { moves, perms, next }
    }

    /// Returns the moves that carry the locations of `triple` onto the
    /// triple that the tool cycles, or `None` if there are none.
    fn setup(&self, triple: Triple) -> Option<Vec<Move>> {
        let mut moves = vec![];
        let mut state = triple;
        while let Some((i, next)) = *self.next.get(&state)? {
            moves.push(self.moves[i]);
            state = next;
        }
        Some(moves)
    }

    /// Returns a shortest sequence of moves carrying location `from` to `to`.
    fn path(&self, from: Loc, to: Loc) -> Vec<Move> {
        let mut prev: HashMap<Loc, Option<(usize, Loc)>> = HashMap::from([(from, None)]);
        let mut queue = VecDeque::from([from]);
        while let Some(l) = queue.pop_front() {
            if l == to {
                break;
            }
            for (i, perm) in self.perms.iter().enumerate() {
                let m = perm[usize::from(l)];
                prev.entry(m).or_insert_with(|| {
                    queue.push_back(m);
                    Some((i, l))
                });
            }
        }

        let mut moves = vec![];
        let mut l = to;
        while let Some(&Some((i, p))) = prev.get(&l) {
            moves.push(self.moves[i]);
            l = p;
        }
        moves.reverse();
        moves
    }
}

/// Solver that pairs the wings of every edge.
pub struct EdgeSolver<'a> {
    puzzle: &'a mut GroupedPuzzle,
}

impl<'a> EdgeSolver<'a> {
    /// Constructs an edge solver for a puzzle.
    pub fn new(puzzle: &'a mut GroupedPuzzle) -> Self {
        Self { puzzle }
    }

    /// Pairs every edge. Centers must already be solved.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        let n = self.puzzle.size();
        for j in 0..n.saturating_sub(2) / 2 {
            self.solve_orbit(j)?;
        }
        Ok(())
    }

    fn solve_orbit(&mut self, j: u16) -> Result<(), SolveError> {
        let mut iterations = 0;
        loop {
            guard(PHASE, &mut iterations, 500)?;

            let bad: Vec<Loc> = (0..LOC_COUNT as Loc)
                .filter(|&l| self.wing(j, l).colors[..] != self.expected(slot_of(l))[..])
                .collect();
            match bad.len() {
                0 => return Ok(()),
                2 => {
                    log::debug!("{PHASE}: fixing parity in orbit {j}");
                    self.puzzle.execute_algorithm(&oll_parity(&[j + 1]))?;
                }
                _ => {
                    let [x, y, z] = self.choose_cycle(j, &bad)?;
                    self.cycle(j, x, y, z)?;
                }
            }
        }
    }

    /// Picks three wrong locations such that the wing at the first belongs
    /// at the second, preferring a third that also gets fixed.
    fn choose_cycle(&self, j: u16, bad: &[Loc]) -> Result<Triple, SolveError> {
        let fitting = |target: Loc| {
            bad.iter()
                .copied()
                .find(|&l| l != target && self.fits(j, l, target))
                .ok_or(SolveError::Stuck { phase: PHASE })
        };

        for &target in bad {
            let from = fitting(target)?;
            if mate(from) == target {
                if let Some(&third) = bad.iter().find(|&&l| l != from && l != target) {
                    return Ok([from, target, third]);
                }
            }
            if bad.contains(&mate(from)) && mate(from) != target {
                return Ok([from, target, mate(from)]);
            }
            if bad.contains(&mate(target)) && mate(target) != from {
                return Ok([from, target, mate(target)]);
            }
        }

        let target = bad.first().copied().ok_or(SolveError::Stuck { phase: PHASE })?;
        let from = fitting(target)?;
        Ok([from, target, mate(from)])
    }

    /// Moves the wing at `x` to `y`, the one at `y` to `z`, and the one at
    /// `z` to `x`.
    fn cycle(&mut self, j: u16, x: Loc, y: Loc, z: Loc) -> Result<(), SolveError> {
        let table = &*WING_TABLE;
        let forward = [[x, y, z], [y, z, x], [z, x, y]];
        let backward = [[x, z, y], [z, y, x], [y, x, z]];

        let (setup, three_cycle) = if let Some(setup) = forward.into_iter().find_map(|t| table.setup(t)) {
            (setup, tool(j))
        } else if let Some(setup) = backward.into_iter().find_map(|t| table.setup(t)) {
            (setup, tool(j).inverse())
        } else {
            log::warn!("{PHASE}: no setup for cycle {x} {y} {z}");
            return Err(SolveError::Stuck { phase: PHASE });
        };

        let setup = Algorithm::from(setup);
        self.puzzle.execute_algorithm(&setup)?;
        self.puzzle.execute_algorithm(&three_cycle)?;
        self.puzzle.execute_algorithm(&setup.inverse())?;
        Ok(())
    }

    fn wing_index(&self, j: u16, l: Loc) -> usize {
        let n = self.puzzle.size();
        usize::from(if l % 2 == 0 { j } else { n - 3 - j })
    }

    fn wing(&self, j: u16, l: Loc) -> &Piece {
        self.puzzle
            .piece(PieceType::Edge, slot_of(l), self.wing_index(j, l))
    }

    /// Colors that every wing in a slot shows once the edge is paired.
    fn expected(&self, slot: usize) -> Vec<Color> {
        let n = self.puzzle.size();
        if n % 2 == 1 {
            let middle = usize::from((n - 3) / 2);
            return self.puzzle.piece(PieceType::Edge, slot, middle).colors.to_vec();
        }
        geometry::facelet_faces(EDGES[slot])
            .into_iter()
            .map(|face| {
                self.puzzle
                    .piece(PieceType::Center, geometry::face_position(face), 0)
                    .colors[0]
            })
            .collect()
    }

    /// Returns whether the wing at `l` would show the right colors if it
    /// were carried to `target`.
    fn fits(&self, j: u16, l: Loc, target: Loc) -> bool {
        let wing = self.wing(j, l);
        let expected = self.expected(slot_of(target));

        let mut have = wing.colors.to_vec();
        let mut want = expected.clone();
        have.sort();
        want.sort();
        if have != want {
            return false;
        }

        let path = WING_TABLE.path(l, target);
        trace(wing, &path).colors[..] == expected[..]
    }
}
