//! Cross on the `D` face.
//!
//! The four `D` edges are tracked as oriented tokens `(slot, facelet)`,
//! where `facelet` is the sticker showing the `D` color. A breadth-first
//! search over every placement of the four tokens under the 18 outer moves
//! gives an optimal move from each placement towards the solved cross.

use std::collections::{HashMap, VecDeque};

use lazy_static::lazy_static;
use twisty_core::{Axis, Color, GroupedPuzzle, Move, Piece, PieceType, SolveError};

use super::{find_edge, outer_moves, trace};
use crate::cube::geometry::{self, EDGES};

const PHASE: &str = "cross";

/// Longest optimal cross solution is 8 moves.
const MAX_DEPTH: usize = 8;

type Token = (u8, u8);
type CrossState = [Token; 4];

/// Distance-decreasing moves for every placement of the cross edges.
struct CrossTable {
    moves: Vec<Move>,
    /// For each placement, the index of a move in `moves` and the placement
    /// it leads to. The solved placement maps to `None`.
    next: HashMap<CrossState, Option<(usize, CrossState)>>,
}

lazy_static! {
    static ref CROSS_TABLE: CrossTable = CrossTable::build();
}

fn d_edges() -> impl Iterator<Item = usize> {
    (0..EDGES.len()).filter(|&i| EDGES[i][1] == -1)
}

impl CrossTable {
    fn build() -> Self {
        let moves: Vec<Move> = outer_moves().collect();

        // Inverse permutation of oriented edge locations for each move.
        let inverse_perms: Vec<HashMap<Token, Token>> = moves
            .iter()
            .map(|&mv| {
                let mut inv = HashMap::new();
                for slot in 0..EDGES.len() {
                    for facelet in 0..2 {
                        let colors = match facelet {
                            0 => [Color::White, Color::Yellow],
                            _ => [Color::Yellow, Color::White],
                        };
                        let p = Piece::new(PieceType::Edge, slot, 0, colors, 3);
                        let q = trace(&p, &[mv]);
                        let to = (q.position as u8, q.facelet_of(Color::White).unwrap_or(0) as u8);
                        inv.insert(to, (slot as u8, facelet as u8));
                    }
                }
                inv
            })
            .collect();

        let mut goal = [(0, 0); 4];
        for (token, slot) in std::iter::zip(&mut goal, d_edges()) {
            *token = (slot as u8, 0);
        }

        let mut next = HashMap::new();
        next.insert(goal, None);
        let mut queue = VecDeque::from([goal]);
        while let Some(state) = queue.pop_front() {
            for (i, inv) in inverse_perms.iter().enumerate() {
                let pre = state.map(|t| inv.get(&t).copied().unwrap_or(t));
                next.entry(pre).or_insert_with(|| {
                    queue.push_back(pre);
                    Some((i, state))
                });
            }
        }
        log::trace!("built cross table with {} placements", next.len());

        Self { moves, next }
    }
}

/// Solves the cross on `D`, relative to the reference colors.
pub fn solve_cross(puzzle: &mut GroupedPuzzle) -> Result<(), SolveError> {
    log::debug!("solving cross");
    let d = puzzle.reference_color(Axis::D);

    let mut state = [(0, 0); 4];
    for (token, slot) in std::iter::zip(&mut state, d_edges()) {
        let mut side = EDGES[slot];
        side[1] = 0;
        let side_face = geometry::face_of_dir(side).ok_or(SolveError::Stuck { phase: PHASE })?;
        let found = find_edge(puzzle, &[d, puzzle.reference_color(side_face)], PHASE)?;
        let facelet = puzzle.piece(PieceType::Edge, found, 0).facelet_of(d).unwrap_or(0);
        *token = (found as u8, facelet as u8);
    }

    let table = &*CROSS_TABLE;
    for _ in 0..=MAX_DEPTH {
        match table.next.get(&state) {
            Some(Some((i, next))) => {
                puzzle.try_make_move(table.moves[*i])?;
                state = *next;
            }
            Some(None) => return Ok(()),
            None => break,
        }
    }
    Err(SolveError::Stuck { phase: PHASE })
}
