//! Pyraminx of any size.
//!
//! Pieces are addressed by barycentric coordinates `c` over the four
//! vertices `U`, `L`, `R`, `B`. Upward tetrahedra have coordinates summing
//! to `n-1` and octahedra have coordinates summing to `n-2`. A piece shows a
//! sticker on the face opposite vertex `w` whenever `c[w] == 0`, so the
//! number of zero coordinates determines the piece type. Down-pointing
//! tetrahedra never show a sticker and are not modeled.

mod notation;

use smallvec::SmallVec;
use twisty_core::{
    Axis, Color, Layer, Move, Piece, PieceBehavior, PieceGroup, PieceType, PuzzleRules,
};

/// Barycentric coordinates.
type Coords = [i32; 4];

/// Axes in vertex order.
pub const VERTICES: [Axis; 4] = [Axis::U, Axis::L, Axis::R, Axis::B];

/// Pairs of vertices joined by an edge, in position order.
pub const EDGE_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Color of the face opposite each vertex.
const FACE_COLORS: [Color; 4] = [Color::Yellow, Color::Blue, Color::Red, Color::Green];

/// Rules for Pyraminx puzzles.
pub static RULES: PuzzleRules = PuzzleRules {
    name: "Pyraminx",
    min_size: 3,
    max_size: 17,
    behaviors: &BEHAVIORS,
    axes: &VERTICES,
    faces: &[
        (Axis::U, Color::Yellow),
        (Axis::L, Color::Blue),
        (Axis::R, Color::Red),
        (Axis::B, Color::Green),
    ],
    axis_order: |_| 3,
    rotate_face: |axis, face| match (vertex(axis), vertex(face)) {
        (Some(v), Some(w)) => VERTICES[cycle_vertex(v, w)],
        _ => face,
    },
    moves_reference: |mv, _| mv.is_rotation(),
    commutes: |a, b| a.axis == b.axis,
    check_move: |puzzle, mv| puzzle.rules().check_move_shape(mv, puzzle.size()),
    parse_algorithm: notation::parse,
    format_algorithm: notation::format,
};

static BEHAVIORS: [PieceBehavior; 5] = [
    PieceBehavior {
        ty: PieceType::Corner,
        position_count: |_| 4,
        piece_count: |_, _| 1,
        create_piece: |size, position, index| {
            Some(create_piece(PieceType::Corner, size, position, index))
        },
        affected_pieces,
        move_piece,
    },
    PieceBehavior {
        ty: PieceType::Edge,
        position_count: |_| EDGE_PAIRS.len(),
        piece_count: |size, _| usize::from(size.saturating_sub(2)),
        create_piece: |size, position, index| {
            Some(create_piece(PieceType::Edge, size, position, index))
        },
        affected_pieces,
        move_piece,
    },
    PieceBehavior {
        ty: PieceType::Axial,
        position_count: |_| 4,
        piece_count: |_, _| 1,
        create_piece: |size, position, index| {
            Some(create_piece(PieceType::Axial, size, position, index))
        },
        affected_pieces,
        move_piece,
    },
    PieceBehavior {
        ty: PieceType::InnerEdge,
        position_count: |_| EDGE_PAIRS.len(),
        piece_count: |size, _| usize::from(size.saturating_sub(3)),
        create_piece: |size, position, index| {
            Some(create_piece(PieceType::InnerEdge, size, position, index))
        },
        affected_pieces,
        move_piece,
    },
    PieceBehavior {
        ty: PieceType::Center,
        position_count: |_| 4,
        piece_count: |size, _| usize::from(size.saturating_sub(3)).pow(2),
        create_piece: |size, position, index| {
            Some(create_piece(PieceType::Center, size, position, index))
        },
        affected_pieces,
        move_piece,
    },
];

fn vertex(axis: Axis) -> Option<usize> {
    VERTICES.iter().position(|&v| v == axis)
}

/// Returns where vertex `w` goes after one clockwise turn around vertex
/// `v`.
fn cycle_vertex(v: usize, w: usize) -> usize {
    let cycle = match v {
        0 => [1, 3, 2],
        1 => [0, 2, 3],
        2 => [0, 3, 1],
        _ => [0, 1, 2],
    };
    match cycle.iter().position(|&x| x == w) {
        Some(i) => cycle[(i + 1) % 3],
        None => w,
    }
}

/// Returns the coordinates of the face centers on the face opposite vertex
/// `f`: upward tetrahedra first, then octahedra, each in lexicographic
/// order.
fn center_cells(n: i32, f: usize) -> Vec<Coords> {
    let mut ret = vec![];
    for sum in [n - 1, n - 2] {
        for a in 1..sum {
            for b in 1..sum - a {
                let [x, y, z] = [a, b, sum - a - b];
                let mut c = [x, y, z, 0];
                // Shift the zero into place, keeping the others in order.
                c[f..].rotate_right(1);
                ret.push(c);
            }
        }
    }
    ret
}

fn coords(ty: PieceType, position: usize, index: usize, n: i32) -> Coords {
    let i = index as i32;
    let mut c = [0; 4];
    match ty {
        PieceType::Corner => c[position] = n - 1,
        PieceType::Axial => c[position] = n - 2,
        PieceType::Edge | PieceType::InnerEdge => {
            let sum = if ty == PieceType::Edge { n - 1 } else { n - 2 };
            let (a, b) = EDGE_PAIRS[position];
            c[a] = i + 1;
            c[b] = sum - 1 - i;
        }
        _ => {
            if let Some(&cell) = center_cells(n, position).get(index) {
                c = cell;
            }
        }
    }
    c
}

/// Returns the type, position, and index of the piece at `c`.
fn classify(c: Coords, n: i32) -> Option<(PieceType, usize, usize)> {
    let is_tet = c.iter().sum::<i32>() == n - 1;
    let nonzero: SmallVec<[usize; 4]> = (0..4).filter(|&w| c[w] != 0).collect();
    match nonzero.as_slice() {
        &[v] => Some((if is_tet { PieceType::Corner } else { PieceType::Axial }, v, 0)),
        &[a, b] => {
            let position = EDGE_PAIRS.iter().position(|&p| p == (a, b))?;
            let ty = if is_tet { PieceType::Edge } else { PieceType::InnerEdge };
            Some((ty, position, (c[a] - 1) as usize))
        }
        &[_, _, _] => {
            let f = (0..4).find(|&w| c[w] == 0)?;
            let index = center_cells(n, f).iter().position(|&x| x == c)?;
            Some((PieceType::Center, f, index))
        }
        _ => None,
    }
}

/// Returns the faces a piece at `c` shows stickers on, in facelet order.
fn sticker_faces(c: Coords) -> SmallVec<[usize; 3]> {
    (0..4).filter(|&w| c[w] == 0).collect()
}

fn create_piece(ty: PieceType, size: u16, position: usize, index: usize) -> Piece {
    let c = coords(ty, position, index, i32::from(size));
    let colors = sticker_faces(c).into_iter().map(|w| FACE_COLORS[w]);
    Piece::new(ty, position, index, colors, size)
}

fn layer_of(c: Coords, v: usize, n: i32) -> i32 {
    n - 1 - c[v]
}

fn affected_pieces(mv: &Move, group: &PieceGroup, size: u16) -> Vec<usize> {
    let Layer::Slice(layer) = mv.layer else {
        return (0..group.len()).collect();
    };
    let Some(v) = vertex(mv.axis) else {
        return vec![];
    };
    let n = i32::from(size);
    let key = group.key();
    (0..group.len())
        .filter(|&i| layer_of(coords(key.ty, key.position, i, n), v, n) == i32::from(layer))
        .collect()
}

fn move_piece(mv: &Move, piece: &mut Piece) {
    let Some(v) = vertex(mv.axis) else {
        return;
    };
    let n = i32::from(piece.puzzle_size);
    let old = coords(piece.ty, piece.position, piece.index, n);
    let mut new = [0; 4];
    for w in 0..4 {
        new[cycle_vertex(v, w)] = old[w];
    }

    let old_faces = sticker_faces(old);
    let colors = sticker_faces(new)
        .into_iter()
        .filter_map(|f| {
            let j = old_faces.iter().position(|&w| cycle_vertex(v, w) == f)?;
            piece.colors.get(j).copied()
        })
        .collect();

    if let Some((_, position, index)) = classify(new, n) {
        piece.position = position;
        piece.index = index;
        piece.colors = colors;
    }
}
