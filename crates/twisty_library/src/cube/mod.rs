//! NxN Rubik's cube.

pub mod geometry;
mod notation;

use twisty_core::{
    Axis, Color, Layer, Move, Piece, PieceBehavior, PieceGroup, PieceType, PuzzleRules,
};

use geometry::{CORNERS, EDGES, FACES, Vec3};

/// Rules for NxN cubes.
pub static RULES: PuzzleRules = PuzzleRules {
    name: "Cube",
    min_size: 2,
    max_size: 17,
    behaviors: &BEHAVIORS,
    axes: &[Axis::R, Axis::L, Axis::U, Axis::D, Axis::F, Axis::B],
    faces: &[
        (Axis::U, Color::White),
        (Axis::F, Color::Green),
        (Axis::R, Color::Red),
        (Axis::B, Color::Blue),
        (Axis::L, Color::Orange),
        (Axis::D, Color::Yellow),
    ],
    axis_order: |_| 4,
    rotate_face: |axis, face| {
        geometry::face_of_dir(geometry::rot_cw(axis, geometry::normal(face))).unwrap_or(face)
    },
    moves_reference,
    commutes: |a, b| {
        let (na, nb) = (geometry::normal(a.axis), geometry::normal(b.axis));
        na == nb || na == nb.map(|x| -x)
    },
    check_move: |puzzle, mv| puzzle.rules().check_move_shape(mv, puzzle.size()),
    parse_algorithm: notation::parse,
    format_algorithm: notation::format,
};

static BEHAVIORS: [PieceBehavior; 3] = [
    PieceBehavior {
        ty: PieceType::Corner,
        position_count: |_| CORNERS.len(),
        piece_count: |_, _| 1,
        create_piece: |size, position, index| {
            Some(Piece::new(
                PieceType::Corner,
                position,
                index,
                solved_colors(CORNERS[position]),
                size,
            ))
        },
        affected_pieces: corner_affected_pieces,
        move_piece: |mv, piece| geometry::turn_piece(mv.axis, piece),
    },
    PieceBehavior {
        ty: PieceType::Edge,
        position_count: |_| EDGES.len(),
        piece_count: |size, _| usize::from(size.saturating_sub(2)),
        create_piece: |size, position, index| {
            Some(Piece::new(
                PieceType::Edge,
                position,
                index,
                solved_colors(EDGES[position]),
                size,
            ))
        },
        affected_pieces: edge_affected_pieces,
        move_piece: |mv, piece| geometry::turn_piece(mv.axis, piece),
    },
    PieceBehavior {
        ty: PieceType::Center,
        position_count: |_| FACES.len(),
        piece_count: |size, _| usize::from(size.saturating_sub(2)).pow(2),
        create_piece: |size, position, index| {
            Some(Piece::new(
                PieceType::Center,
                position,
                index,
                [geometry::face_color(FACES[position])],
                size,
            ))
        },
        affected_pieces: center_affected_pieces,
        move_piece: |mv, piece| geometry::turn_piece(mv.axis, piece),
    },
];

fn solved_colors(signs: Vec3) -> impl Iterator<Item = Color> {
    geometry::facelet_faces(signs)
        .into_iter()
        .map(geometry::face_color)
}

/// Returns whether a move changes which color each face should show. On odd
/// cubes the center pieces of the middle layers define the colors of the
/// faces, so turning a middle layer counts as a rotation.
fn moves_reference(mv: &Move, size: u16) -> bool {
    match mv.layer {
        Layer::Whole => true,
        Layer::Slice(layer) => size % 2 == 1 && layer == (size - 1) / 2,
    }
}

/// Returns the depth (from the face of the move) of every piece whose
/// coordinate along the move's axis is `±(n-1)`.
fn outer_layer(mv: &Move, signs: Vec3, size: u16) -> u16 {
    if geometry::dot(signs, geometry::normal(mv.axis)) > 0 {
        0
    } else {
        size - 1
    }
}

fn corner_affected_pieces(mv: &Move, group: &PieceGroup, size: u16) -> Vec<usize> {
    let signs = CORNERS[group.key().position];
    match mv.layer {
        Layer::Whole => vec![0],
        Layer::Slice(layer) if layer == outer_layer(mv, signs, size) => vec![0],
        Layer::Slice(_) => vec![],
    }
}

fn edge_affected_pieces(mv: &Move, group: &PieceGroup, size: u16) -> Vec<usize> {
    let signs = EDGES[group.key().position];
    let Layer::Slice(layer) = mv.layer else {
        return (0..group.len()).collect();
    };
    let axis_normal = geometry::normal(mv.axis);
    match signs.iter().position(|&s| s == 0) {
        // The move cuts across the edge and takes exactly one wing.
        Some(free) if axis_normal[free] != 0 => {
            let n = i32::from(size);
            let u = axis_normal[free] * ((n - 1) - 2 * i32::from(layer));
            let index = (u + (n - 1)) / 2 - 1;
            match usize::try_from(index) {
                Ok(i) if i < group.len() => vec![i],
                _ => vec![],
            }
        }
        // The move is parallel to the edge and takes all of it or none of it.
        _ if layer == outer_layer(mv, signs, size) => (0..group.len()).collect(),
        _ => vec![],
    }
}

fn center_affected_pieces(mv: &Move, group: &PieceGroup, size: u16) -> Vec<usize> {
    let Layer::Slice(layer) = mv.layer else {
        return (0..group.len()).collect();
    };
    let face = FACES[group.key().position];
    let n = i32::from(size);
    let m = usize::from(size.saturating_sub(2));

    let axis_normal = geometry::normal(mv.axis);
    let face_normal = geometry::normal(face);
    let along = geometry::dot(axis_normal, face_normal);
    if along != 0 {
        // The move turns this face or the opposite one.
        let touches = if along > 0 {
            layer == 0
        } else {
            i32::from(layer) == n - 1
        };
        return if touches {
            (0..group.len()).collect()
        } else {
            vec![]
        };
    }

    // The move is a slice perpendicular to this face, which takes one row or
    // one column of its centers.
    let (right, down) = geometry::face_frame(face);
    let (s, is_column) = match geometry::dot(right, axis_normal) {
        0 => (geometry::dot(down, axis_normal), false),
        s => (s, true),
    };
    let u = s * ((n - 1) - 2 * i32::from(layer));
    let Ok(line) = usize::try_from((u + (n - 1)) / 2 - 1) else {
        return vec![];
    };
    if line >= m {
        return vec![];
    }
    if is_column {
        (0..m).map(|row| row * m + line).collect()
    } else {
        (0..m).map(|col| line * m + col).collect()
    }
}
