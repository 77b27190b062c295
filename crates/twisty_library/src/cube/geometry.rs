//! Coordinates of cube pieces.
//!
//! Positions are measured in doubled coordinates: on an NxN cube, the
//! center of layer `k` from a face lies at `(n-1) - 2k` along that face's
//! normal. This keeps every piece center on an integer lattice for both odd
//! and even sizes.

use smallvec::SmallVec;
use twisty_core::{Axis, Color, Piece, PieceType};

/// Integer 3D vector.
pub type Vec3 = [i32; 3];

/// Faces in the order used for center positions.
pub const FACES: [Axis; 6] = [Axis::U, Axis::F, Axis::R, Axis::B, Axis::L, Axis::D];

/// Corner positions as signs of their coordinates.
pub const CORNERS: [Vec3; 8] = [
    [1, 1, 1],
    [-1, 1, 1],
    [-1, 1, -1],
    [1, 1, -1],
    [1, -1, 1],
    [-1, -1, 1],
    [-1, -1, -1],
    [1, -1, -1],
];

/// Edge positions as signs of their coordinates. The zero component is the
/// axis along which the wings of the edge are spread.
pub const EDGES: [Vec3; 12] = [
    [0, 1, 1],
    [-1, 1, 0],
    [0, 1, -1],
    [1, 1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [-1, 0, -1],
    [1, 0, -1],
    [0, -1, 1],
    [-1, -1, 0],
    [0, -1, -1],
    [1, -1, 0],
];

/// Order in which the stickers of a corner or edge are listed: Y, then Z,
/// then X.
const FACELET_AXIS_ORDER: [usize; 3] = [1, 2, 0];

/// Returns the outward normal of a face.
pub fn normal(face: Axis) -> Vec3 {
    match face {
        Axis::R => [1, 0, 0],
        Axis::L => [-1, 0, 0],
        Axis::U => [0, 1, 0],
        Axis::D => [0, -1, 0],
        Axis::F => [0, 0, 1],
        Axis::B => [0, 0, -1],
        Axis::Top | Axis::Bottom | Axis::Slash => [0, 0, 0],
    }
}

/// Returns the face with a given outward normal.
pub fn face_of_dir(v: Vec3) -> Option<Axis> {
    FACES.into_iter().find(|&f| normal(f) == v)
}

/// Returns the face opposite `face`.
pub fn opposite(face: Axis) -> Axis {
    match face {
        Axis::R => Axis::L,
        Axis::L => Axis::R,
        Axis::U => Axis::D,
        Axis::D => Axis::U,
        Axis::F => Axis::B,
        Axis::B => Axis::F,
        other => other,
    }
}

/// Returns the index of a face in [`FACES`].
pub fn face_position(face: Axis) -> usize {
    FACES.iter().position(|&f| f == face).unwrap_or(0)
}

/// Returns the color of a face on a solved cube.
pub fn face_color(face: Axis) -> Color {
    match face {
        Axis::U => Color::White,
        Axis::D => Color::Yellow,
        Axis::F => Color::Green,
        Axis::B => Color::Blue,
        Axis::R => Color::Red,
        Axis::L => Color::Orange,
        Axis::Top | Axis::Bottom | Axis::Slash => Color::White,
    }
}

/// Returns the `(right, down)` directions of a face as seen from outside
/// the cube, which define the row-major order of its centers.
pub fn face_frame(face: Axis) -> (Vec3, Vec3) {
    match face {
        Axis::U => ([1, 0, 0], [0, 0, 1]),
        Axis::F => ([1, 0, 0], [0, -1, 0]),
        Axis::R => ([0, 0, -1], [0, -1, 0]),
        Axis::B => ([-1, 0, 0], [0, -1, 0]),
        Axis::L => ([0, 0, 1], [0, -1, 0]),
        Axis::D => ([1, 0, 0], [0, 0, -1]),
        Axis::Top | Axis::Bottom | Axis::Slash => ([0, 0, 0], [0, 0, 0]),
    }
}

/// Dot product.
pub fn dot(a: Vec3, b: Vec3) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Rotates a vector one quarter turn clockwise, as seen from outside
/// `face`.
pub fn rot_cw(face: Axis, [x, y, z]: Vec3) -> Vec3 {
    match face {
        Axis::R => [x, z, -y],
        Axis::L => [x, -z, y],
        Axis::U => [-z, y, x],
        Axis::D => [z, y, -x],
        Axis::F => [y, -x, z],
        Axis::B => [-y, x, z],
        Axis::Top | Axis::Bottom | Axis::Slash => [x, y, z],
    }
}

/// Returns the outward direction of each sticker of a corner or edge, in
/// facelet order.
pub fn facelet_dirs(signs: Vec3) -> SmallVec<[Vec3; 3]> {
    FACELET_AXIS_ORDER
        .into_iter()
        .filter(|&a| signs[a] != 0)
        .map(|a| {
            let mut d = [0; 3];
            d[a] = signs[a];
            d
        })
        .collect()
}

/// Returns the faces that the stickers of a corner or edge face, in facelet
/// order.
pub fn facelet_faces(signs: Vec3) -> SmallVec<[Axis; 3]> {
    facelet_dirs(signs)
        .into_iter()
        .filter_map(face_of_dir)
        .collect()
}

/// Converts a 0-based slot along an edge or face into a doubled
/// coordinate.
fn slot_to_coord(slot: usize, n: i32) -> i32 {
    2 * (slot as i32 + 1) - (n - 1)
}

/// Converts a doubled coordinate into a 0-based slot along an edge or face.
fn coord_to_slot(u: i32, n: i32) -> Option<usize> {
    let slot = (u + (n - 1)) / 2 - 1;
    usize::try_from(slot).ok()
}

/// Like [`coord_to_slot()`], for coordinates that must lie inside a face.
fn slot_of_coord(u: i32, n: i32) -> usize {
    coord_to_slot(u, n)
        .unwrap_or_else(|| unreachable!("coordinate {u} is outside a {n}-layer face"))
}

/// Returns the doubled coordinates of a piece's center.
pub fn coord(piece: &Piece) -> Vec3 {
    let n = i32::from(piece.puzzle_size);
    match piece.ty {
        PieceType::Corner => CORNERS[piece.position].map(|s| s * (n - 1)),
        PieceType::Edge => {
            let u = slot_to_coord(piece.index, n);
            EDGES[piece.position].map(|s| if s == 0 { u } else { s * (n - 1) })
        }
        _ => {
            let m = (n - 2).max(1) as usize;
            let face = FACES[piece.position];
            let (row, col) = (piece.index / m, piece.index % m);
            let (right, down) = face_frame(face);
            let nr = normal(face);
            let (cu, ru) = (slot_to_coord(col, n), slot_to_coord(row, n));
            std::array::from_fn(|i| nr[i] * (n - 1) + right[i] * cu + down[i] * ru)
        }
    }
}

/// Returns the layer of `face` that contains a piece, counting from 0 at
/// `face` itself.
pub fn layer(piece: &Piece, face: Axis) -> u16 {
    let n = i32::from(piece.puzzle_size);
    let depth = ((n - 1) - dot(coord(piece), normal(face))) / 2;
    depth.clamp(0, n - 1) as u16
}

/// Recolors a corner or edge after a rotation, given its old and new
/// coordinate signs.
fn rotated_colors(face: Axis, old_signs: Vec3, new_signs: Vec3, piece: &mut Piece) {
    let old_dirs = facelet_dirs(old_signs);
    let new_colors = facelet_dirs(new_signs)
        .into_iter()
        .filter_map(|d| {
            let j = old_dirs.iter().position(|&o| rot_cw(face, o) == d)?;
            piece.colors.get(j).copied()
        })
        .collect();
    piece.colors = new_colors;
}

/// Rotates a piece one quarter turn clockwise around `face`, regardless of
/// which layer it is in.
pub fn turn_piece(face: Axis, piece: &mut Piece) {
    let n = i32::from(piece.puzzle_size);
    let c = rot_cw(face, coord(piece));
    match piece.ty {
        PieceType::Corner => {
            let signs = c.map(|v| v.signum());
            let Some(new_position) = CORNERS.iter().position(|&s| s == signs) else {
                unreachable!("{piece} turned off the corners");
            };
            rotated_colors(face, CORNERS[piece.position], signs, piece);
            piece.position = new_position;
        }
        PieceType::Edge => {
            let signs = c.map(|v| if v.abs() == n - 1 { v.signum() } else { 0 });
            let Some(new_position) = EDGES.iter().position(|&s| s == signs) else {
                unreachable!("{piece} turned off the edges");
            };
            let Some(free) = signs.iter().position(|&s| s == 0) else {
                unreachable!("edge slot {new_position} has no free axis");
            };
            rotated_colors(face, EDGES[piece.position], signs, piece);
            piece.position = new_position;
            piece.index = slot_of_coord(c[free], n);
        }
        _ => {
            let Some(new_face) = face_of_dir(rot_cw(face, normal(FACES[piece.position]))) else {
                unreachable!("{piece} turned off the faces");
            };
            let (right, down) = face_frame(new_face);
            let m = (n - 2).max(1) as usize;
            let col = slot_of_coord(dot(c, right), n);
            let row = slot_of_coord(dot(c, down), n);
            piece.position = face_position(new_face);
            piece.index = row * m + col;
        }
    }
}
