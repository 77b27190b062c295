//! Square-1.
//!
//! Each layer is a ring of 12 angular slots of 30° each. Edges fill one slot
//! and corners fill two, so a layer group has 12 slots indexed by angle and
//! a piece sits in the slot where it starts (clockwise from the cut). The
//! slice cuts through slots 0..6 of both layers, so a slice is blocked while
//! a corner straddles the cut at slot 5 or 11.

mod notation;

use twisty_core::{
    Axis, Color, GroupedPuzzle, Layer, Move, MoveError, Piece, PieceBehavior, PieceGroup,
    PieceType, PuzzleRules,
};

/// Number of angular slots in a layer.
pub const SLOTS: usize = 12;

/// Side colors, clockwise from the front-left seam.
const SIDE_COLORS: [Color; 4] = [Color::Green, Color::Red, Color::Blue, Color::Orange];

/// Position of the top layer's groups.
pub const TOP: usize = 0;
/// Position of the bottom layer's groups.
pub const BOTTOM: usize = 1;

/// Rules for the Square-1.
pub static RULES: PuzzleRules = PuzzleRules {
    name: "Square-1",
    min_size: 1,
    max_size: 1,
    behaviors: &BEHAVIORS,
    axes: &[Axis::Top, Axis::Bottom, Axis::Slash],
    faces: &[(Axis::Top, Color::White), (Axis::Bottom, Color::Yellow)],
    axis_order: |axis| if axis == Axis::Slash { 2 } else { SLOTS as u16 },
    rotate_face: |_, face| face,
    moves_reference: |_, _| false,
    commutes: |a, b| {
        matches!(
            (a.axis, b.axis),
            (Axis::Top, Axis::Bottom) | (Axis::Bottom, Axis::Top)
        )
    },
    check_move,
    parse_algorithm: notation::parse,
    format_algorithm: notation::format,
};

static BEHAVIORS: [PieceBehavior; 3] = [
    PieceBehavior {
        ty: PieceType::Edge,
        position_count: |_| 2,
        piece_count: |_, _| SLOTS,
        create_piece: |size, position, index| {
            (index % 3 == 0).then(|| {
                let colors = [layer_color(position), SIDE_COLORS[index / 3]];
                Piece::new(PieceType::Edge, position, index, colors, size)
            })
        },
        affected_pieces: layer_affected_pieces,
        move_piece: move_layer_piece,
    },
    PieceBehavior {
        ty: PieceType::Corner,
        position_count: |_| 2,
        piece_count: |_, _| SLOTS,
        create_piece: |size, position, index| {
            (index % 3 == 1).then(|| {
                let colors = [
                    layer_color(position),
                    SIDE_COLORS[((index - 1) / 3) % 4],
                    SIDE_COLORS[((index + 2) / 3) % 4],
                ];
                Piece::new(PieceType::Corner, position, index, colors, size)
            })
        },
        affected_pieces: layer_affected_pieces,
        move_piece: move_layer_piece,
    },
    PieceBehavior {
        ty: PieceType::Middle,
        position_count: |_| 1,
        piece_count: |_, _| 2,
        create_piece: |size, position, index| {
            let colors = [SIDE_COLORS[2 * index], SIDE_COLORS[2 * index + 1]];
            Some(Piece::new(PieceType::Middle, position, index, colors, size))
        },
        // Only the half on the slice side flips.
        affected_pieces: |mv, _, _| {
            if mv.axis == Axis::Slash {
                vec![1]
            } else {
                vec![]
            }
        },
        move_piece: |_, piece| piece.colors.swap(0, 1),
    },
];

fn layer_color(position: usize) -> Color {
    if position == TOP {
        Color::White
    } else {
        Color::Yellow
    }
}

/// Returns the number of slots a piece fills.
pub fn width(ty: PieceType) -> usize {
    if ty == PieceType::Corner { 2 } else { 1 }
}

/// Returns whether a piece starting at `index` lies entirely on the slice
/// side of the cut.
fn in_slice(index: usize, width: usize) -> bool {
    index + width <= SLOTS / 2
}

fn layer_affected_pieces(mv: &Move, group: &PieceGroup, _size: u16) -> Vec<usize> {
    let position = group.key().position;
    let occupied = group
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_some())
        .map(|(i, _)| i);
    match mv.axis {
        Axis::Top if position == TOP => occupied.collect(),
        Axis::Bottom if position == BOTTOM => occupied.collect(),
        Axis::Slash => {
            let w = width(group.key().ty);
            occupied.filter(|&i| in_slice(i, w)).collect()
        }
        _ => vec![],
    }
}

fn move_layer_piece(mv: &Move, piece: &mut Piece) {
    match mv.axis {
        Axis::Top => piece.index = (piece.index + SLOTS - 1) % SLOTS,
        Axis::Bottom => piece.index = (piece.index + 1) % SLOTS,
        Axis::Slash => {
            let w = width(piece.ty);
            piece.position = 1 - piece.position;
            piece.index = SLOTS / 2 - piece.index - w;
            if piece.ty == PieceType::Corner {
                piece.colors.swap(1, 2);
            }
        }
        _ => (),
    }
}

/// Returns whether a corner straddles the cut in the layer at `position`.
pub fn is_locked(puzzle: &GroupedPuzzle, position: usize) -> bool {
    [5, 11]
        .into_iter()
        .any(|i| puzzle.get_piece(PieceType::Corner, position, i).is_some())
}

fn check_move(puzzle: &GroupedPuzzle, mv: &Move) -> Result<(), MoveError> {
    if mv.layer == Layer::Whole {
        return Err(MoveError::NoRotations {
            puzzle: puzzle.rules().name,
        });
    }
    puzzle.rules().check_move_shape(mv, 1)?;
    if mv.axis == Axis::Slash
        && mv.unit_steps(2) != 0
        && (is_locked(puzzle, TOP) || is_locked(puzzle, BOTTOM))
    {
        return Err(MoveError::Blocked(*mv));
    }
    Ok(())
}
