//! Square-1 notation: `(t,b)` turns the top and bottom layers by multiples
//! of 30° and `/` turns the slice.

use twisty_core::{Algorithm, Axis, Layer, Move, NotationError};
use twisty_notation::{Features, FlatNode, NodeList, Sq1Move};

use super::SLOTS;
use crate::notation::{direction_and_count, flatten};

pub(super) fn parse(s: &str, _size: u16) -> Result<Algorithm, NotationError> {
    let mut alg = Algorithm::new();
    for node in flatten(s, Features::SQ1)? {
        match node {
            FlatNode::Sq1(Sq1Move::UD { u, d }) => {
                for (axis, amount) in [(Axis::Top, u), (Axis::Bottom, d)] {
                    if amount != 0 {
                        let (cw, count) = direction_and_count(amount)?;
                        alg.push(Move::new(axis, Layer::Slice(0), cw, count));
                    }
                }
            }
            FlatNode::Sq1(Sq1Move::Slash) => alg.push(Move::turn(Axis::Slash, 0, true)),
            FlatNode::Move { family, .. } => {
                return Err(NotationError::UnknownFamily(family.to_string()));
            }
        }
    }
    Ok(alg)
}

pub(super) fn format(alg: &Algorithm, _size: u16) -> String {
    // Amounts of a full turn or more would not parse back.
    let signed = |mv: &Move| {
        let order = SLOTS as u16;
        let mv = if mv.count < order {
            *mv
        } else {
            mv.with_steps(mv.unit_steps(order), order)
        };
        let count = i32::from(mv.count);
        if mv.clockwise { count } else { -count }
    };

    let mut nodes = NodeList::new();
    let mut moves = alg.iter().peekable();
    while let Some(mv) = moves.next() {
        match mv.axis {
            Axis::Top => {
                let d = moves
                    .next_if(|next| next.axis == Axis::Bottom)
                    .map_or(0, signed);
                let u = signed(mv);
                if (u, d) != (0, 0) {
                    nodes.push(Sq1Move::UD { u, d }.into());
                }
            }
            Axis::Bottom if signed(mv) != 0 => {
                nodes.push(Sq1Move::UD { u: 0, d: signed(mv) }.into());
            }
            Axis::Bottom => (),
            _ => {
                for _ in 0..mv.unit_steps(2) {
                    nodes.push(Sq1Move::Slash.into());
                }
            }
        }
    }
    nodes.to_string()
}
