//! Pyraminx notation.
//!
//! - `u`: tip only.
//! - `U`: tip and the layer beneath it.
//! - `3U`: one deeper layer; `1-nU` rotates the whole puzzle.

use itertools::Itertools;
use twisty_core::{Algorithm, Axis, Layer, Move, NotationError};
use twisty_notation::{Features, FlatNode, LayerPrefix};

use crate::notation::{direction_and_count, flatten, suffix};

pub(super) fn parse(s: &str, size: u16) -> Result<Algorithm, NotationError> {
    let mut alg = Algorithm::new();
    for node in flatten(s, Features::LAYERED)? {
        let (layers, family, multiplier) = match node {
            FlatNode::Move {
                layers,
                family,
                multiplier,
            } => (layers, family, multiplier),
            FlatNode::Sq1(m) => return Err(NotationError::Unsupported(m.to_string())),
        };
        let (cw, count) = direction_and_count(multiplier)?;
        let turn = |axis, layer| Move::new(axis, Layer::Slice(layer), cw, count);

        if let Some(axis) = vertex_axis(&family) {
            let Some(prefix) = layers else {
                alg.extend([turn(axis, 0), turn(axis, 1)]);
                continue;
            };
            let range = prefix.layers();
            let (lo, hi) = (*range.start(), *range.end());
            if let Some(&layer) = [lo, hi].iter().find(|&&l| l > size) {
                return Err(NotationError::LayerOutOfRange { layer, size });
            }
            if matches!(prefix, LayerPrefix::Range(..)) && lo == 1 && hi == size {
                alg.push(Move::new(axis, Layer::Whole, cw, count));
            } else if lo > hi {
                return Err(NotationError::Syntax(format!("empty layer range {prefix}")));
            } else {
                alg.extend(range.map(|l| turn(axis, l - 1)));
            }
            continue;
        }

        match tip_axis(&family) {
            Some(_) if layers.is_some() => {
                return Err(NotationError::Unsupported(format!(
                    "{}{family}",
                    layers.map(|l| l.to_string()).unwrap_or_default(),
                )));
            }
            Some(axis) => alg.push(turn(axis, 0)),
            None => return Err(NotationError::UnknownFamily(family.to_string())),
        }
    }
    Ok(alg)
}

pub(super) fn format(alg: &Algorithm, size: u16) -> String {
    alg.iter()
        .map(|mv| {
            let suffix = suffix(mv);
            match mv.layer {
                Layer::Whole => format!("1-{size}{}{suffix}", mv.axis),
                Layer::Slice(0) => format!("{}{suffix}", mv.axis.to_string().to_lowercase()),
                Layer::Slice(layer) => format!("{}{}{suffix}", layer + 1, mv.axis),
            }
        })
        .join(" ")
}

fn vertex_axis(family: &str) -> Option<Axis> {
    match family {
        "U" => Some(Axis::U),
        "L" => Some(Axis::L),
        "R" => Some(Axis::R),
        "B" => Some(Axis::B),
        _ => None,
    }
}

fn tip_axis(family: &str) -> Option<Axis> {
    match family {
        "u" => Some(Axis::U),
        "l" => Some(Axis::L),
        "r" => Some(Axis::R),
        "b" => Some(Axis::B),
        _ => None,
    }
}
