//! Cube notation.
//!
//! - `R`, `3R`: single layer, counted from the named face.
//! - `2-3R`: each layer in the range; `1-nR` is a whole-cube rotation.
//! - `x`, `y`, `z`: rotations around `R`, `U`, and `F`.
//! - `M`, `E`, `S`: middle slices, following `L`, `D`, and `F`.
//! - `r`, `l`, etc.: every layer except the opposite face.

use itertools::Itertools;
use twisty_core::{Algorithm, Axis, Layer, Move, NotationError};
use twisty_notation::{Features, FlatNode, LayerPrefix};

use super::geometry::opposite;
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
        let rotation = |axis, clockwise| Move::new(axis, Layer::Whole, clockwise, count);

        if let Some(axis) = face_axis(&family) {
            match layers {
                None => alg.push(turn(axis, 0)),
                Some(prefix) => {
                    let range = prefix.layers();
                    let (lo, hi) = (*range.start(), *range.end());
                    for l in [lo, hi] {
                        if l > size {
                            return Err(NotationError::LayerOutOfRange { layer: l, size });
                        }
                    }
                    if matches!(prefix, LayerPrefix::Range(..)) && lo == 1 && hi == size {
                        alg.push(rotation(axis, cw));
                    } else if lo > hi {
                        return Err(NotationError::Syntax(format!("empty layer range {prefix}")));
                    } else {
                        alg.extend(range.map(|l| turn(axis, l - 1)));
                    }
                }
            }
            continue;
        }

        if let Some(prefix) = layers {
            return Err(NotationError::Unsupported(format!("{prefix}{family}")));
        }
        match family.as_str() {
            "x" => alg.push(rotation(Axis::R, cw)),
            "y" => alg.push(rotation(Axis::U, cw)),
            "z" => alg.push(rotation(Axis::F, cw)),
            "M" => alg.extend([
                rotation(Axis::R, !cw),
                turn(Axis::R, 0),
                turn(Axis::L, 0).inverse(),
            ]),
            "E" => alg.extend([
                rotation(Axis::U, !cw),
                turn(Axis::U, 0),
                turn(Axis::D, 0).inverse(),
            ]),
            "S" => alg.extend([
                rotation(Axis::F, cw),
                turn(Axis::F, 0).inverse(),
                turn(Axis::B, 0),
            ]),
            other => match wide_axis(other) {
                Some(axis) => alg.extend([rotation(axis, cw), turn(opposite(axis), 0)]),
                None => return Err(NotationError::UnknownFamily(other.to_owned())),
            },
        }
    }
    Ok(alg)
}

pub(super) fn format(alg: &Algorithm, size: u16) -> String {
    alg.iter()
        .map(|mv| {
            let suffix = suffix(mv);
            match mv.layer {
                Layer::Whole => match mv.axis {
                    Axis::R => format!("x{suffix}"),
                    Axis::U => format!("y{suffix}"),
                    Axis::F => format!("z{suffix}"),
                    axis => format!("1-{size}{axis}{suffix}"),
                },
                Layer::Slice(0) => format!("{}{suffix}", mv.axis),
                Layer::Slice(layer) => format!("{}{}{suffix}", layer + 1, mv.axis),
            }
        })
        .join(" ")
}

fn face_axis(family: &str) -> Option<Axis> {
    match family {
        "R" => Some(Axis::R),
        "L" => Some(Axis::L),
        "U" => Some(Axis::U),
        "D" => Some(Axis::D),
        "F" => Some(Axis::F),
        "B" => Some(Axis::B),
        _ => None,
    }
}

fn wide_axis(family: &str) -> Option<Axis> {
    if !family.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    face_axis(&family.to_ascii_uppercase())
}
