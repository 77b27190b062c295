//! Helpers shared by every puzzle's notation.

use itertools::Itertools;
use twisty_core::{Move, NotationError};
use twisty_notation::{FlatNode, Features, Multiplier};

/// Parses notation and expands every group, commutator, and conjugate.
pub(crate) fn flatten(s: &str, features: Features) -> Result<Vec<FlatNode>, NotationError> {
    let nodes = twisty_notation::parse_notation(s, features)
        .map_err(|errors| NotationError::Syntax(errors.iter().join("; ")))?;
    Ok(nodes.flatten()?)
}

/// Splits a signed multiplier into a direction and a step count.
pub(crate) fn direction_and_count(multiplier: i32) -> Result<(bool, u16), NotationError> {
    let count = u16::try_from(multiplier.unsigned_abs())
        .map_err(|_| NotationError::Multiplier(multiplier))?;
    Ok((multiplier >= 0, count))
}

/// Returns the multiplier suffix for a move, such as `2` or `'`.
pub(crate) fn suffix(mv: &Move) -> Multiplier {
    let count = i32::from(mv.count);
    Multiplier(if mv.clockwise { count } else { -count })
}
