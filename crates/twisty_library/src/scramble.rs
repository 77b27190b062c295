//! Reproducible random scrambles.

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;
use twisty_core::{Algorithm, Axis, GroupedPuzzle, Layer, Move, MoveError};

use crate::PuzzleKind;
use crate::square1::{self, BOTTOM, TOP};

/// Parameters to deterministically generate a move sequence to scramble a
/// puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Type of scramble to generate.
    pub ty: ScrambleType,
    /// Random seed. The same seed always produces the same scramble.
    pub seed: String,
}

impl ScrambleParams {
    /// Constructs parameters for a full scramble from a random seed.
    pub fn new(ty: ScrambleType) -> Self {
        Self {
            ty,
            seed: rand::rng().random::<u64>().to_string(),
        }
    }

    /// Constructs parameters from a fixed seed.
    pub fn with_seed(ty: ScrambleType, seed: impl Into<String>) -> Self {
        Self {
            ty,
            seed: seed.into(),
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let mut seed = [0; 32];
        seed.copy_from_slice(&sha256.finalize());
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }
}

/// Type of scramble to generate.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScrambleType {
    /// Full scramble.
    Full,
    /// Partial scramble of a specific number of moves (or, on the Square-1,
    /// slashes).
    Partial(u32),
}

/// Returns the number of random moves in a full scramble.
pub fn full_scramble_length(kind: PuzzleKind, size: u16) -> u32 {
    let n = u32::from(size);
    match kind {
        PuzzleKind::Cube if n <= 2 => 15,
        PuzzleKind::Cube => 20 * (n - 2),
        PuzzleKind::Pyraminx => 15 + 5 * n.saturating_sub(3),
        PuzzleKind::Square1 => 20,
    }
}

/// Scrambles a puzzle in place and returns the moves applied.
///
/// Cubes and Pyraminxes get random layer turns. The Square-1 gets random
/// `(t,b)` turns, each followed by a slash once any lock has been repaired.
pub fn scramble(
    puzzle: &mut GroupedPuzzle,
    params: &ScrambleParams,
) -> Result<Algorithm, MoveError> {
    let kind = PuzzleKind::from_rules(puzzle.rules());
    let length = match params.ty {
        ScrambleType::Full => kind.map_or(20, |k| full_scramble_length(k, puzzle.size())),
        ScrambleType::Partial(n) => n,
    };
    log::debug!(
        "scrambling {} size {} with {length} moves",
        puzzle.rules().name,
        puzzle.size(),
    );

    let mut rng = params.rng();
    let mut moves = Algorithm::new();
    for _ in 0..length {
        if kind == Some(PuzzleKind::Square1) {
            for mv in random_square1_turns(&mut rng) {
                puzzle.try_make_move(mv)?;
                moves.push(mv);
            }
            moves.extend(unlock(puzzle)?);
            let slash = Move::turn(Axis::Slash, 0, true);
            puzzle.try_make_move(slash)?;
            moves.push(slash);
        } else {
            let axes = puzzle.rules().axes;
            let axis = axes[rng.random_range(0..axes.len())];
            let layer = rng.random_range(0..puzzle.size());
            let mv = Move::turn(axis, layer, rng.random());
            puzzle.try_make_move(mv)?;
            moves.push(mv);
        }
    }
    Ok(moves)
}

fn random_square1_turns(rng: &mut impl Rng) -> Vec<Move> {
    [Axis::Top, Axis::Bottom]
        .into_iter()
        .filter_map(|axis| {
            let count = rng.random_range(0..=6_u16);
            let clockwise = rng.random();
            (count != 0).then_some(Move::new(axis, Layer::Slice(0), clockwise, count))
        })
        .collect()
}

/// Turns each layer of a Square-1 one step at a time until the slice is
/// free.
pub(crate) fn unlock(puzzle: &mut GroupedPuzzle) -> Result<Vec<Move>, MoveError> {
    let mut ret = vec![];
    for (axis, position) in [(Axis::Top, TOP), (Axis::Bottom, BOTTOM)] {
        for _ in 0..square1::SLOTS {
            if !square1::is_locked(puzzle, position) {
                break;
            }
            let mv = Move::turn(axis, 0, true);
            puzzle.try_make_move(mv)?;
            ret.push(mv);
        }
    }
    Ok(ret)
}
