use std::ops::{Deref, DerefMut};

use crate::{Move, PuzzleRules};

/// Ordered sequence of moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Algorithm(pub Vec<Move>);

impl Deref for Algorithm {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Algorithm {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(value: Vec<Move>) -> Self {
        Self(value)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Extend<Move> for Algorithm {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl Algorithm {
    /// Constructs an empty algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every move of `other`.
    pub fn append(&mut self, other: &Algorithm) {
        self.0.extend_from_slice(&other.0);
    }

    /// Returns the algorithm that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Returns the algorithm repeated `n` times.
    #[must_use]
    pub fn repeated(&self, n: usize) -> Self {
        let mut ret = Self(Vec::with_capacity(self.len() * n));
        for _ in 0..n {
            ret.append(self);
        }
        ret
    }

    /// Returns an equivalent algorithm in which moves of the same axis and
    /// layer are merged.
    ///
    /// Each move is merged with the most recent move on the same axis and
    /// layer, looking back past moves that commute with it. Moves that
    /// cancel out are removed and the rest are written in their shortest
    /// direction.
    #[must_use]
    pub fn simplify(&self, rules: &PuzzleRules) -> Self {
        let mut out: Vec<Move> = vec![];
        for &m in &self.0 {
            let order = (rules.axis_order)(m.axis).max(1);
            let mut merged = false;
            for j in (0..out.len()).rev() {
                let prev = out[j];
                if prev.axis == m.axis && prev.layer == m.layer {
                    let steps = prev.unit_steps(order) + m.unit_steps(order);
                    if steps % order == 0 {
                        out.remove(j);
                    } else {
                        out[j] = prev.with_steps(steps, order);
                    }
                    merged = true;
                    break;
                }
                if !(rules.commutes)(&prev, &m) {
                    break;
                }
            }
            if !merged && m.unit_steps(order) != 0 {
                out.push(m.with_steps(m.unit_steps(order), order));
            }
        }
        Self(out)
    }
}
