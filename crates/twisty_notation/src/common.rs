//! Structures shared by every node type.

use std::fmt;
use std::str::FromStr;

use crate::{InvertError, NodeList};

/// Kind of binary group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum BinaryGroupKind {
    /// `[A, B]`, meaning `A B A' B'`.
    Commutator,
    /// `[A: B]`, meaning `A B A'`.
    Conjugate,
}

impl BinaryGroupKind {
    /// Returns the character between `A` and `B`.
    pub fn separator(self) -> char {
        match self {
            BinaryGroupKind::Commutator => ',',
            BinaryGroupKind::Conjugate => ':',
        }
    }

    /// Expands the group `[a, b]` or `[a: b]` into a plain list of nodes.
    pub fn expand(self, a: &NodeList, b: &NodeList) -> Result<NodeList, InvertError> {
        let mut ret = a.clone();
        ret.extend(b.iter().cloned());
        ret.extend(a.inv()?.0);
        if self == BinaryGroupKind::Commutator {
            ret.extend(b.inv()?.0);
        }
        Ok(ret)
    }
}

/// Square-1 move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Sq1Move {
    /// `(u,d)`, turning the top and bottom layers.
    ///
    /// Example: `(1,-3)`
    UD {
        /// Top layer amount in twelfths of a turn, clockwise seen from above.
        #[cfg_attr(test, proptest(strategy = "-11..=11_i32"))]
        u: i32,
        /// Bottom layer amount in twelfths of a turn, clockwise seen from
        /// below.
        #[cfg_attr(test, proptest(strategy = "-11..=11_i32"))]
        d: i32,
    },
    /// `/`, a half turn of the right half of the puzzle.
    Slash,
}

impl fmt::Display for Sq1Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UD { u, d } => write!(f, "({u},{d})"),
            Self::Slash => write!(f, "/"),
        }
    }
}

impl Sq1Move {
    /// Returns the move that undoes this one.
    pub fn inv(self) -> Result<Self, InvertError> {
        match self {
            Sq1Move::UD { u, d } => {
                let neg = |x: i32| x.checked_neg().ok_or(InvertError::IntegerOverflow);
                Ok(Sq1Move::UD {
                    u: neg(u)?,
                    d: neg(d)?,
                })
            }
            Sq1Move::Slash => Ok(self),
        }
    }
}

/// Repeat count written after a move, such as `2` or `3'`.
///
/// `Multiplier(1)` is written as nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Multiplier(#[cfg_attr(test, proptest(strategy = "-99..=99_i32"))] pub i32);

impl Default for Multiplier {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // widen to avoid overflow on `i32::MIN`
        let abs = i64::from(self.0).abs();
        if abs != 1 {
            write!(f, "{abs}")?;
        }
        if self.0 < 0 {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl From<i32> for Multiplier {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for Multiplier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, negate) = match s.strip_suffix('\'') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let abs = if digits.is_empty() {
            1
        } else {
            i32::try_from(digits.parse::<u32>().map_err(|_| ())?).map_err(|_| ())?
        };
        if negate {
            abs.checked_neg().map(Self).ok_or(())
        } else {
            Ok(Self(abs))
        }
    }
}

impl Multiplier {
    /// Returns the negated multiplier.
    pub fn inv(self) -> Result<Multiplier, InvertError> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or(InvertError::IntegerOverflow)
    }
}
