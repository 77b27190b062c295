//! Notation structures.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::common::{BinaryGroupKind, Multiplier, Sq1Move};
use crate::{Features, InvertError, LayerPrefix, Str, SyntaxError};

/// Parses notation such as `R U2 [r, U]` with the given features enabled.
pub fn parse_notation(s: &str, features: Features) -> Result<NodeList, Vec<SyntaxError>> {
    crate::parse::parse_notation(s, features)
}

/// Sequence of nodes, as written.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct NodeList(pub Vec<Node>);

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev: Option<&Node> = None;
        for node in &self.0 {
            // Square-1 moves are conventionally written without spaces:
            // `(1,0)/(-1,0)/`
            if let Some(prev) = prev
                && !(prev.is_sq1() || node.is_sq1())
            {
                write!(f, " ")?;
            }
            write!(f, "{node}")?;
            prev = Some(node);
        }
        Ok(())
    }
}

impl Deref for NodeList {
    type Target = Vec<Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NodeList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Node> for NodeList {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl NodeList {
    /// Returns an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the list that undoes this one: each node inverted, last
    /// node first.
    pub fn inv(&self) -> Result<Self, InvertError> {
        self.0
            .iter()
            .rev()
            .map(|n| n.inv())
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// Expands groups, commutators, conjugates, and group multipliers into a
    /// flat sequence of moves.
    pub fn flatten(&self) -> Result<Vec<FlatNode>, InvertError> {
        let mut out = vec![];
        self.flatten_into(&mut out)?;
        Ok(out)
    }

    fn flatten_into(&self, out: &mut Vec<FlatNode>) -> Result<(), InvertError> {
        for node in &self.0 {
            match node {
                Node::RepeatedNode { inner, multiplier } => match inner {
                    RepeatableNode::Move(mv) => out.push(FlatNode::Move {
                        layers: mv.layers,
                        family: mv.family.clone(),
                        multiplier: multiplier.0,
                    }),
                    RepeatableNode::Group(contents) => {
                        contents.flatten_repeated(*multiplier, out)?;
                    }
                    RepeatableNode::BinaryGroup { kind, contents } => {
                        let [a, b] = contents;
                        kind.expand(a, b)?.flatten_repeated(*multiplier, out)?;
                    }
                },
                Node::Sq1Move(sq1_move) => out.push(FlatNode::Sq1(*sq1_move)),
            }
        }
        Ok(())
    }

    fn flatten_repeated(
        &self,
        multiplier: Multiplier,
        out: &mut Vec<FlatNode>,
    ) -> Result<(), InvertError> {
        let body = if multiplier.0 < 0 {
            self.inv()?
        } else {
            self.clone()
        };
        for _ in 0..multiplier.0.unsigned_abs() {
            body.flatten_into(out)?;
        }
        Ok(())
    }
}

/// One element of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Move, group, or bracketed group with its multiplier.
    RepeatedNode {
        /// What is repeated.
        inner: RepeatableNode,
        /// How many times, with `'` for negative.
        multiplier: Multiplier,
    },
    /// Square-1 move.
    Sq1Move(Sq1Move),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::RepeatedNode { inner, multiplier } => write!(f, "{inner}{multiplier}"),
            Node::Sq1Move(sq1_move) => write!(f, "{sq1_move}"),
        }
    }
}

impl From<RepeatableNode> for Node {
    fn from(value: RepeatableNode) -> Self {
        value.with_multiplier(1)
    }
}

impl From<Sq1Move> for Node {
    fn from(value: Sq1Move) -> Self {
        Self::Sq1Move(value)
    }
}

impl Node {
    /// Returns the node with its multiplier negated.
    pub fn inv(&self) -> Result<Self, InvertError> {
        match self {
            Node::RepeatedNode { inner, multiplier } => {
                Ok(inner.clone().with_multiplier(multiplier.inv()?))
            }
            Node::Sq1Move(sq1_move) => Ok(Node::Sq1Move(sq1_move.inv()?)),
        }
    }

    fn is_sq1(&self) -> bool {
        matches!(self, Node::Sq1Move(_))
    }
}

/// Element that may take a multiplier suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepeatableNode {
    /// Move, such as `R` or `3Fw` or `2-4U`.
    Move(Move),
    /// `(...)`
    Group(NodeList),
    /// `[A, B]` or `[A: B]`.
    BinaryGroup {
        /// Kind of group.
        kind: BinaryGroupKind,
        /// `A` and `B`.
        contents: [NodeList; 2],
    },
}

impl fmt::Display for RepeatableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatableNode::Move(mv) => write!(f, "{mv}"),
            RepeatableNode::Group(contents) => write!(f, "({contents})"),
            RepeatableNode::BinaryGroup { kind, contents } => {
                let [a, b] = contents;
                write!(f, "[{a}{} {b}]", kind.separator())
            }
        }
    }
}

impl From<Move> for RepeatableNode {
    fn from(value: Move) -> Self {
        Self::Move(value)
    }
}

impl RepeatableNode {
    /// Attaches a multiplier.
    pub fn with_multiplier(self, multiplier: impl Into<Multiplier>) -> Node {
        Node::RepeatedNode {
            inner: self,
            multiplier: multiplier.into(),
        }
    }
}

/// Move containing an optional layer prefix and a family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Layer prefix, if any.
    pub layers: Option<LayerPrefix>,
    /// Move family, such as `R`, `x`, or `M`. Never empty.
    pub family: Str,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(layers) = self.layers {
            write!(f, "{layers}")?;
        }
        write!(f, "{}", self.family)
    }
}

impl Move {
    /// Constructs a move with no layer prefix.
    pub fn new(family: &str) -> Self {
        Self {
            layers: None,
            family: family.into(),
        }
    }

    /// Attaches a multiplier to the move.
    pub fn with_multiplier(self, multiplier: impl Into<Multiplier>) -> Node {
        RepeatableNode::from(self).with_multiplier(multiplier)
    }
}

/// Single move after expanding every group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlatNode {
    /// Move with its own multiplier.
    Move {
        /// Layer prefix, if any.
        layers: Option<LayerPrefix>,
        /// Move family.
        family: Str,
        /// Signed repeat count; negative means counterclockwise.
        multiplier: i32,
    },
    /// Square-1 move.
    Sq1(Sq1Move),
}
