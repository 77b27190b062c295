use chumsky::prelude::*;

use crate::node::*;
use crate::{
    BinaryGroupKind, Features, Layer, LayerPrefix, Multiplier, Sq1Move, Str, SyntaxError,
};

type Extra<'src> = extra::Full<Rich<'src, char, SimpleSpan>, extra::SimpleState<()>, Features>;

/// Shorthand for a notation parser over `&str` with [`Features`] as context.
trait Notation<'src, O>: Clone + Parser<'src, &'src str, O, Extra<'src>> {}
impl<'src, O, T: Clone + Parser<'src, &'src str, O, Extra<'src>>> Notation<'src, O> for T {}

pub(crate) fn parse_notation(s: &str, features: Features) -> Result<NodeList, Vec<SyntaxError>> {
    nodes_with_features(features)
        .parse(s)
        .into_result()
        .map_err(|errors| errors.into_iter().map(SyntaxError::from).collect())
}

impl From<Rich<'_, char, SimpleSpan>> for SyntaxError {
    fn from(e: Rich<'_, char, SimpleSpan>) -> Self {
        Self {
            span: e.span().into_range(),
            message: e.to_string(),
        }
    }
}

fn nodes_with_features<'src>(features: Features) -> impl Notation<'src, NodeList> {
    nodes().with_ctx(features)
}

fn nodes<'src>() -> impl Notation<'src, NodeList> {
    recursive(|nodes| {
        let separator = choice((
            just(',').to(BinaryGroupKind::Commutator),
            just(':').to(BinaryGroupKind::Conjugate),
        ));
        let bracketed = nodes
            .clone()
            .then(separator)
            .then(nodes.clone())
            .delimited_by(just('['), just(']'))
            .map(|((a, kind), b)| RepeatableNode::BinaryGroup {
                kind,
                contents: [a, b],
            })
            .labelled("commutator or conjugate");

        let parenthesized = nodes
            .delimited_by(just('('), just(')'))
            .map(RepeatableNode::Group)
            .labelled("group");

        let single_move = layers()
            .or_not()
            .then(family())
            .map(|(layers, family)| RepeatableNode::Move(Move { layers, family }))
            .labelled("move");

        let repeated = choice((parenthesized, bracketed, single_move))
            .then(multiplier())
            .map(|(inner, multiplier)| Node::RepeatedNode { inner, multiplier });

        // `(1,0)/(-1,0)/` has no spaces, so whitespace between nodes is
        // optional.
        choice((repeated, sq1_move().map(Node::Sq1Move)))
            .separated_by(text::whitespace())
            .collect()
            .padded()
            .map(NodeList)
    })
}

fn sq1_move<'src>() -> impl Notation<'src, Sq1Move> {
    let amount = || {
        just('-')
            .or_not()
            .then(digits())
            .try_map(|(minus, n), span| {
                let n = if minus.is_some() { -i32::from(n) } else { i32::from(n) };
                if n.abs() >= 12 {
                    return Err(Rich::custom(span, format!("Square-1 amount {n} out of range")));
                }
                Ok(n)
            })
            .padded()
    };
    let turn = amount()
        .then_ignore(just(','))
        .then(amount())
        .delimited_by(just('('), just(')'))
        .map(|(u, d)| Sq1Move::UD { u, d });

    choice((just('/').to(Sq1Move::Slash), turn))
        .labelled("Square-1 move")
        .contextual()
        .configure(|_, features: &Features| features.sq1)
}

fn family<'src>() -> impl Notation<'src, Str> {
    any()
        .filter(|&c| crate::charsets::is_family_char(c))
        .repeated()
        .at_least(1)
        .to_slice()
        .map(Str::from)
}

fn layers<'src>() -> impl Notation<'src, LayerPrefix> {
    let layer = || {
        digits().try_map(|n, span| {
            Layer::new(n).ok_or_else(|| Rich::custom(span, "layer number cannot be zero"))
        })
    };
    let range = layer()
        .then_ignore(just('-'))
        .then(layer())
        .map(|(lo, hi)| LayerPrefix::Range(lo, hi))
        .contextual()
        .configure(|_, features: &Features| features.layer_ranges);

    choice((range, layer().map(LayerPrefix::Single)))
}

fn multiplier<'src>() -> impl Notation<'src, Multiplier> {
    digits()
        .or_not()
        .then(just('\'').or_not())
        .map(|(n, prime)| {
            let n = i32::from(n.unwrap_or(1));
            Multiplier(if prime.is_some() { -n } else { n })
        })
}

/// Decimal number, leading zeros allowed.
fn digits<'src>() -> impl Notation<'src, u16> {
    text::digits(10)
        .at_least(1)
        .to_slice()
        .try_map(|s: &str, span| s.parse().map_err(|e| Rich::custom(span, e)))
}
