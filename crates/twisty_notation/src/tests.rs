use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn mv(layers: Option<LayerPrefix>, family: &str, multiplier: i32) -> Node {
    Move {
        layers,
        family: family.into(),
    }
    .with_multiplier(multiplier)
}

fn layer(i: u16) -> Layer {
    Layer::new(i).unwrap()
}

#[test]
fn test_simple_moves() {
    let cfg = Features::LAYERED;

    let expected = NodeList(vec![
        mv(None, "R", 1),
        mv(None, "U", 2),
        mv(Some(LayerPrefix::Single(layer(3))), "F", -1),
        mv(Some(LayerPrefix::Range(layer(2), layer(4))), "L", -2),
    ]);
    assert_eq!(expected, parse_notation("R U2 3F' 2-4L2'", cfg).unwrap());
    assert_eq!(expected, parse_notation("  R  U2   3F'  2-4L2'  ", cfg).unwrap());
    assert_eq!(expected.to_string(), "R U2 3F' 2-4L2'");
}

#[test]
fn test_nested_notation() {
    let cfg = Features::LAYERED;

    let expected = NodeList(vec![
        RepeatableNode::Group(NodeList(vec![
            mv(None, "R", 1),
            RepeatableNode::BinaryGroup {
                kind: BinaryGroupKind::Commutator,
                contents: [
                    NodeList(vec![mv(None, "U", -1)]),
                    NodeList(vec![mv(None, "Rw", 2), mv(None, "x", 1)]),
                ],
            }
            .with_multiplier(-3),
        ]))
        .with_multiplier(2),
        RepeatableNode::BinaryGroup {
            kind: BinaryGroupKind::Conjugate,
            contents: [NodeList(vec![mv(None, "F", 1)]), NodeList(vec![])],
        }
        .with_multiplier(1),
    ]);

    assert_eq!(expected.to_string(), "(R [U', Rw2 x]3')2 [F: ]");
    assert_eq!(expected, parse_notation("(R [U', Rw2 x]3')2 [F: ]", cfg).unwrap());
    assert_eq!(expected, parse_notation("(R [U',Rw2 x]3')2 [F:]", cfg).unwrap());
    assert_eq!(
        expected,
        parse_notation("  (  R  [  U'  ,  Rw2  x  ]3'  )2  [ F : ]  ", cfg).unwrap()
    );
}

#[test]
fn test_sq1_notation() {
    let cfg = Features::SQ1;

    let expected = NodeList(vec![
        Sq1Move::UD { u: 1, d: 0 }.into(),
        Sq1Move::Slash.into(),
        Sq1Move::UD { u: -3, d: 3 }.into(),
        Sq1Move::Slash.into(),
    ]);
    assert_eq!(expected.to_string(), "(1,0)/(-3,3)/");
    assert_eq!(expected, parse_notation("(1,0)/(-3,3)/", cfg).unwrap());
    assert_eq!(expected, parse_notation("(1, 0) / (-3, 3) /", cfg).unwrap());
    assert_eq!(expected, parse_notation("( 1,0 )/( -3 , 3 )/", cfg).unwrap());
}

#[test]
fn test_notation_errors() {
    let cfg = Features::MAXIMAL;

    parse_notation("R 2", cfg).expect_err("lone multiplier");
    parse_notation("R2 '", cfg).expect_err("lone prime");
    parse_notation("0R", cfg).expect_err("zero layer");
    parse_notation("(R U", cfg).expect_err("unclosed group");
    parse_notation("[R, U, F]", cfg).expect_err("extra comma");
    parse_notation("R #", cfg).expect_err("unknown character");
    parse_notation("(1,0)2", cfg).expect_err("repeated Square-1 move");

    parse_notation("(1,0)/", Features::LAYERED).expect_err("Square-1 disabled");
    parse_notation("2-3R", Features::SQ1).expect_err("layer ranges disabled");
}

#[test]
fn test_flatten() {
    let cfg = Features::LAYERED;

    let flat = |s: &str| -> Vec<String> {
        parse_notation(s, cfg)
            .unwrap()
            .flatten()
            .unwrap()
            .into_iter()
            .map(|node| match node {
                FlatNode::Move {
                    layers,
                    family,
                    multiplier,
                } => {
                    let layers = layers.map(|l| l.to_string()).unwrap_or_default();
                    format!("{layers}{family}{multiplier}")
                }
                FlatNode::Sq1(m) => m.to_string(),
            })
            .collect()
    };

    assert_eq!(flat("[R, U]"), ["R1", "U1", "R-1", "U-1"]);
    assert_eq!(flat("[R: U2]"), ["R1", "U2", "R-1"]);
    assert_eq!(flat("(R 2U')2"), ["R1", "2U-1", "R1", "2U-1"]);
    assert_eq!(flat("(R 2U')'"), ["2U1", "R-1"]);
    assert_eq!(flat("[R, U]'"), ["U1", "R1", "U-1", "R-1"]);
    assert_eq!(flat("()3 R0"), ["R0"]);
}

#[test]
fn test_multiplier_from_str() {
    assert_eq!(Ok(Multiplier(1)), "".parse());
    assert_eq!(Ok(Multiplier(-1)), "'".parse());
    assert_eq!(Ok(Multiplier(12)), "12".parse());
    assert_eq!(Ok(Multiplier(-2)), "2'".parse());
    assert_eq!(Err(()), "x".parse::<Multiplier>());
}

impl Arbitrary for Node {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let leaf_node = prop_oneof![
            (Move::arbitrary(), Multiplier::arbitrary())
                .prop_map(|(m, mult)| m.with_multiplier(mult)),
            Sq1Move::arbitrary().prop_map_into(),
        ];

        leaf_node
            .prop_recursive(
                3,  // 3 levels deep
                20, // max size of 20 nodes
                4,  // 4 items per collection
                |inner| {
                    let node_list = prop::collection::vec(inner.clone(), 0..6).prop_map(NodeList);
                    let branch_repeatable_node = prop_oneof![
                        node_list.clone().prop_map(RepeatableNode::Group),
                        (BinaryGroupKind::arbitrary(), [node_list.clone(), node_list]).prop_map(
                            |(kind, contents)| RepeatableNode::BinaryGroup { kind, contents }
                        ),
                    ];
                    (branch_repeatable_node, Multiplier::arbitrary())
                        .prop_map(|(rep_node, mult)| rep_node.with_multiplier(mult))
                },
            )
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Move {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use crate::charsets::FAMILY_REGEX;

        let layer = (1..=99_u16).prop_map(|i| Layer::new(i).unwrap());
        let layers = prop_oneof![
            Just(None),
            layer.clone().prop_map(|l| Some(LayerPrefix::Single(l))),
            (layer.clone(), layer).prop_map(|(lo, hi)| Some(LayerPrefix::Range(lo, hi))),
        ];
        let family = FAMILY_REGEX.prop_map(|s| Str::from(s.as_str()));

        (layers, family)
            .prop_map(|(layers, family)| Move { layers, family })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

proptest! {
    #[test]
    fn proptest_notation_roundtrip(nodes in prop::collection::vec(any::<Node>(), 0..8)) {
        let node_list = NodeList(nodes);
        assert_eq!(
            parse_notation(&node_list.to_string(), Features::MAXIMAL),
            Ok(node_list),
        );
    }

    #[test]
    fn proptest_double_inverse(nodes in prop::collection::vec(any::<Node>(), 0..8)) {
        let node_list = NodeList(nodes);
        assert_eq!(node_list.inv().unwrap().inv().unwrap(), node_list);
    }
}
