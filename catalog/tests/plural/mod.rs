//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettext_catalog::plural_lib::compile::compile;
use gettext_catalog::plural_lib::eval::evaluate;
use gettext_catalog::plural_lib::{
    parse_expression, parse_plural_forms, BinaryOp, EvaluationStrategy, Node, PluralRule,
};
use proptest::prelude::*;
use proptest::test_runner::TestRunner;

/// Plural-Forms headers of real languages
const RULES: &[&str] = &[
    "nplurals=1; plural=0;",
    "nplurals=2; plural=(n != 1);",
    "nplurals=2; plural=(n > 1);",
    "nplurals=2; plural=n%10!=1 || n%100==11;",
    "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);",
    "nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);",
    "nplurals=3; plural=(n==1) ? 0 : (n>=2 && n<=4) ? 1 : 2;",
    "nplurals=3; plural=(n==0 ? 0 : n==1 ? 1 : 2);",
    "nplurals=4; plural=(n%100==1 ? 0 : n%100==2 ? 1 : n%100==3 || n%100==4 ? 2 : 3);",
    "nplurals=5; plural=n==1 ? 0 : n==2 ? 1 : (n>2 && n<7) ? 2 :(n>6 && n<11) ? 3 : 4;",
    "nplurals=6; plural=(n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 ? 4 : 5);",
];

fn get_test_runner(cases: u32) -> TestRunner {
    TestRunner::new(proptest::test_runner::Config {
        cases,
        failure_persistence: None,

        ..proptest::test_runner::Config::default()
    })
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![(0i64..200).prop_map(Node::Number), Just(Node::N)];
    leaf.prop_recursive(6, 48, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(Node::not),
            (
                proptest::sample::select(BinaryOp::ALL.to_vec()),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, l, r)| Node::binary(op, l, r)),
            (inner.clone(), inner.clone(), inner)
                .prop_map(|(c, t, f)| Node::ternary(c, t, f)),
        ]
    })
}

#[test]
fn test_nine_form_formula() {
    let header = "nplurals=9; plural=n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2";
    let (nplurals, _) = parse_plural_forms(header).unwrap();
    assert_eq!(nplurals, 9);

    for strategy in [EvaluationStrategy::Interpreted, EvaluationStrategy::Compiled] {
        let rule = PluralRule::from_header(header, strategy).unwrap();
        let expected = [(1, 0), (2, 1), (5, 2), (11, 2), (21, 0), (22, 1)];
        for (n, index) in expected {
            assert_eq!(rule.evaluate(n), Ok(index), "n = {} ({:?})", n, strategy);
        }
    }
}

#[test]
fn test_strategies_agree_on_real_rules() {
    for header in RULES {
        let interpreted = PluralRule::from_header(header, EvaluationStrategy::Interpreted).unwrap();
        let compiled = PluralRule::from_header(header, EvaluationStrategy::Compiled).unwrap();
        let k = interpreted.num_plurals() as i32;

        for n in 0..=1000 {
            let index = interpreted.evaluate(n).unwrap();
            assert_eq!(compiled.evaluate(n), Ok(index), "{} with n = {}", header, n);
            assert!((0..k).contains(&index), "{} gave {} for n = {}", header, index, n);
        }
    }
}

#[test]
fn test_strategies_agree_on_random_trees() {
    get_test_runner(256)
        .run(&(arb_node(), -50i64..1100), |(node, n)| {
            let compiled = compile(&node);
            prop_assert_eq!(compiled(n), evaluate(&node, n));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_display_parses_back() {
    get_test_runner(256)
        .run(&arb_node(), |node| {
            let reparsed = parse_expression(&node.to_string());
            prop_assert_eq!(reparsed, Ok(node));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_division_fault_is_consistent() {
    for text in ["n / (n - 3)", "(n % 3) % (n % 3)", "!n ? 1 / n : 0"] {
        let node = parse_expression(text).unwrap();
        let compiled = compile(&node);
        for n in 0..10 {
            assert_eq!(compiled(n), evaluate(&node, n), "{} with n = {}", text, n);
        }
    }
}
