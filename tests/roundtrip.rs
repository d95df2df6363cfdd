//! Property-based tests for the parser and the evaluator.
//!
//! Random expression trees are rendered as infix source and parsed back, and
//! random integer arithmetic is checked against `i64` arithmetic.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tally::{
    ast::Expr,
    get_results,
    interpreter::{lexer::tokenize, operator::Operator, parser::parse},
    util::num::snap_to_integer,
};

// -- Strategies --

/// Generate a variable name.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,4}").unwrap()
}

/// Generate a leaf: a non-negative number or a variable.
fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0.0..1e6_f64).prop_map(Expr::Number),
        (0_u32..1000).prop_map(|n| Expr::Number(f64::from(n))),
        identifier_strategy().prop_map(Expr::Variable),
    ]
}

/// Generate any infix operator.
fn infix_operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![Operator::Assign,
                              Operator::Add,
                              Operator::Subtract,
                              Operator::Multiply,
                              Operator::Divide,
                              Operator::Modulo,
                              Operator::Power])
}

/// Generate an expression tree of bounded depth.
fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 32, 2, |inner| {
                       (infix_operator_strategy(), inner.clone(), inner)
                           .prop_map(|(op, left, right)| Expr::operation(op, left, right))
                   })
}

/// Generate an integer operator together with its `i64` counterpart.
fn integer_operator_strategy() -> impl Strategy<Value = (&'static str, fn(i64, i64) -> i64)> {
    prop_oneof![
        Just(("+", i64::wrapping_add as fn(i64, i64) -> i64)),
        Just(("-", i64::wrapping_sub as fn(i64, i64) -> i64)),
        Just(("*", i64::wrapping_mul as fn(i64, i64) -> i64)),
    ]
}

fn reparse(expr: &Expr) -> Option<Expr> {
    let source = expr.infix().to_string();
    parse(&tokenize(&source).unwrap()).unwrap()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Rendering a tree as infix source and parsing it again yields the tree.
    #[test]
    fn prop_infix_roundtrip(expr in expr_strategy()) {
        let reparsed = reparse(&expr);
        prop_assert_eq!(reparsed, Some(expr));
    }

    /// Integer arithmetic well inside the safe range is exact.
    #[test]
    fn prop_integer_arithmetic(a in -100_000_i64..100_000,
                               b in -100_000_i64..100_000,
                               (literal, apply) in integer_operator_strategy()) {
        let source = format!("a = {a}; b = {b}; a {literal} b");
        #[allow(clippy::cast_precision_loss)]
        let expected = apply(a, b) as f64;
        prop_assert_eq!(get_results(&source).unwrap(), vec![expected]);
    }

    /// Remainder truncates towards zero like `i64::rem`.
    #[test]
    fn prop_remainder(a in -100_000_i64..100_000,
                      b in (1_i64..1000).prop_flat_map(|b| prop_oneof![Just(b), Just(-b)])) {
        #[allow(clippy::cast_precision_loss)]
        let expected = (a % b) as f64;
        prop_assert_eq!(get_results(&format!("({a}) % ({b})")).unwrap(), vec![expected]);
    }

    /// Snapping twice is the same as snapping once.
    #[test]
    fn prop_snap_is_idempotent(value in -1e9_f64..1e9) {
        let once = snap_to_integer(value);
        prop_assert_eq!(snap_to_integer(once), once);
    }
}
