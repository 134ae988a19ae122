//! Tests for implicit conversion and the mixed-mode arithmetic rule.

use icon_ir::BinaryOp;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::value::{format_real, to_cset, to_integer, to_numbers, to_string, Cset, NumberPair};
use crate::{evaluate_binary, Outcome, Value};

#[test]
fn reals_truncate_to_integers() {
    assert_eq!(to_integer(&Value::Real(3.9)), Outcome::Success(3));
    assert_eq!(to_integer(&Value::Real(-3.9)), Outcome::Success(-3));
    assert_eq!(to_integer(&Value::string("7.5")), Outcome::Success(7));
}

#[test]
fn huge_reals_are_not_integers() {
    assert_eq!(
        to_integer(&Value::Real(1e30)),
        Outcome::fail_with("integer expected\noffending value: 1000000000000000000000000000000.0")
    );
}

#[test]
fn numbers_become_strings() {
    assert_eq!(to_string(&Value::Integer(-4)), Outcome::Success("-4".to_string().into()));
    assert_eq!(to_string(&Value::Real(7.0)), Outcome::Success("7.0".to_string().into()));
    assert_eq!(
        to_string(&Value::Cset(Cset::new("cba"))),
        Outcome::Success("abc".to_string().into())
    );
}

#[test]
fn structures_are_not_strings() {
    assert_eq!(
        to_string(&Value::list(vec![])),
        Outcome::fail_with("string expected\noffending value: list(0)")
    );
}

#[test]
fn strings_become_csets() {
    assert_eq!(
        to_cset(&Value::string("hello")),
        Outcome::Success(Cset::new("ehlo"))
    );
    assert_eq!(
        to_cset(&Value::Null),
        Outcome::fail_with("cset expected\noffending value: &null")
    );
}

#[test]
fn mixed_pairs_widen_to_reals() {
    assert_eq!(
        to_numbers(&Value::Integer(3), &Value::Integer(4)),
        Outcome::Success(NumberPair::Integers(3, 4))
    );
    assert_eq!(
        to_numbers(&Value::Integer(3), &Value::string("4.5")),
        Outcome::Success(NumberPair::Reals(3.0, 4.5))
    );
}

/// An operand and whether it is real once coerced.
fn operand() -> impl Strategy<Value = (Value, bool)> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| (Value::Integer(n), false)),
        (-1000.0f64..1000.0).prop_map(|r| (Value::Real(r), true)),
        (-1000i64..1000).prop_map(|n| (Value::string(n.to_string()), false)),
        (-1000.0f64..1000.0).prop_map(|r| (Value::string(format_real(r)), true)),
    ]
}

fn arithmetic_op() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Mod),
    ]
}

proptest! {
    #[test]
    fn arithmetic_is_real_iff_an_operand_is_real(
        (left, left_real) in operand(),
        (right, right_real) in operand(),
        op in arithmetic_op(),
    ) {
        match evaluate_binary(op, &left, &right).unwrap() {
            Outcome::Success(Value::Real(_)) => prop_assert!(left_real || right_real),
            Outcome::Success(Value::Integer(_)) => prop_assert!(!left_real && !right_real),
            Outcome::Success(other) => prop_assert!(false, "non-numeric result {:?}", other),
            Outcome::Failure(failure) => {
                prop_assert_eq!(failure.reason(), Some("division by zero"));
            }
        }
    }

    #[test]
    fn integer_text_round_trips(n in any::<i64>()) {
        prop_assert_eq!(to_integer(&Value::string(n.to_string())), Outcome::Success(n));
    }
}
