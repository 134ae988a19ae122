//! Tests for binary operators on values.

use icon_ir::BinaryOp;

use crate::value::Cset;
use crate::{evaluate_binary, Outcome, Value};

fn binary(op: BinaryOp, left: Value, right: Value) -> Outcome<Value> {
    evaluate_binary(op, &left, &right).unwrap()
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

fn real(r: f64) -> Value {
    Value::Real(r)
}

fn s(text: &str) -> Value {
    Value::string(text)
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integers_stay_integers() {
        assert_eq!(binary(BinaryOp::Add, int(3), int(4)), Outcome::Success(int(7)));
        assert_eq!(binary(BinaryOp::Sub, int(3), int(4)), Outcome::Success(int(-1)));
        assert_eq!(binary(BinaryOp::Mul, int(6), int(7)), Outcome::Success(int(42)));
        assert_eq!(binary(BinaryOp::Pow, int(2), int(10)), Outcome::Success(int(1024)));
    }

    #[test]
    fn any_real_makes_a_real() {
        assert_eq!(binary(BinaryOp::Add, int(3), real(4.5)), Outcome::Success(real(7.5)));
        assert_eq!(binary(BinaryOp::Mul, real(2.0), int(3)), Outcome::Success(real(6.0)));
    }

    #[test]
    fn numeric_strings_coerce() {
        assert_eq!(binary(BinaryOp::Add, s("3"), int(4)), Outcome::Success(int(7)));
        assert_eq!(binary(BinaryOp::Add, s("3.2"), s("4.7")), Outcome::Success(real(7.9)));
        assert_eq!(binary(BinaryOp::Add, s(" 16rff "), int(1)), Outcome::Success(int(256)));
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(binary(BinaryOp::Div, int(7), int(2)), Outcome::Success(int(3)));
        assert_eq!(binary(BinaryOp::Div, int(-7), int(2)), Outcome::Success(int(-3)));
        assert_eq!(binary(BinaryOp::Mod, int(-7), int(2)), Outcome::Success(int(-1)));
        assert_eq!(binary(BinaryOp::Div, real(7.0), int(2)), Outcome::Success(real(3.5)));
    }

    #[test]
    fn division_by_zero_fails_with_reason() {
        for (op, left) in [
            (BinaryOp::Div, int(1)),
            (BinaryOp::Mod, int(1)),
            (BinaryOp::Div, real(1.0)),
        ] {
            assert_eq!(
                binary(op, left, int(0)),
                Outcome::fail_with("division by zero")
            );
        }
    }

    #[test]
    fn overflow_fails_with_reason() {
        assert_eq!(
            binary(BinaryOp::Add, int(i64::MAX), int(1)),
            Outcome::fail_with("integer overflow")
        );
        assert_eq!(
            binary(BinaryOp::Pow, int(10), int(40)),
            Outcome::fail_with("integer overflow")
        );
    }

    #[test]
    fn negative_integer_exponent() {
        assert_eq!(binary(BinaryOp::Pow, int(2), int(-1)), Outcome::Success(int(0)));
        assert_eq!(binary(BinaryOp::Pow, int(1), int(-5)), Outcome::Success(int(1)));
        assert_eq!(binary(BinaryOp::Pow, int(-1), int(-3)), Outcome::Success(int(-1)));
        assert_eq!(binary(BinaryOp::Pow, int(-1), int(-2)), Outcome::Success(int(1)));
        assert_eq!(
            binary(BinaryOp::Pow, int(0), int(-1)),
            Outcome::fail_with("division by zero")
        );
    }

    #[test]
    fn huge_exponent_of_unit_bases() {
        let huge = int(i64::MAX);
        assert_eq!(binary(BinaryOp::Pow, int(1), huge.clone()), Outcome::Success(int(1)));
        assert_eq!(binary(BinaryOp::Pow, int(-1), huge.clone()), Outcome::Success(int(-1)));
        assert_eq!(binary(BinaryOp::Pow, int(-1), int(i64::MAX - 1)), Outcome::Success(int(1)));
        assert_eq!(binary(BinaryOp::Pow, int(0), huge.clone()), Outcome::Success(int(0)));
        assert_eq!(binary(BinaryOp::Pow, int(0), int(0)), Outcome::Success(int(1)));
        assert_eq!(
            binary(BinaryOp::Pow, int(2), huge),
            Outcome::fail_with("integer overflow")
        );
    }

    #[test]
    fn non_numeric_operand_names_the_offender() {
        assert_eq!(
            binary(BinaryOp::Add, Value::Null, int(1)),
            Outcome::fail_with("numeric expected\noffending value: &null")
        );
        assert_eq!(
            binary(BinaryOp::Mul, int(1), s("abc")),
            Outcome::fail_with("numeric expected\noffending value: \"abc\"")
        );
    }

    #[test]
    fn left_failure_wins() {
        assert_eq!(
            binary(BinaryOp::Sub, s("x"), Value::Null),
            Outcome::fail_with("numeric expected\noffending value: \"x\"")
        );
    }
}

mod comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_comparison_produces_right_operand() {
        assert_eq!(binary(BinaryOp::NumLt, int(3), int(12)), Outcome::Success(int(12)));
        assert_eq!(binary(BinaryOp::NumGt, int(12), int(5)), Outcome::Success(int(5)));
        assert_eq!(binary(BinaryOp::NumLt, s("5"), s("10")), Outcome::Success(int(10)));
    }

    #[test]
    fn failing_comparison_has_no_reason() {
        assert_eq!(binary(BinaryOp::NumGt, int(1), int(2)), Outcome::fail());
        assert_eq!(binary(BinaryOp::NumNe, int(2), real(2.0)), Outcome::fail());
    }

    #[test]
    fn mixed_numeric_equality() {
        assert_eq!(binary(BinaryOp::NumEq, int(2), real(2.0)), Outcome::Success(real(2.0)));
        assert_eq!(binary(BinaryOp::NumLe, real(1.5), int(2)), Outcome::Success(int(2)));
    }

    #[test]
    fn string_comparison_is_lexical() {
        assert_eq!(binary(BinaryOp::StrLt, s("abc"), s("abd")), Outcome::Success(s("abd")));
        assert_eq!(binary(BinaryOp::StrLt, s("10"), s("9")), Outcome::Success(s("9")));
        assert_eq!(binary(BinaryOp::StrEq, int(12), s("12")), Outcome::Success(s("12")));
        assert_eq!(binary(BinaryOp::StrGe, s("a"), s("b")), Outcome::fail());
    }

    #[test]
    fn identity_compares_structures_by_reference() {
        let list = Value::list(vec![int(1)]);
        assert_eq!(
            binary(BinaryOp::Same, list.clone(), list.clone()),
            Outcome::Success(list.clone())
        );
        assert_eq!(
            binary(BinaryOp::Same, list, Value::list(vec![int(1)])),
            Outcome::fail()
        );
        assert_eq!(binary(BinaryOp::Same, int(1), s("1")), Outcome::fail());
        assert_eq!(binary(BinaryOp::NotSame, int(1), s("1")), Outcome::Success(s("1")));
    }
}

mod strings_and_csets {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn concatenation_converts_numbers() {
        assert_eq!(binary(BinaryOp::Concat, int(12), int(3)), Outcome::Success(s("123")));
        assert_eq!(binary(BinaryOp::Concat, s("x"), real(2.0)), Outcome::Success(s("x2.0")));
    }

    #[test]
    fn concatenating_null_fails() {
        assert_eq!(
            binary(BinaryOp::Concat, s("a"), Value::Null),
            Outcome::fail_with("string expected\noffending value: &null")
        );
    }

    #[test]
    fn cset_algebra() {
        let abc = Value::Cset(Cset::new("abc"));
        let bcd = Value::Cset(Cset::new("bcd"));
        assert_eq!(
            binary(BinaryOp::Union, abc.clone(), bcd.clone()),
            Outcome::Success(Value::Cset(Cset::new("abcd")))
        );
        assert_eq!(
            binary(BinaryOp::Diff, abc.clone(), bcd.clone()),
            Outcome::Success(Value::Cset(Cset::new("a")))
        );
        assert_eq!(
            binary(BinaryOp::Inter, abc, bcd),
            Outcome::Success(Value::Cset(Cset::new("bc")))
        );
    }

    #[test]
    fn cset_operators_coerce_strings() {
        assert_eq!(
            binary(BinaryOp::Union, s("ba"), s("ab")),
            Outcome::Success(Value::Cset(Cset::new("ab")))
        );
    }

    #[test]
    fn list_concatenation_builds_a_new_list() {
        let a = Value::list(vec![int(1)]);
        let b = Value::list(vec![int(2), int(3)]);
        let Outcome::Success(Value::List(joined)) = binary(BinaryOp::ListConcat, a.clone(), b)
        else {
            panic!("expected a list");
        };
        assert_eq!(*joined.borrow(), vec![int(1), int(2), int(3)]);
        assert_eq!(a.size(), Some(1));
    }

    #[test]
    fn list_concatenation_needs_lists() {
        assert_eq!(
            binary(BinaryOp::ListConcat, Value::list(vec![]), int(1)),
            Outcome::fail_with("list expected\noffending value: 1")
        );
    }
}

#[test]
fn operators_needing_places_are_errors_on_values() {
    for op in [BinaryOp::Assign, BinaryOp::Swap, BinaryOp::Alt] {
        assert!(evaluate_binary(op, &int(1), &int(2)).is_err());
    }
}
