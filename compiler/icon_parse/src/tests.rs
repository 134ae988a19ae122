#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use icon_ir::{Expr, ExprKind};
use pretty_assertions::assert_eq;

/// Span-free rendering of an expression.
fn sexp(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Integer(n) => n.to_string(),
        ExprKind::Real(r) => format!("{r:?}"),
        ExprKind::Str(s) => format!("{s:?}"),
        ExprKind::Cset(s) => format!("'{s}'"),
        ExprKind::Ident(name) | ExprKind::Keyword(name) => name.clone(),
        ExprKind::List(items) => format!("[{}]", join(items)),
        ExprKind::Grouping(inner) => format!("({})", sexp(inner)),
        ExprKind::Compound(body) => format!("{{{}}}", join(body)),
        ExprKind::Call { callee, args } => {
            let args: Vec<String> = args
                .iter()
                .map(|a| a.as_ref().map_or_else(|| "_".to_string(), sexp))
                .collect();
            format!("{}({})", sexp(callee), args.join(" "))
        }
        ExprKind::Subscript { target, index } => format!("{}[{}]", sexp(target), sexp(index)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), sexp(left), sexp(right))
        }
        ExprKind::AugAssign { op, target, value } => {
            format!("({}:= {} {})", op.as_symbol(), sexp(target), sexp(value))
        }
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), sexp(operand)),
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => match else_branch {
            Some(e) => format!("(if {} {} {})", sexp(cond), sexp(then_branch), sexp(e)),
            None => format!("(if {} {})", sexp(cond), sexp(then_branch)),
        },
        ExprKind::While { cond, body } => loop_sexp("while", cond, body.as_deref()),
        ExprKind::Until { cond, body } => loop_sexp("until", cond, body.as_deref()),
        ExprKind::Repeat(body) => format!("(repeat {})", sexp(body)),
        ExprKind::Not(e) => format!("(not {})", sexp(e)),
        ExprKind::Break => "break".to_string(),
        ExprKind::Next => "next".to_string(),
        ExprKind::Fail => "fail".to_string(),
        ExprKind::Return(None) => "return".to_string(),
        ExprKind::Return(Some(e)) => format!("(return {})", sexp(e)),
        ExprKind::Unsupported(what) => format!("<{what}>"),
    }
}

fn join(exprs: &[Expr]) -> String {
    exprs.iter().map(sexp).collect::<Vec<_>>().join(" ")
}

fn loop_sexp(name: &str, cond: &Expr, body: Option<&Expr>) -> String {
    match body {
        Some(b) => format!("({name} {} {})", sexp(cond), sexp(b)),
        None => format!("({name} {})", sexp(cond)),
    }
}

/// Parse `body` as the statements of `main` and render each one.
fn main_body(body: &str) -> Vec<String> {
    let source = format!("procedure main()\n{body}\nend\n");
    let program = parse(&source).unwrap();
    program.procedure("main").unwrap().body.iter().map(sexp).collect()
}

fn one(expr: &str) -> String {
    let mut body = main_body(expr);
    assert_eq!(body.len(), 1, "expected one statement in {expr:?}");
    body.remove(0)
}

// ===== Declarations =====

#[test]
fn empty_source_is_an_empty_program() {
    let program = parse("").unwrap();
    assert!(program.procedures.is_empty());
    assert!(program.globals.is_empty());
}

#[test]
fn procedure_header_and_declarations() {
    let program = parse(
        "global g, h\n\
         procedure add(a, b)\n\
           local t\n\
           static calls\n\
           initial calls := 0\n\
           return a + b\n\
         end",
    )
    .unwrap();
    assert_eq!(program.globals, vec!["g", "h"]);
    let add = program.procedure("add").unwrap();
    assert_eq!(add.params, vec!["a", "b"]);
    assert_eq!(add.locals, vec!["t"]);
    assert_eq!(add.statics, vec!["calls"]);
    assert_eq!(add.initial.as_ref().map(sexp), Some("(:= calls 0)".to_string()));
    assert_eq!(add.body.iter().map(sexp).collect::<Vec<_>>(), vec!["(return (+ a b))"]);
}

#[test]
fn duplicate_procedure_is_rejected() {
    let err = parse("procedure f()\nend\nprocedure f()\nend").unwrap_err();
    assert!(err.detail.contains("declared more than once"));
    assert_eq!(err.line, 3);
}

#[test]
fn record_declaration_is_rejected() {
    let err = parse("record point(x, y)").unwrap_err();
    assert!(err.detail.starts_with("Unsupported declaration"));
}

// ===== Literals =====

#[test]
fn data_type_literals() {
    assert_eq!(
        main_body("1\n2.5\n\"s\"\n'abc'\n[1, \"a\"]\n[]\n&null"),
        vec!["1", "2.5", "\"s\"", "'abc'", "[1 \"a\"]", "[]", "&null"]
    );
}

// ===== Precedence =====

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(one("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(one("1 - 2 - 3"), "(- (- 1 2) 3)");
}

#[test]
fn power_groups_right() {
    assert_eq!(one("2 ^ 3 ^ 2"), "(^ 2 (^ 3 2))");
}

#[test]
fn assignment_groups_right_and_binds_looser_than_comparison() {
    assert_eq!(one("x := y := 1 < 2"), "(:= x (:= y (< 1 2)))");
}

#[test]
fn conjunction_is_loosest() {
    assert_eq!(one("x := 1 & y := 2"), "(& (:= x 1) (:= y 2))");
}

#[test]
fn concatenation_between_comparison_and_addition() {
    assert_eq!(one("a || b + 1 == c"), "(== (|| a (+ b 1)) c)");
}

#[test]
fn augmented_assignment() {
    assert_eq!(one("x +:= 1"), "(+:= x 1)");
    assert_eq!(one("s ||:= \"a\" || \"b\""), "(||:= s (|| \"a\" \"b\"))");
}

#[test]
fn prefix_operators() {
    assert_eq!(one("-x"), "(- x)");
    assert_eq!(one("*s"), "(* s)");
    assert_eq!(one("\\x"), "(\\ x)");
    assert_eq!(one("/x"), "(/ x)");
    assert_eq!(one("~c"), "(~ c)");
}

#[test]
fn doubled_prefix_operators_split() {
    assert_eq!(one("--x"), "(- (- x))");
    assert_eq!(one("**s"), "(* (* s))");
}

#[test]
fn postfix_binds_tighter_than_prefix() {
    assert_eq!(one("-f(x)"), "(- f(x))");
    assert_eq!(one("*l[1]"), "(* l[1])");
}

// ===== Calls and subscripts =====

#[test]
fn elided_arguments_are_none() {
    assert_eq!(one("f(1, , 3)"), "f(1 _ 3)");
    assert_eq!(one("f(,)"), "f(_ _)");
    assert_eq!(one("f()"), "f()");
}

#[test]
fn calls_chain() {
    assert_eq!(one("f(1)(2)"), "f(1)(2)");
}

#[test]
fn multiple_subscripts_nest() {
    assert_eq!(one("m[1, 2]"), "m[1][2]");
}

#[test]
fn mutual_evaluation_selects_last() {
    assert_eq!(one("(1, 2, 3)"), "-1(1 2 3)");
    assert_eq!(one("(1)"), "(1)");
}

// ===== Control structures =====

#[test]
fn if_then_else() {
    assert_eq!(one("if x then 1 else 2"), "(if x 1 2)");
    assert_eq!(one("if x then 1"), "(if x 1)");
}

#[test]
fn else_on_next_line() {
    assert_eq!(one("if x then 1\nelse 2"), "(if x 1 2)");
}

#[test]
fn loops() {
    assert_eq!(one("while x do y"), "(while x y)");
    assert_eq!(one("until x"), "(until x)");
    assert_eq!(one("repeat { x; break }"), "(repeat {x break})");
}

#[test]
fn return_with_and_without_value() {
    assert_eq!(main_body("return\nreturn 1"), vec!["return", "(return 1)"]);
    assert_eq!(one("if x then return else fail"), "(if x return fail)");
}

#[test]
fn not_takes_whole_expression() {
    assert_eq!(one("not x = 1"), "(not (= x 1))");
}

#[test]
fn unsupported_constructs_parse() {
    assert_eq!(one("every x := 1 to 10 by 2 do write(x)"), "<every>");
    assert_eq!(one("case x of { 1: \"a\"; default: \"b\" }"), "<case>");
    assert_eq!(one("s[1:3]"), "<string section>");
    assert_eq!(one("p.x"), "<field reference>");
}

#[test]
fn semicolons_and_newlines_separate_statements() {
    assert_eq!(main_body("x := 1; y := 2\nz := 3"), vec!["(:= x 1)", "(:= y 2)", "(:= z 3)"]);
}

#[test]
fn compound_expression() {
    assert_eq!(one("{\n  x := 1\n  y\n}"), "{(:= x 1) y}");
}

// ===== Errors =====

#[test]
fn missing_operand_reports_position_and_lexeme() {
    let err = parse("procedure main()\n  write(1 +)\nend").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error at line 2, column 12\nExpected expression, but found \")\""
    );
}

#[test]
fn missing_end_reports_end_of_file() {
    let err = parse("procedure main()\n  write(1)\n").unwrap_err();
    assert_eq!(err.detail, "Expected \"end\", but found end of file");
}

#[test]
fn two_expressions_on_one_line() {
    let err = parse("procedure main()\n  x y\nend").unwrap_err();
    assert_eq!(err.detail, "Expected \"end\", but found \"y\"");
}

#[test]
fn lex_errors_become_parse_errors() {
    let err = parse("procedure main()\n  x := \"abc\nend").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.detail.starts_with("Syntax error:"));
}

#[test]
fn top_level_expression_is_rejected() {
    let err = parse("write(1)").unwrap_err();
    assert_eq!(err.detail, "Expected \"procedure\" or \"global\", but found \"write\"");
}
