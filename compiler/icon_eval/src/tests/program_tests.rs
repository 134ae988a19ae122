//! Whole-program behaviour: goal-directed evaluation, procedures, loops,
//! structures and the run contract.

use super::{error_of, output_of, run, run_with_input};
use crate::{run_program, silent_host, EvalErrorKind, InterpreterConfig, RunError};

mod goal_direction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic_follows_the_mixed_mode_rule() {
        let out = output_of("write(3 + 4)\nwrite(3 + 4.5)\nwrite(\"3.2\" + \"4.7\")");
        assert_eq!(out, "7\n7.5\n7.9\n");
    }

    #[test]
    fn comparisons_chain_through_their_right_operand() {
        assert_eq!(output_of("write(1 + 2 < 3 * 4 > 5)"), "5\n");
    }

    #[test]
    fn failed_argument_suppresses_the_call() {
        assert_eq!(output_of("write(1 > 2)"), "");
    }

    #[test]
    fn compound_block_runs_every_expression() {
        assert_eq!(output_of("{ write(1); write(2 < 1); write(3) }"), "1\n3\n");
    }

    #[test]
    fn call_after_a_failed_statement_is_skipped() {
        let out = output_of("write(1)\nwrite(2 < 1)\nwrite(3)\nx := 4\nwrite(x)");
        assert_eq!(out, "1\n4\n");
    }

    #[test]
    fn conjunction_short_circuits() {
        let source = "procedure f()\nend\n\
                      procedure main()\n  writes(f() & \"ok\")\nend\n";
        let run = run(source);
        assert_eq!(run.result, Ok(()));
        assert_eq!(run.output, "");
    }

    #[test]
    fn conjunction_produces_its_right_operand() {
        assert_eq!(output_of("write(1 < 2 & \"yes\")"), "yes\n");
    }

    #[test]
    fn not_inverts_success() {
        let out = output_of("if not (1 > 2) then write(\"yes\")\nif not 1 then write(\"no\")");
        assert_eq!(out, "yes\n");
    }

    #[test]
    fn fail_keyword_always_fails() {
        assert_eq!(output_of("if &fail then write(\"no\") else write(\"yes\")"), "yes\n");
    }

    #[test]
    fn guarded_coercion_failure_is_recoverable() {
        let out = output_of("if x := &null + 1 then write(\"no\") else write(\"guarded\")");
        assert_eq!(out, "guarded\n");
    }
}

mod procedures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_return_is_distinguishable_from_failure() {
        let source = "procedure f()\n  return\nend\n\
                      procedure g()\nend\n\
                      procedure main()\n\
                      \x20 if /f() then write(\"null\")\n\
                      \x20 if /g() then write(\"null\") else write(\"failed\")\n\
                      end\n";
        assert_eq!(run(source).output, "null\nfailed\n");
    }

    #[test]
    fn omitted_arguments_are_null() {
        let source = "procedure wrap(s, w)\n\
                      \x20 /s := \"\"\n\
                      \x20 /w := \"()\"\n\
                      \x20 return w[1] || s || w[2]\n\
                      end\n\
                      procedure main()\n\
                      \x20 write(wrap(\"x\"))\n\
                      \x20 write(wrap(,\"{}\"))\n\
                      \x20 write(wrap(,))\n\
                      \x20 write(wrap())\n\
                      end\n";
        assert_eq!(run(source).output, "(x)\n{}\n()\n()\n");
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let source = "procedure first(a)\n  return a\nend\n\
                      procedure main()\n  write(first(1, 2, 3))\nend\n";
        assert_eq!(run(source).output, "1\n");
    }

    #[test]
    fn return_of_a_failing_expression_fails() {
        let source = "procedure f()\n  return 1 > 2\nend\n\
                      procedure main()\n  if f() then write(\"no\") else write(\"failed\")\nend\n";
        assert_eq!(run(source).output, "failed\n");
    }

    #[test]
    fn explicit_fail_leaves_the_procedure() {
        let source = "procedure f()\n  fail\n  write(\"unreachable\")\nend\n\
                      procedure main()\n  if f() then write(\"no\") else write(\"failed\")\nend\n";
        assert_eq!(run(source).output, "failed\n");
    }

    #[test]
    fn recursion() {
        let source = "procedure fact(n)\n\
                      \x20 if n <= 1 then return 1\n\
                      \x20 return n * fact(n - 1)\n\
                      end\n\
                      procedure main()\n  write(fact(10))\nend\n";
        assert_eq!(run(source).output, "3628800\n");
    }

    #[test]
    fn integer_callee_selects_an_argument() {
        let out = output_of("write(2(\"a\", \"b\", \"c\"))\nwrite((1, 2, 3))");
        assert_eq!(out, "b\n3\n");
    }

    #[test]
    fn procedure_replaces_builtin_of_the_same_name() {
        let source = "procedure reverse(s)\n  return \"mine\"\nend\n\
                      procedure main()\n  write(reverse(\"abc\"))\nend\n";
        assert_eq!(run(source).output, "mine\n");
    }

    #[test]
    fn procedures_are_values() {
        let out = output_of("p := write\np(\"via variable\")\nwrite(image(p))");
        assert_eq!(out, "via variable\nfunction write\n");
    }
}

mod loops {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn repeat_breaks_when_the_condition_first_holds() {
        let body = "x := 0\n\
                    repeat {\n  x +:= 1\n  if x = 5 then break\n}\n\
                    write(x)";
        assert_eq!(output_of(body), "5\n");
    }

    #[test]
    fn while_and_until() {
        let body = "i := 0\n\
                    while i < 3 do i +:= 1\n\
                    write(i)\n\
                    until i = 0 do i -:= 1\n\
                    write(i)";
        assert_eq!(output_of(body), "3\n0\n");
    }

    #[test]
    fn next_skips_the_rest_of_the_body() {
        let body = "i := 0\n\
                    while i < 5 do {\n  i +:= 1\n  if i % 2 = 0 then next\n  writes(i)\n}\n\
                    write()";
        assert_eq!(output_of(body), "135\n");
    }

    #[test]
    fn loop_with_failing_condition_succeeds_with_null() {
        assert_eq!(output_of("write(image(while 1 > 2))"), "&null\n");
    }

    #[test]
    fn read_loop_consumes_input() {
        let source = "procedure main()\n  while line := read() do write(\"> \", line)\nend\n";
        let run = run_with_input(source, "one\ntwo\n");
        assert_eq!(run.result, Ok(()));
        assert_eq!(run.output, "> one\n> two\n");
    }
}

mod structures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_subscripts() {
        let out = output_of(
            "write(\"abcdef\"[3])\nwrite(\"abcdef\"[0])\nwrite(\"abcdef\"[-1])\n\
             if \"abc\"[10] then write(\"yes\") else write(\"no\")",
        );
        assert_eq!(out, "c\nf\ne\nno\n");
    }

    #[test]
    fn string_subscript_assignment_copies_on_write() {
        let out = output_of("s := \"abc\"\nt := s\ns[2] := \"X\"\nwrite(s, \" \", t)");
        assert_eq!(out, "aXc abc\n");
    }

    #[test]
    fn list_subscripts_and_assignment() {
        let out = output_of("L := [1, 2, 3]\nL[2] := \"two\"\nwrite(L[1], L[2], L[0])");
        assert_eq!(out, "1two3\n");
    }

    #[test]
    fn lists_are_shared_references() {
        let out = output_of("L := [1]\nM := L\nput(M, 2)\nwrite(*L)");
        assert_eq!(out, "2\n");
    }

    #[test]
    fn table_default_and_augmented_assignment() {
        let out = output_of("T := table(0)\nT[\"a\"] +:= 5\nwrite(T[\"a\"], \" \", T[\"b\"], \" \", *T)");
        assert_eq!(out, "5 0 1\n");
    }

    #[test]
    fn swap_exchanges_values() {
        assert_eq!(output_of("a := 1\nb := 2\na :=: b\nwrite(a, b)"), "21\n");
    }

    #[test]
    fn swap_characters_of_one_string() {
        assert_eq!(output_of("s := \"ab\"\ns[1] :=: s[2]\nwrite(s)"), "ba\n");
        assert_eq!(output_of("s := \"abc\"\ns[1] :=: s[0]\nwrite(s)"), "cba\n");
    }

    #[test]
    fn extreme_subscripts_fail() {
        let out = output_of(
            "x := -9223372036854775807 - 1\n\
             if \"\"[x] then write(\"hit\") else write(\"miss\")\n\
             L := []\n\
             if L[x] := 1 then write(\"hit\") else write(\"no slot\")",
        );
        assert_eq!(out, "miss\nno slot\n");
    }

    #[test]
    fn null_default_idiom_only_assigns_null() {
        let out = output_of("x := 1\n/x := 2\ny := &null\n/y := 3\nwrite(x, y)");
        assert_eq!(out, "13\n");
    }

    #[test]
    fn cset_operators() {
        let out = output_of("write(*(&lcase ++ &ucase))\nwrite(('abc' -- 'b') ** 'ac')");
        assert_eq!(out, "52\nac\n");
    }

    #[test]
    fn list_concatenation() {
        assert_eq!(output_of("L := [1] ||| [2, 3]\nwrite(*L, L[3])"), "33\n");
    }
}

mod run_contract {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn program_without_main_does_nothing() {
        let run = run("procedure other()\n  write(\"never\")\nend\n");
        assert_eq!(run.result, Ok(()));
        assert_eq!(run.output, "");
    }

    #[test]
    fn failure_with_reason_is_a_runtime_error() {
        let err = error_of("x := &null + 1");
        assert_eq!(
            err,
            RunError::RuntimeFailure("numeric expected\noffending value: &null".to_string())
        );
        assert_eq!(
            err.to_string(),
            "Runtime Error:\nnumeric expected\noffending value: &null"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn reason_survives_skipped_calls() {
        let run = run("procedure main()\n  x := \"a\" + 1\n  write(\"after\")\nend\n");
        assert_eq!(run.output, "");
        assert!(matches!(run.result, Err(RunError::RuntimeFailure(_))));
    }

    #[test]
    fn plain_failure_of_main_is_normal_completion() {
        assert_eq!(output_of("write(\"a\")\n1 > 2"), "a\n");
    }

    #[test]
    fn exit_status() {
        assert_eq!(error_of("exit(3)"), RunError::Exit(3));
        assert_eq!(RunError::Exit(3).exit_code(), 3);
        assert_eq!(output_of("write(\"a\")\nexit()\nwrite(\"b\")"), "a\n");
        assert_eq!(output_of("exit(0)"), "");
    }

    #[test]
    fn stop_writes_to_errout_and_exits_with_one() {
        let run = run("procedure main()\n  stop(\"bad \", 42)\n  write(\"unreachable\")\nend\n");
        assert_eq!(run.output, "");
        assert_eq!(run.errors, "bad 42\n");
        assert_eq!(run.result, Err(RunError::Exit(1)));
    }

    #[test]
    fn stop_with_an_unwritable_argument_fails() {
        let run = run("procedure main()\n  stop(\"bad \", [])\n  write(\"skipped\")\nend\n");
        assert_eq!(run.output, "");
        assert_eq!(run.errors, "");
        assert_eq!(
            run.result,
            Err(RunError::RuntimeFailure(
                "string expected\noffending value: list(0)".to_string()
            ))
        );
    }

    #[test]
    fn syntax_error_runs_nothing() {
        let run = run("procedure main()\n  write(\"x\")\n  write(1 +)\nend\n");
        assert_eq!(run.output, "");
        assert!(matches!(run.result, Err(RunError::Syntax(_))));
    }
}

mod fatal_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fatal_kind(body: &str) -> EvalErrorKind {
        match error_of(body) {
            RunError::Fatal(err) => err.kind,
            other => panic!("expected a fatal error, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_construct_is_fatal() {
        assert_eq!(
            fatal_kind("every x := 1 to 3 do write(x)"),
            EvalErrorKind::Unimplemented {
                feature: "every".to_string()
            }
        );
    }

    #[test]
    fn fatal_error_escapes_guards() {
        let run = run("procedure main()\n  if every 1 then write(\"no\") else write(\"no\")\nend\n");
        assert_eq!(run.output, "");
        assert!(matches!(run.result, Err(RunError::Fatal(_))));
    }

    #[test]
    fn fatal_error_carries_a_span() {
        let RunError::Fatal(err) = error_of("x := 1\ncase x of { 1: 2 }") else {
            panic!("expected a fatal error");
        };
        assert!(err.span.is_some());
    }

    #[test]
    fn calling_a_non_procedure() {
        assert_eq!(
            fatal_kind("nothing(1)"),
            EvalErrorKind::NotCallable {
                name: "nothing".to_string()
            }
        );
    }

    #[test]
    fn assigning_to_a_call() {
        assert_eq!(
            fatal_kind("f() := 1"),
            EvalErrorKind::InvalidAssignment {
                target: "procedure call".to_string()
            }
        );
    }

    #[test]
    fn break_outside_a_loop() {
        let RunError::Fatal(err) = error_of("break") else {
            panic!("expected a fatal error");
        };
        assert_eq!(err.kind, EvalErrorKind::StrayControl { keyword: "break" });
        assert_eq!(err.notes, vec!["in procedure main".to_string()]);
    }

    #[test]
    fn unimplemented_builtin_fails_with_reason() {
        assert_eq!(
            error_of("x := find(\"a\", \"abc\")"),
            RunError::RuntimeFailure("Unimplemented error: built-in function find".to_string())
        );
    }

    #[test]
    fn runaway_recursion_hits_the_depth_limit() {
        let program = icon_parse::parse(
            "procedure down(n)\n  return down(n + 1)\nend\nprocedure main()\n  down(1)\nend\n",
        )
        .unwrap();
        let config = InterpreterConfig::default().with_max_call_depth(Some(50));
        let Err(RunError::Fatal(err)) = run_program(&program, silent_host(), config) else {
            panic!("expected a fatal error");
        };
        assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 50 });
    }
}
