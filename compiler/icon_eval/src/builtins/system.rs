//! I/O and process control: `write`, `writes`, `read`, `stop`, `exit`.

use crate::outcome::succeed;
use crate::value::{expected, to_integer, to_string, FileValue};
use crate::{ControlAction, EvalResult, Interpreter, Outcome, Value};

use super::arg;

/// One argument of `write`, after coercion.
enum Piece {
    Text(String),
    Target(FileValue),
}

fn emit(interpreter: &Interpreter<'_>, target: &FileValue, text: &str) {
    match target {
        FileValue::Errout => interpreter.host.write_stderr(text),
        FileValue::Output | FileValue::Input(_) => interpreter.host.write_stdout(text),
    }
}

/// Shared body of `write`, `writes` and `stop`.
///
/// All arguments are converted before anything is written, so a bad
/// argument fails the call with no output. A file argument switches the
/// destination for the text that follows it.
fn write_pieces(
    interpreter: &Interpreter<'_>,
    args: &[Value],
    mut target: FileValue,
    newline: bool,
) -> Outcome<Value> {
    let mut pieces = Vec::with_capacity(args.len());
    for value in args {
        pieces.push(match value {
            Value::File(FileValue::Input(_)) => {
                return expected("output file", value);
            }
            Value::File(file) => Piece::Target(file.clone()),
            Value::Null => Piece::Text(String::new()),
            other => match to_string(other) {
                Outcome::Success(text) => Piece::Text(text.to_string()),
                Outcome::Failure(failure) => return Outcome::Failure(failure),
            },
        });
    }

    let mut line = String::new();
    for piece in pieces {
        match piece {
            Piece::Text(text) => line.push_str(&text),
            Piece::Target(file) => {
                if !line.is_empty() {
                    if newline {
                        line.push('\n');
                    }
                    emit(interpreter, &target, &line);
                    line.clear();
                }
                target = file;
            }
        }
    }
    if newline {
        line.push('\n');
    }
    if !line.is_empty() {
        emit(interpreter, &target, &line);
    }

    Outcome::Success(args.last().cloned().unwrap_or_default())
}

/// `write(x1, ..., xn)`: write the arguments and a newline.
pub fn write(interpreter: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(write_pieces(interpreter, args, FileValue::Output, true))
}

/// `writes(x1, ..., xn)`: write the arguments without a newline.
pub fn writes(interpreter: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(write_pieces(interpreter, args, FileValue::Output, false))
}

/// `read(f)`: next line of `f` (default `&input`); fails at end of file.
pub fn read(interpreter: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let file = match arg(args, 0) {
        Value::Null => interpreter.env.lookup("&input"),
        file => file,
    };
    let Value::File(FileValue::Input(reader)) = &file else {
        return Ok(expected("input file", &file));
    };
    Ok(match reader.read_line()? {
        Some(line) => Outcome::Success(Value::string(line)),
        None => Outcome::fail(),
    })
}

/// `stop(x1, ..., xn)`: write the arguments to `&errout` and exit with
/// status 1. An argument that cannot be written fails the call like
/// `write` does, and nothing is written.
pub fn stop(interpreter: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    succeed!(write_pieces(interpreter, args, FileValue::Errout, true));
    Err(ControlAction::Exit(1))
}

/// `exit(i)`: terminate with status `i`, default 0.
pub fn exit(_interpreter: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let code = match arg(args, 0) {
        Value::Null => 0,
        status => succeed!(to_integer(&status)),
    };
    Err(ControlAction::Exit(
        i32::try_from(code).unwrap_or(if code < 0 { i32::MIN } else { i32::MAX }),
    ))
}
