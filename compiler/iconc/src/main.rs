//! Icon interpreter CLI.

mod cli;
mod report;
mod tracing_setup;

use std::io::{IsTerminal, Write};

use icon_eval::{run_program, stdio_host, InterpreterConfig};

use cli::{parse_args, Command, USAGE};
use report::Reporter;

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match parse_args(&args) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            0
        }
        Ok(Command::Version) => {
            println!("{}", icon_eval::version());
            0
        }
        Ok(Command::Run { path, config }) => run_file(&path, config),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            1
        }
    };

    // `exit` skips destructors; output from `writes` may still be buffered.
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

/// Parse and run one source file, returning the process exit status.
fn run_file(path: &str, config: InterpreterConfig) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            return 1;
        }
    };
    tracing::debug!(path, bytes = source.len(), "loaded source");

    let reporter = Reporter::new(path, &source, std::io::stderr().is_terminal());
    let result = icon_parse::parse(&source)
        .map_err(icon_eval::RunError::from)
        .and_then(|program| run_program(&program, stdio_host(), config));

    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = std::io::stdout().flush();
            reporter.emit(&err);
            err.exit_code()
        }
    }
}
