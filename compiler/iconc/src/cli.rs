//! Command-line parsing.

use icon_eval::InterpreterConfig;

/// What the user asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Version,
    Run {
        path: String,
        config: InterpreterConfig,
    },
}

pub const USAGE: &str = "\
Usage: icon <file.icn> [options]

Runs the procedure `main` of an Icon source file.

Options:
  --max-depth=<n>     Limit nested procedure calls (default: 10000)
  --no-depth-limit    Allow unlimited call nesting
  -h, --help          Print this message
  -V, --version       Print the interpreter version";

/// Parse arguments, not including the program name. No arguments at all
/// asks for help.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut path = None;
    let mut config = InterpreterConfig::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-depth-limit" => config = config.with_max_call_depth(None),
            _ => {
                if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    let depth = depth
                        .parse()
                        .map_err(|_| format!("invalid call depth '{depth}'"))?;
                    config = config.with_max_call_depth(Some(depth));
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option '{arg}'"));
                } else if path.is_none() {
                    path = Some(arg.clone());
                } else {
                    return Err(format!("unexpected argument '{arg}'"));
                }
            }
        }
    }

    Ok(match path {
        Some(path) => Command::Run { path, config },
        None => Command::Help,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn no_arguments_asks_for_help() {
        assert_eq!(parse_args(&[]), Ok(Command::Help));
    }

    #[test]
    fn file_runs_with_default_config() {
        assert_eq!(
            parse_args(&args(&["hello.icn"])),
            Ok(Command::Run {
                path: "hello.icn".to_string(),
                config: InterpreterConfig::default(),
            })
        );
    }

    #[test]
    fn depth_options() {
        let Ok(Command::Run { config, .. }) =
            parse_args(&args(&["--max-depth=20", "deep.icn"]))
        else {
            panic!("expected a run command");
        };
        assert_eq!(config.max_call_depth, Some(20));

        let Ok(Command::Run { config, .. }) =
            parse_args(&args(&["deep.icn", "--no-depth-limit"]))
        else {
            panic!("expected a run command");
        };
        assert_eq!(config.max_call_depth, None);
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse_args(&args(&["a.icn", "--help"])), Ok(Command::Help));
        assert_eq!(parse_args(&args(&["-V"])), Ok(Command::Version));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert_eq!(
            parse_args(&args(&["--max-depth=lots"])),
            Err("invalid call depth 'lots'".to_string())
        );
        assert_eq!(
            parse_args(&args(&["--fast"])),
            Err("unknown option '--fast'".to_string())
        );
        assert_eq!(
            parse_args(&args(&["a.icn", "b.icn"])),
            Err("unexpected argument 'b.icn'".to_string())
        );
    }
}
