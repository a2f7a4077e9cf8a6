use clap::Parser;
use descent_calc::*;
use std::io::{self, Write};
use std::process::ExitCode;

/// Evaluates arithmetic expressions with + - * / and parentheses.
///
/// With no arguments, starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Multiple words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

/// Evaluates the joined words once, returning the process exit status.
fn run_once(words: &[String], mut out: impl Write, mut err: impl Write) -> io::Result<u8> {
    let expression = words.join(" ");

    match evaluate(&expression) {
        Ok(value) => {
            writeln!(out, "{}", format_value(value))?;
            Ok(0)
        }
        Err(error) => {
            writeln!(err, "Error: {}", error)?;
            Ok(1)
        }
    }
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    if !args.expression.is_empty() {
        let status = run_once(&args.expression, io::stdout().lock(), io::stderr().lock())?;
        return Ok(ExitCode::from(status));
    }

    let options = ReplOptions {
        interactive: atty::is(atty::Stream::Stdout),
    };

    run_repl(io::stdin().lock(), io::stdout().lock(), options)?;

    Ok(ExitCode::SUCCESS)
}
