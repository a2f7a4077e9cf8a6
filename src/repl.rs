use crate::calculator::{evaluate, format_value};
use log::debug;
use std::io::{self, BufRead, Write};

const BANNER: &str = "Simple Calculator\n\
                      Enter an expression (e.g. (2+3)*4/5). Type 'exit' to quit.";

#[derive(Copy, Clone, Debug, Default)]
pub struct ReplOptions {
    /// Print the banner and the `> ` prompt. Off when output is piped.
    pub interactive: bool,
}

/// Reads expressions line by line until `exit`, `quit` or end of input.
pub fn run_repl(
    mut input: impl BufRead,
    mut output: impl Write,
    options: ReplOptions,
) -> io::Result<()> {
    if options.interactive {
        writeln!(output, "{}", BANNER)?;
    }

    let mut buf = Vec::new();

    loop {
        if options.interactive {
            write!(output, "> ")?;
            output.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            if options.interactive {
                writeln!(output)?;
            }
            return Ok(());
        }

        // Invalid UTF-8 surfaces as an unexpected character for this line only
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        match evaluate(line) {
            Ok(value) => writeln!(output, "= {}", format_value(value))?,
            Err(error) => writeln!(output, "Error: {}", error)?,
        }
    }
}
