mod calculator;
mod cursor;
mod parser;
mod repl;

pub use calculator::{evaluate, format_value};
pub use parser::{Error, MAX_DEPTH};
pub use repl::{run_repl, ReplOptions};
