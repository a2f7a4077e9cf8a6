use crate::parser::{self, Error};
use log::{debug, trace};

/// Evaluates `input` as an arithmetic expression.
///
/// The whole input must form a single expression; leftover text is an
/// error rather than being ignored.
pub fn evaluate(input: &str) -> Result<f64, Error> {
    trace!("evaluating {:?}", input);

    let result = parser::parse(input);

    match &result {
        Ok(value) => trace!("{:?} = {}", input, value),
        Err(error) => debug!("failed to evaluate {:?}: {}", input, error),
    }

    result
}

/// Shortest decimal representation that parses back to the same value.
pub fn format_value(value: f64) -> String {
    value.to_string()
}
