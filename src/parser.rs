use crate::cursor::Cursor;

/// Factor recursion allowed before giving up. Both parentheses and unary
/// signs count towards it.
pub const MAX_DEPTH: usize = 256;

#[derive(thiserror::Error, Clone, PartialEq, Debug)]
pub enum Error {
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected character: {0:?}")]
    UnexpectedCharacter(char),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("missing closing parenthesis")]
    MissingCloseParen,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unexpected trailing input: {0:?}")]
    TrailingInput(String),
    #[error("expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

struct Parser<'a> {
    // Recursive descent, evaluating as it goes
    cursor: Cursor<'a>,
    depth: usize,
}

type ValueResult = Result<f64, Error>;

pub fn parse(input: &str) -> ValueResult {
    let mut parser = Parser {
        cursor: Cursor::new(input),
        depth: 0,
    };

    let value = parser.parse_expression()?;

    parser.cursor.skip_whitespace();
    if !parser.cursor.at_end() {
        return Err(Error::TrailingInput(parser.cursor.rest().to_owned()));
    }

    Ok(value)
}

impl Parser<'_> {
    fn parse_expression(&mut self) -> ValueResult {
        self.parse_terms()
    }

    fn parse_terms(&mut self) -> ValueResult {
        let mut left = self.parse_factors()?;

        loop {
            self.cursor.skip_whitespace();
            let op = match self.cursor.peek_u8() {
                Some(op @ (b'+' | b'-')) => op,
                _ => return Ok(left),
            };

            self.cursor.bump();
            let right = self.parse_factors()?;

            if op == b'+' {
                left += right;
            } else {
                left -= right;
            }
        }
    }

    fn parse_factors(&mut self) -> ValueResult {
        let mut left = self.parse_unary()?;

        loop {
            self.cursor.skip_whitespace();
            let op = match self.cursor.peek_u8() {
                Some(op @ (b'*' | b'/')) => op,
                _ => return Ok(left),
            };

            self.cursor.bump();
            let right = self.parse_unary()?;

            if op == b'*' {
                left *= right;
            } else {
                // Matches -0.0 as well
                if right == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                left /= right;
            }
        }
    }

    fn parse_unary(&mut self) -> ValueResult {
        if self.depth == MAX_DEPTH {
            return Err(Error::NestingTooDeep(MAX_DEPTH));
        }

        self.depth += 1;
        let result = self.parse_unary_inner();
        self.depth -= 1;
        result
    }

    fn parse_unary_inner(&mut self) -> ValueResult {
        self.cursor.skip_whitespace();

        return match self.cursor.peek_u8() {
            None => Err(Error::UnexpectedEnd),
            Some(b'(') => {
                self.cursor.bump();
                let value = self.parse_expression()?;
                self.cursor.skip_whitespace();
                match self.cursor.peek_u8() {
                    Some(b')') => {
                        self.cursor.bump();
                        Ok(value)
                    }
                    _ => Err(Error::MissingCloseParen),
                }
            }
            Some(b'+') => {
                self.cursor.bump();
                self.parse_unary()
            }
            Some(b'-') => {
                self.cursor.bump();
                Ok(-self.parse_unary()?)
            }
            Some(_) => self.read_number(),
        };
    }

    fn read_number(&mut self) -> ValueResult {
        let start_offset = self.cursor.offset();
        let mut has_period = false;

        loop {
            match self.cursor.peek_u8() {
                Some(b'0'..=b'9') => {
                    self.cursor.bump();
                }
                Some(b'.') => {
                    // A second period ends the literal and is left for the caller
                    if has_period {
                        break;
                    }

                    has_period = true;
                    self.cursor.bump();
                }
                _ => break,
            }
        }

        if self.cursor.offset() == start_offset {
            return match self.cursor.peek() {
                Some(c) => Err(Error::UnexpectedCharacter(c)),
                None => Err(Error::UnexpectedEnd),
            };
        }

        let text = self.cursor.slice_from(start_offset);
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::InvalidNumber(text.to_owned())),
        }
    }
}
