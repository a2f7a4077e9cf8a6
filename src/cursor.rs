/// Position tracker over the input of a single evaluation.
///
/// The offset is a byte index into `input` and only ever moves forward.
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Cursor<'a> {
        Cursor { input, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_u8(&self) -> Option<u8> {
        Some(*self.rest().as_bytes().first()?)
    }

    /// Consumes the current character, if any.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }

            self.offset += c.len_utf8();
        }
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.offset]
    }
}
