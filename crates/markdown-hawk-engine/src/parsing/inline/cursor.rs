/// A byte cursor for the hand-written inline scanners (backtick runs,
/// bracket depth, `%` delimiters).
///
/// Every delimiter it looks for is ASCII, so any position it stops on is a
/// valid char boundary for slicing `s`.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes a run of `b` and returns its length.
    pub fn eat_run(&mut self, b: u8) -> usize {
        let start = self.i;
        while self.peek() == Some(b) {
            self.i += 1;
        }
        self.i - start
    }

    /// Moves to the next occurrence of `b`. Returns `false` and stays put
    /// when there is none.
    pub fn skip_to(&mut self, b: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&c| c == b)
        {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => false,
        }
    }

    /// The text between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}
