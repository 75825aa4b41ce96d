/// A byte cursor over one line of inline content.
///
/// Delimiters are all ASCII, so every position the cursor stops at on a
/// delimiter is a char boundary; plain characters are stepped over whole.
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

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    pub fn byte_at(&self, idx: usize) -> Option<u8> {
        self.s.as_bytes().get(idx).copied()
    }

    /// The character ending just before byte index `idx`.
    pub fn char_before(&self, idx: usize) -> Option<char> {
        self.s.get(..idx)?.chars().next_back()
    }

    /// The character starting at byte index `idx`.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.s.get(idx..)?.chars().next()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Length of the run of `b` starting at byte index `idx`.
    pub fn run_len_at(&self, idx: usize, b: u8) -> usize {
        self.s
            .as_bytes()
            .get(idx..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| c == b).count())
    }

    /// Index of the next `b` at or after `from`.
    pub fn find_from(&self, from: usize, b: u8) -> Option<usize> {
        self.s
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|&c| c == b)
            .map(|off| from + off)
    }

    /// Advances past one whole character.
    pub fn bump_char(&mut self) {
        let step = self.rest().chars().next().map_or(1, char::len_utf8);
        self.i += step;
    }

    /// Advances past the run of identical bytes at the cursor.
    pub fn bump_run(&mut self) {
        if let Some(b) = self.peek() {
            self.i += self.run_len_at(self.i, b);
        }
    }

    /// Moves the cursor to absolute byte index `to`.
    pub fn jump(&mut self, to: usize) {
        self.i = to;
    }
}
