/// A byte range `[start, end)` into a line or document buffer.
///
/// Scanning and classification hand out spans instead of pointers into the
/// input, so every view stays valid for as long as the owning string does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `s`.
    ///
    /// Spans produced by the scanner always fall on char boundaries; an
    /// out-of-range span yields the empty string.
    #[must_use]
    pub fn slice(self, s: &str) -> &str {
        s.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_returns_covered_text() {
        assert_eq!(Span::new(6, 11).slice("hello world"), "world");
    }

    #[test]
    fn slice_out_of_range_is_empty() {
        assert_eq!(Span::new(3, 40).slice("abc"), "");
    }

    #[test]
    fn inverted_span_has_zero_len() {
        let sp = Span::new(5, 2);
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }
}
