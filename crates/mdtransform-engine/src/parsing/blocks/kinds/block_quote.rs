/// Blockquote syntax: one or more `>` prefixes.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Returns `(depth, content_offset)` if `s` starts a quote line.
    ///
    /// The first `>` must be followed by a space, another `>`, or the end of
    /// the line. Handles `> text`, `>> nested` and `> > spaced nested`.
    pub fn parse(s: &str) -> Option<(u8, usize)> {
        let b = s.as_bytes();
        if b.first() != Some(&Self::PREFIX) {
            return None;
        }
        match b.get(1).copied() {
            None | Some(b' ') | Some(Self::PREFIX) => Some(Self::strip_prefixes(s)),
            _ => None,
        }
    }

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while depth > 0 && i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == Self::PREFIX {
                depth = depth.saturating_add(1);
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quote() {
        assert_eq!(BlockQuote::parse("> hello"), Some((1, 2)));
    }

    #[test]
    fn spaced_nested_quote() {
        assert_eq!(BlockQuote::parse("> > hello"), Some((2, 4)));
    }

    #[test]
    fn nested_quote_no_space() {
        assert_eq!(BlockQuote::parse(">> hello"), Some((2, 3)));
    }

    #[test]
    fn bare_marker_is_an_empty_quote_line() {
        assert_eq!(BlockQuote::parse(">"), Some((1, 1)));
    }

    #[test]
    fn marker_glued_to_text_is_not_a_quote() {
        assert_eq!(BlockQuote::parse(">hello"), None);
        assert_eq!(BlockQuote::parse("hello"), None);
    }
}
