/// ATX heading syntax: a run of 1-6 `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns `(level, content_offset)` if `s` opens a heading.
    ///
    /// A run of `#` not followed by a space, or longer than six, is not a
    /// heading.
    pub fn parse(s: &str) -> Option<(u8, usize)> {
        let run = s.bytes().take_while(|&b| b == Self::MARKER).count();
        if run == 0 || run > Self::MAX_LEVEL {
            return None;
        }
        if s.as_bytes().get(run) != Some(&b' ') {
            return None;
        }
        Some((run as u8, run + 1))
    }
}
