/// Emphasis and strong emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Width of a strong delimiter (`**`).
    pub const STRONG: usize = 2;
    /// How many emphasis levels may nest inside one another.
    pub const MAX_NESTING: usize = 2;

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }
}
