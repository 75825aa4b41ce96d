/// Inline link `[text](url "title")` and image `![alt](url)` syntax.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: u8 = b'!';
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const TITLE_QUOTE: char = '"';

    /// Splits the text between the parentheses into `(url, title)`.
    ///
    /// Returns `None` for an empty url or for trailing text that is not a
    /// quoted title.
    pub fn split_destination(inner: &str) -> Option<(&str, &str)> {
        let inner = inner.trim();
        let (url, rest) = match inner.find(char::is_whitespace) {
            Some(idx) => (&inner[..idx], inner[idx..].trim()),
            None => (inner, ""),
        };
        if url.is_empty() {
            return None;
        }
        if rest.is_empty() {
            return Some((url, ""));
        }
        let title = rest
            .strip_prefix(Self::TITLE_QUOTE)?
            .strip_suffix(Self::TITLE_QUOTE)?;
        Some((url, title))
    }
}
