use crate::parsing::tree::ListKind;

/// List item markers: `- `, `* `, `+ ` and `<digits>. `.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMITER: u8 = b'.';

    /// Returns the list kind and the offset where item content starts.
    ///
    /// The marker and its following space are consumed together, so item
    /// content never starts with the separating space.
    pub fn parse(s: &str) -> Option<(ListKind, usize)> {
        let b = s.as_bytes();
        if b.len() >= 2 && Self::BULLETS.contains(&b[0]) && b[1] == b' ' {
            return Some((ListKind::Unordered, 2));
        }

        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0
            && b.get(digits) == Some(&Self::ORDERED_DELIMITER)
            && b.get(digits + 1) == Some(&b' ')
        {
            return Some((ListKind::Ordered, digits + 2));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_consume_marker_and_space() {
        assert_eq!(ListMarker::parse("- a"), Some((ListKind::Unordered, 2)));
        assert_eq!(ListMarker::parse("* a"), Some((ListKind::Unordered, 2)));
        assert_eq!(ListMarker::parse("+ a"), Some((ListKind::Unordered, 2)));
    }

    #[test]
    fn ordered_marker() {
        assert_eq!(ListMarker::parse("1. one"), Some((ListKind::Ordered, 3)));
        assert_eq!(ListMarker::parse("42. x"), Some((ListKind::Ordered, 4)));
    }

    #[test]
    fn not_markers() {
        assert_eq!(ListMarker::parse("-a"), None);
        assert_eq!(ListMarker::parse("1.x"), None);
        assert_eq!(ListMarker::parse("1) x"), None);
        assert_eq!(ListMarker::parse(". x"), None);
    }
}
