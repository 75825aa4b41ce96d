use crate::parsing::rope::span::Span;

/// Number of spaces that make up one indentation level.
pub const SPACES_PER_LEVEL: usize = 4;

/// Leading-whitespace facts for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Tabs plus whole groups of four spaces.
    pub level: usize,
    /// Indentation width in columns (tab = 4, space = 1).
    pub width: usize,
    /// Span of the text after the leading whitespace, or `None` when the
    /// line is empty or whitespace only.
    pub content: Option<Span>,
}

impl LineScan {
    /// Returns true if the line has no content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.is_none()
    }
}

/// Measures and strips the leading tabs/spaces of `line`.
///
/// Tabs and spaces may be mixed. A trailing partial group of fewer than four
/// spaces is consumed but does not count towards `level`.
pub fn scan_line(line: &str) -> LineScan {
    let mut tabs = 0usize;
    let mut spaces = 0usize;

    for (i, b) in line.bytes().enumerate() {
        match b {
            b' ' => spaces += 1,
            b'\t' => tabs += 1,
            _ => {
                return LineScan {
                    level: tabs + spaces / SPACES_PER_LEVEL,
                    width: tabs * SPACES_PER_LEVEL + spaces,
                    content: Some(Span::new(i, line.len())),
                };
            }
        }
    }

    LineScan {
        level: 0,
        width: 0,
        content: None,
    }
}
