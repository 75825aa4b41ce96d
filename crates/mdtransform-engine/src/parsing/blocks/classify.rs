use crate::parsing::{rope::span::Span, tree::ListKind};

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// The block type a line opens or continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading { level: u8 },
    CodeFence,
    HorizontalRule,
    ListItem { kind: ListKind },
    Quote { depth: u8 },
    Paragraph,
}

/// Classification of a single indentation-stripped line.
///
/// Only local facts: the classifier looks at the start of the line and
/// performs no inline parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    pub kind: LineKind,
    /// Span of the content after the block marker, relative to the
    /// classified remainder. For fences this is the info string region.
    pub content: Span,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies `remainder`, the text of a line after its indentation.
    ///
    /// Priority: heading, code fence, horizontal rule, list bullet, ordered
    /// marker, quote, paragraph.
    pub fn classify(&self, remainder: &str) -> LineClass {
        let len = remainder.len();
        let after = |offset: usize| Span::new(offset.min(len), len);

        if let Some((level, offset)) = Heading::parse(remainder) {
            return LineClass {
                kind: LineKind::Heading { level },
                content: after(offset),
            };
        }
        if CodeFence::is_fence(remainder) {
            return LineClass {
                kind: LineKind::CodeFence,
                content: after(CodeFence::BACKTICKS.len()),
            };
        }
        if ThematicBreak::matches(remainder) {
            return LineClass {
                kind: LineKind::HorizontalRule,
                content: after(len),
            };
        }
        if let Some((kind, offset)) = ListMarker::parse(remainder) {
            return LineClass {
                kind: LineKind::ListItem { kind },
                content: after(offset),
            };
        }
        if let Some((depth, offset)) = BlockQuote::parse(remainder) {
            return LineClass {
                kind: LineKind::Quote { depth },
                content: after(offset),
            };
        }
        LineClass {
            kind: LineKind::Paragraph,
            content: after(0),
        }
    }
}
