use xi_rope::Rope;

use super::span::Span;

/// A single source line with its position in the document buffer.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of the line in the rope, terminator excluded.
    pub span: Span,
    /// The line text without its `\n` / `\r\n` terminator.
    pub text: String,
}

/// Returns an iterator over the lines of `rope` with their byte spans.
///
/// Uses `lines_raw` so offsets account for the terminators that are then
/// stripped from `text`.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, raw)| {
        let start = offset;
        offset += raw.len();
        let text = strip_terminator(&raw);
        LineRef {
            number: idx + 1,
            span: Span::new(start, start + text.len()),
            text: text.to_string(),
        }
    })
}

/// Removes one trailing `\n` or `\r\n` from `line`.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
