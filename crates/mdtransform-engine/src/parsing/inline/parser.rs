use crate::parsing::tree::{Node, NodeKind};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
};

/// Parses one line of inline content into a sequence of nodes.
///
/// Single greedy left-to-right pass. At each position the constructs are
/// tried in precedence order: trailing line break, code span, image, link,
/// strong, emphasis. Text between constructs is emitted as `Text` nodes and
/// unmatched delimiters stay literal.
pub fn parse_inline(s: &str) -> Vec<Node> {
    parse_spans(s, 0)
}

fn parse_spans(s: &str, depth: usize) -> Vec<Node> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        let node = try_line_break(&mut cur)
            .or_else(|| try_code_span(&mut cur))
            .or_else(|| try_image(&mut cur))
            .or_else(|| try_link(&mut cur))
            .or_else(|| try_emphasis(&mut cur, depth));

        match node {
            Some(node) => {
                flush_text(&mut out, &s[text_start..start]);
                out.push(node);
                text_start = cur.pos();
            }
            None => skip_literal(&mut cur),
        }
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

fn flush_text(out: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        out.push(Node::text(text));
    }
}

/// Steps over input that opened nothing.
///
/// Backtick and underscore runs are literal as a whole, so their tails are
/// never re-read as shorter openers. A `*` run is stepped one delimiter at a
/// time: `***a**` reads as a literal `*` followed by strong text.
fn skip_literal(cur: &mut Cursor<'_>) {
    match cur.peek() {
        Some(b) if b == CodeSpan::TICK || b == Emphasis::UNDERSCORE => cur.bump_run(),
        _ => cur.bump_char(),
    }
}

/// Two or more spaces that end the line.
fn try_line_break(cur: &mut Cursor<'_>) -> Option<Node> {
    if cur.peek() != Some(b' ') {
        return None;
    }
    let rest = cur.rest();
    if rest.len() < 2 || !rest.bytes().all(|b| b == b' ') {
        return None;
    }
    cur.jump(cur.s.len());
    Some(Node::new(NodeKind::LineBreak))
}

fn try_code_span(cur: &mut Cursor<'_>) -> Option<Node> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let open = cur.run_len_at(cur.pos(), CodeSpan::TICK);
    let inner_start = cur.pos() + open;

    let mut j = inner_start;
    while let Some(tick) = cur.find_from(j, CodeSpan::TICK) {
        let run = cur.run_len_at(tick, CodeSpan::TICK);
        if run == open {
            let code = &cur.s[inner_start..tick];
            cur.jump(tick + run);
            return Some(Node::leaf(NodeKind::InlineCode, code));
        }
        j = tick + run;
    }
    None
}

/// A parsed `[label](destination)` starting at some `[`.
struct Bracketed<'a> {
    label: &'a str,
    url: &'a str,
    title: &'a str,
    end: usize,
}

fn parse_bracketed<'a>(cur: &Cursor<'a>, open: usize) -> Option<Bracketed<'a>> {
    if cur.byte_at(open) != Some(Link::LABEL_OPEN) {
        return None;
    }
    let close = cur.find_from(open + 1, Link::LABEL_CLOSE)?;
    if cur.byte_at(close + 1) != Some(Link::DEST_OPEN) {
        return None;
    }
    let dest_end = cur.find_from(close + 2, Link::DEST_CLOSE)?;
    let (url, title) = Link::split_destination(&cur.s[close + 2..dest_end])?;

    Some(Bracketed {
        label: &cur.s[open + 1..close],
        url,
        title,
        end: dest_end + 1,
    })
}

fn try_image(cur: &mut Cursor<'_>) -> Option<Node> {
    if cur.peek() != Some(Link::IMAGE_BANG) {
        return None;
    }
    let b = parse_bracketed(cur, cur.pos() + 1)?;
    cur.jump(b.end);
    Some(Node::image(b.label, b.url))
}

/// Link text is kept as-is; it is not tokenized again.
fn try_link(cur: &mut Cursor<'_>) -> Option<Node> {
    let b = parse_bracketed(cur, cur.pos())?;
    cur.jump(b.end);
    Some(Node::link(b.label, b.url, b.title))
}

fn is_space(b: Option<u8>) -> bool {
    matches!(b, Some(b' ' | b'\t'))
}

fn is_word(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphanumeric)
}

/// Strong (`**x**`) or emphasis (`*x*`, `_x_`).
fn try_emphasis(cur: &mut Cursor<'_>, depth: usize) -> Option<Node> {
    if depth >= Emphasis::MAX_NESTING {
        return None;
    }
    let delim = cur.peek().filter(|&b| Emphasis::is_delimiter(b))?;
    if delim == Emphasis::UNDERSCORE && is_word(cur.char_before(cur.pos())) {
        return None;
    }

    let open = cur.run_len_at(cur.pos(), delim);
    let width = open.min(Emphasis::STRONG);
    let inner_start = cur.pos() + width;
    let first = cur.byte_at(inner_start);
    if first.is_none() || is_space(first) {
        return None;
    }

    let inner_end = find_closer(cur, delim, width, inner_start)?;
    let kind = if width == 1 {
        NodeKind::Emphasis
    } else {
        NodeKind::Strong
    };
    let children = parse_spans(&cur.s[inner_start..inner_end], depth + 1);
    cur.jump(inner_end + width);
    Some(Node::with_children(kind, children))
}

/// Byte index where a span opened by `width` delimiters ends.
///
/// The first run able to close the span closes it with its leading
/// delimiters; the rest of that run is left for the caller. A run of the
/// other width that opens inside the span must close before the span can,
/// which is how `*em **strong***` ends after the inner strong.
fn find_closer(cur: &Cursor<'_>, delim: u8, width: usize, inner_start: usize) -> Option<usize> {
    let mut inner: Option<usize> = None;
    let mut j = inner_start;

    while let Some(at) = cur.find_from(j, delim) {
        let run = cur.run_len_at(at, delim);
        j = at + run;

        let can_close = at > inner_start
            && !is_space(cur.byte_at(at - 1))
            && !(delim == Emphasis::UNDERSCORE && is_word(cur.char_at(j)));
        let next = cur.byte_at(j);
        let can_open = next.is_some() && !is_space(next);

        let mut used = 0;
        if can_close
            && let Some(inner_width) = inner
            && run >= inner_width
        {
            inner = None;
            used = inner_width;
        }
        if can_close && run - used >= width {
            return Some(at + used);
        }
        if used == 0 && inner.is_none() && can_open {
            let inner_width = run.min(Emphasis::STRONG);
            if inner_width != width {
                inner = Some(inner_width);
            }
        }
    }
    None
}
