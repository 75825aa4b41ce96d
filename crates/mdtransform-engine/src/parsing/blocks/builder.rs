use log::{debug, trace};

use crate::parsing::{
    inline::parse_inline,
    tree::{ListKind, Node, NodeKind},
};
use crate::toc::{Toc, TocBuilder};

use super::{
    classify::{LineKind, MarkdownLineClassifier},
    containers::ContainerStack,
    kinds::CodeFence,
    scan::scan_line,
    types::ContainerFrame,
};

/// The leaf block currently accumulating lines.
#[derive(Debug)]
enum LeafState {
    None,
    /// A paragraph owned by the innermost open container.
    Paragraph { lines: Vec<String> },
    /// Inline text of the list item on top of the container stack.
    ItemText { lines: Vec<String> },
    /// Inside a code fence. `strip` is the fence line's leading whitespace
    /// in bytes, the most removed from each content line.
    Fence { strip: usize, lines: Vec<String> },
}

/// State machine turning classified lines into the document tree.
///
/// Lines are fed in order with [`BlockBuilder::push`]; headings are reported
/// to a [`TocBuilder`] as they are emitted.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    stack: ContainerStack,
    leaf: LeafState,
    toc: TocBuilder,
    line_no: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            stack: ContainerStack::new(),
            leaf: LeafState::None,
            toc: TocBuilder::new(),
            line_no: 0,
        }
    }

    /// Feeds one line, without its terminator.
    pub fn push(&mut self, line: &str) {
        self.line_no += 1;

        if matches!(self.leaf, LeafState::Fence { .. }) {
            self.consume_fence_line(line);
            return;
        }

        let scan = scan_line(line);
        let Some(content) = scan.content else {
            // Blank lines end the paragraph only; containers stay open.
            self.flush_leaf();
            return;
        };

        let remainder = content.slice(line);
        let class = self.classifier.classify(remainder);
        let text = class.content.slice(remainder);

        match class.kind {
            LineKind::Heading { level } => self.heading(scan.width, level, text),
            LineKind::CodeFence => self.open_fence(scan.width, content.start, remainder),
            LineKind::HorizontalRule => {
                self.place_block(scan.width);
                self.stack.append(Node::new(NodeKind::HorizontalRule));
            }
            LineKind::ListItem { kind } => self.list_item(scan.width, kind, text),
            LineKind::Quote { depth } => self.quote_line(scan.width, depth, text),
            LineKind::Paragraph => self.paragraph_line(scan.width, text),
        }
    }

    /// Closes the open leaf and all containers, returning both trees.
    pub fn finish(mut self) -> (Node, Toc) {
        if matches!(self.leaf, LeafState::Fence { .. }) {
            trace!("unterminated code fence closed at end of input");
        }
        self.flush_leaf();
        let root = self.stack.finish();
        let toc = self.toc.finish();
        debug!(
            "built document from {} lines: {} top-level blocks, {} headings",
            self.line_no,
            root.children.len(),
            toc.len()
        );
        (root, toc)
    }

    /// Flushes the leaf and closes containers that a non-container block at
    /// `width` does not belong to.
    fn place_block(&mut self, width: usize) {
        self.flush_leaf();
        self.stack.pop_while(|f| f.indent() >= width);
    }

    fn heading(&mut self, width: usize, level: u8, text: &str) {
        self.place_block(width);

        let mut node = Node::with_children(NodeKind::Heading(level), parse_inline(text.trim_end()));
        let anchor_id = self.toc.push(level, &node.plain_text());
        node.anchor_id = Some(anchor_id);
        self.stack.append(node);
    }

    fn open_fence(&mut self, width: usize, strip: usize, fence: &str) {
        self.place_block(width);
        trace!(
            "code fence opened at line {} (info: {:?})",
            self.line_no,
            CodeFence::info(fence)
        );
        self.leaf = LeafState::Fence {
            strip,
            lines: Vec::new(),
        };
    }

    fn consume_fence_line(&mut self, line: &str) {
        let LeafState::Fence { strip, lines } = &mut self.leaf else {
            return;
        };

        let scan = scan_line(line);
        if scan
            .content
            .is_some_and(|c| CodeFence::is_fence(c.slice(line)))
        {
            trace!("code fence closed at line {}", self.line_no);
            let code = take_code(lines);
            self.leaf = LeafState::None;
            self.stack.append(code);
            return;
        }

        let n = line
            .bytes()
            .take(*strip)
            .take_while(|b| matches!(b, b' ' | b'\t'))
            .count();
        lines.push(line[n..].to_string());
    }

    fn list_item(&mut self, width: usize, kind: ListKind, text: &str) {
        self.flush_leaf();
        self.stack
            .pop_while(|f| f.indent() > width || (f.is_quote() && f.indent() >= width));

        let sibling = matches!(
            self.stack.top(),
            Some(ContainerFrame::ListItem { indent }) if *indent == width
        );
        if sibling {
            self.stack.pop();
            let kind_changed = matches!(
                self.stack.top(),
                Some(ContainerFrame::List { kind: open, .. }) if *open != kind
            );
            if kind_changed {
                self.stack.pop();
                self.stack.push(ContainerFrame::List {
                    kind,
                    indent: width,
                });
            }
        } else {
            self.stack.push(ContainerFrame::List {
                kind,
                indent: width,
            });
        }

        self.stack.push(ContainerFrame::ListItem { indent: width });
        self.leaf = LeafState::ItemText {
            lines: vec![text.to_string()],
        };
    }

    fn quote_line(&mut self, width: usize, depth: u8, text: &str) {
        let has_text = !text.trim().is_empty();
        let same_quote = self.stack.top()
            == Some(&ContainerFrame::Quote {
                indent: width,
                depth,
            });

        if same_quote
            && has_text
            && let LeafState::Paragraph { lines } = &mut self.leaf
        {
            lines.push(text.to_string());
            return;
        }

        self.flush_leaf();
        self.stack.pop_while(|f| match *f {
            ContainerFrame::Quote { indent, depth: d } => {
                indent > width || (indent == width && d > depth)
            }
            _ => f.indent() >= width,
        });

        loop {
            let next = match self.stack.top() {
                Some(&ContainerFrame::Quote { indent, depth: d }) if indent == width => {
                    if d == depth {
                        break;
                    }
                    d + 1
                }
                _ => 1,
            };
            self.stack.push(ContainerFrame::Quote {
                indent: width,
                depth: next,
            });
        }

        if has_text {
            self.leaf = LeafState::Paragraph {
                lines: vec![text.to_string()],
            };
        }
    }

    fn paragraph_line(&mut self, width: usize, text: &str) {
        // Lazy continuation: any open text absorbs the line.
        if let LeafState::Paragraph { lines } | LeafState::ItemText { lines } = &mut self.leaf {
            lines.push(text.to_string());
            return;
        }

        self.stack.pop_while(|f| f.indent() >= width);
        self.leaf = LeafState::Paragraph {
            lines: vec![text.to_string()],
        };
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                let children = inline_lines(&lines);
                self.stack
                    .append(Node::with_children(NodeKind::Paragraph, children));
            }
            LeafState::ItemText { lines } => self.stack.append_all(inline_lines(&lines)),
            LeafState::Fence { mut lines, .. } => {
                let code = take_code(&mut lines);
                self.stack.append(code);
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes each line and joins consecutive lines with a line break,
/// unless the previous line already ended in one.
fn inline_lines(lines: &[String]) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::new();
    for line in lines {
        if out.last().is_some_and(|n| n.kind != NodeKind::LineBreak) {
            out.push(Node::new(NodeKind::LineBreak));
        }
        out.extend(parse_inline(line));
    }
    out
}

/// Builds a code block from verbatim lines, each terminated by `\n`.
fn take_code(lines: &mut Vec<String>) -> Node {
    let mut code = String::new();
    for line in lines.drain(..) {
        code.push_str(&line);
        code.push('\n');
    }
    Node::leaf(NodeKind::CodeBlock, code)
}
