use crate::parsing::tree::{ListKind, Node, NodeKind};

/// A frame in the container stack representing a nesting level.
///
/// `indent` is the column width of the line that opened the frame; nesting
/// is decided by comparing widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A bulleted or numbered list.
    List { kind: ListKind, indent: usize },
    /// One item of the list directly below it on the stack.
    ListItem { indent: usize },
    /// A blockquote; `depth` counts `>` prefixes on the opening line.
    Quote { indent: usize, depth: u8 },
}

impl ContainerFrame {
    pub fn indent(&self) -> usize {
        match *self {
            ContainerFrame::List { indent, .. }
            | ContainerFrame::ListItem { indent }
            | ContainerFrame::Quote { indent, .. } => indent,
        }
    }

    pub fn is_quote(&self) -> bool {
        matches!(self, ContainerFrame::Quote { .. })
    }

    /// The empty tree node this frame fills while it is open.
    pub fn node(&self) -> Node {
        match *self {
            ContainerFrame::List { kind, .. } => Node::new(NodeKind::list(kind)),
            ContainerFrame::ListItem { .. } => Node::new(NodeKind::ListItem),
            ContainerFrame::Quote { .. } => Node::new(NodeKind::Quote),
        }
    }
}
