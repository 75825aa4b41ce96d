use serde::Serialize;

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// The kind of a block or inline node.
///
/// Block and inline nodes share one type; `Document` is the virtual root and
/// `Text` is a run of plain characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Document,
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Emphasis,
    Strong,
    HorizontalRule,
    LineBreak,
    Image,
    Link,
    Quote,
    /// Heading with level 1..=6.
    Heading(u8),
    CodeBlock,
    InlineCode,
    Text,
}

impl NodeKind {
    pub fn list(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => NodeKind::UnorderedList,
            ListKind::Ordered => NodeKind::OrderedList,
        }
    }

    /// Leaf kinds never carry children.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::HorizontalRule
                | NodeKind::LineBreak
                | NodeKind::Image
                | NodeKind::Link
                | NodeKind::CodeBlock
                | NodeKind::InlineCode
                | NodeKind::Text
        )
    }

    /// Kinds for which `href` and `title` are meaningful.
    #[must_use]
    pub fn has_target(self) -> bool {
        matches!(self, NodeKind::Image | NodeKind::Link)
    }

    #[must_use]
    pub fn heading_level(self) -> Option<u8> {
        match self {
            NodeKind::Heading(level) => Some(level),
            _ => None,
        }
    }
}

/// A node of the document tree. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Display text for leaves; verbatim content for code blocks.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Target URL (Image and Link only).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    /// Alt text for images, optional title for links.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Anchor id shared with the table of contents (headings only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            text: String::new(),
            href: String::new(),
            title: String::new(),
            anchor_id: None,
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(kind)
        }
    }

    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(kind)
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            href: src.into(),
            title: alt.into(),
            ..Self::new(NodeKind::Image)
        }
    }

    pub fn link(
        text: impl Into<String>,
        href: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            title: title.into(),
            ..Self::new(NodeKind::Link)
        }
    }

    /// Flattens the node's inline content to plain text.
    ///
    /// Markup delimiters are gone already; code, link text and image alt
    /// text are kept, line breaks become spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(&self, out: &mut String) {
        match self.kind {
            NodeKind::Text | NodeKind::InlineCode | NodeKind::Link | NodeKind::CodeBlock => {
                out.push_str(&self.text)
            }
            NodeKind::Image => out.push_str(&self.title),
            NodeKind::LineBreak => out.push(' '),
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }
}
