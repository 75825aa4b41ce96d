use crate::parsing::tree::NodeKind;

/// Open and close markup for one node kind.
///
/// Heading, Image and Link opens end in an attribute slot: the renderer
/// writes the attributes and finishes the tag itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPair {
    pub open: &'static str,
    pub close: &'static str,
}

impl TagPair {
    const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    const NONE: Self = Self::new("", "");
}

const HEADINGS: [TagPair; 6] = [
    TagPair::new("<h1 ", "</h1>"),
    TagPair::new("<h2 ", "</h2>"),
    TagPair::new("<h3 ", "</h3>"),
    TagPair::new("<h4 ", "</h4>"),
    TagPair::new("<h5 ", "</h5>"),
    TagPair::new("<h6 ", "</h6>"),
];

/// The fixed tag table.
pub const fn tags(kind: NodeKind) -> TagPair {
    match kind {
        NodeKind::Document | NodeKind::Text => TagPair::NONE,
        NodeKind::Paragraph => TagPair::new("<p>", "</p>"),
        NodeKind::UnorderedList => TagPair::new("<ul>", "</ul>"),
        NodeKind::OrderedList => TagPair::new("<ol>", "</ol>"),
        NodeKind::ListItem => TagPair::new("<li>", "</li>"),
        NodeKind::Emphasis => TagPair::new("<em>", "</em>"),
        NodeKind::Strong => TagPair::new("<strong>", "</strong>"),
        NodeKind::HorizontalRule => TagPair::new("<hr color=#CCCCCC size=1 />", ""),
        NodeKind::LineBreak => TagPair::new("<br />", ""),
        NodeKind::Image => TagPair::new("<img ", "/>"),
        NodeKind::Link => TagPair::new("<a ", "</a>"),
        NodeKind::Quote => TagPair::new("<blockquote>", "</blockquote>"),
        NodeKind::Heading(level) => {
            let idx = match level {
                0 => 0,
                1..=6 => level as usize - 1,
                _ => 5,
            };
            HEADINGS[idx]
        }
        NodeKind::CodeBlock => TagPair::new("<pre><code>", "</code></pre>"),
        NodeKind::InlineCode => TagPair::new("<code>", "</code>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeKind::Paragraph, "<p>", "</p>")]
    #[case(NodeKind::OrderedList, "<ol>", "</ol>")]
    #[case(NodeKind::HorizontalRule, "<hr color=#CCCCCC size=1 />", "")]
    #[case(NodeKind::LineBreak, "<br />", "")]
    #[case(NodeKind::Quote, "<blockquote>", "</blockquote>")]
    #[case(NodeKind::Heading(3), "<h3 ", "</h3>")]
    #[case(NodeKind::CodeBlock, "<pre><code>", "</code></pre>")]
    #[case(NodeKind::Text, "", "")]
    fn tag_table(#[case] kind: NodeKind, #[case] open: &'static str, #[case] close: &'static str) {
        assert_eq!(tags(kind), TagPair { open, close });
    }

    #[test]
    fn out_of_range_heading_levels_clamp() {
        assert_eq!(tags(NodeKind::Heading(9)).open, "<h6 ");
        assert_eq!(tags(NodeKind::Heading(0)).open, "<h1 ");
    }
}
