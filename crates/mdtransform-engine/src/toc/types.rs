use serde::Serialize;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    /// Heading level 1..=6.
    pub level: u8,
    /// Plain text of the heading.
    pub heading: String,
    /// Link target, identical to the heading's HTML id.
    pub anchor_id: String,
    /// Deeper headings up to the next heading of this level or shallower.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

/// The heading forest of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toc {
    pub roots: Vec<TocNode>,
}

impl Toc {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Visits every entry depth-first, parents before children.
    pub fn walk(&self, mut f: impl FnMut(&TocNode, usize)) {
        fn go(nodes: &[TocNode], depth: usize, f: &mut impl FnMut(&TocNode, usize)) {
            for node in nodes {
                f(node, depth);
                go(&node.children, depth + 1, f);
            }
        }
        go(&self.roots, 0, &mut f);
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut n = 0;
        self.walk(|_, _| n += 1);
        n
    }
}
