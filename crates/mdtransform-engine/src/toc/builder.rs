use super::{
    slug::AnchorRegistry,
    types::{Toc, TocNode},
};

/// Builds the heading hierarchy as headings are emitted in document order.
///
/// Keeps a stack of open entries with strictly increasing levels. A heading
/// of level L closes every open entry of level >= L, then becomes a child of
/// the new top (or a new root).
#[derive(Debug, Default)]
pub struct TocBuilder {
    open: Vec<TocNode>,
    roots: Vec<TocNode>,
    anchors: AnchorRegistry,
}

impl TocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a heading and returns the anchor id assigned to it.
    pub fn push(&mut self, level: u8, heading: &str) -> String {
        while let Some(top) = self.open.last()
            && top.level >= level
        {
            self.close_top();
        }

        let anchor_id = self.anchors.assign(heading);
        self.open.push(TocNode {
            level,
            heading: heading.to_string(),
            anchor_id: anchor_id.clone(),
            children: Vec::new(),
        });
        anchor_id
    }

    pub fn finish(mut self) -> Toc {
        while !self.open.is_empty() {
            self.close_top();
        }
        Toc { roots: self.roots }
    }

    fn close_top(&mut self) {
        let Some(node) = self.open.pop() else {
            return;
        };
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headings(toc: &[TocNode]) -> Vec<&str> {
        toc.iter().map(|n| n.heading.as_str()).collect()
    }

    #[test]
    fn sibling_and_child_levels() {
        let mut b = TocBuilder::new();
        b.push(1, "Intro");
        b.push(2, "Setup");
        b.push(2, "Usage");
        b.push(1, "Reference");
        let toc = b.finish();

        assert_eq!(headings(&toc.roots), vec!["Intro", "Reference"]);
        assert_eq!(headings(&toc.roots[0].children), vec!["Setup", "Usage"]);
        assert!(toc.roots[1].children.is_empty());
    }

    #[test]
    fn skipped_levels_attach_to_nearest_shallower() {
        let mut b = TocBuilder::new();
        b.push(1, "Top");
        b.push(3, "Deep");
        b.push(2, "Middle");
        let toc = b.finish();

        assert_eq!(headings(&toc.roots[0].children), vec!["Deep", "Middle"]);
    }

    #[test]
    fn document_starting_below_h1_has_deeper_roots() {
        let mut b = TocBuilder::new();
        b.push(2, "A");
        b.push(1, "B");
        let toc = b.finish();

        assert_eq!(headings(&toc.roots), vec!["A", "B"]);
    }

    #[test]
    fn push_returns_unique_anchor() {
        let mut b = TocBuilder::new();
        assert_eq!(b.push(2, "Notes"), "notes");
        assert_eq!(b.push(2, "Notes"), "notes-1");
    }

    #[test]
    fn empty_builder_gives_empty_toc() {
        assert!(TocBuilder::new().finish().is_empty());
    }
}
