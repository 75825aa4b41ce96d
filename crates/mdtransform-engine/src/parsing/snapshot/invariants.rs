use std::collections::HashSet;

use crate::{
    parsing::{
        Document,
        tree::{Node, NodeKind},
    },
    toc::{Toc, TocNode},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The root is a `Document` node and appears nowhere else
/// - `href`/`title` are empty except on Image and Link nodes
/// - Leaf kinds have no children
/// - Anchor ids are present on exactly the headings
/// - Every TOC child has a strictly deeper level than its parent
/// - Anchor ids are unique and each TOC entry points at a heading
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    let root = doc.root();
    assert_eq!(root.kind, NodeKind::Document, "root is not a Document node");

    let mut heading_ids = Vec::new();
    for child in &root.children {
        check_node(child, &mut heading_ids);
    }

    let mut seen = HashSet::new();
    for id in &heading_ids {
        assert!(seen.insert(id.as_str()), "duplicate anchor id: {id:?}");
    }

    check_toc(doc.toc(), &seen);
}

fn check_node(node: &Node, heading_ids: &mut Vec<String>) {
    assert_ne!(node.kind, NodeKind::Document, "nested Document node");
    if !node.kind.has_target() {
        assert!(
            node.href.is_empty() && node.title.is_empty(),
            "href/title set on {:?}: {:?} {:?}",
            node.kind,
            node.href,
            node.title
        );
    }
    if node.kind.is_leaf() {
        assert!(
            node.children.is_empty(),
            "leaf {:?} has {} children",
            node.kind,
            node.children.len()
        );
    }
    match (node.kind.heading_level(), &node.anchor_id) {
        (Some(level), Some(id)) => {
            assert!((1..=6).contains(&level), "heading level {level} out of range");
            assert!(!id.is_empty(), "empty anchor id on heading");
            heading_ids.push(id.clone());
        }
        (Some(level), None) => panic!("h{level} without anchor id"),
        (None, Some(id)) => panic!("anchor id {id:?} on non-heading {:?}", node.kind),
        (None, None) => {}
    }
    for child in &node.children {
        check_node(child, heading_ids);
    }
}

fn check_toc(toc: &Toc, heading_ids: &HashSet<&str>) {
    fn go(nodes: &[TocNode], parent_level: u8, heading_ids: &HashSet<&str>, count: &mut usize) {
        for node in nodes {
            assert!(
                node.level > parent_level,
                "toc entry {:?} (level {}) nested under level {}",
                node.heading,
                node.level,
                parent_level
            );
            assert!(
                heading_ids.contains(node.anchor_id.as_str()),
                "toc anchor {:?} has no heading",
                node.anchor_id
            );
            *count += 1;
            go(&node.children, node.level, heading_ids, count);
        }
    }

    let mut count = 0;
    go(&toc.roots, 0, heading_ids, &mut count);
    assert_eq!(
        count,
        heading_ids.len(),
        "toc has {count} entries for {} headings",
        heading_ids.len()
    );
}
