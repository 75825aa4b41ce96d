use crate::{
    parsing::tree::{Node, NodeKind},
    toc::{Toc, TocNode},
};

/// Compact S-expression of a tree, for one-line structural assertions.
///
/// Text is a quoted string, containers are `(tag children...)`, headings
/// carry their anchor as `h2#id`:
///
/// ```text
/// (doc (h1#intro "Intro") (ul (li "a" (ul (li "b"))) (li "c")))
/// ```
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write(&mut out, node);
    out
}

/// The TOC as nested `(anchor children...)` groups, roots space-separated.
pub fn toc_outline(toc: &Toc) -> String {
    fn go(out: &mut Vec<String>, nodes: &[TocNode]) {
        for node in nodes {
            let mut parts = vec![node.anchor_id.clone()];
            go(&mut parts, &node.children);
            out.push(format!("({})", parts.join(" ")));
        }
    }

    let mut roots = Vec::new();
    go(&mut roots, &toc.roots);
    roots.join(" ")
}

fn tag(kind: NodeKind) -> String {
    match kind {
        NodeKind::Document => "doc".into(),
        NodeKind::Paragraph => "p".into(),
        NodeKind::UnorderedList => "ul".into(),
        NodeKind::OrderedList => "ol".into(),
        NodeKind::ListItem => "li".into(),
        NodeKind::Emphasis => "em".into(),
        NodeKind::Strong => "strong".into(),
        NodeKind::HorizontalRule => "hr".into(),
        NodeKind::LineBreak => "br".into(),
        NodeKind::Image => "img".into(),
        NodeKind::Link => "a".into(),
        NodeKind::Quote => "quote".into(),
        NodeKind::Heading(level) => format!("h{level}"),
        NodeKind::CodeBlock => "pre".into(),
        NodeKind::InlineCode => "code".into(),
        NodeKind::Text => "text".into(),
    }
}

fn write(out: &mut String, node: &Node) {
    match node.kind {
        NodeKind::Text => out.push_str(&format!("{:?}", node.text)),
        NodeKind::HorizontalRule | NodeKind::LineBreak => out.push_str(&tag(node.kind)),
        NodeKind::InlineCode | NodeKind::CodeBlock => {
            out.push_str(&format!("({} {:?})", tag(node.kind), node.text))
        }
        NodeKind::Image => out.push_str(&format!("(img {:?} {:?})", node.title, node.href)),
        NodeKind::Link if node.title.is_empty() => {
            out.push_str(&format!("(a {:?} {:?})", node.text, node.href))
        }
        NodeKind::Link => out.push_str(&format!(
            "(a {:?} {:?} {:?})",
            node.text, node.href, node.title
        )),
        kind => {
            out.push('(');
            out.push_str(&tag(kind));
            if let Some(id) = &node.anchor_id {
                out.push('#');
                out.push_str(id);
            }
            for child in &node.children {
                out.push(' ');
                write(out, child);
            }
            out.push(')');
        }
    }
}
