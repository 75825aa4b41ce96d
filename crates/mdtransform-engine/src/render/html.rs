use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::parsing::tree::{Node, NodeKind};

use super::tags::tags;

/// Renders a block tree to an HTML fragment.
///
/// Pure: the same tree always yields the same string. Nothing is added
/// between tags, so the output is a single run of markup.
pub fn render_body(root: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root);
    out
}

fn write_node(out: &mut String, node: &Node) {
    let tag = tags(node.kind);
    match node.kind {
        NodeKind::Image => {
            out.push_str(tag.open);
            write_attr(out, "src", &node.href);
            out.push(' ');
            write_attr(out, "alt", &node.title);
            out.push(' ');
            out.push_str(tag.close);
        }
        NodeKind::Link => {
            out.push_str(tag.open);
            write_attr(out, "href", &node.href);
            if !node.title.is_empty() {
                out.push(' ');
                write_attr(out, "title", &node.title);
            }
            out.push('>');
            encode_text_to_string(&node.text, out);
            out.push_str(tag.close);
        }
        NodeKind::Heading(_) => {
            out.push_str(tag.open.trim_end());
            if let Some(id) = &node.anchor_id {
                out.push(' ');
                write_attr(out, "id", id);
            }
            out.push('>');
            write_children(out, node);
            out.push_str(tag.close);
        }
        kind if kind.is_leaf() => {
            out.push_str(tag.open);
            encode_text_to_string(&node.text, out);
            out.push_str(tag.close);
        }
        _ => {
            out.push_str(tag.open);
            write_children(out, node);
            out.push_str(tag.close);
        }
    }
}

fn write_children(out: &mut String, node: &Node) {
    for child in &node.children {
        write_node(out, child);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str("=\"");
    encode_double_quoted_attribute_to_string(value, out);
    out.push('"');
}
