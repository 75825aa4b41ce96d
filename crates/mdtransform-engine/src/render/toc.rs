use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::{
    options::RenderOptions,
    toc::{Toc, TocNode},
};

/// Renders the table of contents as nested `<ul>` lists of `#anchor` links.
///
/// An empty table renders as the empty string.
pub fn render_toc(toc: &Toc, options: &RenderOptions) -> String {
    let mut out = String::new();
    let mut number = Vec::new();
    write_list(&mut out, &toc.roots, options, &mut number);
    out
}

fn write_list(
    out: &mut String,
    nodes: &[TocNode],
    options: &RenderOptions,
    number: &mut Vec<usize>,
) {
    if nodes.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for (idx, node) in nodes.iter().enumerate() {
        number.push(idx + 1);

        out.push_str("<li><a href=\"#");
        encode_double_quoted_attribute_to_string(&node.anchor_id, out);
        out.push_str("\">");
        if options.numbered_toc {
            for n in number.iter() {
                out.push_str(&n.to_string());
                out.push('.');
            }
            out.push(' ');
        }
        encode_text_to_string(&node.heading, out);
        out.push_str("</a>");
        write_list(out, &node.children, options, number);
        out.push_str("</li>");

        number.pop();
    }
    out.push_str("</ul>");
}
