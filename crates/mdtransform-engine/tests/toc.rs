use insta::assert_snapshot;
use mdtransform_engine::{
    Document, RenderOptions, parse_str,
    parsing::snapshot::{invariants, toc_outline},
    render_toc,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse(md: &str) -> Document {
    let doc = parse_str(md).expect("parse");
    invariants(&doc);
    doc
}

#[test]
fn heading_hierarchy() {
    let doc = parse("# Intro\n## Setup\n## Usage\n# Reference\n");
    let roots = &doc.toc().roots;
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].heading, "Intro");
    assert_eq!(
        roots[0]
            .children
            .iter()
            .map(|c| c.heading.as_str())
            .collect::<Vec<_>>(),
        vec!["Setup", "Usage"]
    );
    assert_eq!(roots[1].heading, "Reference");
    assert!(roots[1].children.is_empty());
}

#[rstest]
#[case::duplicates("# Notes\n# Notes", "(notes) (notes-1)")]
#[case::triplicates("## Notes\n## Notes\n## Notes", "(notes) (notes-1) (notes-2)")]
#[case::suffix_already_taken("# A 1\n# A\n# A", "(a-1) (a) (a-2)")]
#[case::empty_slug("# !!!\n# ???", "(section) (section-1)")]
#[case::unicode("# Übersicht", "(übersicht)")]
fn anchor_ids(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(toc_outline(parse(md).toc()), expected);
}

#[test]
fn heading_ids_match_toc_targets() {
    let doc = parse("# Notes\n\ntext\n\n# Notes\n");
    let rendered = doc.render(&RenderOptions::default());
    assert_snapshot!(rendered.body, @r#"<h1 id="notes">Notes</h1><p>text</p><h1 id="notes-1">Notes</h1>"#);
    assert_snapshot!(rendered.toc, @r##"<ul><li><a href="#notes">Notes</a></li><li><a href="#notes-1">Notes</a></li></ul>"##);
}

#[test]
fn heading_inside_list_item_is_listed() {
    let doc = parse("- item\n  # In list\n\n## After\n");
    assert_eq!(toc_outline(doc.toc()), "(in-list (after))");
}

#[test]
fn numbered_toc() {
    let doc = parse("# Intro\n## Setup\n### Deep\n## Usage\n# Reference\n");
    let html = render_toc(doc.toc(), &RenderOptions { numbered_toc: true });
    assert_snapshot!(html, @r##"<ul><li><a href="#intro">1. Intro</a><ul><li><a href="#setup">1.1. Setup</a><ul><li><a href="#deep">1.1.1. Deep</a></li></ul></li><li><a href="#usage">1.2. Usage</a></li></ul></li><li><a href="#reference">2. Reference</a></li></ul>"##);
}

#[test]
fn toc_text_is_escaped() {
    let doc = parse("# Fish & <Chips>\n");
    assert_eq!(doc.toc().roots[0].anchor_id, "fish-chips");
    assert_eq!(
        render_toc(doc.toc(), &RenderOptions::default()),
        r##"<ul><li><a href="#fish-chips">Fish &amp; &lt;Chips&gt;</a></li></ul>"##
    );
}

#[test]
fn document_without_headings_has_empty_toc() {
    let doc = parse("just text\n\n- and a list\n");
    assert!(doc.toc().is_empty());
    assert_eq!(doc.render(&RenderOptions::default()).toc, "");
}
