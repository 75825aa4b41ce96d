//! Whole-pipeline tests for the parsing module: lines in, trees out.

use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::{
    error::ParseError,
    options::ParseOptions,
    parsing::{
        parse_document, parse_lines, parse_str,
        snapshot::{invariants, outline, toc_outline},
    },
};

fn parse(md: &str) -> crate::parsing::Document {
    let doc = parse_str(md).unwrap();
    invariants(&doc);
    doc
}

#[test]
fn empty_document() {
    let doc = parse("");
    assert!(doc.root().children.is_empty());
    assert!(doc.toc().is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse("\n\n   \n\t\n");
    assert_eq!(outline(doc.root()), "(doc)");
}

#[test]
fn crlf_terminators_are_stripped() {
    let doc = parse("# Title\r\ntext\r\n");
    assert_eq!(
        outline(doc.root()),
        r#"(doc (h1#title "Title") (p "text"))"#
    );
}

#[test]
fn parse_lines_matches_parse_document() {
    let md = "# A\n\n- x\n  - y\n\n> q\n";
    let from_rope = parse_document(&Rope::from(md), &ParseOptions::default()).unwrap();
    let from_lines = parse_lines(md.lines(), &ParseOptions::default()).unwrap();
    assert_eq!(from_rope, from_lines);
}

#[test]
fn parse_lines_ignores_terminators() {
    let doc = parse_lines(["a\n", "b\r\n"], &ParseOptions::default()).unwrap();
    assert_eq!(outline(doc.root()), r#"(doc (p "a" br "b"))"#);
}

#[test]
fn oversized_line_is_rejected() {
    let options = ParseOptions { max_line_length: 8 };
    let err = parse_document(&Rope::from("short\nthis is too long\n"), &options).unwrap_err();
    assert_eq!(
        err,
        ParseError::InputTooLarge {
            line: 2,
            length: 16,
            limit: 8
        }
    );
}

#[test]
fn line_at_the_limit_is_accepted() {
    let options = ParseOptions { max_line_length: 5 };
    assert!(parse_lines(["12345"], &options).is_ok());
}

#[test]
fn toc_follows_heading_levels() {
    let doc = parse("# Intro\n## Setup\n## Usage\n# Reference\n");
    assert_eq!(
        toc_outline(doc.toc()),
        "(intro (setup) (usage)) (reference)"
    );
}

#[test]
fn toc_skipped_levels_nest_under_nearest_shallower() {
    let doc = parse("## Two\n#### Four\n### Three\n# One\n");
    assert_eq!(toc_outline(doc.toc()), "(two (four) (three)) (one)");
}

#[test]
fn quote_inside_list_item() {
    let doc = parse("- item\n  > quoted\n- next\n");
    assert_eq!(
        outline(doc.root()),
        r#"(doc (ul (li "item" (quote (p "quoted"))) (li "next")))"#
    );
}

#[test]
fn ordered_list_nested_in_bullets() {
    let doc = parse("- a\n    1. one\n    2. two\n- b\n");
    assert_eq!(
        outline(doc.root()),
        r#"(doc (ul (li "a" (ol (li "one") (li "two"))) (li "b")))"#
    );
}

#[test]
fn dedent_closes_several_levels() {
    let doc = parse("- a\n  - b\n    - c\n- d\n");
    assert_eq!(
        outline(doc.root()),
        r#"(doc (ul (li "a" (ul (li "b" (ul (li "c"))))) (li "d")))"#
    );
}

#[test]
fn fence_inside_quote_context_is_raw() {
    let doc = parse("```\n> not a quote\n- not a list\n```\n");
    assert_eq!(
        outline(doc.root()),
        r#"(doc (pre "> not a quote\n- not a list\n"))"#
    );
}

#[test]
fn heading_inline_markup_and_plain_toc_text() {
    let doc = parse("## Using `cargo` **fast**\n");
    assert_eq!(
        outline(doc.root()),
        r#"(doc (h2#using-cargo-fast "Using " (code "cargo") " " (strong "fast")))"#
    );
    assert_eq!(doc.toc().roots[0].heading, "Using cargo fast");
}
