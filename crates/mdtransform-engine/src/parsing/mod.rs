pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use log::{debug, warn};
use serde::Serialize;
use xi_rope::Rope;

use crate::{error::ParseError, options::ParseOptions, toc::Toc};
use blocks::BlockBuilder;
use rope::{lines_with_spans, strip_terminator};
use tree::Node;

/// A parsed document: the block tree and its table of contents.
///
/// Built once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    root: Node,
    toc: Toc,
}

impl Document {
    /// The virtual `Document` node owning every top-level block.
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn toc(&self) -> &Toc {
        &self.toc
    }

    pub fn into_parts(self) -> (Node, Toc) {
        (self.root, self.toc)
    }
}

/// Parses a document held in a rope.
pub fn parse_document(rope: &Rope, options: &ParseOptions) -> Result<Document, ParseError> {
    let mut builder = BlockBuilder::new();
    for lr in lines_with_spans(rope) {
        check_length(lr.number, &lr.text, options)?;
        builder.push(&lr.text);
    }
    Ok(finish(builder))
}

/// Parses a sequence of lines. A trailing `\n` or `\r\n` on a line is ignored.
pub fn parse_lines<I>(lines: I, options: &ParseOptions) -> Result<Document, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut builder = BlockBuilder::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let text = strip_terminator(line.as_ref());
        check_length(idx + 1, text, options)?;
        builder.push(text);
    }
    Ok(finish(builder))
}

/// Parses `text` with the default options.
pub fn parse_str(text: &str) -> Result<Document, ParseError> {
    parse_document(&Rope::from(text), &ParseOptions::default())
}

fn check_length(line: usize, text: &str, options: &ParseOptions) -> Result<(), ParseError> {
    if text.len() <= options.max_line_length {
        return Ok(());
    }
    warn!(
        "rejecting line {line}: {} bytes exceeds limit of {}",
        text.len(),
        options.max_line_length
    );
    Err(ParseError::InputTooLarge {
        line,
        length: text.len(),
        limit: options.max_line_length,
    })
}

fn finish(builder: BlockBuilder) -> Document {
    let (root, toc) = builder.finish();
    debug!("parsed document with {} toc roots", toc.roots.len());
    Document { root, toc }
}
