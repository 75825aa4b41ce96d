use serde::{Deserialize, Serialize};

/// Longest line accepted by the parser, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Lines longer than this (terminator excluded) reject the document.
    pub max_line_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Prefix table of contents entries with section numbers (`1.`, `1.2.`).
    pub numbered_toc: bool,
}
