//! # Inline Parsing
//!
//! Cursor-based inline parsing over the content of a single line.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-level scanning with run/lookahead helpers
//! - **`parser`**: `parse_inline()` main entry point with `try_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `*not em*` `` parses as a single InlineCode.
//! Link text is stored verbatim and never re-tokenized.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
