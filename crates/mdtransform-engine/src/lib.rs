pub mod error;
pub mod options;
pub mod parsing;
pub mod render;
pub mod toc;

// Re-export key types for easier usage
pub use error::ParseError;
pub use options::{DEFAULT_MAX_LINE_LENGTH, ParseOptions, RenderOptions};
pub use parsing::{
    Document, parse_document, parse_lines, parse_str,
    tree::{ListKind, Node, NodeKind},
};
pub use render::{Rendered, render_body, render_toc};
pub use toc::{Toc, TocNode};
