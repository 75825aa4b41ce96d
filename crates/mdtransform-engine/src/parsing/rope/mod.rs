pub mod lines;
pub mod span;

pub use lines::{LineRef, lines_with_spans, strip_terminator};
pub use span::Span;
