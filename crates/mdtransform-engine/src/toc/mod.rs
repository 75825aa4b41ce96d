//! # Table of Contents
//!
//! A heading hierarchy kept apart from the block tree. `TocBuilder` is fed
//! by the block builder each time a heading is closed and assigns the
//! anchor id that both trees share.

pub mod builder;
pub mod slug;
pub mod types;

pub use builder::TocBuilder;
pub use slug::{AnchorRegistry, slugify};
pub use types::{Toc, TocNode};
