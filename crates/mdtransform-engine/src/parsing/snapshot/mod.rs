//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via structural assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a tree as a compact S-expression so tests can
//!   assert structure in one line
//! - **`invariants`**: Runtime checks for parser correctness (attributes only
//!   where they belong, childless leaves, TOC levels, unique anchors)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::{outline, toc_outline};
