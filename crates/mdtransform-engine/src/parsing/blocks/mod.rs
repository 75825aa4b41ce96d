//! # Block Parsing
//!
//! Line-at-a-time block parsing with a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Scanning** (`scan`): leading tabs/spaces are measured and
//!    stripped, giving an indentation level, a column width and a content span
//! 2. **Line Classification** (`classify`): the stripped remainder is
//!    classified by its leading marker into a `LineClass`
//! 3. **Block Construction** (`builder`): a `BlockBuilder` keeps the open
//!    containers on a stack and the open leaf (paragraph, item text, fence)
//!    aside, closing them as lines arrive
//!
//! ## Modules
//!
//! - **`scan`**: `scan_line` (Line Scanner)
//! - **`kinds`**: Block-specific types that own their markers
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`types`**: `ContainerFrame`
//! - **`containers`**: `ContainerStack` owning the open container nodes
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no classification or inline parsing inside
//! - Blank lines close the open paragraph, never a container
//! - Nesting is decided by indentation width relative to the open frames

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod scan;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use scan::{LineScan, scan_line};
pub use types::ContainerFrame;
