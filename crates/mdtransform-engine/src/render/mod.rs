//! # Rendering
//!
//! Pure functions from the two trees to HTML strings. Tag markup comes from
//! the fixed table in `tags`; the renderers hold no state of their own.

pub mod html;
pub mod tags;
pub mod toc;

use serde::Serialize;

use crate::{options::RenderOptions, parsing::Document};

pub use html::render_body;
pub use tags::{TagPair, tags};
pub use toc::render_toc;

/// The two HTML strings produced for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub body: String,
    pub toc: String,
}

impl Document {
    pub fn render(&self, options: &RenderOptions) -> Rendered {
        Rendered {
            body: render_body(self.root()),
            toc: render_toc(self.toc(), options),
        }
    }
}
