//! Tag strategies describing how a node or mark type renders as HTML.
//!
//! A [`Tag`] produces the opening and closing markup for one type, given the
//! attributes of the node or mark being rendered. A type may be bound to
//! several tags (the default `table` binding renders
//! `<table><tbody>...</tbody></table>`): openings are emitted in binding
//! order, closings in reverse.
//!
//! # Example
//!
//! ```
//! use prosemirror2html::model::Attrs;
//! use prosemirror2html::tag::Tag;
//! use prosemirror2html::Result;
//!
//! /// Renders `callout` nodes as `<aside class="callout">`.
//! struct Callout;
//!
//! impl Tag for Callout {
//!     fn render_opening(&self, _attrs: &Attrs) -> Result<String> {
//!         Ok(r#"<aside class="callout">"#.to_string())
//!     }
//!
//!     fn render_closing(&self, _attrs: &Attrs) -> Result<String> {
//!         Ok("</aside>".to_string())
//!     }
//! }
//! ```

mod heading;
mod simple;

pub use heading::HeadingTag;
pub use simple::SimpleTag;

use crate::error::Result;
use crate::model::Attrs;

/// Trait for rendering the markup of one node or mark type.
///
/// Both methods receive the attributes of the node or mark being rendered.
/// Return an empty string to emit nothing. An error halts rendering and is
/// returned unchanged from the render call.
pub trait Tag: Send + Sync {
    /// Render the opening markup.
    fn render_opening(&self, attrs: &Attrs) -> Result<String>;

    /// Render the closing markup. Self-closing tags return an empty string.
    fn render_closing(&self, attrs: &Attrs) -> Result<String>;
}

/// Tag for `text` nodes: emits no markup, only the escaped text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTag;

impl Tag for TextTag {
    fn render_opening(&self, _attrs: &Attrs) -> Result<String> {
        Ok(String::new())
    }

    fn render_closing(&self, _attrs: &Attrs) -> Result<String> {
        Ok(String::new())
    }
}
