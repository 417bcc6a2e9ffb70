//! # prosemirror2html
//!
//! Render [ProseMirror](https://prosemirror.net/) JSON documents to HTML.
//!
//! Every node and mark type is resolved through a registry of [`tag::Tag`]
//! implementations. The defaults cover ProseMirror's basic schema (paragraphs,
//! headings, lists, tables, links, bold, ...), and custom types can be
//! registered or defaults overridden per [`Renderer`].
//!
//! ## Quick Start
//!
//! ```
//! let json = r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hello"}]}]}"#;
//! let html = prosemirror2html::render_str(json)?;
//! assert_eq!(html, "<p>Hello</p>");
//! # Ok::<(), prosemirror2html::Error>(())
//! ```
//!
//! ## Custom types
//!
//! ```
//! use prosemirror2html::tag::{SimpleTag, Tag};
//! use prosemirror2html::Renderer;
//! use std::sync::Arc;
//!
//! let mut renderer = Renderer::new();
//! renderer.register_node(
//!     "code_block",
//!     [
//!         Arc::new(SimpleTag::new("pre")) as Arc<dyn Tag>,
//!         Arc::new(SimpleTag::new("code")) as Arc<dyn Tag>,
//!     ],
//! );
//!
//! let html = renderer.render_str(
//!     r#"{"type":"doc","content":[{"type":"code_block","content":[{"type":"text","text":"x < y"}]}]}"#,
//! )?;
//! assert_eq!(html, "<pre><code>x &lt; y</code></pre>");
//! # Ok::<(), prosemirror2html::Error>(())
//! ```

pub mod error;
pub mod model;
pub mod registry;
pub mod render;
pub mod tag;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Attrs, Mark, Node};
pub use registry::TagRegistry;
pub use render::{escape_html, RenderOptions, Renderer};
pub use tag::{HeadingTag, SimpleTag, Tag, TextTag};

use std::path::Path;

/// Render a ProseMirror JSON document with the default types.
///
/// # Example
///
/// ```
/// let html = prosemirror2html::render(br#"{"type":"doc","content":[{"type":"text","text":"foo bar"}]}"#)?;
/// assert_eq!(html, "foo bar");
/// # Ok::<(), prosemirror2html::Error>(())
/// ```
pub fn render(data: &[u8]) -> Result<String> {
    Renderer::new().render(data)
}

/// Render a ProseMirror JSON document given as a string.
pub fn render_str(json: &str) -> Result<String> {
    Renderer::new().render_str(json)
}

/// Read a ProseMirror JSON file and render it.
///
/// # Example
///
/// ```no_run
/// let html = prosemirror2html::render_file("document.json")?;
/// std::fs::write("document.html", html)?;
/// # Ok::<(), prosemirror2html::Error>(())
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    log::debug!("Reading document from {}", path.display());
    let data = std::fs::read(path)?;
    render(&data)
}

/// Parse ProseMirror JSON into a node tree without rendering it.
pub fn parse_node(data: &[u8]) -> Result<Node> {
    Renderer::new().parse_node(data)
}
