//! Rendering module for converting document trees to HTML.

mod escape;
mod html;
mod options;

pub use escape::escape_html;
pub use html::Renderer;
pub use options::{RenderOptions, DEFAULT_MAX_DEPTH};
