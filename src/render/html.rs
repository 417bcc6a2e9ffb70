//! HTML rendering of ProseMirror documents.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Mark, Node};
use crate::registry::TagRegistry;
use crate::tag::Tag;

use super::{escape_html, RenderOptions};

/// HTML renderer holding the registered node and mark types.
///
/// Each renderer owns its registry. Configure it with the `register_*`
/// methods before rendering; rendering only needs `&self`, so a configured
/// renderer can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    registry: TagRegistry,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the default node and mark types registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer using the given registry.
    pub fn with_registry(registry: TagRegistry) -> Self {
        Self {
            registry,
            options: RenderOptions::default(),
        }
    }

    /// Set render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the registry.
    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Get the registry for modification.
    pub fn registry_mut(&mut self) -> &mut TagRegistry {
        &mut self.registry
    }

    /// Get the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Register a custom node type, overriding any existing binding.
    ///
    /// A node type may render several nested elements (the default `table`
    /// renders `<table><tbody>...</tbody></table>`), hence the tag list.
    pub fn register_node<I>(&mut self, node_type: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = Arc<dyn Tag>>,
    {
        self.registry.register_node(node_type, tags);
    }

    /// Register a custom mark type, overriding any existing binding.
    pub fn register_mark<I>(&mut self, mark_type: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = Arc<dyn Tag>>,
    {
        self.registry.register_mark(mark_type, tags);
    }

    /// Parse ProseMirror JSON into a node tree.
    ///
    /// The JSON parser stops at 128 nested JSON values. Each node level uses
    /// two (the node object and its `content` array), so input nested deeper
    /// than about 64 nodes fails with [`Error::Parse`] before
    /// [`RenderOptions::max_depth`] is consulted. Trees built in code are
    /// only bounded by `max_depth`.
    pub fn parse_node(&self, data: &[u8]) -> Result<Node> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Parse a ProseMirror JSON document and render its contents.
    pub fn render(&self, data: &[u8]) -> Result<String> {
        let root = self.parse_node(data)?;
        self.render_document(&root)
    }

    /// Render a ProseMirror JSON document given as a string.
    pub fn render_str(&self, json: &str) -> Result<String> {
        self.render(json.as_bytes())
    }

    /// Render a parsed document.
    ///
    /// The root must be a `doc` node. Only its children are rendered; the
    /// root itself produces no markup.
    pub fn render_document(&self, root: &Node) -> Result<String> {
        if !root.is_doc() {
            return Err(Error::NotADocument(root.node_type.clone()));
        }

        let mut output = String::new();
        for child in &root.content {
            self.render_into(child, 2, &mut output)?;
        }

        log::debug!(
            "Rendered document with {} top-level node(s) into {} bytes",
            root.content.len(),
            output.len()
        );
        Ok(output)
    }

    /// Render a single node as HTML.
    ///
    /// Renders the node's children if it has any, otherwise its escaped
    /// text. Fails on the first unknown node or mark type or failing tag.
    pub fn render_node(&self, node: &Node) -> Result<String> {
        let mut output = String::new();
        self.render_into(node, 1, &mut output)?;
        Ok(output)
    }

    /// Render several independent documents.
    ///
    /// Results are returned in input order. Uses rayon unless the renderer
    /// is configured as sequential.
    pub fn render_batch<T>(&self, inputs: &[T]) -> Vec<Result<String>>
    where
        T: AsRef<[u8]> + Sync,
    {
        log::debug!(
            "Rendering batch of {} document(s) (parallel: {})",
            inputs.len(),
            self.options.parallel
        );
        if self.options.parallel && inputs.len() > 1 {
            inputs
                .par_iter()
                .map(|input| self.render(input.as_ref()))
                .collect()
        } else {
            inputs
                .iter()
                .map(|input| self.render(input.as_ref()))
                .collect()
        }
    }

    fn render_into(&self, node: &Node, depth: usize, output: &mut String) -> Result<()> {
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                return Err(Error::DepthExceeded(max_depth));
            }
        }

        // opening tags of surrounding marks, outermost first
        let mut mark_tags: Vec<(&Mark, &[Arc<dyn Tag>])> = Vec::with_capacity(node.marks.len());
        for mark in &node.marks {
            let tags = self
                .registry
                .lookup_mark(&mark.mark_type)
                .ok_or_else(|| Error::UnknownMark(mark.mark_type.clone()))?;
            for tag in tags {
                output.push_str(&tag.render_opening(&mark.attrs)?);
            }
            mark_tags.push((mark, tags));
        }

        let tags = self
            .registry
            .lookup_node(&node.node_type)
            .ok_or_else(|| Error::UnknownNode(node.node_type.clone()))?;
        for tag in tags {
            output.push_str(&tag.render_opening(&node.attrs)?);
        }

        if node.has_content() {
            for child in &node.content {
                self.render_into(child, depth + 1, output)?;
            }
        } else {
            output.push_str(&escape_html(&node.text));
        }

        for tag in tags.iter().rev() {
            output.push_str(&tag.render_closing(&node.attrs)?);
        }

        // closing tags of marks, innermost first
        for (mark, tags) in mark_tags.iter().rev() {
            for tag in tags.iter().rev() {
                output.push_str(&tag.render_closing(&mark.attrs)?);
            }
        }

        log::trace!("Rendered node '{}' at depth {}", node.node_type, depth);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::SimpleTag;

    #[test]
    fn test_render_text_node() {
        let renderer = Renderer::new();
        assert_eq!(renderer.render_node(&Node::text("foo bar")).unwrap(), "foo bar");
        assert_eq!(renderer.render_node(&Node::text("")).unwrap(), "");
    }

    #[test]
    fn test_render_escapes_text() {
        let renderer = Renderer::new();
        let html = renderer.render_node(&Node::text("1 < 2 & 3")).unwrap();
        assert_eq!(html, "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn test_content_takes_precedence_over_text() {
        let renderer = Renderer::new();
        let mut node = Node::paragraph(vec![Node::text("child")]);
        node.text = "ignored".to_string();
        assert_eq!(renderer.render_node(&node).unwrap(), "<p>child</p>");
    }

    #[test]
    fn test_render_document_requires_doc_root() {
        let renderer = Renderer::new();
        let err = renderer
            .render_document(&Node::paragraph(vec![]))
            .unwrap_err();
        assert!(matches!(err, Error::NotADocument(ref t) if t == "paragraph"));
    }

    #[test]
    fn test_mark_tags_close_in_reverse() {
        let mut renderer = Renderer::new();
        renderer.register_mark(
            "highlight",
            [
                Arc::new(SimpleTag::new("mark")) as Arc<dyn Tag>,
                Arc::new(SimpleTag::new("span")) as Arc<dyn Tag>,
            ],
        );
        let node = Node::text("hi")
            .with_mark(Mark::new("bold"))
            .with_mark(Mark::new("highlight"));
        assert_eq!(
            renderer.render_node(&node).unwrap(),
            "<strong><mark><span>hi</span></mark></strong>"
        );
    }

    #[test]
    fn test_unknown_mark_checked_before_node() {
        let renderer = Renderer::new();
        let node = Node::new("mystery").with_mark(Mark::new("sparkle"));
        let err = renderer.render_node(&node).unwrap_err();
        assert!(matches!(err, Error::UnknownMark(ref t) if t == "sparkle"));
    }

    #[test]
    fn test_depth_limit() {
        let renderer = Renderer::new().with_options(RenderOptions::new().with_max_depth(3));
        let shallow = Node::doc(vec![Node::paragraph(vec![Node::text("ok")])]);
        assert_eq!(renderer.render_document(&shallow).unwrap(), "<p>ok</p>");

        let deep = Node::doc(vec![Node::new("blockquote")
            .with_child(Node::paragraph(vec![Node::text("too deep")]))]);
        let err = renderer.render_document(&deep).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded(3)));
    }

    #[test]
    fn test_without_depth_limit() {
        let mut node = Node::text("deep");
        for _ in 0..100 {
            node = Node::new("blockquote").with_child(node);
        }

        let limited = Renderer::new().with_options(RenderOptions::new().with_max_depth(50));
        assert!(matches!(
            limited.render_node(&node),
            Err(Error::DepthExceeded(50))
        ));

        let unlimited = Renderer::new().with_options(RenderOptions::new().without_depth_limit());
        let html = unlimited.render_node(&node).unwrap();
        assert!(html.starts_with("<blockquote><blockquote>"));
        assert!(html.contains("deep"));
    }

    #[test]
    fn test_without_depth_limit_very_deep() {
        // debug builds need more than the default test thread stack here
        let handle = std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(|| {
                let mut node = Node::text("deep");
                for _ in 0..1000 {
                    node = Node::new("blockquote").with_child(node);
                }
                let renderer =
                    Renderer::new().with_options(RenderOptions::new().without_depth_limit());
                let html = renderer.render_node(&node);
                let result = html.map(|h| h.matches("<blockquote>").count());
                // drop the tree on the big stack too
                drop(node);
                result
            })
            .unwrap();

        assert_eq!(handle.join().unwrap().unwrap(), 1000);
    }

    #[test]
    fn test_renderer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }
}
