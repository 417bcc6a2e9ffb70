//! Registry mapping node and mark type names to their tags.
//!
//! Nodes and marks live in independent namespaces: `code` may be bound as a
//! mark and as a node with different tags.
//!
//! # Example
//!
//! ```
//! use prosemirror2html::registry::TagRegistry;
//! use prosemirror2html::tag::{SimpleTag, Tag};
//! use std::sync::Arc;
//!
//! let mut registry = TagRegistry::with_defaults();
//! registry.register_node(
//!     "code_block",
//!     [
//!         Arc::new(SimpleTag::new("pre")) as Arc<dyn Tag>,
//!         Arc::new(SimpleTag::new("code")) as Arc<dyn Tag>,
//!     ],
//! );
//! assert!(registry.lookup_node("code_block").is_some());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::tag::{HeadingTag, SimpleTag, Tag, TextTag};

/// Ordered tags bound to one type name.
pub type TagList = Vec<Arc<dyn Tag>>;

/// Registry of node and mark tag bindings.
///
/// Cloning a registry is cheap; tags are shared behind `Arc`.
#[derive(Clone)]
pub struct TagRegistry {
    nodes: HashMap<String, TagList>,
    marks: HashMap<String, TagList>,
}

impl TagRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            marks: HashMap::new(),
        }
    }

    /// Create a registry with the default ProseMirror node and mark types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_node("text", [shared(TextTag)]);
        registry.register_node("paragraph", [element("p")]);
        registry.register_node("blockquote", [element("blockquote")]);
        registry.register_node("bullet_list", [element("ul")]);
        registry.register_node("heading", [shared(HeadingTag)]);
        registry.register_node("hard_break", [shared(SimpleTag::self_closing("br"))]);
        registry.register_node("image", [shared(SimpleTag::self_closing("img"))]);
        registry.register_node("list_item", [element("li")]);
        registry.register_node("ordered_list", [element("ol")]);
        registry.register_node("table", [element("table"), element("tbody")]);
        registry.register_node("table_cell", [element("td")]);
        registry.register_node("table_header", [element("th")]);
        registry.register_node("table_row", [element("tr")]);

        registry.register_mark("link", [element("a")]);
        registry.register_mark("bold", [element("strong")]);
        registry.register_mark("code", [element("code")]);
        registry.register_mark("italic", [element("em")]);
        registry.register_mark("strike", [element("s")]);
        registry.register_mark("subscript", [element("sub")]);
        registry.register_mark("superscript", [element("sup")]);
        registry.register_mark("underline", [element("u")]);

        registry
    }

    /// Register the tags for a node type.
    ///
    /// Replaces any existing binding, including defaults. Tags are rendered
    /// in the given order and closed in reverse.
    pub fn register_node<I>(&mut self, node_type: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = Arc<dyn Tag>>,
    {
        let node_type = node_type.into();
        let tags: TagList = tags.into_iter().collect();
        log::debug!("Registering node '{}' with {} tag(s)", node_type, tags.len());
        self.nodes.insert(node_type, tags);
    }

    /// Register the tags for a mark type.
    ///
    /// Replaces any existing binding, including defaults.
    pub fn register_mark<I>(&mut self, mark_type: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = Arc<dyn Tag>>,
    {
        let mark_type = mark_type.into();
        let tags: TagList = tags.into_iter().collect();
        log::debug!("Registering mark '{}' with {} tag(s)", mark_type, tags.len());
        self.marks.insert(mark_type, tags);
    }

    /// Remove a node binding, returning its tags.
    pub fn unregister_node(&mut self, node_type: &str) -> Option<TagList> {
        self.nodes.remove(node_type)
    }

    /// Remove a mark binding, returning its tags.
    pub fn unregister_mark(&mut self, mark_type: &str) -> Option<TagList> {
        self.marks.remove(mark_type)
    }

    /// Get the tags bound to a node type.
    pub fn lookup_node(&self, node_type: &str) -> Option<&[Arc<dyn Tag>]> {
        self.nodes.get(node_type).map(Vec::as_slice)
    }

    /// Get the tags bound to a mark type.
    pub fn lookup_mark(&self, mark_type: &str) -> Option<&[Arc<dyn Tag>]> {
        self.marks.get(mark_type).map(Vec::as_slice)
    }

    /// Registered node type names, sorted.
    pub fn node_types(&self) -> Vec<&str> {
        sorted_keys(&self.nodes)
    }

    /// Registered mark type names, sorted.
    pub fn mark_types(&self) -> Vec<&str> {
        sorted_keys(&self.marks)
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("nodes", &self.node_types())
            .field("marks", &self.mark_types())
            .finish()
    }
}

fn shared<T: Tag + 'static>(tag: T) -> Arc<dyn Tag> {
    Arc::new(tag)
}

fn element(name: &str) -> Arc<dyn Tag> {
    Arc::new(SimpleTag::new(name))
}

fn sorted_keys(map: &HashMap<String, TagList>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
