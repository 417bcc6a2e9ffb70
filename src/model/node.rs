//! Document tree nodes.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Attrs, Mark};

/// Type name of the document root node.
pub const DOC_TYPE: &str = "doc";

/// One element of the document tree.
///
/// See <https://prosemirror.net/docs/ref/#model.Node>. A node with non-empty
/// `content` is rendered as a container; otherwise its `text` is rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Node type name, used as registry key
    #[serde(rename = "type")]
    pub node_type: String,

    /// Node attributes
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attrs: Attrs,

    /// Child nodes
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content: Vec<Node>,

    /// Marks wrapping this node
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub marks: Vec<Mark>,

    /// Text payload of a leaf node
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub text: String,
}

impl Node {
    /// Create an empty node of the given type.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Create a document root node with the given children.
    pub fn doc(content: Vec<Node>) -> Self {
        Self::new(DOC_TYPE).with_content(content)
    }

    /// Create a `text` node.
    pub fn text(text: impl Into<String>) -> Self {
        let mut node = Self::new("text");
        node.text = text.into();
        node
    }

    /// Create a `paragraph` node with the given children.
    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::new("paragraph").with_content(content)
    }

    /// Create a `heading` node of the given level.
    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Self::new("heading")
            .with_attr("level", level)
            .with_content(content)
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Replace the children.
    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.content.push(child);
        self
    }

    /// Append a mark.
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    /// Check if this is the document root.
    pub fn is_doc(&self) -> bool {
        self.node_type == DOC_TYPE
    }

    /// Check if this node renders as a container.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Nesting depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.content.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Concatenated text of all leaves, without markup.
    pub fn plain_text(&self) -> String {
        if self.content.is_empty() {
            return self.text.clone();
        }
        self.content.iter().map(Node::plain_text).collect()
    }
}
