//! Inline marks.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Attrs};

/// An inline annotation wrapping the rendered output of a node.
///
/// See <https://prosemirror.net/docs/ref/#model.Mark>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark type name, used as registry key
    #[serde(rename = "type")]
    pub mark_type: String,

    /// Mark attributes
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attrs: Attrs,
}

impl Mark {
    /// Create a mark without attributes.
    pub fn new(mark_type: impl Into<String>) -> Self {
        Self {
            mark_type: mark_type.into(),
            attrs: Attrs::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Create a `link` mark pointing at `href`.
    pub fn link(href: impl Into<String>) -> Self {
        let href: String = href.into();
        Self::new("link").with_attr("href", href)
    }
}
