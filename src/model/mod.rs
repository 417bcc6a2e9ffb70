//! Document model types for ProseMirror content.
//!
//! This module defines the in-memory tree that the renderer consumes. It
//! mirrors ProseMirror's JSON document format: every element is a [`Node`]
//! with a `type`, optional attributes, optional children, optional inline
//! [`Mark`]s and optional text.

mod mark;
mod node;

pub use mark::Mark;
pub use node::{Node, DOC_TYPE};

use serde::{Deserialize, Deserializer};

/// Attribute map attached to nodes and marks.
///
/// Keys iterate in sorted order.
pub type Attrs = serde_json::Map<String, serde_json::Value>;

/// Deserialize a field treating JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
