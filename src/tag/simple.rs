//! Attribute-driven tag used by most default types.

use serde_json::Value;

use super::Tag;
use crate::error::Result;
use crate::model::Attrs;

/// A plain HTML element named `name`, rendering every attribute into the
/// opening tag.
///
/// The default `link` mark is a `SimpleTag` named `a`, so a link renders as
/// something like `<a href="https://wikipedia.org/" target="_blank">...</a>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTag {
    /// Element name
    pub name: String,

    /// If set, no closing tag is rendered
    pub self_closing: bool,
}

impl SimpleTag {
    /// Create a tag with a closing element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            self_closing: false,
        }
    }

    /// Create a tag without a closing element (`br`, `img`, ...).
    pub fn self_closing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            self_closing: true,
        }
    }
}

impl Tag for SimpleTag {
    /// Renders `<name key="value" ...>`. Numbers and booleans are written
    /// without quotes.
    fn render_opening(&self, attrs: &Attrs) -> Result<String> {
        let mut output = String::with_capacity(self.name.len() + 2);
        output.push('<');
        output.push_str(&self.name);
        for (key, value) in attrs {
            output.push_str(&format_attr(key, value));
        }
        output.push('>');
        Ok(output)
    }

    fn render_closing(&self, _attrs: &Attrs) -> Result<String> {
        if self.self_closing {
            return Ok(String::new());
        }
        Ok(format!("</{}>", self.name))
    }
}

fn format_attr(key: &str, value: &Value) -> String {
    match value {
        Value::Bool(b) => format!(" {}={}", key, b),
        Value::Number(n) => format!(" {}={}", key, format_number(n)),
        Value::String(s) => format!(" {}=\"{}\"", key, s),
        // arrays, objects and null fall back to their JSON text
        other => format!(" {}=\"{}\"", key, other),
    }
}

/// Integral floats (`1.0`) render as integers, like integer literals do.
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
