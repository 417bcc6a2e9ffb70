//! Heading tag driven by the `level` attribute.

use super::Tag;
use crate::error::{Error, Result};
use crate::model::Attrs;

/// Tag for `heading` nodes, rendering `<hN>...</hN>` from `attrs["level"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingTag;

impl HeadingTag {
    fn level(attrs: &Attrs) -> Result<i64> {
        let raw = attrs
            .get("level")
            .ok_or_else(|| Error::Render("heading has missing level attribute".into()))?;
        let level = raw
            .as_f64()
            .ok_or_else(|| Error::Render(format!("heading has non-numeric level attribute: {}", raw)))?;
        Ok(level as i64)
    }
}

impl Tag for HeadingTag {
    fn render_opening(&self, attrs: &Attrs) -> Result<String> {
        Ok(format!("<h{}>", Self::level(attrs)?))
    }

    fn render_closing(&self, attrs: &Attrs) -> Result<String> {
        Ok(format!("</h{}>", Self::level(attrs)?))
    }
}
