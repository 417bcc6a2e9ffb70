//! Integration tests for custom tag registration.

use std::sync::Arc;

use prosemirror2html::model::Attrs;
use prosemirror2html::{Error, Renderer, Result, SimpleTag, Tag, TagRegistry};

/// Tag rendering `<div class="...">` from a `kind` attribute.
struct ClassTag;

impl Tag for ClassTag {
    fn render_opening(&self, attrs: &Attrs) -> Result<String> {
        let kind = attrs
            .get("kind")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Render("callout requires a kind".into()))?;
        Ok(format!(r#"<div class="callout-{}">"#, kind))
    }

    fn render_closing(&self, _attrs: &Attrs) -> Result<String> {
        Ok("</div>".to_string())
    }
}

/// Tag that always fails when closing.
struct BrokenClose;

impl Tag for BrokenClose {
    fn render_opening(&self, _attrs: &Attrs) -> Result<String> {
        Ok("<x>".to_string())
    }

    fn render_closing(&self, _attrs: &Attrs) -> Result<String> {
        Err(Error::Render("cannot close".into()))
    }
}

fn tag<T: Tag + 'static>(t: T) -> Arc<dyn Tag> {
    Arc::new(t)
}

#[test]
fn test_register_custom_node() {
    let mut renderer = Renderer::new();
    renderer.register_node("callout", [tag(ClassTag)]);

    let html = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"callout","attrs":{"kind":"warning"},"content":[{"type":"paragraph","content":[{"type":"text","text":"Careful"}]}]}]}"#)
        .unwrap();
    assert_eq!(html, r#"<div class="callout-warning"><p>Careful</p></div>"#);
}

#[test]
fn test_custom_tag_error_propagates() {
    let mut renderer = Renderer::new();
    renderer.register_node("callout", [tag(ClassTag)]);

    let err = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"callout"}]}]}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Render(ref msg) if msg == "callout requires a kind"));
}

#[test]
fn test_closing_error_propagates() {
    let mut renderer = Renderer::new();
    renderer.register_mark("broken", [tag(BrokenClose)]);

    let err = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"text","text":"x","marks":[{"type":"broken"}]}]}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Render(_)));
}

#[test]
fn test_override_default_node() {
    let mut renderer = Renderer::new();
    renderer.register_node("paragraph", [tag(SimpleTag::new("div"))]);

    let html = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"x"}]}]}"#)
        .unwrap();
    assert_eq!(html, "<div>x</div>");
}

#[test]
fn test_override_table_with_single_tag() {
    let mut renderer = Renderer::new();
    renderer.register_node("table", [tag(SimpleTag::new("table"))]);

    let html = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"table","content":[{"type":"table_row","content":[{"type":"table_cell","content":[{"type":"text","text":"1"}]}]}]}]}"#)
        .unwrap();
    assert_eq!(html, "<table><tr><td>1</td></tr></table>");
}

#[test]
fn test_multi_tag_mark() {
    let mut renderer = Renderer::new();
    renderer.register_mark(
        "kbd_code",
        [tag(SimpleTag::new("kbd")), tag(SimpleTag::new("code"))],
    );

    let html = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"text","text":"Ctrl","marks":[{"type":"kbd_code"},{"type":"bold"}]}]}"#)
        .unwrap();
    assert_eq!(html, "<kbd><code><strong>Ctrl</strong></code></kbd>");
}

#[test]
fn test_empty_tag_list_renders_children_only() {
    let mut renderer = Renderer::new();
    renderer.register_node("fragment", Vec::new());

    let html = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"fragment","content":[{"type":"text","text":"a"},{"type":"text","text":"b"}]}]}"#)
        .unwrap();
    assert_eq!(html, "ab");
}

#[test]
fn test_renderers_do_not_share_registries() {
    let mut custom = Renderer::new();
    custom.register_node("callout", [tag(ClassTag)]);
    let plain = Renderer::new();

    let input = r#"{"type":"doc","content":[{"type":"callout","attrs":{"kind":"tip"}}]}"#;
    assert!(custom.render_str(input).is_ok());
    assert!(matches!(
        plain.render_str(input),
        Err(Error::UnknownNode(_))
    ));
}

#[test]
fn test_empty_registry() {
    let renderer = Renderer::with_registry(TagRegistry::new());
    let err = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"text","text":"x"}]}"#)
        .unwrap_err();
    assert!(err.is_unknown_type());

    // the root itself needs no binding
    assert_eq!(renderer.render_str(r#"{"type":"doc"}"#).unwrap(), "");
}

#[test]
fn test_registry_mut() {
    let mut renderer = Renderer::new();
    renderer.registry_mut().unregister_mark("bold");

    let err = renderer
        .render_str(r#"{"type":"doc","content":[{"type":"text","text":"x","marks":[{"type":"bold"}]}]}"#)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownMark(ref name) if name == "bold"));
    assert!(!renderer.registry().mark_types().contains(&"bold"));
}

#[test]
fn test_tags_without_debug_register() {
    let mut registry = TagRegistry::new();
    registry.register_node("callout", [tag(ClassTag)]);
    registry.register_mark("broken", [tag(BrokenClose)]);

    let debug = format!("{:?}", registry);
    assert!(debug.contains("callout"));
    assert!(debug.contains("broken"));
}
