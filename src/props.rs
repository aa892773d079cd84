//! Component property bags.
//!
//! Props are open key/value maps (`serde_json::Map`) rather than closed
//! structs: the recognized keys depend on the component kind, hand-edited
//! documents may carry extra keys, and the property panel patches the whole
//! bag at once. This module owns the default bag for each kind, the typed
//! accessors the exporter reads through, and grid-span clamping.
//!
//! ## Recognized Keys
//!
//! | Kind | Keys |
//! |------|------|
//! | navbar | `title`, `links` (label/url entries), `fixed` |
//! | footer | `links`, `social` (platform/url entries), `copyright` |
//! | container | `backgroundColor`, `padding`, `borderRadius`, `columns`, `gridColumnSpan`, `gridRowSpan` |
//! | text | `text`, `variant` (`heading1`..`heading3`, `paragraph`), `alignment`, `color`, `fontSize` |
//! | button | `text`, `url`, `variant`, `size`, `action` |
//!
//! Keys are camelCase to match the document JSON the drag-and-drop editor
//! produces.

use serde_json::{json, Map, Value};

use crate::document::ComponentKind;
use crate::grid;

/// An open property bag. Keys are camelCase strings.
pub type Props = Map<String, Value>;

/// Extract the object out of a `json!` literal.
fn obj(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}

/// The default prop bag for a freshly created node of `kind`.
///
/// Navbar and footer defaults are only used when seeding a new document;
/// the rest apply whenever a component is dropped onto the canvas.
pub fn default_props(kind: ComponentKind) -> Props {
    match kind {
        ComponentKind::Navbar => obj(json!({
            "title": "My Website",
            "links": [
                { "label": "Home", "url": "#" },
                { "label": "About", "url": "#about" },
                { "label": "Contact", "url": "#contact" },
            ],
            "fixed": false,
        })),
        ComponentKind::Footer => obj(json!({
            "links": [
                { "label": "Privacy", "url": "#" },
                { "label": "Terms", "url": "#" },
            ],
            "social": [
                { "platform": "twitter", "url": "#" },
                { "platform": "github", "url": "#" },
            ],
        })),
        ComponentKind::Container => obj(json!({
            "backgroundColor": "rgba(31,41,55,0.7)",
            "padding": "24px",
            "borderRadius": "8px",
            "columns": 1,
            "gridColumnSpan": grid::GRID_COLUMNS,
            "gridRowSpan": 2,
        })),
        ComponentKind::Text => obj(json!({
            "text": "Edit this text",
            "variant": "paragraph",
            "alignment": "left",
            "color": "#e5e7eb",
            "fontSize": "16px",
        })),
        ComponentKind::Button => obj(json!({
            "text": "Click Me",
            "url": "#",
            "variant": "primary",
            "size": "medium",
            "action": "link",
        })),
    }
}

// ============================================================================
// Typed accessors
// ============================================================================

/// Read a string prop, `None` if absent or not a string.
pub fn str_prop<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}

/// Read a boolean prop, `None` if absent or not a boolean.
pub fn bool_prop(props: &Props, key: &str) -> Option<bool> {
    props.get(key).and_then(Value::as_bool)
}

/// Read an integer prop, `None` if absent or not an integer.
pub fn int_prop(props: &Props, key: &str) -> Option<i64> {
    props.get(key).and_then(Value::as_i64)
}

/// Read a list of link-like entries: objects carrying `label_key` and `url`.
///
/// Used for navbar links (`label`/`url`) and footer social entries
/// (`platform`/`url`). Malformed entries are skipped rather than failing
/// the render.
pub fn link_entries(props: &Props, key: &str, label_key: &str) -> Vec<(String, String)> {
    let Some(Value::Array(entries)) = props.get(key) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let label = entry.get(label_key)?.as_str()?;
            let url = entry.get("url").and_then(Value::as_str).unwrap_or("#");
            Some((label.to_string(), url.to_string()))
        })
        .collect()
}

// ============================================================================
// Grid-span clamping
// ============================================================================

/// Clamp `gridColumnSpan`/`gridRowSpan` in place on container props.
///
/// Spans are clamped at every write (node creation and prop patching) so
/// the stored document always satisfies the layout bounds. Non-integer
/// span values are replaced by the minimum span.
pub fn clamp_spans(kind: ComponentKind, props: &mut Props) {
    if kind != ComponentKind::Container {
        return;
    }
    if let Some(value) = props.get_mut("gridColumnSpan") {
        let span = value.as_i64().map(grid::clamp_column_span).unwrap_or(1);
        *value = Value::from(span);
    }
    if let Some(value) = props.get_mut("gridRowSpan") {
        let span = value.as_i64().map(grid::clamp_row_span).unwrap_or(1);
        *value = Value::from(span);
    }
}

/// Report span values outside the layout bounds (for document validation).
///
/// Clamping at write time should make this unreachable, but hand-edited
/// JSON can carry anything.
pub fn span_violations(id: &str, props: &Props) -> Vec<String> {
    let mut issues = Vec::new();
    if let Some(span) = int_prop(props, "gridColumnSpan") {
        if !(1..=grid::GRID_COLUMNS as i64).contains(&span) {
            issues.push(format!(
                "container '{id}' gridColumnSpan {span} outside [1,{}]",
                grid::GRID_COLUMNS
            ));
        }
    }
    if let Some(span) = int_prop(props, "gridRowSpan") {
        if !(1..=grid::GRID_ROWS as i64).contains(&span) {
            issues.push(format!(
                "container '{id}' gridRowSpan {span} outside [1,{}]",
                grid::GRID_ROWS
            ));
        }
    }
    issues
}
