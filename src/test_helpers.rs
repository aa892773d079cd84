//! Shared test utilities for the blocksmith test suite.
//!
//! Provides the canonical fixture document, prop-bag literals, and
//! tree-shape extractors used across the unit tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let doc = sample_document();
//! assert_eq!(
//!     root_kinds(&doc),
//!     vec![ComponentKind::Navbar, ComponentKind::Container, ComponentKind::Footer],
//! );
//! ```

use serde_json::{json, Value};

use crate::document::{ComponentKind, ComponentNode, Document};
use crate::mutate::{insert_child, insert_root, patch_props};
use crate::props::Props;

/// Turn a `json!` object literal into a prop bag. Panics on non-objects.
pub fn props_of(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object for props, got {other}"),
    }
}

/// The canonical fixture: navbar "Test Website", one container holding a
/// "Hello World" heading, footer with a fixed copyright line.
///
/// This is the document the export fidelity tests assert against, built
/// through the real mutator so fixture and production paths never diverge.
pub fn sample_document() -> Document {
    let mut doc = Document::new();

    let navbar_id = doc.navbar().unwrap().id.clone();
    patch_props(
        &mut doc,
        &navbar_id,
        props_of(json!({
            "title": "Test Website",
            "links": [
                { "label": "Home", "url": "#" },
                { "label": "About", "url": "#about" },
            ],
            "fixed": false,
        })),
    )
    .unwrap();

    let container = doc.create_node(ComponentKind::Container);
    let container_id = container.id.clone();
    insert_root(&mut doc, container, None).unwrap();
    patch_props(
        &mut doc,
        &container_id,
        props_of(json!({
            "backgroundColor": "rgba(31,41,55,0.7)",
            "padding": "24px",
            "gridColumnSpan": 12,
            "gridRowSpan": 2,
        })),
    )
    .unwrap();

    let text = doc.create_node(ComponentKind::Text);
    let text_id = text.id.clone();
    insert_child(&mut doc, &container_id, text).unwrap();
    patch_props(
        &mut doc,
        &text_id,
        props_of(json!({ "text": "Hello World", "variant": "heading1" })),
    )
    .unwrap();

    let footer_id = doc.footer().unwrap().id.clone();
    patch_props(
        &mut doc,
        &footer_id,
        props_of(json!({
            "links": [ { "label": "Privacy", "url": "#" } ],
            "social": [ { "platform": "twitter", "url": "#" } ],
            "copyright": "© 2023 Test Website",
        })),
    )
    .unwrap();

    doc
}

/// Root node kinds in storage order.
pub fn root_kinds(doc: &Document) -> Vec<ComponentKind> {
    doc.nodes.iter().map(|n| n.kind).collect()
}

/// Ids of the movable content nodes, in order.
pub fn content_ids(doc: &Document) -> Vec<String> {
    doc.content().map(|n| n.id.clone()).collect()
}

/// Find a node by id anywhere in the tree. Panics with the available ids
/// on a miss.
pub fn find_node<'a>(doc: &'a Document, id: &str) -> &'a ComponentNode {
    doc.find(id).unwrap_or_else(|| {
        let mut ids = Vec::new();
        crate::walk::visit(&doc.nodes, &mut |node, _| ids.push(node.id.clone()));
        panic!("node '{id}' not found. Available: {ids:?}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_document_is_valid() {
        let doc = sample_document();
        assert!(doc.validate().is_empty());
        assert_eq!(
            root_kinds(&doc),
            vec![
                ComponentKind::Navbar,
                ComponentKind::Container,
                ComponentKind::Footer
            ]
        );
    }

    #[test]
    fn sample_document_has_nested_heading() {
        let doc = sample_document();
        let container_id = content_ids(&doc)[0].clone();
        let container = find_node(&doc, &container_id);
        assert_eq!(container.children.len(), 1);
        assert_eq!(container.children[0].kind, ComponentKind::Text);
    }
}
