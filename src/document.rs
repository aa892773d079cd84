//! Component tree data model.
//!
//! A [`Document`] is the ordered sequence of root components making up one
//! site. Two of the five component kinds are pinned: a navbar always renders
//! first and a footer always renders last, and neither can be deleted,
//! nested, or reordered. Everything between them is free-form content.
//!
//! ## Document Rules
//!
//! - At most one navbar and one footer, both at root level only.
//! - Every node id is unique across the whole tree.
//! - Only containers carry children.
//! - Container grid spans are stored pre-clamped to the layout grid
//!   (12 columns × 6 row units).
//!
//! [`Document::validate`] checks all of these; the mutator in
//! [`crate::mutate`] maintains them under edits.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::props::{self, Props};
use crate::walk;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The closed set of component kinds a document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Container,
    Text,
    Button,
    Navbar,
    Footer,
}

impl ComponentKind {
    /// Pinned kinds render at a fixed position (navbar first, footer last)
    /// and are protected from deletion, nesting, and reordering.
    pub fn is_pinned(self) -> bool {
        matches!(self, ComponentKind::Navbar | ComponentKind::Footer)
    }

    /// Only containers accept child components.
    pub fn accepts_children(self) -> bool {
        matches!(self, ComponentKind::Container)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Container => "container",
            ComponentKind::Text => "text",
            ComponentKind::Button => "button",
            ComponentKind::Navbar => "navbar",
            ComponentKind::Footer => "footer",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "container" => Ok(ComponentKind::Container),
            "text" => Ok(ComponentKind::Text),
            "button" => Ok(ComponentKind::Button),
            "navbar" => Ok(ComponentKind::Navbar),
            "footer" => Ok(ComponentKind::Footer),
            other => Err(format!(
                "unknown component kind '{other}' (expected container, text, button, navbar, or footer)"
            )),
        }
    }
}

/// One node in the component tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Opaque unique id, stable for the node's lifetime.
    pub id: String,
    pub kind: ComponentKind,
    /// Open key/value bag; recognized keys depend on `kind`.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Props,
    /// Ordered children — only ever populated on containers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

/// An editable site: the ordered root components plus session state.
///
/// Storage order is kept normalized — navbar first (if present), footer
/// last (if present), content in between — so rendering and reordering can
/// treat positions literally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<ComponentNode>,
    /// Monotonic id counter. Only ever grows, so ids are never reused.
    pub next_id: u64,
    /// Currently selected node, if any (cleared when that node is deleted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl Document {
    /// Create a new document seeded with a default navbar and footer.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            next_id: 0,
            selected: None,
        };
        let navbar = doc.create_node(ComponentKind::Navbar);
        let footer = doc.create_node(ComponentKind::Footer);
        doc.nodes.push(navbar);
        doc.nodes.push(footer);
        doc
    }

    /// Mint the next node id.
    pub fn mint_id(&mut self) -> String {
        self.next_id += 1;
        format!("node-{}", self.next_id)
    }

    /// Create a detached node of `kind` with a fresh id and default props.
    ///
    /// The node is not inserted — hand it to the mutator for that.
    pub fn create_node(&mut self, kind: ComponentKind) -> ComponentNode {
        let mut node_props = props::default_props(kind);
        props::clamp_spans(kind, &mut node_props);
        ComponentNode {
            id: self.mint_id(),
            kind,
            props: node_props,
            children: Vec::new(),
        }
    }

    /// The navbar, if the document has one.
    pub fn navbar(&self) -> Option<&ComponentNode> {
        self.nodes.iter().find(|n| n.kind == ComponentKind::Navbar)
    }

    /// The footer, if the document has one.
    pub fn footer(&self) -> Option<&ComponentNode> {
        self.nodes.iter().find(|n| n.kind == ComponentKind::Footer)
    }

    /// Root content nodes in order — everything that isn't pinned.
    pub fn content(&self) -> impl Iterator<Item = &ComponentNode> {
        self.nodes.iter().filter(|n| !n.kind.is_pinned())
    }

    /// Find a node by id anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        walk::find(&self.nodes, id)
    }

    /// Restore storage order: navbar first, footer last, content order kept.
    pub fn normalize(&mut self) {
        let nodes = std::mem::take(&mut self.nodes);
        let mut navbar = Vec::new();
        let mut content = Vec::new();
        let mut footer = Vec::new();
        for node in nodes {
            match node.kind {
                ComponentKind::Navbar => navbar.push(node),
                ComponentKind::Footer => footer.push(node),
                _ => content.push(node),
            }
        }
        self.nodes = navbar;
        self.nodes.extend(content);
        self.nodes.extend(footer);
    }

    /// Check every document rule, returning one message per violation.
    ///
    /// An empty result means the document is well-formed. Used by the
    /// `check` command and by tests after edit sequences.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let navbars = self
            .nodes
            .iter()
            .filter(|n| n.kind == ComponentKind::Navbar)
            .count();
        if navbars > 1 {
            issues.push(format!("document has {navbars} navbars (at most 1 allowed)"));
        }
        let footers = self
            .nodes
            .iter()
            .filter(|n| n.kind == ComponentKind::Footer)
            .count();
        if footers > 1 {
            issues.push(format!("document has {footers} footers (at most 1 allowed)"));
        }

        let mut seen = std::collections::HashSet::new();
        walk::visit(&self.nodes, &mut |node, depth| {
            if !seen.insert(node.id.clone()) {
                issues.push(format!("duplicate id '{}'", node.id));
            }
            if depth > 0 && node.kind.is_pinned() {
                issues.push(format!(
                    "{} '{}' is nested inside a container (pinned kinds are root-only)",
                    node.kind, node.id
                ));
            }
            if !node.children.is_empty() && !node.kind.accepts_children() {
                issues.push(format!(
                    "{} '{}' has children but only containers may",
                    node.kind, node.id
                ));
            }
            if node.kind == ComponentKind::Container {
                issues.extend(props::span_violations(&node.id, &node.props));
            }
        });

        issues
    }

    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        let mut doc: Document = serde_json::from_str(&content)?;
        doc.normalize();
        Ok(doc)
    }

    /// Save the document as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
