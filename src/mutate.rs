//! Structural document edits.
//!
//! Every edit the builder performs — dropping a component onto the canvas,
//! dropping it into a container, deleting from the property panel,
//! drag-reordering sections, committing a property change — goes through
//! one of the five operations here. Each is a single synchronous call that
//! either applies atomically or leaves the document untouched.
//!
//! ## Failure Semantics
//!
//! Two distinct failure shapes, deliberately kept apart:
//!
//! - **Dangling ids** (the target node no longer exists): the operation is
//!   a no-op reporting [`Outcome::NoTarget`]. The CLI prints a warning;
//!   nothing else changes.
//! - **Rule violations** (deleting a pinned node, nesting a navbar,
//!   inserting into a non-container, duplicate navbar/footer, bad reorder
//!   index): a [`MutateError`] with a user-facing message. The document is
//!   left exactly as it was.

use thiserror::Error;

use crate::document::{ComponentKind, ComponentNode, Document};
use crate::props::{self, Props};
use crate::walk;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MutateError {
    #[error("the {0} cannot be deleted")]
    Pinned(ComponentKind),
    #[error("'{0}' is not a container — only containers accept children")]
    NotAContainer(String),
    #[error("a {0} cannot be nested inside a container")]
    PinnedNested(ComponentKind),
    #[error("the document already has a {0}")]
    DuplicatePinned(ComponentKind),
    #[error("reorder index {index} out of range (document has {len} movable sections)")]
    BadIndex { index: usize, len: usize },
}

/// Result of an edit that may target a node which no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The id resolved to nothing; the document was not changed.
    NoTarget,
}

impl Outcome {
    pub fn applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Insert `node` at root level.
///
/// `position` indexes into the movable content window (pinned nodes sit
/// outside it); out-of-range positions append. Inserting a navbar or footer
/// is only allowed when the document doesn't already have one, and storage
/// is re-normalized so it lands in its pinned slot.
pub fn insert_root(
    doc: &mut Document,
    node: ComponentNode,
    position: Option<usize>,
) -> Result<Outcome, MutateError> {
    if node.kind.is_pinned() {
        let already = doc.nodes.iter().any(|n| n.kind == node.kind);
        if already {
            return Err(MutateError::DuplicatePinned(node.kind));
        }
        doc.nodes.push(node);
        doc.normalize();
        return Ok(Outcome::Applied);
    }

    let window = content_window(doc);
    let index = match position {
        Some(p) => p.min(window.len()),
        None => window.len(),
    };
    let storage_index = window.get(index).copied().unwrap_or_else(|| {
        // Append: right before the footer if present, else at the end.
        match doc.nodes.last() {
            Some(last) if last.kind == ComponentKind::Footer => doc.nodes.len() - 1,
            _ => doc.nodes.len(),
        }
    });
    doc.nodes.insert(storage_index, node);
    Ok(Outcome::Applied)
}

/// Append `node` to the children of the container with `container_id`.
///
/// The container is searched at every nesting level. A dangling id is a
/// no-op; a resolved id that isn't a container is an error.
pub fn insert_child(
    doc: &mut Document,
    container_id: &str,
    node: ComponentNode,
) -> Result<Outcome, MutateError> {
    if node.kind.is_pinned() {
        return Err(MutateError::PinnedNested(node.kind));
    }
    let Some(target) = walk::find_mut(&mut doc.nodes, container_id) else {
        return Ok(Outcome::NoTarget);
    };
    if !target.kind.accepts_children() {
        return Err(MutateError::NotAContainer(container_id.to_string()));
    }
    target.children.push(node);
    Ok(Outcome::Applied)
}

/// Remove the node with `id` from wherever it occurs.
///
/// Pinned nodes are protected: attempting to delete the navbar or footer is
/// an error and the document is unchanged. Deleting the selected node
/// clears the selection.
pub fn delete_by_id(doc: &mut Document, id: &str) -> Result<Outcome, MutateError> {
    if let Some(target) = walk::find(&doc.nodes, id) {
        if target.kind.is_pinned() {
            return Err(MutateError::Pinned(target.kind));
        }
    }
    match walk::remove(&mut doc.nodes, id) {
        Some(_) => {
            if doc.selected.as_deref() == Some(id) {
                doc.selected = None;
            }
            Ok(Outcome::Applied)
        }
        None => Ok(Outcome::NoTarget),
    }
}

/// Move a root content node from `from` to `to`.
///
/// Both indexes address the movable content window only — the navbar and
/// footer sit outside it and are never affected by the index math.
pub fn reorder_root(doc: &mut Document, from: usize, to: usize) -> Result<Outcome, MutateError> {
    let window = content_window(doc);
    if from >= window.len() {
        return Err(MutateError::BadIndex {
            index: from,
            len: window.len(),
        });
    }
    if to >= window.len() {
        return Err(MutateError::BadIndex {
            index: to,
            len: window.len(),
        });
    }
    if from == to {
        return Ok(Outcome::Applied);
    }
    let node = doc.nodes.remove(window[from]);
    // Window indexes below the removal point are still valid; recompute
    // the destination against the shrunken window.
    let window = content_window(doc);
    let storage_index = window.get(to).copied().unwrap_or_else(|| {
        match doc.nodes.last() {
            Some(last) if last.kind == ComponentKind::Footer => doc.nodes.len() - 1,
            _ => doc.nodes.len(),
        }
    });
    doc.nodes.insert(storage_index, node);
    Ok(Outcome::Applied)
}

/// Replace the full prop bag of the node with `id`.
///
/// Full replace, not merge — the caller supplies the complete desired bag
/// (the property panel always holds the whole thing). Grid spans are
/// clamped before storing.
pub fn patch_props(doc: &mut Document, id: &str, new_props: Props) -> Result<Outcome, MutateError> {
    let Some(target) = walk::find_mut(&mut doc.nodes, id) else {
        return Ok(Outcome::NoTarget);
    };
    let mut new_props = new_props;
    props::clamp_spans(target.kind, &mut new_props);
    target.props = new_props;
    Ok(Outcome::Applied)
}

/// Select the node with `id` (or clear the selection with `None`).
pub fn select(doc: &mut Document, id: Option<&str>) -> Outcome {
    match id {
        Some(id) => {
            if walk::find(&doc.nodes, id).is_some() {
                doc.selected = Some(id.to_string());
                Outcome::Applied
            } else {
                Outcome::NoTarget
            }
        }
        None => {
            doc.selected = None;
            Outcome::Applied
        }
    }
}

/// Storage indexes of the movable content window, in order.
fn content_window(doc: &Document) -> Vec<usize> {
    doc.nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| !n.kind.is_pinned())
        .map(|(i, _)| i)
        .collect()
}
