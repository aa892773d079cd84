//! The one recursive tree walk.
//!
//! Child insertion, deletion, prop patching, and selection all need "find
//! the node with this id anywhere in the tree". They share these primitives
//! instead of each re-implementing the recursion.
//!
//! Search order matches the editor's drop-target resolution: the current
//! level is scanned in full before descending into any node's children, so
//! a root-level match always wins over a nested one.

use crate::document::ComponentNode;

/// Find a node by id: current level first, then each node's subtree.
pub fn find<'a>(nodes: &'a [ComponentNode], id: &str) -> Option<&'a ComponentNode> {
    if let Some(node) = nodes.iter().find(|n| n.id == id) {
        return Some(node);
    }
    for node in nodes {
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find`], same search order.
pub fn find_mut<'a>(nodes: &'a mut [ComponentNode], id: &str) -> Option<&'a mut ComponentNode> {
    let position = nodes.iter().position(|n| n.id == id);
    if let Some(position) = position {
        return Some(&mut nodes[position]);
    }
    for node in nodes {
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Detach and return the node with `id` from wherever it occurs.
///
/// Siblings keep their relative order; ancestors are untouched.
pub fn remove(nodes: &mut Vec<ComponentNode>, id: &str) -> Option<ComponentNode> {
    if let Some(position) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(position));
    }
    for node in nodes.iter_mut() {
        if let Some(removed) = remove(&mut node.children, id) {
            return Some(removed);
        }
    }
    None
}

/// Visit every node depth-first with its nesting depth (roots are depth 0).
pub fn visit<F: FnMut(&ComponentNode, usize)>(nodes: &[ComponentNode], f: &mut F) {
    visit_at(nodes, 0, f);
}

fn visit_at<F: FnMut(&ComponentNode, usize)>(nodes: &[ComponentNode], depth: usize, f: &mut F) {
    for node in nodes {
        f(node, depth);
        visit_at(&node.children, depth + 1, f);
    }
}
