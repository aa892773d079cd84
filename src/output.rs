//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is component-centric: the primary display for every node is its
//! kind and a one-line summary of what it shows (title, text, spans), with
//! the node id in brackets as the handle for follow-up commands. Pinned
//! nodes print without positional indexes — only the movable content window
//! is numbered, and those numbers are exactly what `move` accepts.
//!
//! # Output Format
//!
//! ## Show
//!
//! ```text
//! navbar [node-1] My Website (3 links)
//! 001 container [node-3] 12×2 cols
//!     001 text [node-4] "Hello World"
//!     002 button [node-5] "Click Me" → #
//! 002 text [node-6] "Closing note"
//! footer [node-2] 2 links, 2 social
//! ```
//!
//! ## Export
//!
//! ```text
//! index.html (1523 bytes)
//! script.js (187 bytes)
//! styles.css (2411 bytes)
//! Exported 3 files to dist
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use std::path::Path;

use crate::document::{ComponentKind, ComponentNode, Document};
use crate::export::ExportBundle;
use crate::props::{int_prop, link_entries, str_prop};
use crate::store::SnapshotStore;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// One-line summary of what a node displays.
fn node_summary(node: &ComponentNode) -> String {
    match node.kind {
        ComponentKind::Navbar => {
            let title = str_prop(&node.props, "title").unwrap_or("(untitled)");
            let links = link_entries(&node.props, "links", "label").len();
            format!("{title} ({links} links)")
        }
        ComponentKind::Footer => {
            let links = link_entries(&node.props, "links", "label").len();
            let social = link_entries(&node.props, "social", "platform").len();
            format!("{links} links, {social} social")
        }
        ComponentKind::Container => {
            let cols = int_prop(&node.props, "gridColumnSpan").unwrap_or(12);
            let rows = int_prop(&node.props, "gridRowSpan").unwrap_or(1);
            format!("{cols}×{rows} cols")
        }
        ComponentKind::Text => {
            let text = str_prop(&node.props, "text").unwrap_or("");
            format!("\"{}\"", truncate(text, 40))
        }
        ComponentKind::Button => {
            let text = str_prop(&node.props, "text").unwrap_or("");
            let url = str_prop(&node.props, "url").unwrap_or("#");
            format!("\"{}\" → {}", truncate(text, 24), url)
        }
    }
}

/// One display line for a node at `depth`, with an optional content index.
fn node_line(node: &ComponentNode, index: Option<usize>, depth: usize, selected: bool) -> String {
    let marker = if selected { " *" } else { "" };
    match index {
        Some(i) => format!(
            "{}{} {} [{}] {}{}",
            indent(depth),
            format_index(i),
            node.kind,
            node.id,
            node_summary(node),
            marker
        ),
        None => format!(
            "{}{} [{}] {}{}",
            indent(depth),
            node.kind,
            node.id,
            node_summary(node),
            marker
        ),
    }
}

// ============================================================================
// Document tree
// ============================================================================

/// Format the document as an indented tree.
///
/// Root content nodes get 1-based indexes (the same indexes `move` takes);
/// pinned nodes print unnumbered at top and bottom. The selected node is
/// marked with `*`.
pub fn format_tree(doc: &Document) -> Vec<String> {
    let mut lines = Vec::new();
    let selected = doc.selected.as_deref();

    if let Some(navbar) = doc.navbar() {
        lines.push(node_line(navbar, None, 0, selected == Some(navbar.id.as_str())));
    }
    for (pos, node) in doc.content().enumerate() {
        push_subtree(node, Some(pos + 1), 0, selected, &mut lines);
    }
    if let Some(footer) = doc.footer() {
        lines.push(node_line(footer, None, 0, selected == Some(footer.id.as_str())));
    }
    if doc.content().count() == 0 {
        lines.push("(no content yet — try `blocksmith add container`)".to_string());
    }
    lines
}

fn push_subtree(
    node: &ComponentNode,
    index: Option<usize>,
    depth: usize,
    selected: Option<&str>,
    lines: &mut Vec<String>,
) {
    lines.push(node_line(node, index, depth, selected == Some(node.id.as_str())));
    for (pos, child) in node.children.iter().enumerate() {
        push_subtree(child, Some(pos + 1), depth + 1, selected, lines);
    }
}

pub fn print_tree(doc: &Document) {
    for line in format_tree(doc) {
        println!("{line}");
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format validation results: one line per issue, or a pass message.
pub fn format_check(issues: &[String]) -> Vec<String> {
    if issues.is_empty() {
        return vec!["Document is valid".to_string()];
    }
    let mut lines: Vec<String> = issues.iter().map(|i| format!("error: {i}")).collect();
    lines.push(format!("{} issue(s) found", issues.len()));
    lines
}

pub fn print_check(issues: &[String]) {
    for line in format_check(issues) {
        println!("{line}");
    }
}

// ============================================================================
// Export
// ============================================================================

/// Format an export result: each file with its size, then a summary line.
pub fn format_export(bundle: &ExportBundle, output_dir: &Path) -> Vec<String> {
    let mut lines: Vec<String> = bundle
        .files()
        .map(|(name, content)| format!("{} ({} bytes)", name, content.len()))
        .collect();
    lines.push(format!(
        "Exported {} files to {}",
        bundle.len(),
        output_dir.display()
    ));
    lines
}

pub fn print_export(bundle: &ExportBundle, output_dir: &Path) {
    for line in format_export(bundle, output_dir) {
        println!("{line}");
    }
}

// ============================================================================
// Snapshots
// ============================================================================

/// Format the snapshot list: name, node count, and save time per row.
pub fn format_snapshots(store: &SnapshotStore) -> Vec<String> {
    if store.is_empty() {
        return vec!["No snapshots saved".to_string()];
    }
    store
        .snapshots
        .iter()
        .map(|(name, snapshot)| {
            format!(
                "{} ({} nodes, saved {})",
                name,
                snapshot.document.nodes.len(),
                snapshot.created_at
            )
        })
        .collect()
}

pub fn print_snapshots(store: &SnapshotStore) {
    for line in format_snapshots(store) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::export::export;
    use crate::mutate::select;
    use crate::test_helpers::sample_document;

    #[test]
    fn tree_pins_navbar_first_and_footer_last() {
        let lines = format_tree(&sample_document());
        assert!(lines.first().unwrap().starts_with("navbar"));
        assert!(lines.last().unwrap().starts_with("footer"));
    }

    #[test]
    fn tree_numbers_content_but_not_pins() {
        let lines = format_tree(&sample_document());
        assert!(lines.iter().any(|l| l.starts_with("001 container")));
        assert!(!lines.iter().any(|l| l.contains("001 navbar")));
    }

    #[test]
    fn tree_indents_nested_children() {
        let lines = format_tree(&sample_document());
        // The Hello World text sits one level inside the container.
        let nested = lines.iter().find(|l| l.contains("Hello World")).unwrap();
        assert!(nested.starts_with("    001 text"));
    }

    #[test]
    fn tree_marks_selected_node() {
        let mut doc = sample_document();
        let container_id = doc.content().next().unwrap().id.clone();
        select(&mut doc, Some(&container_id));
        let lines = format_tree(&doc);
        let line = lines.iter().find(|l| l.contains(&container_id)).unwrap();
        assert!(line.ends_with(" *"));
    }

    #[test]
    fn empty_document_hints_at_add() {
        let lines = format_tree(&Document::new());
        assert!(lines.iter().any(|l| l.contains("no content yet")));
    }

    #[test]
    fn check_output_passes_clean_document() {
        assert_eq!(format_check(&[]), vec!["Document is valid".to_string()]);
    }

    #[test]
    fn check_output_lists_issues() {
        let lines = format_check(&["duplicate id 'node-3'".to_string()]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("error:"));
        assert!(lines[1].contains("1 issue(s)"));
    }

    #[test]
    fn export_output_lists_files_and_sizes() {
        let bundle = export(&sample_document(), &SiteConfig::named("Test Website"));
        let lines = format_export(&bundle, Path::new("dist"));
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("index.html ("));
        assert!(lines[3].contains("Exported 3 files to dist"));
    }

    #[test]
    fn snapshot_listing() {
        let mut store = SnapshotStore::empty();
        assert_eq!(format_snapshots(&store), vec!["No snapshots saved".to_string()]);
        store.insert("draft", &Document::new());
        let lines = format_snapshots(&store);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("draft (2 nodes"));
    }

    #[test]
    fn long_text_is_truncated_in_summaries() {
        let long = "x".repeat(120);
        assert_eq!(truncate(&long, 40).len(), 43);
        assert!(truncate("short", 40).len() == 5);
    }
}
