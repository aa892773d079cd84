//! Static site export.
//!
//! Renders a [`Document`] into exactly three text artifacts ready for any
//! static host:
//!
//! - `index.html` — the component tree rendered to markup
//! - `styles.css` — theme custom properties + the static component stylesheet
//! - `script.js`  — a minimal DOM-ready hook
//!
//! [`export`] is a pure function: no network, no filesystem, no mutation of
//! the document. The same document, site name, and theme always produce
//! byte-identical output. Writing the bundle to disk (or handing it to a
//! host) is the caller's concern.
//!
//! ## Rendering
//!
//! Each component kind has one template function. The navbar renders before
//! `<main>` and the footer after it regardless of storage position; content
//! nodes render in document order, containers recursing into their children.
//! Per-node colors, padding, and alignment travel as inline `style=`
//! attributes pulled from props — the stylesheet itself is fixed boilerplate
//! embedded at compile time.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): templates are
//! type-safe Rust and all component text is auto-escaped.

use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::{self, SiteConfig};
use crate::document::{ComponentKind, ComponentNode, Document};
use crate::grid;
use crate::props::{bool_prop, int_prop, link_entries, str_prop, Props};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/site.css");
const JS_STATIC: &str = include_str!("../static/site.js");

pub const INDEX_FILE: &str = "index.html";
pub const STYLES_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";

/// The named text files produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    files: BTreeMap<String, String>,
}

impl ExportBundle {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Filename/content pairs in stable (alphabetical) order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<(), ExportError> {
        fs::create_dir_all(dir)?;
        for (name, content) in &self.files {
            fs::write(dir.join(name), content)?;
        }
        Ok(())
    }
}

/// Render `doc` into its three static files.
pub fn export(doc: &Document, site: &SiteConfig) -> ExportBundle {
    let mut files = BTreeMap::new();
    files.insert(INDEX_FILE.to_string(), render_page(doc, &site.name).into_string());
    files.insert(
        STYLES_FILE.to_string(),
        format!("{}\n\n{}", config::theme_css(&site.theme), CSS_STATIC),
    );
    files.insert(SCRIPT_FILE.to_string(), JS_STATIC.to_string());
    ExportBundle { files }
}

/// The full HTML document: navbar, main content grid, footer.
fn render_page(doc: &Document, site_name: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (site_name) }
                link rel="stylesheet" href=(STYLES_FILE);
            }
            body {
                @if let Some(navbar) = doc.navbar() {
                    (render_navbar(navbar))
                }
                main {
                    @for node in doc.content() {
                        (render_node(node))
                    }
                }
                @if let Some(footer) = doc.footer() {
                    (render_footer(footer))
                }
                script src=(SCRIPT_FILE) {}
            }
        }
    }
}

/// Render one content node, dispatching on kind.
///
/// Pinned kinds never appear in content, but render defensively anyway so
/// a hand-edited document still produces output instead of panicking.
fn render_node(node: &ComponentNode) -> Markup {
    match node.kind {
        ComponentKind::Container => render_container(node),
        ComponentKind::Text => render_text(node),
        ComponentKind::Button => render_button(node),
        ComponentKind::Navbar => render_navbar(node),
        ComponentKind::Footer => render_footer(node),
    }
}

fn render_navbar(node: &ComponentNode) -> Markup {
    let title = str_prop(&node.props, "title").unwrap_or("My Website");
    let fixed = bool_prop(&node.props, "fixed").unwrap_or(false);
    let links = link_entries(&node.props, "links", "label");

    html! {
        header.navbar.navbar-fixed[fixed] {
            nav {
                span.navbar-title { (title) }
                ul.navbar-links {
                    @for (label, url) in &links {
                        li { a href=(url) { (label) } }
                    }
                }
            }
        }
    }
}

fn render_footer(node: &ComponentNode) -> Markup {
    let links = link_entries(&node.props, "links", "label");
    let social = link_entries(&node.props, "social", "platform");
    let fallback;
    let copyright = match str_prop(&node.props, "copyright") {
        Some(text) if !text.is_empty() => text,
        _ => {
            fallback = format!("© {} My Website", chrono::Utc::now().year());
            &fallback
        }
    };

    html! {
        footer.footer {
            @if !links.is_empty() {
                ul.footer-links {
                    @for (label, url) in &links {
                        li { a href=(url) { (label) } }
                    }
                }
            }
            @if !social.is_empty() {
                div.footer-social {
                    @for (platform, url) in &social {
                        // Platform name doubles as label and class hook.
                        a class={ "social-link social-" (platform) } href=(url) { (platform) }
                    }
                }
            }
            p.footer-copyright { (copyright) }
        }
    }
}

fn render_container(node: &ComponentNode) -> Markup {
    html! {
        div.container style=(container_style(&node.props)) {
            @for child in &node.children {
                (render_node(child))
            }
        }
    }
}

fn render_text(node: &ComponentNode) -> Markup {
    let text = str_prop(&node.props, "text").unwrap_or("");
    let variant = str_prop(&node.props, "variant").unwrap_or("paragraph");
    let style = text_style(&node.props);

    html! {
        @match variant {
            "heading1" => { h1.text-block style=[style] { (text) } },
            "heading2" => { h2.text-block style=[style] { (text) } },
            "heading3" => { h3.text-block style=[style] { (text) } },
            _ => { p.text-block style=[style] { (text) } },
        }
    }
}

fn render_button(node: &ComponentNode) -> Markup {
    let text = str_prop(&node.props, "text").unwrap_or("Button");
    let url = str_prop(&node.props, "url").unwrap_or("#");
    let variant = str_prop(&node.props, "variant").unwrap_or("primary");
    let size = str_prop(&node.props, "size").unwrap_or("medium");

    html! {
        a class={ "btn btn-" (variant) " btn-" (size) } href=(url) { (text) }
    }
}

// ============================================================================
// Inline styles
// ============================================================================

/// Container inline style: surface props plus the grid span placement.
///
/// Spans are clamped again on the way out — the stored document should
/// already be in range, but layout never trusts that.
fn container_style(props: &Props) -> String {
    let mut parts = Vec::new();
    if let Some(color) = str_prop(props, "backgroundColor") {
        parts.push(format!("background-color: {color}"));
    }
    if let Some(padding) = str_prop(props, "padding") {
        parts.push(format!("padding: {padding}"));
    }
    if let Some(radius) = str_prop(props, "borderRadius") {
        parts.push(format!("border-radius: {radius}"));
    }
    let column_span = grid::clamp_column_span(int_prop(props, "gridColumnSpan").unwrap_or(12));
    let row_span = grid::clamp_row_span(int_prop(props, "gridRowSpan").unwrap_or(1));
    parts.push(format!("grid-column: span {column_span}"));
    parts.push(format!("grid-row: span {row_span}"));
    parts.join("; ")
}

/// Text inline style, `None` when no styling props are set.
fn text_style(props: &Props) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(alignment) = str_prop(props, "alignment") {
        parts.push(format!("text-align: {alignment}"));
    }
    if let Some(color) = str_prop(props, "color") {
        parts.push(format!("color: {color}"));
    }
    if let Some(size) = str_prop(props, "fontSize") {
        parts.push(format!("font-size: {size}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
