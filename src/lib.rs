//! # Blocksmith
//!
//! A component-tree website builder with a static HTML/CSS/JS exporter.
//! A site is a document: an ordered tree of typed components (navbar,
//! container, text, button, footer) that you assemble with structural edit
//! operations and export to three plain files ready for any static host.
//!
//! # Architecture: Document → Mutate → Export
//!
//! Blocksmith keeps one JSON document per site and processes it through
//! three independent layers:
//!
//! ```text
//! 1. Document   site.json      →  component tree   (typed nodes + props)
//! 2. Mutate     edit ops       →  updated tree     (insert/move/delete/patch)
//! 3. Export     tree + config  →  dist/            (index.html, styles.css, script.js)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the document is human-readable JSON you can inspect
//!   and diff between edits.
//! - **Invariant safety**: every structural edit goes through one mutator
//!   that enforces the document rules (single navbar/footer, unique ids,
//!   clamped grid spans) — the exporter never sees a malformed tree.
//! - **Testability**: the exporter is a pure function from document to
//!   strings, so rendering tests never touch the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`document`] | Component tree data model: node kinds, the document, seeding, validation |
//! | [`props`] | Default prop bags per component kind, typed accessors, span clamping |
//! | [`walk`] | The one recursive tree-walk used by every find/patch/remove operation |
//! | [`mutate`] | Structural edits: insert, delete, reorder, prop patch — invariants enforced |
//! | [`export`] | Renders a document to `index.html` / `styles.css` / `script.js` using Maud |
//! | [`grid`] | Resize-drag state machine and pixel→grid-span snapping math |
//! | [`store`] | Named document snapshots in a local JSON manifest |
//! | [`deploy`] | Hosting seam: `HostProvider` trait plus a local directory host |
//! | [`config`] | `builder.toml` loading: site name and theme colors for the exported CSS |
//! | [`output`] | CLI output formatting — tree display of documents and export results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Exported HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro, rather than a runtime template engine:
//!
//! - **Compile-time checking**: malformed markup is a build error.
//! - **XSS-safe by default**: user-entered component text is auto-escaped.
//! - **Zero runtime files**: no template directory to ship alongside the binary.
//!
//! ## One Tree Walk
//!
//! Finding a node by id is needed by child insertion, deletion, prop
//! patching, and selection. Rather than each operation re-implementing the
//! recursion, [`walk`] provides the single search/remove primitives and the
//! mutator builds every operation on top of them.
//!
//! ## Ids Are a Document Counter
//!
//! Node ids come from a monotonic counter stored in the document
//! (`node-1`, `node-2`, …). The counter only ever grows, so ids are unique
//! for the life of the document and never reused after deletion — and a
//! given edit sequence always produces the same document, which keeps
//! export output diffable.
//!
//! ## Permissive Dangling Ids, Strict Invariants
//!
//! Operations aimed at an id that no longer exists are no-ops that report
//! [`mutate::Outcome::NoTarget`] — the CLI warns, nothing breaks. Edits
//! that would violate a document rule (deleting the navbar, nesting a
//! footer, dropping a child into a text node) are hard errors and leave the
//! tree untouched.
//!
//! # The Exported Site
//!
//! Output is plain HTML, one static stylesheet, and a few lines of vanilla
//! JavaScript. No framework, no build step on the published site — drop the
//! three files on any file server and the site works.

pub mod config;
pub mod deploy;
pub mod document;
pub mod export;
pub mod grid;
pub mod mutate;
pub mod output;
pub mod props;
pub mod store;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
