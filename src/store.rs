//! Named document snapshots.
//!
//! Lets a user save the document under a chosen name and restore it later —
//! the builder's equivalent of the browser editor's local key-value storage.
//! All snapshots live in one JSON manifest (`snapshots.json`) inside the
//! store directory.
//!
//! ## Semantics
//!
//! - Saving under an existing name overwrites that snapshot wholesale.
//! - There is no versioning or migration of individual snapshots; the
//!   manifest carries a single format version and a mismatch (or a corrupt
//!   or missing file) loads as an empty store rather than an error.
//! - Each snapshot records when it was saved (RFC 3339, UTC).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::document::Document;

/// Name of the snapshot manifest file within the store directory.
const MANIFEST_FILENAME: &str = "snapshots.json";

/// Version of the manifest format. Bump to invalidate existing stores when
/// the format changes.
const MANIFEST_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One saved document with its save timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub document: Document,
    pub created_at: String,
}

/// On-disk snapshot manifest mapping names to saved documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotStore {
    pub version: u32,
    pub snapshots: BTreeMap<String, Snapshot>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            snapshots: BTreeMap::new(),
        }
    }

    /// Load from the store directory. Returns an empty store if the
    /// manifest doesn't exist or can't be parsed (version mismatch,
    /// corruption).
    pub fn load(store_dir: &Path) -> Self {
        let path = store_dir.join(MANIFEST_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        let store: Self = match serde_json::from_str(&content) {
            Ok(s) => s,
            Err(_) => return Self::empty(),
        };
        if store.version != MANIFEST_VERSION {
            return Self::empty();
        }
        store
    }

    /// Save to the store directory, creating it if needed.
    pub fn save(&self, store_dir: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(store_dir)?;
        let path = store_dir.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Save `document` under `name`, overwriting any existing snapshot.
    pub fn insert(&mut self, name: &str, document: &Document) {
        self.snapshots.insert(
            name.to_string(),
            Snapshot {
                document: document.clone(),
                created_at: Utc::now().to_rfc3339(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Snapshot> {
        self.snapshots.get(name)
    }

    /// Remove the snapshot with `name`; reports whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.snapshots.remove(name).is_some()
    }

    /// Snapshot names in stable (alphabetical) order.
    pub fn names(&self) -> Vec<&str> {
        self.snapshots.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
