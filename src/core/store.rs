//! # Rule Store
//!
//! Reads and writes the two rule documents that live in the store root:
//!
//! ```text
//! <root>/allowed.json    {"permissions": {"allow": [...], "deny": []}}
//! <root>/blacklist.json  {"permissions": {"blacklist": [...]}}
//! ```
//!
//! Loading never fails from the caller's point of view: a missing file,
//! malformed JSON or a missing field all read as an empty list. Use
//! [`Store::try_load`] when the cause matters (tests, diagnostics).
//!
//! Saving sorts the items, pretty-prints with two-space indentation and a
//! trailing newline, and replaces the file via `.tmp` + `rename()`. There is
//! no locking and no merge with external edits: last writer wins.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::mode::Mode;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "rule file I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "rule file parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
        }
    }
}

impl StoreError {
    fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

// ============================================================================
// Document Shapes
// ============================================================================

#[derive(Serialize)]
struct AllowedDocument<'a> {
    permissions: AllowedPermissions<'a>,
}

/// `deny` is always written empty; external consumers expect the key.
#[derive(Serialize)]
struct AllowedPermissions<'a> {
    allow: &'a [String],
    deny: &'a [String],
}

#[derive(Serialize)]
struct BlacklistDocument<'a> {
    permissions: BlacklistPermissions<'a>,
}

#[derive(Serialize)]
struct BlacklistPermissions<'a> {
    blacklist: &'a [String],
}

// ============================================================================
// Store
// ============================================================================

/// File-backed persistence for both rule lists, rooted at an injected
/// directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document backing `mode`.
    pub fn path(&self, mode: Mode) -> PathBuf {
        self.root.join(mode.file_name())
    }

    /// Load the list for `mode`, sorted ascending. Any failure reads as empty.
    pub fn load(&self, mode: Mode) -> Vec<String> {
        match self.try_load(mode) {
            Ok(items) => items,
            Err(e) if e.is_not_found() => {
                debug!("No {} file at {}, using empty list", mode, self.path(mode).display());
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Treating {} as empty: {}",
                    self.path(mode).display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Load the list for `mode`, reporting why it could not be read.
    pub fn try_load(&self, mode: Mode) -> Result<Vec<String>, StoreError> {
        let path = self.path(mode);
        let json = fs::read_to_string(&path).map_err(StoreError::Io)?;
        let doc: Value = serde_json::from_str(&json).map_err(StoreError::Parse)?;
        // Only this mode's field is deserialized; the rest of the document is ignored.
        let mut items = match doc.get("permissions").and_then(|p| p.get(mode.field())) {
            Some(field) => Vec::<String>::deserialize(field).map_err(StoreError::Parse)?,
            None => Vec::new(),
        };
        items.sort();
        debug!("Loaded {} {} rules from {}", items.len(), mode, path.display());
        Ok(items)
    }

    /// Replace the document for `mode` with `items`, sorted ascending.
    pub fn save(&self, mode: Mode, items: &[String]) -> Result<(), StoreError> {
        let mut sorted = items.to_vec();
        sorted.sort();

        let mut json = match mode {
            Mode::Allowed => serde_json::to_string_pretty(&AllowedDocument {
                permissions: AllowedPermissions {
                    allow: &sorted,
                    deny: &[],
                },
            }),
            Mode::Blacklist => serde_json::to_string_pretty(&BlacklistDocument {
                permissions: BlacklistPermissions { blacklist: &sorted },
            }),
        }
        .map_err(StoreError::Parse)?;
        json.push('\n');

        let path = self.path(mode);
        fs::create_dir_all(&self.root).map_err(StoreError::Io)?;
        atomic_write(&path, &json).map_err(StoreError::Io)?;
        info!("Saved {} {} rules to {}", sorted.len(), mode, path.display());
        Ok(())
    }
}

/// Write `contents` to `path` via a `.tmp` sibling + rename. The sibling is
/// removed again if the rename fails.
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}
