//! Filesystem content snapshot for docset.
//!
//! This crate provides [`FsSnapshot`], a filesystem-based implementation of the
//! [`ContentSnapshot`](docset_content::ContentSnapshot) trait over a content
//! root laid out as:
//!
//! ```text
//! <id>/                               current docs
//! <id>/sidebars.json                  optional sidebar definition
//! <id>_versioned_docs/version-<v>/    versioned snapshot
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docset_content::ContentSnapshot;
//! use docset_content_fs::FsSnapshot;
//!
//! let snapshot = FsSnapshot::new(PathBuf::from("site"));
//! if snapshot.has_root_content("core") {
//!     println!("core has current docs");
//! }
//! ```

mod scanner;

use std::path::{Path, PathBuf};

use docset_content::{ContentSnapshot, VersionContent};
use scanner::{DirState, probe};

/// Suffix of the directory holding a set's versioned snapshots.
const VERSIONED_DOCS_SUFFIX: &str = "_versioned_docs";

/// Prefix of each versioned snapshot directory.
const VERSION_DIR_PREFIX: &str = "version-";

/// Sidebar definition filename inside a set's docs directory.
const SIDEBAR_FILENAME: &str = "sidebars.json";

/// Filesystem content snapshot.
///
/// Every query probes the filesystem directly; nothing is cached, so the
/// snapshot reflects the tree at call time.
#[derive(Debug, Clone)]
pub struct FsSnapshot {
    root: PathBuf,
}

impl FsSnapshot {
    /// Create a snapshot over a content root.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the set's current docs.
    ///
    /// Returns `None` for set ids that would escape the content root.
    #[must_use]
    pub fn docs_dir(&self, set_id: &str) -> Option<PathBuf> {
        is_single_component(set_id).then(|| self.root.join(set_id))
    }

    /// Directory holding all of the set's versioned snapshots.
    #[must_use]
    pub fn versioned_docs_dir(&self, set_id: &str) -> Option<PathBuf> {
        is_single_component(set_id)
            .then(|| self.root.join(format!("{set_id}{VERSIONED_DOCS_SUFFIX}")))
    }

    /// Directory holding one versioned snapshot.
    ///
    /// Returns `None` when either the set id or the version label would
    /// escape the content root.
    #[must_use]
    pub fn version_dir(&self, set_id: &str, version: &str) -> Option<PathBuf> {
        if !is_single_component(version) {
            return None;
        }
        self.versioned_docs_dir(set_id)
            .map(|dir| dir.join(format!("{VERSION_DIR_PREFIX}{version}")))
    }
}

/// Set ids and version labels must each stay a single path component.
fn is_single_component(value: &str) -> bool {
    !value.is_empty() && !value.contains(['/', '\\']) && !value.contains("..")
}

impl ContentSnapshot for FsSnapshot {
    fn has_root_content(&self, set_id: &str) -> bool {
        let Some(dir) = self.docs_dir(set_id) else {
            tracing::warn!(set = set_id, "Ignoring unsafe set id");
            return false;
        };
        probe(&dir) == DirState::Populated
    }

    fn versioned_content(&self, set_id: &str, version: &str) -> VersionContent {
        let Some(dir) = self.version_dir(set_id, version) else {
            tracing::warn!(set = set_id, version, "Ignoring unsafe set id or version label");
            return VersionContent::Missing;
        };
        match probe(&dir) {
            DirState::Missing => VersionContent::Missing,
            DirState::Empty => VersionContent::Empty,
            DirState::Populated => VersionContent::Populated,
        }
    }

    fn has_sidebar(&self, set_id: &str) -> bool {
        self.docs_dir(set_id)
            .is_some_and(|dir| dir.join(SIDEBAR_FILENAME).is_file())
    }
}
