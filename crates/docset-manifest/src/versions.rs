//! Per-set version manifests (`<id>_versions.json`).

use std::path::{Path, PathBuf};

use crate::error::ManifestError;

/// Suffix of each set's version manifest file.
const VERSIONS_SUFFIX: &str = "_versions.json";

/// Reads version lists for documentation sets under one content root.
///
/// A version manifest is a JSON array of labels, newest first:
///
/// ```json
/// ["2.1", "2.0", "1.4"]
/// ```
#[derive(Debug, Clone)]
pub struct VersionManifest {
    root: PathBuf,
}

impl VersionManifest {
    /// Create a reader for manifests stored in `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the set's version manifest.
    #[must_use]
    pub fn path(&self, set_id: &str) -> PathBuf {
        self.root.join(format!("{set_id}{VERSIONS_SUFFIX}"))
    }

    /// Load the set's version labels in manifest order.
    ///
    /// A missing manifest means the set has no versions and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the file exists but cannot be read or is
    /// not a JSON array of strings.
    pub fn load(&self, set_id: &str) -> Result<Vec<String>, ManifestError> {
        let path = self.path(set_id);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(ManifestError::Io { path, source }),
        };
        let versions: Vec<String> =
            serde_json::from_str(&content).map_err(|source| ManifestError::Parse { path, source })?;

        tracing::debug!(set = set_id, ?versions, "Loaded version manifest");
        Ok(versions)
    }

    /// Load the set's version labels, treating any error as "no versions".
    ///
    /// The failure only affects this set.
    pub fn load_or_empty(&self, set_id: &str) -> Vec<String> {
        self.load(set_id).unwrap_or_else(|e| {
            tracing::warn!(set = set_id, error = %e, "Failed to load version manifest, assuming no versions");
            Vec::new()
        })
    }

    /// Content root the manifests are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
