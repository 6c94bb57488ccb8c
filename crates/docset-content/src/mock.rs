//! Mock snapshot implementation for testing.
//!
//! Provides [`MockSnapshot`] for unit testing without filesystem access.

use std::collections::{HashMap, HashSet};

use crate::snapshot::{ContentSnapshot, VersionContent};

/// Mock content snapshot for testing.
///
/// Stores content facts in memory. Use the builder methods to describe the
/// tree under test; anything not described reads as absent.
///
/// # Example
///
/// ```ignore
/// use docset_content::{ContentSnapshot, MockSnapshot, VersionContent};
///
/// let snapshot = MockSnapshot::new()
///     .with_current("core")
///     .with_version("core", "1.0")
///     .with_empty_version("core", "0.9");
///
/// assert_eq!(snapshot.versioned_content("core", "0.9"), VersionContent::Empty);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockSnapshot {
    current: HashSet<String>,
    versions: HashMap<(String, String), VersionContent>,
    sidebars: HashSet<String>,
}

impl MockSnapshot {
    /// Create a new empty mock snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the set as having current content.
    #[must_use]
    pub fn with_current(mut self, set_id: impl Into<String>) -> Self {
        self.current.insert(set_id.into());
        self
    }

    /// Add a populated versioned snapshot.
    #[must_use]
    pub fn with_version(self, set_id: impl Into<String>, version: impl Into<String>) -> Self {
        self.with_version_content(set_id, version, VersionContent::Populated)
    }

    /// Add a versioned snapshot directory that exists but has no content.
    #[must_use]
    pub fn with_empty_version(
        self,
        set_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.with_version_content(set_id, version, VersionContent::Empty)
    }

    /// Mark the set as shipping a sidebar definition.
    #[must_use]
    pub fn with_sidebar(mut self, set_id: impl Into<String>) -> Self {
        self.sidebars.insert(set_id.into());
        self
    }

    fn with_version_content(
        mut self,
        set_id: impl Into<String>,
        version: impl Into<String>,
        content: VersionContent,
    ) -> Self {
        self.versions
            .insert((set_id.into(), version.into()), content);
        self
    }
}

impl ContentSnapshot for MockSnapshot {
    fn has_root_content(&self, set_id: &str) -> bool {
        self.current.contains(set_id)
    }

    fn versioned_content(&self, set_id: &str, version: &str) -> VersionContent {
        self.versions
            .get(&(set_id.to_owned(), version.to_owned()))
            .copied()
            .unwrap_or(VersionContent::Missing)
    }

    fn has_sidebar(&self, set_id: &str) -> bool {
        self.sidebars.contains(set_id)
    }
}
