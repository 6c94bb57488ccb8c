//! Snapshot trait and version-directory states.
//!
//! # Set Identifiers
//!
//! All `set_id` parameters are documentation-set identifiers as they appear in
//! the manifest (`"core"`, `"api"`). Implementations map them to their own
//! storage layout; callers never build paths themselves.

/// State of a versioned snapshot directory for one version label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionContent {
    /// No snapshot directory exists for the version.
    Missing,
    /// The directory exists but holds no content files.
    Empty,
    /// The directory holds at least one content file.
    Populated,
}

impl VersionContent {
    /// True if the snapshot can be routed to.
    #[must_use]
    pub fn is_populated(self) -> bool {
        self == Self::Populated
    }
}

/// Read-only view of a documentation content tree.
///
/// Queries never fail: backends treat unreadable or absent locations as
/// "no content", so a broken entry excludes only itself.
pub trait ContentSnapshot: Send + Sync {
    /// Whether the set has at least one current (unversioned) content file.
    fn has_root_content(&self, set_id: &str) -> bool;

    /// State of the versioned snapshot for `version` of the set.
    fn versioned_content(&self, set_id: &str, version: &str) -> VersionContent;

    /// Whether the set ships its own sidebar definition.
    ///
    /// Default implementation returns `false` for backends without sidebars.
    fn has_sidebar(&self, set_id: &str) -> bool {
        let _ = set_id;
        false
    }
}

impl<T: ContentSnapshot + ?Sized> ContentSnapshot for &T {
    fn has_root_content(&self, set_id: &str) -> bool {
        (**self).has_root_content(set_id)
    }

    fn versioned_content(&self, set_id: &str, version: &str) -> VersionContent {
        (**self).versioned_content(set_id, version)
    }

    fn has_sidebar(&self, set_id: &str) -> bool {
        (**self).has_sidebar(set_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RootOnly;

    impl ContentSnapshot for RootOnly {
        fn has_root_content(&self, set_id: &str) -> bool {
            set_id == "core"
        }

        fn versioned_content(&self, _set_id: &str, _version: &str) -> VersionContent {
            VersionContent::Missing
        }
    }

    #[test]
    fn test_only_populated_is_routable() {
        assert!(VersionContent::Populated.is_populated());
        assert!(!VersionContent::Empty.is_populated());
        assert!(!VersionContent::Missing.is_populated());
    }

    #[test]
    fn test_has_sidebar_defaults_to_false() {
        assert!(!RootOnly.has_sidebar("core"));
    }

    #[test]
    fn test_reference_delegates() {
        let snapshot = &RootOnly;
        assert!(snapshot.has_root_content("core"));
        assert!(!snapshot.has_root_content("api"));
        assert_eq!(
            snapshot.versioned_content("core", "1.0"),
            VersionContent::Missing
        );
    }

    #[test]
    fn test_snapshot_is_object_safe() {
        let boxed: Box<dyn ContentSnapshot> = Box::new(RootOnly);
        assert!(boxed.has_root_content("core"));
    }
}
