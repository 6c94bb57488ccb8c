//! Resolution results.

use std::fmt;

use serde::Serialize;

/// Route name the website framework uses for unversioned docs.
pub const CURRENT_VERSION: &str = "current";

/// How a published documentation set exposes its versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ResolvedVersionConfig {
    /// Only current docs; versioning disabled.
    CurrentOnly,
    /// Only versioned snapshots; the newest valid version is the default route.
    VersionsOnly {
        #[serde(rename = "lastVersion")]
        last_version: String,
    },
    /// Current docs plus versioned snapshots; current is the default route.
    CurrentAndVersions,
}

impl ResolvedVersionConfig {
    /// Default route version, `None` when versioning is disabled.
    #[must_use]
    pub fn last_version(&self) -> Option<&str> {
        match self {
            Self::CurrentOnly => None,
            Self::VersionsOnly { last_version } => Some(last_version),
            Self::CurrentAndVersions => Some(CURRENT_VERSION),
        }
    }

    #[must_use]
    pub fn include_current_version(&self) -> bool {
        !matches!(self, Self::VersionsOnly { .. })
    }

    #[must_use]
    pub fn disable_versioning(&self) -> bool {
        matches!(self, Self::CurrentOnly)
    }

    /// Short human-readable mode name.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::CurrentOnly => "current only",
            Self::VersionsOnly { .. } => "versions only",
            Self::CurrentAndVersions => "current + versions",
        }
    }
}

/// Non-fatal finding raised while resolving one set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolveWarning {
    /// A listed version has no snapshot directory.
    MissingVersionDirectory { version: String },
    /// A listed version has a snapshot directory without content files.
    EmptyVersionDirectory { version: String },
    /// A version is listed more than once; only the first entry counts.
    DuplicateVersion { version: String },
    /// Neither current docs nor a valid version exist.
    NoContent,
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVersionDirectory { version } => {
                write!(f, "version {version} is listed but its snapshot directory is missing")
            }
            Self::EmptyVersionDirectory { version } => {
                write!(f, "version {version} snapshot directory has no content files")
            }
            Self::DuplicateVersion { version } => {
                write!(f, "version {version} is listed more than once")
            }
            Self::NoContent => f.write_str("no documentation found"),
        }
    }
}

/// Outcome of resolving one documentation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Current (unversioned) docs exist.
    pub has_current: bool,
    /// Listed versions with populated snapshots, in manifest order.
    pub valid_versions: Vec<String>,
    /// Routing config, `None` when the set is excluded from publication.
    pub config: Option<ResolvedVersionConfig>,
    pub warnings: Vec<ResolveWarning>,
}

impl Resolution {
    /// Whether the set is published at all.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.config.is_some()
    }

    /// Number of versions a reader can route to, counting current docs.
    #[must_use]
    pub fn routable_versions(&self) -> usize {
        self.valid_versions.len() + usize::from(self.has_current)
    }

    /// Whether a version switcher control should render for the set.
    #[must_use]
    pub fn show_version_switcher(&self) -> bool {
        crate::show_version_switcher(self.has_current, &self.valid_versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_current_only_flags() {
        let config = ResolvedVersionConfig::CurrentOnly;

        assert_eq!(config.last_version(), None);
        assert!(config.include_current_version());
        assert!(config.disable_versioning());
    }

    #[test]
    fn test_versions_only_flags() {
        let config = ResolvedVersionConfig::VersionsOnly {
            last_version: "2.0".to_owned(),
        };

        assert_eq!(config.last_version(), Some("2.0"));
        assert!(!config.include_current_version());
        assert!(!config.disable_versioning());
    }

    #[test]
    fn test_current_and_versions_flags() {
        let config = ResolvedVersionConfig::CurrentAndVersions;

        assert_eq!(config.last_version(), Some("current"));
        assert!(config.include_current_version());
        assert!(!config.disable_versioning());
    }

    #[test]
    fn test_warning_display() {
        let missing = ResolveWarning::MissingVersionDirectory {
            version: "0.9".to_owned(),
        };
        let empty = ResolveWarning::EmptyVersionDirectory {
            version: "0.8".to_owned(),
        };

        assert!(missing.to_string().contains("0.9"));
        assert!(missing.to_string().contains("missing"));
        assert!(empty.to_string().contains("no content"));
        assert_eq!(ResolveWarning::NoContent.to_string(), "no documentation found");
    }

    #[test]
    fn test_resolution_serializes_camel_case() {
        let resolution = Resolution {
            has_current: false,
            valid_versions: vec!["1.0".to_owned()],
            config: Some(ResolvedVersionConfig::VersionsOnly {
                last_version: "1.0".to_owned(),
            }),
            warnings: vec![ResolveWarning::EmptyVersionDirectory {
                version: "0.9".to_owned(),
            }],
        };

        let json = serde_json::to_value(&resolution).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "hasCurrent": false,
                "validVersions": ["1.0"],
                "config": { "mode": "versions-only", "lastVersion": "1.0" },
                "warnings": [{ "kind": "empty-version-directory", "version": "0.9" }]
            })
        );
    }
}
