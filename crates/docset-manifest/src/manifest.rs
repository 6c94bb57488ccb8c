//! Top-level manifest (`repositories.json`).
//!
//! ```json
//! {
//!   "repositories": [
//!     { "id": "core", "label": "Core", "editUrl": "...", "githubUrl": "...",
//!       "category": "runtime", "display": "grouped", "enabled": true }
//!   ],
//!   "settings": {
//!     "versioning": { "enabled": true, "currentLabel": "Next", "currentPath": "next" },
//!     "branding": { "title": "...", "tagline": "...", "organizationName": "..." },
//!     "categories": [ { "id": "runtime", "label": "Runtime", "icon": "⚙️", "position": "left" } ]
//!   }
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// How a documentation set appears in the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Own navbar link.
    #[default]
    Toplevel,
    /// Entry in its category's dropdown.
    Grouped,
}

/// Navbar side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// One published unit of API documentation, backed by one source repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationSet {
    /// Unique key, also the URL path segment.
    pub id: String,
    /// Display label.
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Edit-URL template handed to the docs plugin.
    #[serde(default)]
    pub edit_url: Option<String>,
    /// Source repository URL.
    #[serde(default, rename = "githubUrl", alias = "repositoryUrl")]
    pub repository_url: Option<String>,
    /// Category id, used by [`DisplayMode::Grouped`] sets.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub display: DisplayMode,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Navbar category grouping several documentation sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub position: NavPosition,
}

/// Global versioning settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersioningSettings {
    /// When false, version dropdowns are never rendered.
    pub enabled: bool,
    /// Label of the current (unversioned) docs in version switchers.
    pub current_label: String,
    /// Route segment of the current docs.
    pub current_path: String,
}

impl Default for VersioningSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            current_label: "Next".to_owned(),
            current_path: "next".to_owned(),
        }
    }
}

/// Site branding strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    pub title: String,
    pub tagline: String,
    /// Organization name, also the GitHub organization slug.
    pub organization_name: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: "API Documentation".to_owned(),
            organization_name: String::new(),
        }
    }
}

/// Global manifest settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub versioning: VersioningSettings,
    pub branding: Branding,
    pub categories: Vec<CategoryDescriptor>,
}

impl Settings {
    /// Look up a category descriptor by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Top-level manifest: enabled documentation sets in display order plus settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Documentation sets; only enabled ones after loading.
    #[serde(rename = "repositories", default)]
    pub sets: Vec<DocumentationSet>,
    #[serde(default)]
    pub settings: Settings,
}

fn default_true() -> bool {
    true
}

impl Manifest {
    /// Load a manifest file.
    ///
    /// Disabled sets are dropped, as are sets whose id is not a single URL
    /// path segment or repeats an earlier enabled set's id. Each dropped set
    /// is logged; the remaining sets are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&content).map_err(|e| match e {
            ManifestError::Parse { source, .. } => ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            sets = ?manifest.set_ids(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Load a manifest, falling back to [`Manifest::default`] on any error.
    ///
    /// The fallback has no sets and default settings, so the rest of the site
    /// still builds.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load manifest, using empty configuration");
            Self::default()
        })
    }

    /// Parse manifest JSON, keeping only enabled sets with usable ids.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] (with an empty path).
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let mut manifest: Self =
            serde_json::from_str(content).map_err(|source| ManifestError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        manifest.retain_publishable_sets();
        Ok(manifest)
    }

    /// Identifiers of all sets, in manifest order.
    #[must_use]
    pub fn set_ids(&self) -> Vec<&str> {
        self.sets.iter().map(|set| set.id.as_str()).collect()
    }

    fn retain_publishable_sets(&mut self) {
        let mut seen = HashSet::new();
        self.sets.retain(|set| {
            if !set.enabled {
                return false;
            }
            if !is_path_segment(&set.id) {
                tracing::warn!(set = %set.id, "Dropping set: id must be a single URL path segment");
                return false;
            }
            if !seen.insert(set.id.clone()) {
                tracing::warn!(set = %set.id, label = %set.label, "Dropping set: duplicate id");
                return false;
            }
            true
        });
    }
}

fn is_path_segment(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r#"{
        "repositories": [
            {
                "id": "core",
                "label": "Core",
                "description": "Core runtime",
                "editUrl": "https://github.com/acme/core/edit/main/",
                "githubUrl": "https://github.com/acme/core",
                "enabled": true
            },
            {
                "id": "hal",
                "label": "HAL",
                "category": "drivers",
                "display": "grouped"
            },
            {
                "id": "legacy",
                "label": "Legacy",
                "enabled": false
            }
        ],
        "settings": {
            "versioning": { "enabled": true, "currentLabel": "Unreleased", "currentPath": "unreleased" },
            "branding": { "title": "Acme Docs", "tagline": "Components", "organizationName": "acme" },
            "categories": [
                { "id": "drivers", "label": "Drivers", "icon": "🔌", "position": "right" }
            ]
        }
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();

        assert_eq!(manifest.set_ids(), vec!["core", "hal"]);
        let core = &manifest.sets[0];
        assert_eq!(core.label, "Core");
        assert_eq!(core.description, "Core runtime");
        assert_eq!(
            core.edit_url.as_deref(),
            Some("https://github.com/acme/core/edit/main/")
        );
        assert_eq!(
            core.repository_url.as_deref(),
            Some("https://github.com/acme/core")
        );
        assert_eq!(core.display, DisplayMode::Toplevel);
        assert!(core.category.is_none());
    }

    #[test]
    fn test_set_defaults() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let hal = &manifest.sets[1];

        assert!(hal.enabled);
        assert_eq!(hal.display, DisplayMode::Grouped);
        assert_eq!(hal.category.as_deref(), Some("drivers"));
        assert!(hal.edit_url.is_none());
        assert_eq!(hal.description, "");
    }

    #[test]
    fn test_parse_settings() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let settings = &manifest.settings;

        assert_eq!(settings.versioning.current_label, "Unreleased");
        assert_eq!(settings.versioning.current_path, "unreleased");
        assert_eq!(settings.branding.organization_name, "acme");
        assert_eq!(
            settings.category("drivers"),
            Some(&CategoryDescriptor {
                id: "drivers".to_owned(),
                label: "Drivers".to_owned(),
                icon: Some("🔌".to_owned()),
                position: NavPosition::Right,
            })
        );
        assert!(settings.category("missing").is_none());
    }

    #[test]
    fn test_repository_url_alias() {
        let manifest = Manifest::from_json(
            r#"{"repositories": [{"id": "core", "label": "Core", "repositoryUrl": "https://example.com/core"}]}"#,
        )
        .unwrap();

        assert_eq!(
            manifest.sets[0].repository_url.as_deref(),
            Some("https://example.com/core")
        );
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let manifest = Manifest::from_json(r#"{"repositories": []}"#).unwrap();

        assert_eq!(manifest.settings, Settings::default());
        assert!(manifest.settings.versioning.enabled);
        assert_eq!(manifest.settings.versioning.current_label, "Next");
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let manifest = Manifest::from_json(
            r#"{"repositories": [
                {"id": "core", "label": "A"},
                {"id": "hal", "label": "HAL"},
                {"id": "core", "label": "B"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(manifest.set_ids(), vec!["core", "hal"]);
        assert_eq!(manifest.sets[0].label, "A");
    }

    #[test]
    fn test_duplicate_of_disabled_set_is_allowed() {
        let manifest = Manifest::from_json(
            r#"{"repositories": [{"id": "core", "label": "A", "enabled": false}, {"id": "core", "label": "B"}]}"#,
        )
        .unwrap();

        assert_eq!(manifest.sets.len(), 1);
        assert_eq!(manifest.sets[0].label, "B");
    }

    #[test]
    fn test_invalid_id_dropped() {
        for id in ["", "a/b", "..", "with space"] {
            let json = format!(
                r#"{{"repositories": [{{"id": "core", "label": "Core"}}, {{"id": "{id}", "label": "X"}}]}}"#
            );
            let manifest = Manifest::from_json(&json).unwrap();
            assert_eq!(manifest.set_ids(), vec!["core"], "id {id:?} should be dropped");
        }
    }

    #[test]
    fn test_load_or_default_keeps_sets_with_valid_ids() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("repositories.json");
        std::fs::write(
            &path,
            r#"{"repositories": [
                {"id": "core", "label": "Core"},
                {"id": "hal", "label": "HAL"},
                {"id": "esp idf", "label": "ESP-IDF"}
            ]}"#,
        )
        .unwrap();

        let manifest = Manifest::load_or_default(&path);

        assert_eq!(manifest.set_ids(), vec!["core", "hal"]);
    }

    #[test]
    fn test_malformed_json() {
        let result = Manifest::from_json("{ not json");
        assert!(matches!(result, Err(ManifestError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("repositories.json");
        std::fs::write(&path, MANIFEST).unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert_eq!(manifest.set_ids(), vec!["core", "hal"]);
    }

    #[test]
    fn test_load_parse_error_carries_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("repositories.json");
        std::fs::write(&path, "[]").unwrap();

        let err = Manifest::load(&path).unwrap_err();

        assert!(matches!(err, ManifestError::Parse { ref path, .. } if path.ends_with("repositories.json")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Manifest::load(Path::new("/nonexistent/repositories.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("repositories.json");
        std::fs::write(&path, "{ broken").unwrap();

        let manifest = Manifest::load_or_default(&path);

        assert_eq!(manifest, Manifest::default());
        assert!(manifest.sets.is_empty());
        assert_eq!(manifest.settings.versioning.current_path, "next");
    }
}
