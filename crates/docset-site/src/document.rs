//! Serializable website configuration.
//!
//! Field names follow the website framework's camelCase configuration keys.

use std::collections::BTreeMap;
use std::path::Path;

use docset_manifest::NavPosition;
use serde::Serialize;

/// Error returned when the site document cannot be written.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize site configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Complete configuration object handed to the website framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    pub title: String,
    pub tagline: String,
    pub favicon: String,
    pub url: String,
    pub base_url: String,
    pub organization_name: String,
    pub project_name: String,
    pub deployment_branch: String,
    pub trailing_slash: bool,
    pub on_broken_links: &'static str,
    pub on_broken_markdown_links: &'static str,
    /// One docs plugin instance per published documentation set.
    pub plugins: Vec<DocsPlugin>,
    pub theme_config: ThemeConfig,
}

impl SiteDocument {
    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document as JSON, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] on serialization or I/O failure.
    pub fn write_to(&self, path: &Path) -> Result<(), SiteError> {
        let json = self.to_json_pretty()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json + "\n")?;
        Ok(())
    }
}

/// Docs plugin instance for one documentation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsPlugin {
    pub id: String,
    pub path: String,
    pub route_base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_version: Option<String>,
    pub include_current_version: bool,
    pub disable_versioning: bool,
    /// Per-version label/path overrides, keyed by version name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub versions: BTreeMap<String, VersionOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOptions {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub navbar: Navbar,
    pub footer: Footer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navbar {
    pub title: String,
    pub logo: Logo,
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// Navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NavbarItem {
    /// Link to a documentation set's landing page.
    Doc {
        doc_id: String,
        docs_plugin_id: String,
        position: NavPosition,
        label: String,
    },
    /// Category dropdown holding grouped documentation sets.
    Dropdown {
        label: String,
        position: NavPosition,
        items: Vec<Link>,
    },
    /// Version switcher for one documentation set.
    DocsVersionDropdown {
        docs_plugin_id: String,
        position: NavPosition,
        dropdown_active_class_disabled: bool,
        dropdown_items_after: Vec<Link>,
    },
    /// Plain link.
    #[serde(rename = "default")]
    Link {
        label: String,
        href: String,
        position: NavPosition,
    },
}

/// Internal (`to`) or external (`href`) link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Link {
    /// Link to a route inside the site.
    pub fn internal(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: Some(to.into()),
            href: None,
        }
    }

    /// Link to an external URL.
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: None,
            href: Some(href.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: &'static str,
    pub links: Vec<FooterColumn>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<Link>,
}

/// Search-index client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSettings {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    pub contextual_search: bool,
}
