//! Site document assembly.

use std::collections::BTreeMap;

use chrono::Datelike;
use docset_config::{SearchConfig, SiteConfig};
use docset_content::ContentSnapshot;
use docset_manifest::{Manifest, VersioningSettings};
use docset_resolver::{CURRENT_VERSION, ResolvedVersionConfig, SetResolution};

use crate::document::{
    DocsPlugin, Footer, Logo, Navbar, SearchSettings, SiteDocument, ThemeConfig, VersionOptions,
};
use crate::navigation::{footer_columns, navbar_items};

/// Policy for broken links and anchors in generated pages.
const BROKEN_LINK_POLICY: &str = "warn";

/// Builds a [`SiteDocument`] from resolved documentation sets.
///
/// # Example
///
/// ```ignore
/// let resolutions = resolve_all(&manifest.sets, |id| versions.load_or_empty(id), &snapshot);
/// let document = SiteBuilder::new(&manifest, &config.site)
///     .with_search(config.search.as_ref())
///     .build(&resolutions, &snapshot);
/// ```
pub struct SiteBuilder<'a> {
    manifest: &'a Manifest,
    site: &'a SiteConfig,
    search: Option<&'a SearchConfig>,
    year: Option<i32>,
}

impl<'a> SiteBuilder<'a> {
    #[must_use]
    pub fn new(manifest: &'a Manifest, site: &'a SiteConfig) -> Self {
        Self {
            manifest,
            site,
            search: None,
            year: None,
        }
    }

    /// Emit search settings for the configured search index.
    #[must_use]
    pub fn with_search(mut self, search: Option<&'a SearchConfig>) -> Self {
        self.search = search;
        self
    }

    /// Pin the copyright year (defaults to the current local year).
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Assemble the site document.
    ///
    /// Sets without a routing config are logged and left out of every part
    /// of the document.
    pub fn build<S>(&self, resolutions: &[SetResolution<'_>], snapshot: &S) -> SiteDocument
    where
        S: ContentSnapshot + ?Sized,
    {
        let settings = &self.manifest.settings;
        let branding = &settings.branding;

        for entry in resolutions {
            for warning in &entry.resolution.warnings {
                tracing::warn!(set = %entry.set.id, "{warning}");
            }
        }

        let published: Vec<&SetResolution<'_>> = resolutions
            .iter()
            .filter(|entry| {
                let published = entry.resolution.is_published();
                if !published {
                    tracing::warn!(set = %entry.set.id, "Skipping set without documentation");
                }
                published
            })
            .collect();

        let plugins: Vec<DocsPlugin> = published
            .iter()
            .filter_map(|entry| {
                let config = entry.resolution.config.as_ref()?;
                Some(docs_plugin(entry, config, &settings.versioning, snapshot))
            })
            .collect();

        tracing::info!(
            published = plugins.len(),
            total = resolutions.len(),
            "Resolved documentation sets"
        );

        let navbar_title = if branding.organization_name.is_empty() {
            branding.title.clone()
        } else {
            branding.organization_name.clone()
        };
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());

        SiteDocument {
            title: branding.title.clone(),
            tagline: branding.tagline.clone(),
            favicon: self.site.favicon.clone(),
            url: self.site.url.clone(),
            base_url: self.site.base_url.clone(),
            organization_name: branding.organization_name.clone(),
            project_name: self.site.project_name.clone(),
            deployment_branch: self.site.deployment_branch.clone(),
            trailing_slash: self.site.trailing_slash,
            on_broken_links: BROKEN_LINK_POLICY,
            on_broken_markdown_links: BROKEN_LINK_POLICY,
            plugins,
            theme_config: ThemeConfig {
                navbar: Navbar {
                    logo: Logo {
                        alt: format!("{navbar_title} Logo"),
                        src: self.site.logo.clone(),
                    },
                    title: navbar_title.clone(),
                    items: navbar_items(&published, settings),
                },
                footer: Footer {
                    style: "dark",
                    links: footer_columns(&published, settings),
                    copyright: format!("Copyright © {year} {navbar_title}. Built with docset."),
                },
                search: self.search.map(|search| SearchSettings {
                    app_id: search.app_id.clone(),
                    api_key: search.api_key.clone(),
                    index_name: search.index_name.clone(),
                    contextual_search: true,
                }),
            },
        }
    }
}

fn docs_plugin<S>(
    entry: &SetResolution<'_>,
    config: &ResolvedVersionConfig,
    versioning: &VersioningSettings,
    snapshot: &S,
) -> DocsPlugin
where
    S: ContentSnapshot + ?Sized,
{
    let set = entry.set;
    let sidebar_path = snapshot
        .has_sidebar(&set.id)
        .then(|| format!("./{}/sidebars.json", set.id));

    let mut versions = BTreeMap::new();
    if versioning.enabled && *config == ResolvedVersionConfig::CurrentAndVersions {
        versions.insert(
            CURRENT_VERSION.to_owned(),
            VersionOptions {
                label: versioning.current_label.clone(),
                path: versioning.current_path.clone(),
            },
        );
    }

    tracing::debug!(
        set = %set.id,
        mode = config.describe(),
        last_version = ?config.last_version(),
        valid_versions = ?entry.resolution.valid_versions,
        "Docs plugin"
    );

    DocsPlugin {
        id: set.id.clone(),
        path: set.id.clone(),
        route_base_path: set.id.clone(),
        sidebar_path,
        edit_url: set.edit_url.clone(),
        last_version: config.last_version().map(str::to_owned),
        include_current_version: config.include_current_version(),
        disable_versioning: config.disable_versioning(),
        versions,
    }
}
