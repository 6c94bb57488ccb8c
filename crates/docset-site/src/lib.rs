//! Website configuration assembly for docset.
//!
//! This crate provides:
//! - [`SiteBuilder`]: turns resolved documentation sets into a [`SiteDocument`]
//! - [`SiteDocument`]: the serializable configuration object consumed by the
//!   website framework (docs plugins, navbar, footer, search)
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::{Path, PathBuf};
//! use docset_config::SiteConfig;
//! use docset_content_fs::FsSnapshot;
//! use docset_manifest::{Manifest, VersionManifest};
//! use docset_resolver::resolve_all;
//! use docset_site::SiteBuilder;
//!
//! let root = PathBuf::from("site");
//! let manifest = Manifest::load_or_default(&root.join("repositories.json"));
//! let versions = VersionManifest::new(root.clone());
//! let snapshot = FsSnapshot::new(root);
//!
//! let resolutions = resolve_all(&manifest.sets, |id| versions.load_or_empty(id), &snapshot);
//! let site = SiteConfig::default();
//! let document = SiteBuilder::new(&manifest, &site).build(&resolutions, &snapshot);
//! document.write_to(Path::new("build/site-config.json"))?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod document;
mod navigation;

pub use builder::SiteBuilder;
pub use document::{
    DocsPlugin, Footer, FooterColumn, Link, Logo, Navbar, NavbarItem, SearchSettings, SiteDocument,
    SiteError, ThemeConfig, VersionOptions,
};
