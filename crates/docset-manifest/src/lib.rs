//! Documentation-set manifest loading for docset.
//!
//! This crate provides:
//! - [`Manifest`]: the top-level `repositories.json` with its documentation
//!   sets and global settings
//! - [`VersionManifest`]: per-set `<id>_versions.json` version lists
//!
//! Both loaders come in a strict flavour returning [`ManifestError`] and a
//! degrading flavour (`load_or_default`, `load_or_empty`) that logs the
//! failure and substitutes a safe empty value, so one broken file never
//! blocks the rest of the site.

mod error;
mod manifest;
mod versions;

pub use error::ManifestError;
pub use manifest::{
    Branding, CategoryDescriptor, DisplayMode, DocumentationSet, Manifest, NavPosition, Settings,
    VersioningSettings,
};
pub use versions::VersionManifest;
