//! Documentation-set version resolution for docset.
//!
//! Decides, for each documentation set, whether it is published and how its
//! versions are routed. Resolution is a pure function of the set, its listed
//! versions and a [`ContentSnapshot`]: it performs no I/O of its own and
//! reports problems as [`ResolveWarning`] values instead of logging them.
//!
//! | current docs | valid versions | result |
//! |---|---|---|
//! | no | none | excluded (`config == None`) |
//! | yes | none | [`ResolvedVersionConfig::CurrentOnly`] |
//! | no | some | [`ResolvedVersionConfig::VersionsOnly`] (newest valid version) |
//! | yes | some | [`ResolvedVersionConfig::CurrentAndVersions`] |
//!
//! # Example
//!
//! ```ignore
//! use docset_content::MockSnapshot;
//! use docset_resolver::{resolve, ResolvedVersionConfig};
//!
//! let snapshot = MockSnapshot::new().with_current("core").with_version("core", "1.0");
//! let resolution = resolve(&set, &["1.0".to_owned()], &snapshot);
//! assert_eq!(resolution.config, Some(ResolvedVersionConfig::CurrentAndVersions));
//! ```

mod resolution;

use std::collections::HashSet;

use docset_content::{ContentSnapshot, VersionContent};
use docset_manifest::DocumentationSet;

pub use resolution::{CURRENT_VERSION, Resolution, ResolveWarning, ResolvedVersionConfig};

/// A documentation set paired with its resolution.
#[derive(Debug, Clone)]
pub struct SetResolution<'a> {
    pub set: &'a DocumentationSet,
    pub resolution: Resolution,
}

/// Resolve one documentation set.
///
/// `versions` is the set's version list, newest first. Labels whose snapshot
/// is missing or empty, and repeats of an earlier label, are dropped with a
/// warning.
pub fn resolve<S>(set: &DocumentationSet, versions: &[String], snapshot: &S) -> Resolution
where
    S: ContentSnapshot + ?Sized,
{
    let mut warnings = Vec::new();
    let has_current = snapshot.has_root_content(&set.id);
    let valid_versions = valid_versions(&set.id, versions, snapshot, &mut warnings);

    let config = match (has_current, valid_versions.first()) {
        (false, None) => {
            warnings.push(ResolveWarning::NoContent);
            None
        }
        (true, None) => Some(ResolvedVersionConfig::CurrentOnly),
        (false, Some(newest)) => Some(ResolvedVersionConfig::VersionsOnly {
            last_version: newest.clone(),
        }),
        (true, Some(_)) => Some(ResolvedVersionConfig::CurrentAndVersions),
    };

    Resolution {
        has_current,
        valid_versions,
        config,
        warnings,
    }
}

/// Resolve every enabled set, in manifest order.
///
/// `versions_for` supplies each set's version list; failures there should
/// degrade to an empty list so that one set cannot affect another. Excluded
/// sets are kept in the output with `config == None`.
pub fn resolve_all<'a, S, F>(
    sets: &'a [DocumentationSet],
    versions_for: F,
    snapshot: &S,
) -> Vec<SetResolution<'a>>
where
    S: ContentSnapshot + ?Sized,
    F: Fn(&str) -> Vec<String>,
{
    sets.iter()
        .filter(|set| set.enabled)
        .map(|set| {
            let versions = versions_for(&set.id);
            SetResolution {
                set,
                resolution: resolve(set, &versions, snapshot),
            }
        })
        .collect()
}

/// Whether a version switcher control should render.
///
/// True only if more than one version is routable, counting current docs.
/// Independent of the routing case table: a set with versioning enabled but a
/// single routable version gets no switcher.
#[must_use]
pub fn show_version_switcher(has_current: bool, valid_versions: &[String]) -> bool {
    valid_versions.len() + usize::from(has_current) > 1
}

fn valid_versions<S>(
    set_id: &str,
    versions: &[String],
    snapshot: &S,
    warnings: &mut Vec<ResolveWarning>,
) -> Vec<String>
where
    S: ContentSnapshot + ?Sized,
{
    let mut seen = HashSet::new();
    versions
        .iter()
        .filter(|version| {
            if !seen.insert(version.as_str()) {
                warnings.push(ResolveWarning::DuplicateVersion {
                    version: (*version).clone(),
                });
                return false;
            }
            match snapshot.versioned_content(set_id, version) {
                VersionContent::Populated => true,
                VersionContent::Empty => {
                    warnings.push(ResolveWarning::EmptyVersionDirectory {
                        version: (*version).clone(),
                    });
                    false
                }
                VersionContent::Missing => {
                    warnings.push(ResolveWarning::MissingVersionDirectory {
                        version: (*version).clone(),
                    });
                    false
                }
            }
        })
        .cloned()
        .collect()
}
