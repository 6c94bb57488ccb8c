//! Navbar and footer construction.

use docset_manifest::{DisplayMode, NavPosition, Settings};
use docset_resolver::SetResolution;

use crate::document::{FooterColumn, Link, NavbarItem};

/// Landing document every docs plugin exposes.
const INDEX_DOC_ID: &str = "index";

/// Route listing all versions of a set.
fn versions_route(set_id: &str) -> String {
    format!("/{set_id}/versions")
}

fn github_org_url(organization: &str) -> String {
    format!("https://github.com/{organization}")
}

fn doc_link(set_id: &str, label: &str) -> NavbarItem {
    NavbarItem::Doc {
        doc_id: INDEX_DOC_ID.to_owned(),
        docs_plugin_id: set_id.to_owned(),
        position: NavPosition::Left,
        label: label.to_owned(),
    }
}

/// Build navbar items for the published sets.
///
/// Order: top-level set links, category dropdowns (in descriptor order),
/// version dropdowns, organization link.
pub(crate) fn navbar_items(
    published: &[&SetResolution<'_>],
    settings: &Settings,
) -> Vec<NavbarItem> {
    let mut items = Vec::new();
    let mut grouped: Vec<(&str, Vec<Link>)> = settings
        .categories
        .iter()
        .map(|c| (c.id.as_str(), Vec::new()))
        .collect();

    for entry in published {
        let set = entry.set;
        let category = match (set.display, set.category.as_deref()) {
            (DisplayMode::Grouped, Some(category)) => grouped
                .iter_mut()
                .find(|(id, _)| *id == category)
                .map(|(_, links)| links),
            (DisplayMode::Grouped, None) => None,
            (DisplayMode::Toplevel, _) => {
                items.push(doc_link(&set.id, &set.label));
                continue;
            }
        };

        if let Some(links) = category {
            links.push(Link::internal(&set.label, format!("/{}", set.id)));
        } else {
            tracing::warn!(
                set = %set.id,
                category = ?set.category,
                "Grouped set has no known category, showing it as a top-level link"
            );
            items.push(doc_link(&set.id, &set.label));
        }
    }

    for (category_id, links) in grouped {
        if links.is_empty() {
            continue;
        }
        let Some(category) = settings.category(category_id) else {
            continue;
        };
        let label = match &category.icon {
            Some(icon) => format!("{icon} {}", category.label),
            None => category.label.clone(),
        };
        items.push(NavbarItem::Dropdown {
            label,
            position: category.position,
            items: links,
        });
    }

    if settings.versioning.enabled {
        for entry in published {
            if !entry.resolution.show_version_switcher() {
                tracing::debug!(
                    set = %entry.set.id,
                    routable = entry.resolution.routable_versions(),
                    "No version dropdown"
                );
                continue;
            }
            items.push(NavbarItem::DocsVersionDropdown {
                docs_plugin_id: entry.set.id.clone(),
                position: NavPosition::Right,
                dropdown_active_class_disabled: false,
                dropdown_items_after: vec![Link::internal(
                    "All versions",
                    versions_route(&entry.set.id),
                )],
            });
        }
    }

    let organization = &settings.branding.organization_name;
    if !organization.is_empty() {
        items.push(NavbarItem::Link {
            label: "GitHub".to_owned(),
            href: github_org_url(organization),
            position: NavPosition::Right,
        });
    }

    items
}

/// Build footer columns for the published sets.
pub(crate) fn footer_columns(
    published: &[&SetResolution<'_>],
    settings: &Settings,
) -> Vec<FooterColumn> {
    let documentation: Vec<Link> = published
        .iter()
        .map(|entry| {
            Link::internal(
                format!("{} API", entry.set.label),
                format!("/{}", entry.set.id),
            )
        })
        .collect();

    let repositories: Vec<Link> = published
        .iter()
        .filter_map(|entry| {
            let url = entry.set.repository_url.as_deref()?;
            Some(Link::external(&entry.set.label, url))
        })
        .collect();

    let mut more = Vec::new();
    let organization = &settings.branding.organization_name;
    if !organization.is_empty() {
        more.push(Link::external(
            "GitHub Organization",
            github_org_url(organization),
        ));
    }
    more.extend(
        published
            .iter()
            .filter(|entry| !entry.resolution.valid_versions.is_empty())
            .map(|entry| {
                Link::internal(
                    format!("{} Versions", entry.set.label),
                    versions_route(&entry.set.id),
                )
            }),
    );

    [
        ("Documentation", documentation),
        ("Repositories", repositories),
        ("More", more),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(title, items)| FooterColumn {
        title: title.to_owned(),
        items,
    })
    .collect()
}
