//! Route permissions and sidebar navigation.
//!
//! A static table maps each admin route path to the roles allowed to open
//! it; the sidebar is derived from the same table so navigation and access
//! control can never disagree. Unknown paths are denied for every role.

use once_cell::sync::Lazy;

use crate::roles::Role;

const ALL_ROLES: &[Role] = &[Role::Administrator, Role::ContentManager, Role::Reviewer];
const CONTENT_ROLES: &[Role] = &[Role::Administrator, Role::ContentManager];
const REVIEW_ROLES: &[Role] = &[Role::Administrator, Role::Reviewer];
const ADMIN_ONLY: &[Role] = &[Role::Administrator];

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label.
    pub label: &'static str,
    /// Route path.
    pub path: &'static str,
}

/// One titled group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    /// Section title.
    pub title: &'static str,
    /// Entries the current role may open.
    pub entries: Vec<NavEntry>,
}

struct RouteRule {
    path: &'static str,
    label: &'static str,
    section: &'static str,
    roles: &'static [Role],
}

static ROUTES: Lazy<Vec<RouteRule>> = Lazy::new(|| {
    vec![
        RouteRule {
            path: "/dashboard",
            label: "Dashboard",
            section: "Overview",
            roles: ALL_ROLES,
        },
        RouteRule {
            path: "/listings",
            label: "Listings",
            section: "Content",
            roles: CONTENT_ROLES,
        },
        RouteRule {
            path: "/listings/new",
            label: "New listing",
            section: "Content",
            roles: CONTENT_ROLES,
        },
        RouteRule {
            path: "/listings/edit",
            label: "Edit listing",
            section: "Content",
            roles: CONTENT_ROLES,
        },
        RouteRule {
            path: "/registrations",
            label: "Registrations",
            section: "Review",
            roles: REVIEW_ROLES,
        },
        RouteRule {
            path: "/categories",
            label: "Categories",
            section: "Administration",
            roles: ADMIN_ONLY,
        },
        RouteRule {
            path: "/users",
            label: "Users",
            section: "Administration",
            roles: ADMIN_ONLY,
        },
        RouteRule {
            path: "/settings",
            label: "Settings",
            section: "Administration",
            roles: ADMIN_ONLY,
        },
    ]
});

/// Returns the roles allowed to open `path`, or `None` for unknown paths.
pub fn allowed_roles(path: &str) -> Option<&'static [Role]> {
    ROUTES.iter().find(|r| r.path == path).map(|r| r.roles)
}

/// Returns `true` if `role` may open `path`. Unknown paths are denied.
pub fn can_access(role: Role, path: &str) -> bool {
    allowed_roles(path).is_some_and(|roles| roles.contains(&role))
}

/// Builds the ordered sidebar for a role.
///
/// Sections keep the table's order; sections with no accessible entries
/// are omitted.
pub fn navigation_for(role: Role) -> Vec<NavSection> {
    let mut sections: Vec<NavSection> = Vec::new();
    for rule in ROUTES.iter() {
        if !rule.roles.contains(&role) {
            continue;
        }
        let entry = NavEntry {
            label: rule.label,
            path: rule.path,
        };
        match sections.iter_mut().find(|s| s.title == rule.section) {
            Some(section) => section.entries.push(entry),
            None => sections.push(NavSection {
                title: rule.section,
                entries: vec![entry],
            }),
        }
    }
    sections
}
