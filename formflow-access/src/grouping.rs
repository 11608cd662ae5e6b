//! Category grouping and display labels.
//!
//! Partitions a flat permission list into per-category groups, keeping the
//! first-seen order of categories and sorting each group by the permission
//! `order` field (stable, so catalog order breaks ties).

use formflow_types::Permission;
use serde::{Deserialize, Serialize};

/// Category assigned to permissions whose raw category key is empty.
pub const FALLBACK_CATEGORY: &str = "Other";

/// One display group: the raw category key, its formatted label, and the
/// permissions in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub key: String,
    pub label: String,
    pub permissions: Vec<Permission>,
}

/// Formats a raw category key for display.
///
/// The `admin` category (any casing) maps to the fixed product label
/// "Access to Manage"; every other key is title-cased with the same prefix,
/// so `"workflow"` and `"WORKFLOW"` both become "Access to Workflow". The
/// exact strings are load-bearing: saved UI snapshots and translation keys
/// in the admin console match on them.
pub fn format_category_label(key: &str) -> String {
    if key.eq_ignore_ascii_case("admin") {
        return "Access to Manage".to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => format!(
            "Access to {}{}",
            first.to_uppercase(),
            chars.as_str().to_lowercase()
        ),
        None => "Access to ".to_string(),
    }
}

/// Partitions permissions into category groups.
///
/// Categories appear in first-seen input order; within each group the
/// permissions are sorted ascending by `order` with a stable sort, so equal
/// `order` values keep their original catalog order. Pure function: the
/// input is not modified and an empty input yields an empty vec.
pub fn group_by_category(permissions: &[Permission]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for permission in permissions {
        match groups.iter_mut().find(|g| g.key == permission.category) {
            Some(group) => group.permissions.push(permission.clone()),
            None => groups.push(CategoryGroup {
                key: permission.category.clone(),
                label: format_category_label(&permission.category),
                permissions: vec![permission.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.permissions.sort_by_key(|p| p.order);
    }
    groups
}
