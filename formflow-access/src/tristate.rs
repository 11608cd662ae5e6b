//! Tri-state derivation for category checkboxes.

use crate::selection::SelectionSet;
use formflow_types::{CategoryStatus, Permission};

/// Computes a category's selection coverage from the live selection set.
///
/// Pure read, recomputed on every call — the status is never cached, so it
/// cannot drift from the selection. An empty category is `Empty`, not `Full`,
/// even though zero of zero permissions are trivially all selected.
pub fn category_status(permissions: &[Permission], selection: &SelectionSet) -> CategoryStatus {
    let checked = permissions
        .iter()
        .filter(|p| selection.contains(&p.name))
        .count();
    if checked == 0 {
        CategoryStatus::Empty
    } else if checked == permissions.len() {
        CategoryStatus::Full
    } else {
        CategoryStatus::Partial
    }
}
