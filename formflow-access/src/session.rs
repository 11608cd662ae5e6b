//! One role-editing session, as driven by the admin console.

use crate::grouping::{CategoryGroup, group_by_category};
use crate::selection::SelectionSet;
use crate::tristate::category_status;
use formflow_types::{CategoryStatus, Permission};

/// Facade over the grouping, selection, and tri-state pieces for a single
/// role edit.
///
/// Owns a grouped snapshot of the catalog plus the live selection; each
/// session belongs to exactly one editor, so there is no cross-session
/// sharing or merging. Loading the catalog and saving the final selection
/// are the shell's job — the session only mutates in-memory state.
#[derive(Debug, Clone)]
pub struct EditSession {
    groups: Vec<CategoryGroup>,
    selection: SelectionSet,
}

impl EditSession {
    /// Starts a session over a catalog snapshot with the role's persisted
    /// selection.
    pub fn new(catalog: &[Permission], initial: SelectionSet) -> Self {
        Self {
            groups: group_by_category(catalog),
            selection: initial,
        }
    }

    /// Category groups in display order.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether an individual permission row renders checked.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    /// Tri-state status for one category. Unknown keys read as `Empty`.
    pub fn status(&self, category_key: &str) -> CategoryStatus {
        self.groups
            .iter()
            .find(|g| g.key == category_key)
            .map(|g| category_status(&g.permissions, &self.selection))
            .unwrap_or(CategoryStatus::Empty)
    }

    /// Statuses for every category, in display order.
    pub fn statuses(&self) -> Vec<(&str, CategoryStatus)> {
        self.groups
            .iter()
            .map(|g| {
                (
                    g.key.as_str(),
                    category_status(&g.permissions, &self.selection),
                )
            })
            .collect()
    }

    /// Toggles one permission, carrying its direct dependencies.
    ///
    /// Dependencies are looked up in the catalog snapshot. A name with no
    /// catalog entry still toggles (with no dependencies) — orphan names are
    /// tolerated rather than rejected.
    pub fn toggle_permission(&mut self, name: &str) {
        let depends_on = self
            .groups
            .iter()
            .flat_map(|g| g.permissions.iter())
            .find(|p| p.name == name)
            .map(|p| p.depends_on.clone())
            .unwrap_or_default();
        self.selection = self.selection.toggle_single(name, &depends_on);
    }

    /// Toggles a whole category. Unknown keys are a no-op.
    pub fn toggle_category(&mut self, category_key: &str) {
        if let Some(group) = self.groups.iter().find(|g| g.key == category_key) {
            self.selection = self.selection.toggle_category(&group.permissions);
        }
    }

    /// Ends the session, yielding the selection for the persistence sink.
    pub fn into_selection(self) -> SelectionSet {
        self.selection
    }
}
