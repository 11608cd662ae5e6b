//! The selection store: which permission names are currently granted.

use crate::resolver::{expand_add, expand_remove};
use formflow_types::Permission;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::collections::hash_set;

/// Set of permission names selected for the role being edited.
///
/// Toggle operations follow an immutable-update contract: they return a new
/// `SelectionSet` and leave the receiver unchanged, so callers that detect
/// change by comparing collections (the admin console's state layer does)
/// keep working. Membership may include names with no catalog entry; such
/// orphans are tolerated throughout the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    selected: HashSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from persisted role data.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the named permission is selected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Number of selected names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterates over the selected names in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.selected.iter()
    }

    /// Borrows the underlying name set, e.g. for the persistence sink.
    #[must_use]
    pub fn names(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Consumes the selection, yielding the raw name set.
    #[must_use]
    pub fn into_names(self) -> HashSet<String> {
        self.selected
    }

    /// Toggles one permission together with its direct dependencies.
    ///
    /// If `name` is currently selected, it and every name in `depends_on`
    /// are removed; otherwise all of them are added. Starting from a
    /// consistent state the operation is its own inverse.
    #[must_use]
    pub fn toggle_single(&self, name: &str, depends_on: &[String]) -> Self {
        let mut next = self.selected.clone();
        if next.contains(name) {
            expand_remove(&mut next, name, depends_on);
        } else {
            expand_add(&mut next, name, depends_on);
        }
        Self { selected: next }
    }

    /// Toggles an entire category.
    ///
    /// When every permission in `permissions` is already selected, all of
    /// them (plus dependencies) are removed; in every other case all of them
    /// are added. A partially-selected category therefore fills up on the
    /// first click and can never jump straight to empty — deliberate product
    /// policy. An empty slice is vacuously all-checked and the removal pass
    /// does nothing.
    #[must_use]
    pub fn toggle_category(&self, permissions: &[Permission]) -> Self {
        let mut next = self.selected.clone();
        let all_checked = permissions.iter().all(|p| next.contains(&p.name));
        for permission in permissions {
            if all_checked {
                expand_remove(&mut next, &permission.name, &permission.depends_on);
            } else {
                expand_add(&mut next, &permission.name, &permission.depends_on);
            }
        }
        Self { selected: next }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected.iter()
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
