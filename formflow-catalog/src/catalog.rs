//! Validated permission catalog.

use crate::error::CatalogError;
use formflow_access::FALLBACK_CATEGORY;
use formflow_types::Permission;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// A validated snapshot of the permission catalog.
///
/// Ingestion enforces what the core model only assumes: every entry has a
/// non-empty unique name, and entries without a category land in the
/// fallback category. Dependency names that point outside the catalog are
/// tolerated — the model treats them as orphans — but each one is logged
/// once so catalog drift shows up in operator logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    permissions: Vec<Permission>,
}

impl Catalog {
    /// Validates raw entries into a catalog.
    ///
    /// Ordering is preserved: display tie-breaking downstream depends on the
    /// original entry order.
    pub fn from_entries(entries: Vec<Permission>) -> Result<Self, CatalogError> {
        let mut names: HashSet<&str> = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(CatalogError::MissingName { index });
            }
            if !names.insert(&entry.name) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        for entry in &entries {
            for dep in &entry.depends_on {
                if !names.contains(dep.as_str()) {
                    warn!(
                        permission = %entry.name,
                        dependency = %dep,
                        "dependency name not present in catalog; tolerated as orphan"
                    );
                }
            }
        }

        let permissions = entries
            .into_iter()
            .map(|mut p| {
                if p.category.is_empty() {
                    p.category = FALLBACK_CATEGORY.to_string();
                }
                p
            })
            .collect();
        Ok(Self { permissions })
    }

    /// The validated permissions, in original catalog order.
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// Looks up a permission by name.
    pub fn find(&self, name: &str) -> Option<&Permission> {
        self.permissions.iter().find(|p| p.name == name)
    }

    /// Direct dependencies of a permission; empty for unknown names.
    pub fn depends_on(&self, name: &str) -> &[String] {
        self.find(name).map(|p| p.depends_on.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entries_make_an_empty_catalog() {
        let catalog = Catalog::from_entries(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn depends_on_unknown_name_is_empty() {
        let catalog =
            Catalog::from_entries(vec![Permission::new("view", "forms", 1)]).unwrap();
        assert!(catalog.depends_on("nope").is_empty());
    }
}
