//! Role-selection persistence sink.

use crate::error::CatalogError;
use formflow_access::SelectionSet;
use formflow_types::RoleId;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persists the selection a role editing session commits.
///
/// The model knows nothing about the storage format; the shell picks an
/// implementation. Save failures are surfaced unretried — the console shows
/// them in a dismissible banner and keeps the in-memory session alive.
pub trait RoleStore {
    fn save(&self, role: RoleId, selection: &SelectionSet) -> Result<(), CatalogError>;
    fn load(&self, role: RoleId) -> Result<SelectionSet, CatalogError>;
}

/// Stores one JSON file per role under a directory: `<dir>/<role-uuid>.json`
/// holding the sorted list of selected permission names. Sorted so the files
/// diff cleanly under version control in development setups.
#[derive(Debug, Clone)]
pub struct JsonRoleStore {
    dir: PathBuf,
}

impl JsonRoleStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn role_path(&self, role: RoleId) -> PathBuf {
        self.dir.join(format!("{role}.json"))
    }
}

impl RoleStore for JsonRoleStore {
    fn save(&self, role: RoleId, selection: &SelectionSet) -> Result<(), CatalogError> {
        std::fs::create_dir_all(&self.dir)?;
        let mut names: Vec<&String> = selection.iter().collect();
        names.sort();
        let json = serde_json::to_string_pretty(&names)?;
        std::fs::write(self.role_path(role), json)?;
        info!(%role, count = names.len(), "saved role selection");
        Ok(())
    }

    fn load(&self, role: RoleId) -> Result<SelectionSet, CatalogError> {
        let path = self.role_path(role);
        if !path.exists() {
            return Err(CatalogError::RoleNotFound(role));
        }
        let contents = std::fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&contents)?;
        Ok(SelectionSet::from_names(names))
    }
}
