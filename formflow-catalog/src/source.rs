//! Catalog sources.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use formflow_types::Permission;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplies a validated permission catalog to an editing session.
///
/// Implemented by whatever the shell wires in: the JSON file source below in
/// development, the REST client in the product. Load failures are returned
/// to the caller; no retrying happens at this layer.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Reads a catalog from a JSON file containing an array of permission
/// records, the same payload shape the FormFlow API serves.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let entries: Vec<Permission> = serde_json::from_str(&contents)?;
        let catalog = Catalog::from_entries(entries)?;
        info!(path = %self.path.display(), count = catalog.len(), "loaded permission catalog");
        Ok(catalog)
    }
}
