//! Error types for the catalog boundary.

use formflow_types::RoleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog entry {index} has an empty name")]
    MissingName { index: usize },

    #[error("duplicate permission name in catalog: '{name}'")]
    DuplicateName { name: String },

    #[error("no stored selection for role {0}")]
    RoleNotFound(RoleId),
}
