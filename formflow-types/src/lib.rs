//! Core type definitions for the FormFlow permission model.
//!
//! This crate defines the fundamental, UI-agnostic types shared by the
//! access model and the catalog boundary:
//! - [`Permission`] — one grantable capability (name, category, dependencies)
//! - [`CategoryStatus`] — tri-state selection coverage of a category
//! - [`RoleId`] — identifier of the role a selection is edited against
//!
//! Everything presentation-specific (checkbox widgets, translation lookups,
//! routing) lives in the admin console shell, not here.

mod ids;
mod permission;
mod status;

pub use ids::RoleId;
pub use permission::Permission;
pub use status::CategoryStatus;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid role id: {0}")]
    InvalidRoleId(#[from] uuid::Error),
}
