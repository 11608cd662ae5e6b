//! Catalog and persistence boundary for the FormFlow permission model.
//!
//! The core model in `formflow-access` assumes a well-formed catalog; this
//! crate is where raw permission data gets validated on the way in and where
//! a role's final selection gets written on the way out:
//! - [`Catalog`] — validated permission list with dependency lookup
//! - [`CatalogSource`] / [`JsonCatalogSource`] — where catalogs come from
//! - [`RoleStore`] / [`JsonRoleStore`] — where selections are persisted
//!
//! In production the admin console talks to the FormFlow REST API; the JSON
//! file implementations here back local development and tests, and define
//! the contract any transport has to meet. Failures propagate to the caller
//! unretried — retry and user-facing error display are shell policy.

mod catalog;
mod error;
mod source;
mod store;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use source::{CatalogSource, JsonCatalogSource};
pub use store::{JsonRoleStore, RoleStore};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, CatalogError>;
