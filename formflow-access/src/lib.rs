//! Permission dependency and tri-state selection model.
//!
//! Given a flat permission catalog, this crate:
//! - partitions it into display-ordered category groups ([`group_by_category`]),
//! - maintains the set of selected permission names ([`SelectionSet`]) with
//!   toggle operations that carry a permission's direct dependencies along,
//! - derives a per-category tri-state coverage status ([`category_status`]),
//! - and wraps one role-editing session behind a facade the admin console
//!   drives ([`EditSession`]).
//!
//! All operations are synchronous, pure or locally-mutating, and total over
//! well-formed catalogs; loading and saving live in `formflow-catalog`.

mod grouping;
mod resolver;
mod selection;
mod session;
mod tristate;

pub use grouping::{CategoryGroup, FALLBACK_CATEGORY, format_category_label, group_by_category};
pub use resolver::{expand_add, expand_remove};
pub use selection::SelectionSet;
pub use session::EditSession;
pub use tristate::category_status;
