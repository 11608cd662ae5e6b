use serde::{Deserialize, Serialize};

/// Selection coverage of a permission category.
///
/// Derived on every read from the selection set and the category's
/// permissions; never stored. The presentation layer maps this one-to-one
/// onto a tri-state checkbox (unchecked / indeterminate / checked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    /// No permission in the category is selected.
    Empty,
    /// Some, but not all, permissions in the category are selected.
    Partial,
    /// Every permission in the category is selected.
    Full,
}

impl CategoryStatus {
    pub fn is_empty(&self) -> bool {
        *self == Self::Empty
    }

    pub fn is_partial(&self) -> bool {
        *self == Self::Partial
    }

    pub fn is_full(&self) -> bool {
        *self == Self::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(CategoryStatus::Empty.is_empty());
        assert!(CategoryStatus::Partial.is_partial());
        assert!(CategoryStatus::Full.is_full());
        assert!(!CategoryStatus::Full.is_partial());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&CategoryStatus::Partial).unwrap(),
            r#""partial""#
        );
        let s: CategoryStatus = serde_json::from_str(r#""full""#).unwrap();
        assert_eq!(s, CategoryStatus::Full);
    }
}
