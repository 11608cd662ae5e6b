use serde::{Deserialize, Serialize};

/// One grantable capability in the permission catalog.
///
/// The `name` is the stable set key used everywhere else in the model;
/// `depends_on` lists the names of permissions that must be granted and
/// revoked together with this one (direct prerequisites only — the model
/// does not chase transitive dependencies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
    /// Human-readable text; translated by the shell, stored raw here.
    #[serde(default)]
    pub description: String,
    /// Names of directly required permissions. May reference names outside
    /// the catalog; such references are tolerated (see catalog ingestion).
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Grouping key. Empty in raw API data means "uncategorized"; the
    /// catalog boundary rewrites it to the fallback category.
    #[serde(default)]
    pub category: String,
    /// Display position within the category (ascending, stable on ties).
    #[serde(default)]
    pub order: i32,
}

impl Permission {
    /// Creates a permission with no description and no dependencies.
    pub fn new(name: &str, category: &str, order: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            depends_on: Vec::new(),
            category: category.into(),
            order,
        }
    }

    /// Sets the direct dependencies.
    #[must_use]
    pub fn with_dependencies(mut self, deps: &[&str]) -> Self {
        self.depends_on = deps.iter().map(|d| (*d).into()).collect();
        self
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }
}
