//! Dependency expansion for toggle operations.
//!
//! Expansion is exactly one level deep: toggling a permission carries its
//! direct `depends_on` names along, but not the dependencies of those
//! dependencies. Removing A (which depends on B) removes {A, B} and leaves
//! anything B depends on selected. This matches shipped product behavior;
//! do not widen it to a transitive closure without a product decision.

use std::collections::HashSet;

/// Inserts `name` and each of its direct dependencies into the set.
/// Idempotent: names already present are left alone.
pub fn expand_add(selection: &mut HashSet<String>, name: &str, depends_on: &[String]) {
    selection.insert(name.to_string());
    for dep in depends_on {
        selection.insert(dep.clone());
    }
}

/// Removes `name` and each of its direct dependencies from the set.
/// Idempotent: absent names are a no-op.
pub fn expand_remove(selection: &mut HashSet<String>, name: &str, depends_on: &[String]) {
    selection.remove(name);
    for dep in depends_on {
        selection.remove(dep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn add_inserts_name_and_direct_deps() {
        let mut sel = HashSet::new();
        expand_add(&mut sel, "edit", &deps(&["view"]));
        assert!(sel.contains("edit"));
        assert!(sel.contains("view"));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn add_is_idempotent() {
        let mut sel = HashSet::new();
        expand_add(&mut sel, "edit", &deps(&["view"]));
        expand_add(&mut sel, "edit", &deps(&["view"]));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn remove_is_idempotent_on_absent_names() {
        let mut sel: HashSet<String> = HashSet::new();
        expand_remove(&mut sel, "edit", &deps(&["view"]));
        assert!(sel.is_empty());
    }

    #[test]
    fn expansion_is_one_level_only() {
        // publish -> edit -> view: removing publish must not touch view.
        let mut sel: HashSet<String> =
            ["publish", "edit", "view"].iter().map(|s| s.to_string()).collect();
        expand_remove(&mut sel, "publish", &deps(&["edit"]));
        assert!(!sel.contains("publish"));
        assert!(!sel.contains("edit"));
        assert!(sel.contains("view"));
    }
}
