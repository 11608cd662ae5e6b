use formflow_access::{SelectionSet, category_status};
use formflow_types::{CategoryStatus, Permission};

fn catalog_of(n: usize) -> Vec<Permission> {
    (0..n)
        .map(|i| Permission::new(&format!("perm{i}"), "grid", i as i32))
        .collect()
}

fn selecting_first(catalog: &[Permission], k: usize) -> SelectionSet {
    SelectionSet::from_names(catalog.iter().take(k).map(|p| p.name.clone()))
}

#[test]
fn empty_category_is_empty_not_full() {
    let status = category_status(&[], &SelectionSet::from_names(["anything"]));
    assert_eq!(status, CategoryStatus::Empty);
}

#[test]
fn single_permission_category() {
    let catalog = catalog_of(1);
    assert_eq!(
        category_status(&catalog, &SelectionSet::new()),
        CategoryStatus::Empty
    );
    assert_eq!(
        category_status(&catalog, &selecting_first(&catalog, 1)),
        CategoryStatus::Full
    );
}

#[test]
fn five_permission_category_over_all_counts() {
    let catalog = catalog_of(5);
    for k in 0..=5 {
        let status = category_status(&catalog, &selecting_first(&catalog, k));
        let expected = match k {
            0 => CategoryStatus::Empty,
            5 => CategoryStatus::Full,
            _ => CategoryStatus::Partial,
        };
        assert_eq!(status, expected, "k={k}");
    }
}

#[test]
fn names_outside_the_category_do_not_count() {
    let catalog = catalog_of(2);
    let selection = SelectionSet::from_names(["perm0", "unrelated"]);
    assert_eq!(category_status(&catalog, &selection), CategoryStatus::Partial);
}

#[test]
fn status_is_recomputed_from_live_selection() {
    let catalog = catalog_of(2);
    let empty = SelectionSet::new();
    assert_eq!(category_status(&catalog, &empty), CategoryStatus::Empty);

    let full = empty.toggle_category(&catalog);
    assert_eq!(category_status(&catalog, &full), CategoryStatus::Full);
    // The earlier set still reads as empty: no cached state anywhere.
    assert_eq!(category_status(&catalog, &empty), CategoryStatus::Empty);
}
