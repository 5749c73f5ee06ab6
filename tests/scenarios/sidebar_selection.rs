//! Scenario: Sidebar for a selected item
//!
//! Journey: a request selects an item of the admin console menu and the
//! sidebar is computed from the display map.

use std::collections::BTreeMap;

use navmenu::{DisplayFilter, DisplayMap, VisibilityDeterminator};

use crate::common::*;

fn entries(display: &DisplayMap) -> BTreeMap<String, bool> {
    display
        .iter()
        .map(|(id, expanded)| (id.to_string(), expanded))
        .collect()
}

fn expected(pairs: &[(&str, bool)]) -> BTreeMap<String, bool> {
    pairs
        .iter()
        .map(|(id, expanded)| (id.to_string(), *expanded))
        .collect()
}

/// SCENARIO A: a leaf is selected
#[test]
fn scenario_leaf_selected() {
    let tree = admin_tree();
    let display = VisibilityDeterminator::compute(&tree, Some("admin.users"));

    assert_eq!(
        entries(&display),
        expected(&[
            ("home", false),
            ("admin", true),
            ("admin.users", true),
            ("admin.roles", false),
        ])
    );
}

/// SCENARIO B: nothing selected
#[test]
fn scenario_nothing_selected() {
    let tree = admin_tree();
    let display = VisibilityDeterminator::compute(&tree, None);

    assert_eq!(
        entries(&display),
        expected(&[("home", false), ("admin", false)])
    );
}

/// SCENARIO C: a node with children is selected
#[test]
fn scenario_parent_selected_reveals_children() {
    let tree = admin_tree();
    let display = VisibilityDeterminator::compute(&tree, Some("admin"));

    assert_eq!(
        entries(&display),
        expected(&[
            ("home", false),
            ("admin", true),
            ("admin.users", false),
            ("admin.roles", false),
        ])
    );
}

/// SCENARIO D: the selected item is hidden by its display filter.
///
/// The selection still resolves, so its ancestors expand and its siblings
/// are shown, but the item itself gets no row.
#[test]
fn scenario_hidden_selection() {
    let mut tree = admin_tree();
    tree.menu_object_of_id_mut("admin.users")
        .unwrap()
        .set_display_filter(Some(DisplayFilter::never()));

    let display = VisibilityDeterminator::compute(&tree, Some("admin.users"));

    assert!(!display.contains("admin.users"));
    assert_eq!(
        entries(&display),
        expected(&[("home", false), ("admin", true), ("admin.roles", false)])
    );
}

/// SCENARIO: the request selects an id that was removed from the menu
#[test]
fn scenario_stale_selection_behaves_like_no_selection() {
    let tree = admin_tree();
    assert_eq!(
        VisibilityDeterminator::compute(&tree, Some("admin.audit")),
        VisibilityDeterminator::compute(&tree, None)
    );
}
