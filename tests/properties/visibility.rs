//! Property tests for the visibility determination.

use proptest::prelude::*;

use navmenu::{all_menu_item_ids, VisibilityDeterminator};

use crate::support::{node_id, tree_with_selection};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Top-level nodes that pass their filter are always displayed.
    #[test]
    fn property_top_level_always_shown((spec, selected) in tree_with_selection()) {
        let tree = spec.build();
        let selected_id = selected.map(node_id);
        let display = VisibilityDeterminator::compute(&tree, selected_id.as_deref());

        for (index, node) in spec.nodes.iter().enumerate() {
            if node.parent.is_none() && !node.hidden {
                prop_assert!(display.contains(&node_id(index)));
            }
        }
    }

    /// PROPERTY: A node rejected by its filter is never displayed.
    #[test]
    fn property_filter_veto((spec, selected) in tree_with_selection()) {
        let tree = spec.build();
        let selected_id = selected.map(node_id);
        let display = VisibilityDeterminator::compute(&tree, selected_id.as_deref());

        for (index, node) in spec.nodes.iter().enumerate() {
            if node.hidden {
                prop_assert!(!display.contains(&node_id(index)));
            }
        }
    }

    /// PROPERTY: Exactly the displayed nodes on the path to the selection are
    /// expanded, even when a sibling flood recorded them collapsed first.
    #[test]
    fn property_expanded_means_on_path((spec, selected) in tree_with_selection()) {
        let tree = spec.build();
        let selected_id = selected.map(node_id);
        let display = VisibilityDeterminator::compute(&tree, selected_id.as_deref());
        let path = selected.map(|index| spec.path(index)).unwrap_or_default();

        for (index, node) in spec.nodes.iter().enumerate() {
            let expected = (path.contains(&index) && !node.hidden).then_some(true);
            let expanded = display.is_expanded(&node_id(index));
            if expected.is_some() {
                prop_assert_eq!(expanded, expected);
            } else {
                prop_assert_ne!(expanded, Some(true));
            }
        }
    }

    /// PROPERTY: Below the top level only children of path nodes are displayed.
    #[test]
    fn property_displayed_children_hang_off_the_path((spec, selected) in tree_with_selection()) {
        let tree = spec.build();
        let selected_id = selected.map(node_id);
        let display = VisibilityDeterminator::compute(&tree, selected_id.as_deref());
        let path = selected.map(|index| spec.path(index)).unwrap_or_default();

        for (index, node) in spec.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                if display.contains(&node_id(index)) {
                    prop_assert!(path.contains(&parent));
                }
            }
        }
    }

    /// PROPERTY: The traversal is deterministic and only records known ids.
    #[test]
    fn property_display_map_is_deterministic((spec, selected) in tree_with_selection()) {
        let tree = spec.build();
        let selected_id = selected.map(node_id);
        let first = VisibilityDeterminator::compute(&tree, selected_id.as_deref());
        let second = VisibilityDeterminator::compute(&tree, selected_id.as_deref());

        prop_assert_eq!(&first, &second);
        for id in first.ids() {
            prop_assert!(tree.contains_id(id));
        }
    }

    /// PROPERTY: The expand-all map lists every node, expanded iff it has children.
    #[test]
    fn property_all_menu_item_ids_covers_tree((spec, _selected) in tree_with_selection()) {
        let tree = spec.build();
        let display = all_menu_item_ids(&tree);
        prop_assert_eq!(display.len(), spec.nodes.len());

        for index in 0..spec.nodes.len() {
            let has_children = spec.nodes.iter().any(|node| node.parent == Some(index));
            prop_assert_eq!(display.is_expanded(&node_id(index)), Some(has_children));
        }
    }
}
