//! Property tests for tree-wide id uniqueness.

use std::sync::Arc;

use proptest::prelude::*;
use proptest::sample::Index;

use navmenu::{MenuError, StaticPage};
use url::Url;

use crate::support::{node_id, tree_spec};

/// Page item every generated redirect points at
const REDIRECT_TARGET: &str = "redirect-target";

/// Factory operation used to add the duplicate
#[derive(Debug, Clone, Copy)]
enum Factory {
    RootItem,
    Item,
    RootSeparator,
    Separator,
    RootExternal,
    External,
    Redirect,
}

fn factory() -> impl Strategy<Value = Factory> {
    prop_oneof![
        Just(Factory::RootItem),
        Just(Factory::Item),
        Just(Factory::RootSeparator),
        Just(Factory::Separator),
        Just(Factory::RootExternal),
        Just(Factory::External),
        Just(Factory::Redirect),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Reusing any existing id fails, whichever factory is used and
    /// wherever the new node would go, and leaves the tree unchanged.
    #[test]
    fn property_duplicate_ids_are_rejected(
        spec in tree_spec(),
        duplicate in any::<Index>(),
        parent in any::<Index>(),
        factory in factory(),
    ) {
        let mut tree = spec.build();
        tree.create_root_item(REDIRECT_TARGET, Arc::new(StaticPage::named(REDIRECT_TARGET, "Target")))
            .unwrap();
        let len = tree.len();
        let duplicate = node_id(duplicate.index(spec.nodes.len()));
        let parent = node_id(parent.index(spec.nodes.len()));
        let page = Arc::new(StaticPage::named(duplicate.clone(), "dup"));
        let url = Arc::new(Url::parse("https://example.com/").unwrap());

        let result = match factory {
            Factory::RootItem => tree.create_root_item(duplicate.clone(), page).map(drop),
            Factory::Item => tree.create_item(&parent, duplicate.clone(), page).map(drop),
            Factory::RootSeparator => tree.create_root_separator(duplicate.clone()).map(drop),
            Factory::Separator => tree.create_separator(&parent, duplicate.clone()).map(drop),
            Factory::RootExternal => tree
                .create_root_external(duplicate.clone(), url, Arc::new("dup"))
                .map(drop),
            Factory::External => tree
                .create_external(&parent, duplicate.clone(), url, Arc::new("dup"))
                .map(drop),
            Factory::Redirect => tree.create_redirect(duplicate.clone(), REDIRECT_TARGET).map(drop),
        };

        let is_duplicate = matches!(result, Err(MenuError::DuplicateId { ref id }) if *id == duplicate);
        prop_assert!(is_duplicate);
        prop_assert_eq!(tree.len(), len);
    }

    /// PROPERTY: Every created node is reachable by id and by pre-order iteration.
    #[test]
    fn property_every_node_is_reachable(spec in tree_spec()) {
        let tree = spec.build();
        prop_assert_eq!(tree.len(), spec.nodes.len());

        let mut visited = Vec::new();
        tree.iterate_all_menu_objects(|object| {
            use navmenu::MenuEntry;
            visited.push(object.id().to_string());
        });
        prop_assert_eq!(visited.len(), spec.nodes.len());

        for (index, node) in spec.nodes.iter().enumerate() {
            let found = tree.node_with_id(&node_id(index));
            prop_assert!(found.is_some());
            let parent = found.and_then(|node| node.parent()).map(|parent| parent.id().to_string());
            prop_assert_eq!(parent, node.parent.map(node_id));
        }
    }

    /// PROPERTY: The root item of a node is the top-level end of its path.
    #[test]
    fn property_root_item_is_top_of_path(spec in tree_spec(), pick in any::<Index>()) {
        let tree = spec.build();
        let index = pick.index(spec.nodes.len());
        let path = spec.path(index);
        let top = path.last().copied().map(node_id);

        let root = tree.root_item_of_item_with_id(&node_id(index)).map(|node| node.id().to_string());
        prop_assert_eq!(root, top);
    }
}
