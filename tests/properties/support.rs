//! Random menu trees

use std::sync::Arc;

use proptest::prelude::*;
use proptest::sample::Index;

use navmenu::{DisplayFilter, MenuTree, StaticPage};

/// Shape of one generated node
#[derive(Debug, Clone)]
pub struct NodeSpec {
    /// Parent among the nodes created before; `None` for top-level
    pub parent: Option<usize>,
    pub hidden: bool,
    pub separator: bool,
}

#[derive(Debug, Clone)]
pub struct TreeSpec {
    pub nodes: Vec<NodeSpec>,
}

pub fn node_id(index: usize) -> String {
    format!("n{}", index)
}

impl TreeSpec {
    pub fn build(&self) -> MenuTree {
        let mut tree = MenuTree::new();
        for (index, spec) in self.nodes.iter().enumerate() {
            let id = node_id(index);
            let page = Arc::new(StaticPage::named(id.clone(), id.to_uppercase()));
            match (spec.parent, spec.separator) {
                (None, false) => {
                    tree.create_root_item(id.clone(), page).unwrap();
                }
                (None, true) => {
                    tree.create_root_separator(id.clone()).unwrap();
                }
                (Some(parent), false) => {
                    tree.create_item(&node_id(parent), id.clone(), page).unwrap();
                }
                (Some(parent), true) => {
                    tree.create_separator(&node_id(parent), id.clone()).unwrap();
                }
            }
            if spec.hidden {
                tree.menu_object_of_id_mut(&id)
                    .unwrap()
                    .set_display_filter(Some(DisplayFilter::never()));
            }
        }
        tree
    }

    /// Ids of `index` and all its ancestors
    pub fn path(&self, index: usize) -> Vec<usize> {
        let mut path = vec![index];
        let mut current = self.nodes[index].parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.nodes[parent].parent;
        }
        path
    }
}

pub fn tree_spec() -> impl Strategy<Value = TreeSpec> {
    proptest::collection::vec(
        (any::<bool>(), any::<Index>(), prop::bool::weighted(0.2), prop::bool::weighted(0.1)),
        1..40,
    )
    .prop_map(|raw| {
        let nodes = raw
            .into_iter()
            .enumerate()
            .map(|(index, (top_level, parent, hidden, separator))| NodeSpec {
                parent: (!top_level && index > 0).then(|| parent.index(index)),
                hidden,
                separator,
            })
            .collect();
        TreeSpec { nodes }
    })
}

/// A tree plus an optional selected node index
pub fn tree_with_selection() -> impl Strategy<Value = (TreeSpec, Option<usize>)> {
    tree_spec().prop_flat_map(|spec| {
        let len = spec.nodes.len();
        (Just(spec), proptest::option::of(0..len))
    })
}
