//! Visibility determination
//!
//! Decides which menu objects a sidebar renders for the currently selected
//! item, and which of them are expanded. One pre-order pass over the tree;
//! for every node at depth `d` the first matching rule wins:
//!
//! 1. nothing selected: show top-level nodes only, all collapsed
//! 2. top-level node: always shown, expanded if it contains the selection
//! 3. node on the path to the selection: shown and expanded
//! 4. direct child of the selection: shown, collapsed
//! 5. sibling of the selection: shown, collapsed
//! 6. anything else: hidden
//!
//! Rules 4 and 5 also show every displayable child of the same parent, so a
//! sub-menu is always rendered as a complete row. A node rejected by its
//! display filter is never recorded, whatever the rules say.

use std::collections::HashSet;

use tracing::debug;

use super::display_map::DisplayMap;
use crate::domain::entities::{
    MenuEntry, MenuNode, MenuObject, MenuTree, NodeId, TreeVisitor, UniqueIdTree, VisitControl,
};

/// Outcome of the rules for a single node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Decision {
    show: bool,
    expand: bool,
    show_whole_level: bool,
}

impl Decision {
    fn hidden() -> Self {
        Self::default()
    }

    fn shown(expand: bool) -> Self {
        Self {
            show: true,
            expand,
            show_whole_level: false,
        }
    }

    fn whole_level() -> Self {
        Self {
            show: true,
            expand: false,
            show_whole_level: true,
        }
    }
}

/// Single-use visitor computing the [`DisplayMap`] for one selection.
///
/// `run` consumes the determinator, so one instance serves exactly one
/// traversal.
pub struct VisibilityDeterminator<'t> {
    tree: &'t MenuTree,
    selected: Option<NodeId>,
    completed_levels: HashSet<NodeId>,
    result: DisplayMap,
}

impl<'t> VisibilityDeterminator<'t> {
    /// An unknown `selected_id` is treated like no selection.
    pub fn new(tree: &'t MenuTree, selected_id: Option<&str>) -> Self {
        let selected = selected_id.and_then(|id| {
            let node = tree.tree().node_with_id(id);
            if node.is_none() {
                debug!(selected_id = %id, "selected menu item is not part of the menu tree");
            }
            node
        });
        Self {
            tree,
            selected,
            completed_levels: HashSet::new(),
            result: DisplayMap::new(),
        }
    }

    /// Compute the display map for `selected_id` in one call
    pub fn compute(tree: &MenuTree, selected_id: Option<&str>) -> DisplayMap {
        VisibilityDeterminator::new(tree, selected_id).run()
    }

    /// The resolved selection, if any
    pub fn selected_node(&self) -> Option<MenuNode<'t>> {
        let tree = self.tree;
        self.selected.map(|node| tree.tree().node(node))
    }

    pub fn run(mut self) -> DisplayMap {
        let menu_tree = self.tree;
        let tree = menu_tree.tree();
        tree.visit(&mut self);
        debug!(
            selected = ?self.selected.map(|node| tree.id(node)),
            displayed = self.result.len(),
            "determined displayed menu items"
        );
        self.result
    }

    fn decide(&self, tree: &UniqueIdTree<MenuObject>, node: NodeId, depth: usize) -> Decision {
        let Some(selected) = self.selected else {
            return if depth == 0 {
                Decision::shown(false)
            } else {
                Decision::hidden()
            };
        };

        if depth == 0 {
            return Decision::shown(tree.is_same_or_descendant_of(selected, node));
        }
        if tree.is_same_or_descendant_of(selected, node) {
            return Decision::shown(true);
        }

        let parent = tree.parent(node);
        if parent == Some(selected) {
            return Decision::whole_level();
        }
        let selected_object = tree.data(selected);
        let is_sibling = tree
            .children(parent)
            .iter()
            .any(|&child| tree.data(child) == selected_object);
        if is_sibling {
            Decision::whole_level()
        } else {
            Decision::hidden()
        }
    }

    fn show_whole_level(&mut self, tree: &UniqueIdTree<MenuObject>, node: NodeId) {
        let Some(parent) = tree.parent(node) else {
            return;
        };
        if !self.completed_levels.insert(parent) {
            return;
        }
        for &child in tree.children(Some(parent)) {
            let object = tree.data(child);
            if object.matches_display_filter() {
                self.result.remember(object.id(), false);
            }
        }
    }
}

impl TreeVisitor<MenuObject> for VisibilityDeterminator<'_> {
    fn on_item_before_children(
        &mut self,
        tree: &UniqueIdTree<MenuObject>,
        node: NodeId,
        depth: usize,
    ) -> VisitControl {
        let decision = self.decide(tree, node, depth);
        let object = tree.data(node);
        if decision.show && object.matches_display_filter() {
            self.result.remember(object.id(), decision.expand);
            if decision.show_whole_level {
                self.show_whole_level(tree, node);
            }
        }
        VisitControl::Continue
    }
}

/// Every menu object id mapped to whether it has children, ignoring
/// selection and display filters. Used for "expand all" renders.
pub fn all_menu_item_ids(tree: &MenuTree) -> DisplayMap {
    let inner = tree.tree();
    let mut result = DisplayMap::new();
    for (node, _depth) in inner.pre_order() {
        result.insert(inner.id(node), inner.has_children(node));
    }
    result
}
