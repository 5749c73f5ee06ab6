//! Menu tree entity
//!
//! The navigation structure of the console. Built once while the
//! application is configured, then read on every request. All factory
//! operations fail fast: a duplicate id or an unknown parent means the menu
//! is misconfigured and the application should not start.

use std::sync::Arc;

use tracing::{debug, warn};

use super::menu_object::{
    MenuEntry, MenuItemExternal, MenuItemPage, MenuItemRedirect, MenuObject, MenuObjectKind,
    MenuSeparator,
};
use super::tree::{NodeId, NodeRef, UniqueIdTree};
use crate::domain::ports::{HasDisplayText, HasSimpleUrl, Page};
use crate::domain::services::DisplayMap;
use crate::error::{MenuError, MenuResult};

/// A node of the menu tree
pub type MenuNode<'a> = NodeRef<'a, MenuObject>;

#[derive(Debug, Default)]
pub struct MenuTree {
    tree: UniqueIdTree<MenuObject>,
    default_menu_item_ids: Vec<String>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying keyed tree, for traversals
    pub fn tree(&self) -> &UniqueIdTree<MenuObject> {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.tree.contains_id(id)
    }

    fn parent_node(&self, parent_id: &str, id: &str) -> MenuResult<NodeId> {
        self.tree
            .node_with_id(parent_id)
            .ok_or_else(|| MenuError::UnknownParent {
                parent_id: parent_id.to_string(),
                id: id.to_string(),
            })
    }

    fn internal_create_child<K: MenuObjectKind>(
        &mut self,
        parent: Option<NodeId>,
        object: K,
    ) -> MenuResult<&mut K> {
        let id = object.id().to_string();
        let node = self
            .tree
            .create_child(parent, id.clone(), object.into())
            .ok_or_else(|| MenuError::DuplicateId { id: id.clone() })?;
        debug!(id = %id, "added menu object");

        let found = self.tree.data(node).object_type();
        K::from_object_mut(self.tree.data_mut(node)).ok_or(MenuError::NotAPage { id, found })
    }

    pub fn create_root_separator(&mut self, id: impl Into<String>) -> MenuResult<&mut MenuSeparator> {
        self.internal_create_child(None, MenuSeparator::new(id))
    }

    pub fn create_separator(
        &mut self,
        parent_id: &str,
        id: impl Into<String>,
    ) -> MenuResult<&mut MenuSeparator> {
        let id = id.into();
        let parent = self.parent_node(parent_id, &id)?;
        self.internal_create_child(Some(parent), MenuSeparator::new(id))
    }

    pub fn create_root_item(
        &mut self,
        id: impl Into<String>,
        page: Arc<dyn Page>,
    ) -> MenuResult<&mut MenuItemPage> {
        self.internal_create_child(None, MenuItemPage::new(id, page))
    }

    /// Root item whose id is the page id
    pub fn create_root_item_for_page(&mut self, page: Arc<dyn Page>) -> MenuResult<&mut MenuItemPage> {
        let id = page.id().to_string();
        self.create_root_item(id, page)
    }

    pub fn create_item(
        &mut self,
        parent_id: &str,
        id: impl Into<String>,
        page: Arc<dyn Page>,
    ) -> MenuResult<&mut MenuItemPage> {
        let id = id.into();
        let parent = self.parent_node(parent_id, &id)?;
        self.internal_create_child(Some(parent), MenuItemPage::new(id, page))
    }

    /// Child item whose id is the page id
    pub fn create_item_for_page(
        &mut self,
        parent_id: &str,
        page: Arc<dyn Page>,
    ) -> MenuResult<&mut MenuItemPage> {
        let id = page.id().to_string();
        self.create_item(parent_id, id, page)
    }

    pub fn create_root_external(
        &mut self,
        id: impl Into<String>,
        url: Arc<dyn HasSimpleUrl>,
        name: Arc<dyn HasDisplayText>,
    ) -> MenuResult<&mut MenuItemExternal> {
        self.internal_create_child(None, MenuItemExternal::new(id, url, name))
    }

    pub fn create_external(
        &mut self,
        parent_id: &str,
        id: impl Into<String>,
        url: Arc<dyn HasSimpleUrl>,
        name: Arc<dyn HasDisplayText>,
    ) -> MenuResult<&mut MenuItemExternal> {
        let id = id.into();
        let parent = self.parent_node(parent_id, &id)?;
        self.internal_create_child(Some(parent), MenuItemExternal::new(id, url, name))
    }

    /// Create a top-level alias for the page item `target_id`.
    ///
    /// The redirect follows later target changes of that page item. Replacing
    /// the page item with `replace_menu_item` does not move the redirect.
    pub fn create_redirect(
        &mut self,
        id: impl Into<String>,
        target_id: &str,
    ) -> MenuResult<&mut MenuItemRedirect> {
        let id = id.into();
        let redirect = match self.menu_object_of_id(target_id) {
            Some(MenuObject::Page(page)) => MenuItemRedirect::new(id, page),
            Some(other) => {
                return Err(MenuError::NotAPage {
                    id: target_id.to_string(),
                    found: other.object_type(),
                })
            }
            None => {
                return Err(MenuError::RedirectTargetNotFound {
                    id,
                    target_id: target_id.to_string(),
                })
            }
        };
        self.internal_create_child(None, redirect)
    }

    /// Replace the fallback chain with a single id, or clear it
    pub fn set_default_menu_item_id(&mut self, id: Option<&str>) {
        self.default_menu_item_ids.clear();
        if let Some(id) = id {
            self.default_menu_item_ids.push(id.to_string());
        }
    }

    pub fn set_default_menu_item_ids<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_menu_item_ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn default_menu_item_id(&self) -> Option<&str> {
        self.default_menu_item_ids.first().map(String::as_str)
    }

    pub fn all_default_menu_item_ids(&self) -> &[String] {
        &self.default_menu_item_ids
    }

    fn resolve_default_menu_item(&self, id: &str) -> Option<&MenuItemPage> {
        match self.menu_object_of_id(id) {
            Some(MenuObject::Page(page)) => Some(page),
            Some(other) => {
                warn!(
                    id = %id,
                    found = %other.object_type(),
                    "default menu item id does not resolve to a page item"
                );
                None
            }
            None => {
                warn!(id = %id, "failed to resolve default menu item id");
                None
            }
        }
    }

    /// First entry of the fallback chain that is a page item in this tree
    pub fn default_menu_item(&self) -> Option<&MenuItemPage> {
        self.default_menu_item_ids
            .iter()
            .find_map(|id| self.resolve_default_menu_item(id))
    }

    /// Every resolvable entry of the fallback chain, in chain order
    pub fn all_default_menu_items(&self) -> Vec<&MenuItemPage> {
        self.default_menu_item_ids
            .iter()
            .filter_map(|id| self.resolve_default_menu_item(id))
            .collect()
    }

    pub fn node_with_id(&self, id: &str) -> Option<MenuNode<'_>> {
        self.tree.node_with_id(id).map(|node| self.tree.node(node))
    }

    pub fn menu_object_of_id(&self, id: &str) -> Option<&MenuObject> {
        self.tree.node_with_id(id).map(|node| self.tree.data(node))
    }

    pub fn menu_object_of_id_mut(&mut self, id: &str) -> Option<&mut MenuObject> {
        let node = self.tree.node_with_id(id)?;
        Some(self.tree.data_mut(node))
    }

    /// Top-level ancestor of `id` (the item itself if it is top-level)
    pub fn root_item_of_item_with_id(&self, id: &str) -> Option<MenuNode<'_>> {
        let node = self.tree.node_with_id(id)?;
        Some(self.tree.node(self.tree.top_level_ancestor(node)))
    }

    pub fn root_item_data_of_item_with_id(&self, id: &str) -> Option<&MenuObject> {
        self.root_item_of_item_with_id(id).map(|node| node.data())
    }

    /// Swap the page item with the id of `new_page` for a fresh one wrapping
    /// `new_page`. Filter, target and attributes of the old item are dropped.
    pub fn replace_menu_item(&mut self, new_page: Arc<dyn Page>) -> Option<&mut MenuItemPage> {
        let id = new_page.id().to_string();
        let node = self.tree.node_with_id(&id)?;
        self.tree
            .replace_data(node, MenuItemPage::new(id, new_page).into());
        MenuItemPage::from_object_mut(self.tree.data_mut(node))
    }

    /// Call `callback` for every menu object, parents before children
    pub fn iterate_all_menu_objects<F>(&self, mut callback: F)
    where
        F: FnMut(&MenuObject),
    {
        for (node, _depth) in self.tree.pre_order() {
            callback(self.tree.data(node));
        }
    }

    /// True if any child of `id` is part of `display`
    pub fn has_display_children(&self, id: &str, display: &DisplayMap) -> bool {
        self.node_with_id(id)
            .map(|node| node.children().any(|child| display.contains(child.id())))
            .unwrap_or(false)
    }
}
