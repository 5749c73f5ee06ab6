//! Domain Entities
//!
//! - `MenuObject` - payload of a menu tree node (separator, page, external, redirect)
//! - `UniqueIdTree` - arena tree with tree-wide unique node ids
//! - `MenuTree` - the navigation menu built on top of it

mod menu_object;
mod menu_tree;
mod tree;

pub(crate) use menu_object::MenuObjectKind;
pub use menu_object::{
    Attributes, MenuEntry, MenuItem, MenuItemExternal, MenuItemPage, MenuItemRedirect, MenuObject,
    MenuSeparator,
};
pub use menu_tree::{MenuNode, MenuTree};
pub use tree::{NodeId, NodeRef, PreOrder, TreeVisitor, UniqueIdTree, VisitControl};
