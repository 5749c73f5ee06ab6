//! navmenu - navigation menu tree for admin consoles
//!
//! A menu is a tree of uniquely keyed menu objects (pages, external links,
//! separators and redirects). For the item selected on a request,
//! [`VisibilityDeterminator`] computes which rows a sidebar displays and
//! which of them are expanded.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::{ConfigWarning, MenuConfig};
pub use domain::entities::{
    MenuEntry, MenuItem, MenuItemExternal, MenuItemPage, MenuItemRedirect, MenuObject,
    MenuSeparator, MenuTree,
};
pub use domain::policies::{DisplayFilter, MenuObjectFilter};
pub use domain::ports::{HasDisplayText, HasSimpleUrl, Page};
pub use domain::services::{all_menu_item_ids, DisplayMap, VisibilityDeterminator};
pub use domain::value_objects::{Locale, MenuObjectType};
pub use error::{MenuError, MenuResult};
pub use infrastructure::{LocalizedText, StaticPage};
