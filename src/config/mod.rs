//! Menu configuration
//!
//! A menu is described in a TOML file and built into a `MenuTree`.
//! Sources, highest priority first:
//! 1. Environment variables (NAVMENU_*)
//! 2. The menu file
//! 3. Built-in defaults

mod build;
mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{MenuConfig, MenuItemConfig, MenuItemKind};
