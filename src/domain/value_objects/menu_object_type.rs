//! Menu object type - the fixed tag of every menu tree payload
//!
//! - `Separator`: purely cosmetic divider
//! - `Page`: link to an internal page
//! - `External`: link to an external URL
//! - `RedirectToPage`: alias for another page item

use serde::{Deserialize, Serialize};

/// Kind of a menu object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuObjectType {
    Separator,
    Page,
    External,
    RedirectToPage,
}

impl MenuObjectType {
    /// Returns true for the kinds that carry a target and display text
    pub fn is_item(&self) -> bool {
        !matches!(self, MenuObjectType::Separator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuObjectType::Separator => "separator",
            MenuObjectType::Page => "page",
            MenuObjectType::External => "external",
            MenuObjectType::RedirectToPage => "redirect-to-page",
        }
    }
}

impl std::fmt::Display for MenuObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
