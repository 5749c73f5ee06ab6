//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Attributes, MenuTree};
use crate::domain::value_objects::Locale;
use crate::error::MenuResult;

use super::build;
use super::loader::{self, ConfigWarning};

/// Kind of a configured menu object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    #[default]
    Page,
    External,
    Separator,
    Redirect,
}

/// One `[[items]]` entry.
///
/// ```toml
/// [[items]]
/// id = "admin.users"
/// parent = "admin"
/// text = "Users"
/// texts = { de = "Benutzer" }
/// attributes = { role = "admin" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub id: String,

    #[serde(default)]
    pub kind: MenuItemKind,

    /// Fallback display text; the id is used when absent
    #[serde(default)]
    pub text: Option<String>,

    /// Display text per locale tag
    #[serde(default)]
    pub texts: BTreeMap<String, String>,

    #[serde(default)]
    pub parent: Option<String>,

    /// HTML link target
    #[serde(default)]
    pub target: Option<String>,

    /// External items only
    #[serde(default)]
    pub url: Option<String>,

    /// Redirect items only: id of the page item to alias
    #[serde(default)]
    pub redirect_to: Option<String>,

    #[serde(default)]
    pub attributes: Attributes,
}

impl MenuItemConfig {
    pub fn new(id: impl Into<String>, kind: MenuItemKind) -> Self {
        Self {
            id: id.into(),
            kind,
            text: None,
            texts: BTreeMap::new(),
            parent: None,
            target: None,
            url: None,
            redirect_to: None,
            attributes: Attributes::new(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MenuConfig {
    /// Fallback chain of default menu item ids
    #[serde(default)]
    pub default: Vec<String>,

    #[serde(default)]
    pub locale: Locale,

    /// Menu objects in creation order; parents must come first
    #[serde(default)]
    pub items: Vec<MenuItemConfig>,
}

impl MenuConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (NAVMENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build the menu tree.
    ///
    /// With a non-empty `roles` list every item carrying a `role` attribute
    /// is only displayed when its role is one of `roles`.
    pub fn build(&self, roles: &[String]) -> MenuResult<MenuTree> {
        build::build_tree(self, roles)
    }
}
