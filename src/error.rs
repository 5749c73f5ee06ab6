//! Error types for navmenu
//!
//! Uses `thiserror` for library errors. Every variant names the offending
//! id so a misconfigured menu fails at startup with a usable message.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::MenuObjectType;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// A node with this id already exists somewhere in the tree
    #[error("failed to add menu object '{id}': the id is already contained in the menu tree")]
    DuplicateId { id: String },

    /// The parent id passed to a factory operation is not in the tree
    #[error("no such parent menu item '{parent_id}' for menu object '{id}'")]
    UnknownParent { parent_id: String, id: String },

    /// A redirect was created for a target id that is not in the tree
    #[error("redirect '{id}' references unknown menu item '{target_id}'")]
    RedirectTargetNotFound { id: String, target_id: String },

    /// The menu object exists but is not a page item
    #[error("menu object '{id}' is a {found} item, expected a page item")]
    NotAPage { id: String, found: MenuObjectType },

    /// The operation is not supported by this kind of menu object
    #[error("menu object '{id}' does not support {operation}")]
    UnsupportedOperation { id: String, operation: &'static str },

    /// A configured item lacks a field its kind requires
    #[error("menu item '{id}' is missing required field '{field}'")]
    MissingField { id: String, field: &'static str },

    /// An external item carries a URL that cannot be parsed
    #[error("invalid url for menu item '{id}': {message}")]
    InvalidUrl { id: String, message: String },

    /// Menu configuration file could not be parsed
    #[error("invalid menu configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
