//! Page port
//!
//! A page is an application screen a menu item links to. The menu only
//! needs its id and a localized name.

use std::fmt::Debug;

use crate::domain::value_objects::Locale;

pub trait Page: Debug + Send + Sync {
    /// Stable page id. Menu items created from a page default to this id.
    fn id(&self) -> &str;

    /// Localized page name, `None` if no text exists for the locale
    fn display_text(&self, locale: &Locale) -> Option<String>;
}
