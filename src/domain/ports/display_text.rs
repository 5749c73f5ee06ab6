//! Display text port
//!
//! Supplies the name of menu entries that are not backed by a page.

use std::fmt::Debug;

use crate::domain::value_objects::Locale;

pub trait HasDisplayText: Debug + Send + Sync {
    fn display_text(&self, locale: &Locale) -> Option<String>;
}

// Constant texts, independent of the locale.
impl HasDisplayText for String {
    fn display_text(&self, _locale: &Locale) -> Option<String> {
        Some(self.clone())
    }
}

impl HasDisplayText for &'static str {
    fn display_text(&self, _locale: &Locale) -> Option<String> {
        Some((*self).to_string())
    }
}
