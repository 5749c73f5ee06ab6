//! Static page and text providers
//!
//! Used when a menu is defined in a configuration file rather than wired to
//! live application pages. Texts are looked up by exact locale, then by
//! primary language, then the fallback text is used.

use std::collections::BTreeMap;

use crate::domain::ports::{HasDisplayText, Page};
use crate::domain::value_objects::Locale;

/// Per-locale texts with an optional fallback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    fallback: Option<String>,
    texts: BTreeMap<String, String>,
}

impl LocalizedText {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: Some(fallback.into()),
            texts: BTreeMap::new(),
        }
    }

    /// No fallback; locales without an explicit text resolve to `None`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(locale.into(), text.into());
        self
    }

    pub fn resolve(&self, locale: &Locale) -> Option<String> {
        self.texts
            .get(locale.as_str())
            .or_else(|| self.texts.get(locale.language()))
            .or(self.fallback.as_ref())
            .cloned()
    }
}

impl HasDisplayText for LocalizedText {
    fn display_text(&self, locale: &Locale) -> Option<String> {
        self.resolve(locale)
    }
}

/// A page known only by id and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    id: String,
    name: LocalizedText,
}

impl StaticPage {
    pub fn new(id: impl Into<String>, name: LocalizedText) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }

    /// Page whose name is the same in every locale
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, LocalizedText::new(name))
    }
}

impl Page for StaticPage {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_text(&self, locale: &Locale) -> Option<String> {
        self.name.resolve(locale)
    }
}
