//! Locale value object
//!
//! Display texts are resolved per locale. The locale is an opaque language
//! tag such as `en` or `de-AT`; navmenu never interprets it beyond
//! extracting the primary language for fallback lookups.

use serde::{Deserialize, Serialize};

/// Language tag used to resolve display texts
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`de` for `de-AT`)
    pub fn language(&self) -> &str {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
