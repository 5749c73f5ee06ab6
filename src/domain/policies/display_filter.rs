//! Display Filter
//!
//! A composable predicate over menu objects. A menu object whose filter
//! rejects it is never rendered, no matter what is selected.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::entities::MenuEntry;
use crate::domain::value_objects::Locale;

/// Predicate deciding whether a menu object may be displayed.
///
/// Implementations must be pure: the same object always yields the same
/// answer for the lifetime of the filter.
pub trait MenuObjectFilter: Send + Sync {
    fn matches(&self, object: &dyn MenuEntry) -> bool;

    /// Human readable description of the filter, if any
    fn display_text(&self, _locale: &Locale) -> Option<String> {
        None
    }
}

/// Shared, cloneable handle to a [`MenuObjectFilter`].
///
/// `and`/`or` build new filters and leave both operands untouched, so one
/// filter value can be attached to many menu objects and combined freely.
#[derive(Clone)]
pub struct DisplayFilter {
    inner: Arc<dyn MenuObjectFilter>,
}

impl DisplayFilter {
    pub fn new(filter: impl MenuObjectFilter + 'static) -> Self {
        Self {
            inner: Arc::new(filter),
        }
    }

    /// Filter backed by a closure, without description
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&dyn MenuEntry) -> bool + Send + Sync + 'static,
    {
        Self::new(FnFilter {
            predicate,
            text: None,
        })
    }

    /// Filter that accepts everything
    pub fn always() -> Self {
        Self::from_fn(|_| true)
    }

    /// Filter that rejects everything
    pub fn never() -> Self {
        Self::from_fn(|_| false)
    }

    /// Accepts objects whose attribute `key` is one of `allowed`.
    /// Objects without the attribute are accepted.
    pub fn attribute_in<I, S>(key: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let allowed: BTreeSet<String> = allowed.into_iter().map(Into::into).collect();
        let text = format!(
            "{} in [{}]",
            key,
            allowed.iter().cloned().collect::<Vec<_>>().join(", ")
        );
        Self::from_fn(move |object| match object.attribute(&key) {
            Some(value) => allowed.contains(value),
            None => true,
        })
        .with_display_text(text)
    }

    /// Same predicate, with a fixed description for every locale
    pub fn with_display_text(self, text: impl Into<String>) -> Self {
        Self::new(Described {
            filter: self,
            text: text.into(),
        })
    }

    pub fn matches(&self, object: &dyn MenuEntry) -> bool {
        self.inner.matches(object)
    }

    pub fn display_text(&self, locale: &Locale) -> Option<String> {
        self.inner.display_text(locale)
    }

    /// Both filters must match; `other` is only asked if `self` matched
    pub fn and(&self, other: &DisplayFilter) -> DisplayFilter {
        Self::new(AndFilter {
            left: self.clone(),
            right: other.clone(),
        })
    }

    /// Either filter must match; `other` is only asked if `self` did not
    pub fn or(&self, other: &DisplayFilter) -> DisplayFilter {
        Self::new(OrFilter {
            left: self.clone(),
            right: other.clone(),
        })
    }
}

impl fmt::Debug for DisplayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayFilter")
            .field("text", &self.display_text(&Locale::default()))
            .finish()
    }
}

struct FnFilter<F> {
    predicate: F,
    text: Option<String>,
}

impl<F> MenuObjectFilter for FnFilter<F>
where
    F: Fn(&dyn MenuEntry) -> bool + Send + Sync,
{
    fn matches(&self, object: &dyn MenuEntry) -> bool {
        (self.predicate)(object)
    }

    fn display_text(&self, _locale: &Locale) -> Option<String> {
        self.text.clone()
    }
}

struct Described {
    filter: DisplayFilter,
    text: String,
}

impl MenuObjectFilter for Described {
    fn matches(&self, object: &dyn MenuEntry) -> bool {
        self.filter.matches(object)
    }

    fn display_text(&self, _locale: &Locale) -> Option<String> {
        Some(self.text.clone())
    }
}

struct AndFilter {
    left: DisplayFilter,
    right: DisplayFilter,
}

impl MenuObjectFilter for AndFilter {
    fn matches(&self, object: &dyn MenuEntry) -> bool {
        self.left.matches(object) && self.right.matches(object)
    }

    fn display_text(&self, locale: &Locale) -> Option<String> {
        let texts: Vec<String> = [self.left.display_text(locale), self.right.display_text(locale)]
            .into_iter()
            .flatten()
            .filter(|text| !text.is_empty())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join(" + "))
        }
    }
}

struct OrFilter {
    left: DisplayFilter,
    right: DisplayFilter,
}

impl MenuObjectFilter for OrFilter {
    fn matches(&self, object: &dyn MenuEntry) -> bool {
        self.left.matches(object) || self.right.matches(object)
    }

    fn display_text(&self, locale: &Locale) -> Option<String> {
        non_empty(self.left.display_text(locale)).or_else(|| non_empty(self.right.display_text(locale)))
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.is_empty())
}
