//! Display map - the result of a visibility determination
//!
//! Maps menu object id to an expanded flag:
//! - `true` - show the row and render its children
//! - `false` - show the row, keep its children collapsed
//! - absent - do not render the object at all
//!
//! Entries keep the order in which the traversal added them.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayMap {
    entries: IndexMap<String, bool>,
}

impl DisplayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` for display. An id already marked expanded stays
    /// expanded; a collapsed one is promoted if `expanded` is set.
    pub(crate) fn remember(&mut self, id: &str, expanded: bool) {
        match self.entries.get_mut(id) {
            Some(current) => *current |= expanded,
            None => {
                self.entries.insert(id.to_string(), expanded);
            }
        }
    }

    pub(crate) fn insert(&mut self, id: &str, flag: bool) {
        self.entries.insert(id.to_string(), flag);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// `None` if the id is not displayed
    pub fn is_expanded(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, expanded)| (id.as_str(), *expanded))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, bool> {
        self.entries
    }
}
