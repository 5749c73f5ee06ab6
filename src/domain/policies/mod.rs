//! Domain Policies
//!
//! Rules that decide whether a menu object is eligible for display.
//! Filters are pure predicates; they may close over decisions made by the
//! caller (for example the roles of the current user) but never make
//! authorization decisions themselves.

mod display_filter;

pub use display_filter::{DisplayFilter, MenuObjectFilter};
