//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `pages` - Static pages and localized texts built from configuration

pub mod pages;

// Re-export for convenience
pub use pages::{LocalizedText, StaticPage};
