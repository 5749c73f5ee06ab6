//! Domain Value Objects
//!
//! Immutable value types that represent menu concepts.

mod locale;
mod menu_object_type;

pub use locale::Locale;
pub use menu_object_type::MenuObjectType;
