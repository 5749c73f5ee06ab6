//! Domain Layer
//!
//! The menu model and the visibility algorithm - pure logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Menu objects, the unique-id tree and the menu tree
//! - `value_objects/` - Immutable value types (Locale, MenuObjectType)
//! - `services/` - Visibility determination over a finished tree
//! - `policies/` - Display filters
//! - `ports/` - Interfaces to pages, texts and URLs owned by the application

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
