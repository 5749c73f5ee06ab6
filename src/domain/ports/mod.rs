//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the menu domain.
//! Pages, display texts and URLs belong to the surrounding application;
//! the menu only consumes them through these ports.

pub mod display_text;
pub mod page;
pub mod url_provider;

pub use display_text::HasDisplayText;
pub use page::Page;
pub use url_provider::HasSimpleUrl;
