//! Terminal presentation of menus

pub mod context;
pub mod json;
pub mod output;
pub mod sidebar;
pub mod terminal;
pub mod theme;

pub use context::{ColorWhen, UiContext};
pub use sidebar::{render_sidebar, SidebarOptions};
pub use terminal::{detect_capabilities, TerminalCapabilities};
