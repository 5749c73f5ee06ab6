//! Domain Services
//!
//! Pure logic that operates on a finished menu tree.
//! These services have no I/O dependencies and are easily testable.

mod display_map;
mod visibility;

pub use display_map::DisplayMap;
pub use visibility::{all_menu_item_ids, VisibilityDeterminator};
