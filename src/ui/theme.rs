use crossterm::style::Color;

/// Design tokens for the sidebar renderer.
///
/// All icons and colors used by `ui` are sourced from this module.
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const SELECTED: Color = Color::Cyan;
    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Selected row marker.
    pub const SELECTED: &str = "●";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const EXTERNAL: &str = "↗";
    pub const SEPARATOR: &str = "────────";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    pub const SELECTED: &str = "*";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const EXTERNAL: &str = "[ext]";
    pub const SEPARATOR: &str = "--------";
}

/// Icon set picked once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub selected: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub external: &'static str,
    pub separator: &'static str,
}

impl IconSet {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                warning: icons::WARNING,
                selected: icons::SELECTED,
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                external: icons::EXTERNAL,
                separator: icons::SEPARATOR,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                selected: icons_ascii::SELECTED,
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                external: icons_ascii::EXTERNAL,
                separator: icons_ascii::SEPARATOR,
            }
        }
    }
}
