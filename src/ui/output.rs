use crossterm::style::Stylize;

use crate::config::ConfigWarning;
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, IconSet};

/// Human-readable lines for unknown-key warnings
pub fn format_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let icon = IconSet::new(ui.unicode).warning;
    let icon = if ui.color {
        format!("{}", icon.with(colors::WARNING))
    } else {
        icon.to_string()
    };

    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Error line plus one line per underlying cause
pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let icon = IconSet::new(ui.unicode).error;
    let icon = if ui.color {
        format!("{}", icon.with(colors::ERROR))
    } else {
        icon.to_string()
    };

    let mut out = format!("{} {}
", icon, err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("   caused by: {}\n", cause));
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    eprint!("{}", format_config_warnings(warnings, ui));
}
