use std::path::Path;

use anyhow::{Context, Result};
use navmenu::config::MenuConfig;
use navmenu::ui::output::print_config_warnings;
use navmenu::ui::UiContext;
use navmenu::MenuTree;

pub mod check;
pub mod defaults;
pub mod render;

/// Load a menu file, apply NAVMENU_* overrides and report unknown keys
fn load_config(path: &Path, ui: &UiContext) -> Result<MenuConfig> {
    let (config, warnings) = MenuConfig::load_with_warnings(path)
        .with_context(|| format!("failed to load menu from {}", path.display()))?;
    print_config_warnings(&warnings, ui);
    Ok(config.with_env_overrides())
}

fn build_tree(config: &MenuConfig, path: &Path, roles: &[String]) -> Result<MenuTree> {
    config
        .build(roles)
        .with_context(|| format!("failed to build menu from {}", path.display()))
}
