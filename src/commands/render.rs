use std::path::Path;

use anyhow::Result;
use navmenu::ui::{json, render_sidebar, SidebarOptions, UiContext};
use navmenu::{all_menu_item_ids, DisplayMap, MenuEntry, VisibilityDeterminator};
use serde::Serialize;
use tracing::debug;

/// JSON output; field and entry order follow the traversal
#[derive(Serialize)]
struct RenderOutput<'a> {
    selected: Option<&'a str>,
    display: &'a DisplayMap,
}

pub fn cmd_render(
    config_path: &Path,
    selected: Option<&str>,
    all: bool,
    roles: &[String],
    ui: &UiContext,
) -> Result<()> {
    let config = super::load_config(config_path, ui)?;
    let tree = super::build_tree(&config, config_path, roles)?;

    // Without an explicit selection the default item is selected
    let selected = match selected {
        Some(id) => Some(id.to_string()),
        None => tree.default_menu_item().map(|item| item.id().to_string()),
    };
    debug!(selected = ?selected, all, "rendering sidebar");

    let display = if all {
        all_menu_item_ids(&tree)
    } else {
        VisibilityDeterminator::compute(&tree, selected.as_deref())
    };

    if ui.json {
        json::emit(&RenderOutput {
            selected: selected.as_deref(),
            display: &display,
        })?;
        return Ok(());
    }

    let options = SidebarOptions {
        unicode: ui.unicode,
        color: ui.color,
        locale: config.locale.clone(),
    };
    println!(
        "{}",
        render_sidebar(&tree, &display, selected.as_deref(), &options)
    );
    Ok(())
}
