use std::path::Path;

use anyhow::Result;
use navmenu::ui::theme::IconSet;
use navmenu::ui::{json, UiContext};
use navmenu::{MenuEntry, MenuItem};

pub fn cmd_defaults(config_path: &Path, ui: &UiContext) -> Result<()> {
    let config = super::load_config(config_path, ui)?;
    let tree = super::build_tree(&config, config_path, &[])?;
    let items = tree.all_default_menu_items();

    if ui.json {
        let items: Vec<_> = items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "id": item.id(),
                    "text": item.display_text(&config.locale),
                })
            })
            .collect();
        json::emit(&serde_json::json!({
            "configured": tree.all_default_menu_item_ids(),
            "default": tree.default_menu_item().map(|item| item.id()),
            "resolved": items,
        }))?;
        return Ok(());
    }

    if items.is_empty() {
        println!("No default menu item resolves to a page item.");
        return Ok(());
    }

    let icons = IconSet::new(ui.unicode);
    let marker_width = icons.selected.chars().count();
    for (index, item) in items.iter().enumerate() {
        let marker = if index == 0 {
            icons.selected.to_string()
        } else {
            " ".repeat(marker_width)
        };
        let text = item
            .display_text(&config.locale)
            .unwrap_or_else(|| item.id().to_string());
        println!("{} {} ({})", marker, item.id(), text);
    }
    Ok(())
}
