use std::path::Path;

use anyhow::Result;
use crossterm::style::Stylize;
use navmenu::ui::theme::{colors, IconSet};
use navmenu::ui::{json, UiContext};
use navmenu::{MenuEntry, MenuObjectType, MenuTree};

/// Number of menu objects per kind
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct KindCounts {
    pages: usize,
    external: usize,
    separators: usize,
    redirects: usize,
}

fn count_kinds(tree: &MenuTree) -> KindCounts {
    let mut counts = KindCounts::default();
    tree.iterate_all_menu_objects(|object| match object.object_type() {
        MenuObjectType::Page => counts.pages += 1,
        MenuObjectType::External => counts.external += 1,
        MenuObjectType::Separator => counts.separators += 1,
        MenuObjectType::RedirectToPage => counts.redirects += 1,
    });
    counts
}

pub fn cmd_check(config_path: &Path, ui: &UiContext) -> Result<()> {
    let config = super::load_config(config_path, ui)?;
    let tree = super::build_tree(&config, config_path, &[])?;

    let counts = count_kinds(&tree);
    let configured = tree.all_default_menu_item_ids().len();
    let resolved = tree.all_default_menu_items().len();

    if ui.json {
        json::emit(&serde_json::json!({
            "file": config_path.display().to_string(),
            "objects": tree.len(),
            "pages": counts.pages,
            "external": counts.external,
            "separators": counts.separators,
            "redirects": counts.redirects,
            "defaults_configured": configured,
            "defaults_resolved": resolved,
        }))?;
        return Ok(());
    }

    let icons = IconSet::new(ui.unicode);
    let success = if ui.color {
        format!("{}", icons.success.with(colors::SUCCESS))
    } else {
        icons.success.to_string()
    };
    println!(
        "{} {}: {} menu objects ({} pages, {} external, {} separators, {} redirects)",
        success,
        config_path.display(),
        tree.len(),
        counts.pages,
        counts.external,
        counts.separators,
        counts.redirects
    );

    if configured > 0 && resolved < configured {
        let warning = if ui.color {
            format!("{}", icons.warning.with(colors::WARNING))
        } else {
            icons.warning.to_string()
        };
        println!(
            "{} {} of {} default menu items resolve to a page item",
            warning, resolved, configured
        );
    }
    Ok(())
}
