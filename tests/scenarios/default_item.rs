//! Scenario: Default menu item
//!
//! Journey: a request arrives without a selection, so the first resolvable
//! default menu item is selected. Stale ids in the default chain are skipped.

use navmenu::{MenuEntry, MenuObjectType};

use crate::common::*;

/// SCENARIO E: the first default id was deleted from the menu
#[test]
fn scenario_deleted_default_is_skipped() {
    let mut tree = admin_tree();
    tree.set_default_menu_item_ids(["deleted-id", "home"]);

    let item = tree.default_menu_item().unwrap();
    assert_eq!(item.id(), "home");
    assert_eq!(item.object_type(), MenuObjectType::Page);
}

#[test]
fn scenario_render_without_selection_uses_default() {
    let env = TestEnv::console();
    let result = env.run("render", &[]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let first = result.stdout.lines().next().unwrap();
    assert_eq!(first, "*   Home");
    assert!(result.stderr.contains("deleted-id"), "stderr:\n{}", result.stderr);
}

#[test]
fn scenario_defaults_command_lists_resolved_items() {
    let env = TestEnv::console();
    let result = env.run("defaults", &[]);

    assert!(result.success);
    assert_eq!(result.stdout, "* home (Home)\n");
}

#[test]
fn scenario_default_override_from_environment() {
    let env = TestEnv::console();
    let result = env.run_with_env(
        "render",
        &["--json"],
        &[("NAVMENU_DEFAULT", "admin.users")],
    );

    assert!(result.success);
    let json: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(json["selected"], "admin.users");
    assert_eq!(json["display"]["admin"], true);
}
