//! Scenario: Role based menu
//!
//! Journey: items carry a `role` attribute; the menu is rendered for users
//! with different roles.

use crate::common::*;

#[test]
fn scenario_guest_does_not_see_admin_section() {
    let env = TestEnv::console();
    let result = env.run("render", &["--role", "guest", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let json: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    let display = json["display"].as_object().unwrap();
    assert!(display.contains_key("home"));
    assert!(!display.contains_key("admin"));
}

#[test]
fn scenario_admin_sees_admin_section() {
    let env = TestEnv::console();
    let result = env.run("render", &["--role", "admin", "--selected", "admin"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout,
        "    Home\n* [v] Administration\n      Users\n      Roles\n    Docs [ext]\n"
    );
}
