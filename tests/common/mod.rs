//! Common test utilities for navmenu integration tests.
//!
//! - `TestEnv`: temp directory holding a menu file, plus CLI helpers
//! - `admin_tree`: the home/admin fixture used across scenarios

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

use navmenu::{MenuTree, StaticPage};
use tempfile::TempDir;

/// Menu used by CLI tests
pub const CONSOLE_MENU: &str = r#"
default = ["deleted-id", "home"]

[[items]]
id = "home"
text = "Home"
texts = { de = "Start" }

[[items]]
id = "admin"
text = "Administration"
attributes = { role = "admin" }

[[items]]
id = "admin.users"
parent = "admin"
text = "Users"

[[items]]
id = "admin.roles"
parent = "admin"
text = "Roles"

[[items]]
id = "docs"
kind = "external"
url = "https://docs.example.com/"
text = "Docs"

[[items]]
id = "users"
kind = "redirect"
redirect_to = "admin.users"
"#;

/// Result of running the navmenu binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Temp directory with one menu file
pub struct TestEnv {
    dir: TempDir,
    pub menu: PathBuf,
}

impl TestEnv {
    pub fn with_menu(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let menu = dir.path().join("menu.toml");
        std::fs::write(&menu, content).unwrap();
        Self { dir, menu }
    }

    pub fn console() -> Self {
        Self::with_menu(CONSOLE_MENU)
    }

    /// Run `navmenu <command> --config <menu> <args...>` with ASCII output
    pub fn run(&self, command: &str, args: &[&str]) -> TestResult {
        self.run_with_env(command, args, &[])
    }

    pub fn run_with_env(&self, command: &str, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_navmenu"));
        cmd.arg(command)
            .arg("--config")
            .arg(&self.menu)
            .arg("--ascii")
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("NAVMENU_LOCALE")
            .env_remove("NAVMENU_DEFAULT")
            .env("NO_COLOR", "1");
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn page(id: &str) -> Arc<StaticPage> {
    Arc::new(StaticPage::named(id, id))
}

/// `home`, `admin` with children `admin.users` and `admin.roles`
pub fn admin_tree() -> MenuTree {
    let mut tree = MenuTree::new();
    tree.create_root_item("home", page("home")).unwrap();
    tree.create_root_item("admin", page("admin")).unwrap();
    tree.create_item("admin", "admin.users", page("admin.users"))
        .unwrap();
    tree.create_item("admin", "admin.roles", page("admin.roles"))
        .unwrap();
    tree
}
