//! navmenu CLI - render navigation menus defined in TOML
//!
//! Usage: navmenu <COMMAND>
//!
//! Commands:
//!   render    Print the sidebar for a selected menu item
//!   defaults  Print the resolved default menu items
//!   check     Validate a menu definition

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use navmenu::ui::output::format_error;
use navmenu::ui::UiContext;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color, cli.ascii);
    if let Err(err) = run(cli.command, &ui) {
        eprint!("{}", format_error(&err, &ui));
        std::process::exit(1);
    }
}

fn run(command: Commands, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Render {
            config,
            selected,
            all,
            roles,
        } => commands::render::cmd_render(&config, selected.as_deref(), all, &roles, ui),
        Commands::Defaults { config } => commands::defaults::cmd_defaults(&config, ui),
        Commands::Check { config } => commands::check::cmd_check(&config, ui),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| format!("navmenu={}", level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
