use std::path::PathBuf;

use clap::{Parser, Subcommand};
use navmenu::ui::ColorWhen;

/// navmenu - render navigation menus defined in TOML
#[derive(Parser, Debug)]
#[command(name = "navmenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Use ASCII icons only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sidebar for a selected menu item
    Render {
        /// Menu definition file
        #[arg(short, long)]
        config: PathBuf,

        /// Selected menu item id (defaults to the first resolvable default item)
        #[arg(short, long)]
        selected: Option<String>,

        /// Show every menu object, ignoring selection and filters
        #[arg(long)]
        all: bool,

        /// Roles of the current user; items with a `role` attribute outside
        /// this list are hidden
        #[arg(short, long = "role")]
        roles: Vec<String>,
    },

    /// Print the resolved default menu items
    Defaults {
        /// Menu definition file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Validate a menu definition
    Check {
        /// Menu definition file
        #[arg(short, long)]
        config: PathBuf,
    },
}
