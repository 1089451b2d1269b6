use clap::{ArgAction, Parser};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::core::walk::TraversalConfig;

#[derive(Parser, Debug)]
#[command(name = "ctree")]
#[command(about = "Print a colorized directory tree", long_about = None)]
pub struct Cli {
    /// Target directory (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Show everything, disabling dotfile, .git/node_modules and --exclude filtering
    #[arg(long)]
    pub sall: bool,

    /// Pass --dotfiles=false to hide entries whose name starts with '.'
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub dotfiles: bool,

    /// Comma-separated directory basenames whose contents are skipped
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub exclude: Vec<String>,
}

impl Cli {
    /// Resolve flags into the immutable traversal configuration. Pure; the
    /// target path is not validated here, a bad path surfaces as the first
    /// filesystem error during the walk.
    pub fn into_config(self) -> TraversalConfig {
        let show_all = self.sall;
        TraversalConfig {
            root: self.path.unwrap_or_else(|| PathBuf::from(".")),
            show_all,
            exclude_dotfiles: !self.dotfiles && !show_all,
            exclude_dirs: if show_all {
                HashSet::new()
            } else {
                self.exclude.into_iter().collect()
            },
        }
    }
}
