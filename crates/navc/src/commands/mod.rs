//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod routes;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use nav_compiler::MissingFieldPolicy;
use nav_config::{CliSettings, Config};

pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use sidebar::SidebarArgs;

use crate::error::CliError;
use crate::tree_file::{Tree, load_tree};

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CompileArgs {
    /// Path to configuration file (default: auto-discover navc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation tree file, .yaml/.yml or .json (overrides config).
    #[arg(short, long)]
    tree: Option<PathBuf>,

    /// Missing-field policy: pass-through, skip or reject (overrides config).
    #[arg(long)]
    policy: Option<MissingFieldPolicy>,

    /// Number of tree levels to visit (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Enable verbose output (show loading and compilation logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CompileArgs {
    /// Load configuration and the navigation tree it points to.
    fn load(&self) -> Result<(Config, Tree), CliError> {
        let cli_settings = CliSettings {
            tree_path: self.tree.clone(),
            missing_fields: self.policy,
            max_depth: self.max_depth,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let tree = load_tree(&config.tree_resolved.path)?;

        Ok((config, tree))
    }
}
