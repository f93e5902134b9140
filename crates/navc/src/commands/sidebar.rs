//! `navc sidebar` command implementation.

use clap::Args;
use nav_compiler::compile_sidebar_with;

use super::CompileArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Role namespace for generated links (default: roles.default from config).
    #[arg(short, long, env = "NAVC_ROLE")]
    role: Option<String>,

    #[command(flatten)]
    pub common: CompileArgs,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the role is unknown, or the tree is
    /// rejected.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, tree) = self.common.load()?;
        let role = config.require_role(self.role.as_deref())?;

        let menu = compile_sidebar_with(&tree, &role, &config.compile_options())?;

        output.info(&format!(
            "Compiled {} menu items for role '{role}' from {}",
            menu.len(),
            config.tree_resolved.path.display()
        ));

        output.json(&menu)
    }
}
