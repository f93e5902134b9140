//! `navc routes` command implementation.

use clap::Args;
use nav_compiler::compile_routes_with;

use super::CompileArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    pub common: CompileArgs,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the tree is rejected.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, tree) = self.common.load()?;
        let options = config.compile_options();

        let routes = compile_routes_with(&tree, &options)?;

        output.info(&format!(
            "Compiled {} routes from {} (policy: {}, depth: {})",
            routes.len(),
            config.tree_resolved.path.display(),
            options.missing_fields,
            options.max_depth
        ));
        let incomplete = routes.iter().filter(|route| !route.is_complete()).count();
        if incomplete > 0 {
            output.warning(&format!("{incomplete} route(s) are missing a path or element"));
        }

        output.json(&routes)
    }
}
