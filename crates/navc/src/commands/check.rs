//! `navc check` command implementation.

use std::collections::HashSet;

use clap::Args;
use nav_compiler::{
    CompileOptions, MissingFieldPolicy, SidebarEntry, SidebarItem, compile_routes_with,
    compile_sidebar_with,
};
use nav_config::Config;
use nav_tree::tree_depth;

use super::CompileArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Check only this role (default: every role in roles.known).
    #[arg(short, long, env = "NAVC_ROLE")]
    role: Option<String>,

    #[command(flatten)]
    pub common: CompileArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Compiles the route table and the sidebar of each role with the reject
    /// policy, so the first incomplete node fails the check.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, a role is unknown, or any node is
    /// incomplete.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, tree) = self.common.load()?;
        let options = CompileOptions {
            missing_fields: MissingFieldPolicy::Reject,
            ..config.compile_options()
        };

        output.highlight(&format!("Checking {}", config.tree_resolved.path.display()));

        let depth = tree_depth(&tree);
        if depth > options.max_depth {
            output.warning(&format!(
                "Tree has {depth} levels but only {} are compiled; deeper entries are ignored",
                options.max_depth
            ));
        }

        let routes = compile_routes_with(&tree, &options)?;
        output.info(&format!("Routes: {}", routes.len()));

        let roles = roles_to_check(&config, self.role.as_deref())?;
        if roles.is_empty() {
            output.warning("No roles configured; sidebar not checked");
        }
        for role in &roles {
            let menu = compile_sidebar_with(&tree, role, &options)?;
            output.info(&format!("Sidebar ({role}): {} items", menu.len()));
            for key in duplicate_keys(&menu) {
                output.warning(&format!("Sidebar ({role}): duplicate key '{key}'"));
            }
        }

        output.success("Navigation tree is valid");
        Ok(())
    }
}

/// Roles whose sidebars are checked.
fn roles_to_check(config: &Config, explicit: Option<&str>) -> Result<Vec<String>, CliError> {
    if explicit.is_some() || (config.roles.known.is_empty() && config.roles.default.is_some()) {
        return Ok(vec![config.require_role(explicit)?]);
    }
    Ok(config.roles.known.clone())
}

/// Keys that appear more than once in any sibling list, in first-seen order.
fn duplicate_keys<I>(items: &[SidebarItem<I>]) -> Vec<String> {
    let mut duplicates = Vec::new();
    collect_duplicates(items.iter(), &mut duplicates);
    duplicates
}

fn collect_duplicates<'a, I: 'a>(
    siblings: impl Iterator<Item = &'a SidebarItem<I>> + Clone,
    duplicates: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for item in siblings.clone() {
        if !seen.insert(item.key.as_str()) && !duplicates.contains(&item.key) {
            duplicates.push(item.key.clone());
        }
    }
    for item in siblings {
        collect_duplicates(
            item.child_entries().iter().filter_map(SidebarEntry::as_item),
            duplicates,
        );
    }
}
