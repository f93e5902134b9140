//! navc CLI - Navigation tree compiler.
//!
//! Provides commands for:
//! - `routes`: Print the route table as JSON
//! - `sidebar`: Print a role's sidebar menu as JSON
//! - `check`: Validate a navigation tree with the reject policy

mod commands;
mod error;
mod output;
mod tree_file;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, CompileArgs, RoutesArgs, SidebarArgs};
use output::Output;

/// navc - Navigation tree compiler.
#[derive(Parser)]
#[command(name = "navc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the route table.
    Routes(RoutesArgs),
    /// Compile the sidebar menu for a role.
    Sidebar(SidebarArgs),
    /// Validate the tree: compile routes and each role's sidebar, rejecting
    /// incomplete nodes.
    Check(CheckArgs),
}

impl Commands {
    fn common(&self) -> &CompileArgs {
        match self {
            Self::Routes(args) => &args.common,
            Self::Sidebar(args) => &args.common,
            Self::Check(args) => &args.common,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.common().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Routes(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
