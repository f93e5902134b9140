//! CLI error types.

use nav_compiler::CompileError;
use nav_config::ConfigError;

use crate::tree_file::TreeFileError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    TreeFile(#[from] TreeFileError),

    #[error("{0}")]
    Compile(#[from] CompileError),

    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
