//! Navigation tree file loading.
//!
//! Trees are authored as a YAML or JSON list of nodes; the format is chosen by
//! file extension. Element and icon references are plain strings.

use std::path::{Path, PathBuf};

use nav_tree::NavigationNode;

/// Tree as loaded from a file.
pub(crate) type Tree = Vec<NavigationNode<String, String>>;

/// Error returned when a tree file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TreeFileError {
    #[error("Navigation tree not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported tree file format: {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Supported tree file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load a navigation tree from a `.yaml`, `.yml` or `.json` file.
pub(crate) fn load_tree(path: &Path) -> Result<Tree, TreeFileError> {
    let format = Format::from_path(path)
        .ok_or_else(|| TreeFileError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TreeFileError::NotFound(path.to_path_buf())
        } else {
            TreeFileError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let tree: Tree = match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| TreeFileError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        Format::Json => serde_json::from_str(&content).map_err(|source| TreeFileError::Json {
            path: path.to_path_buf(),
            source,
        })?,
    };

    tracing::info!(path = %path.display(), nodes = tree.len(), "Loaded navigation tree");
    Ok(tree)
}
