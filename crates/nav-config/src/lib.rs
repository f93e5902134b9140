//! Configuration management for navc.
//!
//! Parses `navc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `tree.path`
//! - `roles.known`
//! - `roles.default`

mod expand;

use std::path::{Path, PathBuf};

use nav_compiler::{CompileOptions, DEFAULT_MAX_DEPTH, MissingFieldPolicy};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation tree file.
    pub tree_path: Option<PathBuf>,
    /// Override missing-field policy.
    pub missing_fields: Option<MissingFieldPolicy>,
    /// Override traversal depth.
    pub max_depth: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navc.toml";

/// Default navigation tree filename, relative to the config directory.
const DEFAULT_TREE_FILENAME: &str = "navigation.yaml";

/// Upper bound for `compiler.max_depth`.
const MAX_DEPTH_LIMIT: usize = 16;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree configuration (path is a relative string from TOML).
    tree: TreeConfigRaw,
    /// Compiler configuration.
    pub compiler: CompilerConfig,
    /// Role configuration.
    pub roles: RolesConfig,

    /// Resolved tree configuration (set after loading).
    #[serde(skip)]
    pub tree_resolved: TreeConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw tree configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TreeConfigRaw {
    path: Option<String>,
}

/// Resolved tree configuration with an absolute path.
#[derive(Debug, Default)]
pub struct TreeConfig {
    /// Navigation tree file (`.yaml`, `.yml` or `.json`).
    pub path: PathBuf,
}

/// Compiler configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Treatment of incomplete nodes.
    pub missing_fields: MissingFieldPolicy,
    /// Number of tree levels visited.
    pub max_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Role configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    /// Roles accepted for sidebar compilation. Empty accepts any role.
    pub known: Vec<String>,
    /// Role used when none is given on the command line.
    pub default: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`roles.default`").
        field: String,
        /// Error message (e.g., "${`NAVC_ROLE`} not set").
        message: String,
    },
    /// Role not listed in `roles.known`.
    #[error("Unknown role '{role}' (known roles: {})", .known.join(", "))]
    UnknownRole {
        /// Requested role.
        role: String,
        /// Configured roles.
        known: Vec<String>,
    },
}

/// Require a role name to be usable as a URL path segment.
fn require_role_segment(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.contains('/') {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '/': {value}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(tree_path) = &settings.tree_path {
            self.tree_resolved.path.clone_from(tree_path);
        }
        if let Some(missing_fields) = settings.missing_fields {
            self.compiler.missing_fields = missing_fields;
        }
        if let Some(max_depth) = settings.max_depth {
            self.compiler.max_depth = max_depth;
        }
    }

    /// Compiler options for this configuration.
    #[must_use]
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            missing_fields: self.compiler.missing_fields,
            max_depth: self.compiler.max_depth,
        }
    }

    /// Resolve the role for a sidebar compilation.
    ///
    /// Uses `explicit` if given, otherwise `roles.default`. When `roles.known`
    /// is non-empty the resolved role must be one of them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no role can be resolved or the role
    /// is not a valid path segment, and `ConfigError::UnknownRole` if it is
    /// not a known role.
    pub fn require_role(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        let role = explicit.or(self.roles.default.as_deref()).ok_or_else(|| {
            ConfigError::Validation("no role given and roles.default is not set".to_owned())
        })?;
        require_role_segment(role, "role")?;

        if !self.roles.known.is_empty() && !self.roles.known.iter().any(|known| known == role) {
            return Err(ConfigError::UnknownRole {
                role: role.to_owned(),
                known: self.roles.known.clone(),
            });
        }

        Ok(role.to_owned())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            tree: TreeConfigRaw::default(),
            compiler: CompilerConfig::default(),
            roles: RolesConfig::default(),
            tree_resolved: TreeConfig {
                path: base.join(DEFAULT_TREE_FILENAME),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_compiler()?;
        self.validate_roles()?;
        Ok(())
    }

    /// Validate compiler configuration.
    fn validate_compiler(&self) -> Result<(), ConfigError> {
        let depth = self.compiler.max_depth;
        if depth == 0 {
            return Err(ConfigError::Validation(
                "compiler.max_depth must be greater than 0".to_owned(),
            ));
        }
        if depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "compiler.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Validate role configuration.
    fn validate_roles(&self) -> Result<(), ConfigError> {
        for role in &self.roles.known {
            require_role_segment(role, "roles.known")?;
        }

        if let Some(default) = &self.roles.default {
            require_role_segment(default, "roles.default")?;
            if !self.roles.known.is_empty() && !self.roles.known.contains(default) {
                return Err(ConfigError::Validation(format!(
                    "roles.default '{default}' is not listed in roles.known"
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.tree.path {
            self.tree.path = Some(expand::expand_env(path, "tree.path")?);
        }

        for role in &mut self.roles.known {
            *role = expand::expand_env(role, "roles.known")?;
        }

        if let Some(ref default) = self.roles.default {
            self.roles.default = Some(expand::expand_env(default, "roles.default")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.tree_resolved = TreeConfig {
            path: config_dir.join(self.tree.path.as_deref().unwrap_or(DEFAULT_TREE_FILENAME)),
        };
    }
}
