//! Defaults file for the interactive prompts.
//!
//! An optional TOML file at `~/.config/dir-context/config.toml` (or the
//! platform-specific equivalent) changes the answers pre-filled in each prompt.
//! The file is only ever read; answers given during a run are not saved.
//!
//! # Layering
//!
//! The precedence order is: **prompt answer > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/Projects/web-app"
//!
//! [scan]
//! exclude_node_modules = true
//! exclude_dot_folders = true
//! exclude_folders = ["dist", "coverage"]
//! exclude_extensions = ["png", "lock"]
//!
//! [context]
//! create = true
//! include_extensions = ["rs", "md"]
//!
//! [output]
//! file_prefix = "web_"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so that a missing value falls back to the
/// hardcoded prompt default.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory suggested by the scan-path prompt
    pub dir: Option<PathBuf>,

    /// Exclusion defaults
    #[serde(default)]
    pub scan: FileScanConfig,

    /// Context document defaults
    #[serde(default)]
    pub context: FileContextConfig,

    /// Output naming defaults
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Exclusion defaults from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    /// Default answer to "Exclude node_modules folder?"
    pub exclude_node_modules: Option<bool>,

    /// Default answer to "Exclude folders starting with a dot?"
    pub exclude_dot_folders: Option<bool>,

    /// Folder names pre-filled in the additional exclusions prompt
    pub exclude_folders: Option<Vec<String>>,

    /// Extensions pre-filled in the tree exclusion prompt
    pub exclude_extensions: Option<Vec<String>>,
}

/// Context document defaults from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileContextConfig {
    /// Default answer to "Create a context document?"
    pub create: Option<bool>,

    /// Extensions pre-filled in the include prompt (merged with the built-in set)
    pub include_extensions: Option<Vec<String>>,
}

/// Output naming defaults from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Prefix pre-filled in the file prefix prompt
    pub file_prefix: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// `None` when the platform configuration directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dir-context").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or contains
    /// invalid TOML or unexpected fields.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load`].
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        log::debug!("Loaded prompt defaults from {}", path.display());

        Ok(config)
    }
}
