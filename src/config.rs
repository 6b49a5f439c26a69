use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pkgrelease.toml";

/// Represents the complete configuration for pkg-release.
///
/// Every field has a default, so an empty file is a valid configuration and
/// reproduces the stock npm + git release flow.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Shell command run before the interactive release starts
    #[serde(default)]
    pub before_release: Option<String>,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// npm-compatible client used for `version` and `publish`
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Pass the operator's release tag to `publish --tag`
    #[serde(default)]
    pub publish_with_release_tag: bool,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_package_manager() -> String {
    "npm".to_string()
}

fn default_changelog_command() -> String {
    "node_modules/.bin/conventional-changelog".to_string()
}

fn default_changelog_preset() -> String {
    "angular".to_string()
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

/// Configuration for the change log generator.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_command")]
    pub command: String,

    #[serde(default = "default_changelog_preset")]
    pub preset: String,

    #[serde(default = "default_changelog_file")]
    pub file: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            command: default_changelog_command(),
            preset: default_changelog_preset(),
            file: default_changelog_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            before_release: None,
            remote: default_remote(),
            package_manager: default_package_manager(),
            publish_with_release_tag: false,
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pkgrelease.toml` in current directory
/// 3. `.pkgrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or if an explicit
///   path does not exist
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => discover_config(),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            parse_config_file(&path)
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    user.exists().then_some(user)
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| ReleaseError::config(format!("cannot parse {}: {}", path.display(), e)))
}
