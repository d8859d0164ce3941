use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagReleaseError};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "TAG_RELEASE_CONFIG";

/// File name looked up in the repository root.
pub const REPO_CONFIG_FILE: &str = "tagrelease.toml";

/// Represents the complete configuration for tag-release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release_notes: ReleaseNotesConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

fn default_release_notes_directory() -> PathBuf {
    PathBuf::from("doc/release_notes")
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Where release notes live, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseNotesConfig {
    #[serde(default = "default_release_notes_directory")]
    pub directory: PathBuf,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        ReleaseNotesConfig {
            directory: default_release_notes_directory(),
        }
    }
}

/// Release tag naming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            prefix: default_tag_prefix(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| TagReleaseError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tag.prefix.is_empty() {
            return Err(TagReleaseError::config("tag.prefix must not be empty"));
        }
        if self.release_notes.directory.is_absolute() {
            return Err(TagReleaseError::config(
                "release_notes.directory must be relative to the repository root",
            ));
        }
        Ok(())
    }
}

/// Config file named by [`CONFIG_ENV_VAR`], if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Explicit path (usually from [`config_path_from_env`])
/// 2. `tagrelease.toml` in the repository root
/// 3. `tag-release/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&Path>, repo_root: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if repo_root.join(REPO_CONFIG_FILE).exists() {
        repo_root.join(REPO_CONFIG_FILE)
    } else if let Some(path) = dirs::config_dir()
        .map(|dir| dir.join("tag-release").join("config.toml"))
        .filter(|path| path.exists())
    {
        path
    } else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        TagReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    Config::from_toml(&text).map_err(|e| match e {
        TagReleaseError::Config(msg) => {
            TagReleaseError::config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
