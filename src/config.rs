use crate::domain::SemanticVersion;
use crate::error::{Result, SemverFileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "semver-file.toml";

/// Configuration for a file-backed version store.
///
/// `file` is read, `bumped_file` (when set) receives writes; otherwise writes
/// go back to `file`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoreConfig {
    #[serde(default)]
    pub initial_version: SemanticVersion,

    pub file: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bumped_file: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        StoreConfig {
            initial_version: SemanticVersion::default(),
            file: file.into(),
            bumped_file: None,
        }
    }

    pub fn with_initial_version(mut self, version: SemanticVersion) -> Self {
        self.initial_version = version;
        self
    }

    pub fn with_bumped_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bumped_file = Some(path.into());
        self
    }

    pub fn read_path(&self) -> &Path {
        &self.file
    }

    pub fn write_path(&self) -> &Path {
        self.bumped_file.as_deref().unwrap_or(&self.file)
    }
}

/// Partial configuration as written in a TOML file or given on the command line.
///
/// Every field is optional so command-line values can be layered on top.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub initial_version: Option<SemanticVersion>,

    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub bumped_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Take every value set in `other`, keeping ours where `other` is silent.
    pub fn merge(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            initial_version: other.initial_version.or(self.initial_version),
            file: other.file.or(self.file),
            bumped_file: other.bumped_file.or(self.bumped_file),
        }
    }

    /// Build the final store configuration; `file` is mandatory.
    pub fn resolve(self) -> Result<StoreConfig> {
        let file = self
            .file
            .ok_or_else(|| SemverFileError::config("No version file configured"))?;

        Ok(StoreConfig {
            initial_version: self.initial_version.unwrap_or_default(),
            file,
            bumped_file: self.bumped_file,
        })
    }
}

/// Loads configuration overrides from a TOML file.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-file.toml` in current directory
/// 3. `semver-file.toml` in user config directory
///
/// # Returns
/// * `Ok(Some(..))` - Parsed file contents
/// * `Ok(None)` - No configuration file found (only when no custom path was given)
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Option<ConfigOverrides>> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            candidate
        } else {
            return Ok(None);
        }
    } else {
        return Ok(None);
    };

    tracing::debug!(path = %path.display(), "loading configuration");

    let config_str = fs::read_to_string(&path).map_err(|e| {
        SemverFileError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let overrides: ConfigOverrides = toml::from_str(&config_str).map_err(|e| {
        SemverFileError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })?;

    Ok(Some(overrides))
}
