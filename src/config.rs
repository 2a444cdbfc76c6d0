//! Project configuration.
//!
//! Settings come from `.semver-audit.yaml` in the project root, then from
//! `SEMVER_AUDIT_*` environment variables. Command-line flags are applied on
//! top by the command layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ports::FileSystem;
use crate::report::OutputFormat;

/// Config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".semver-audit.yaml";

/// Default snapshot directory, relative to the project root.
pub const DEFAULT_SNAPSHOT_DIR: &str = ".semver-audit";

const ENV_SNAPSHOT_DIR: &str = "SEMVER_AUDIT_SNAPSHOT_DIR";
const ENV_FORMAT: &str = "SEMVER_AUDIT_FORMAT";
const ENV_STRICT: &str = "SEMVER_AUDIT_STRICT";
const ENV_UNUSED: &str = "SEMVER_AUDIT_UNUSED";

/// Effective audit settings for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Snapshot directory; relative paths resolve against the project root.
    pub snapshot_dir: PathBuf,
    /// Report format.
    pub format: OutputFormat,
    /// Fail on warnings as well as breaking changes.
    pub strict: bool,
    /// Run unused-dependency detection.
    pub unused: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            format: OutputFormat::Text,
            strict: false,
            unused: false,
        }
    }
}

impl AuditConfig {
    /// Loads the config of `project_root`, applying the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or invalid, or if an
    /// environment override has an invalid value.
    pub fn load(fs: &dyn FileSystem, project_root: &Path) -> Result<Self, ConfigError> {
        Self::load_file(fs, project_root)?.with_env(std::env::vars())
    }

    /// Loads only the config file, falling back to defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_file(fs: &dyn FileSystem, project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !fs.exists(&path) {
            return Ok(Self::default());
        }
        let raw = fs
            .read_to_string(&path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Applies `SEMVER_AUDIT_*` overrides from `vars`; other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparseable value.
    pub fn with_env<I>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                ENV_SNAPSHOT_DIR => self.snapshot_dir = PathBuf::from(value),
                ENV_FORMAT => {
                    self.format = value.parse().map_err(|_| invalid(&key, &value))?;
                }
                ENV_STRICT => self.strict = parse_bool(&key, &value)?,
                ENV_UNUSED => self.unused = parse_bool(&key, &value)?,
                _ => {}
            }
        }
        Ok(self)
    }

    /// Absolute location of the snapshot directory for `project_root`.
    #[must_use]
    pub fn snapshot_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.snapshot_dir)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue { key: key.to_string(), value: value.to_string() }
}
