//! Error types for the audit pipeline.
//!
//! The diff engine itself cannot fail; every variant here belongs to input
//! parsing, a collaborator port, configuration, or rendering.

use thiserror::Error;

use crate::ports::PortError;

/// Failures that abort an audit before or while its inputs are gathered.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The `module@version` argument did not split into two non-empty parts.
    #[error("invalid upgrade specification: {spec} (expected format: module@version)")]
    MalformedUpgradeSpec {
        /// The raw input as given by the caller.
        spec: String,
    },

    /// The target module is not a dependency of the audited project.
    #[error("module {module} not found in project dependencies")]
    ModuleNotFound {
        /// Module path that was looked up.
        module: String,
    },

    /// The surface of one module version could not be loaded.
    #[error("failed to load API surface of {module}@{version}: {source}")]
    SurfaceLoad {
        /// Module path whose surface failed to load.
        module: String,
        /// Version that failed to load.
        version: String,
        /// Underlying collaborator error.
        #[source]
        source: PortError,
    },

    /// Scanning the consumer codebase for symbol usage failed.
    #[error("failed to scan usage of {module}: {source}")]
    UsageScan {
        /// Module whose usage was being scanned.
        module: String,
        /// Underlying collaborator error.
        #[source]
        source: PortError,
    },

    /// The dependency resolver could not answer a query.
    #[error("failed to read project dependencies: {0}")]
    Dependencies(#[source] PortError),
}

/// Violations of the surface model invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// A symbol name was registered twice within one surface.
    #[error("symbol {name} is declared more than once in the surface")]
    DuplicateSymbol {
        /// The conflicting symbol name.
        name: String,
    },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: String,
        /// Underlying filesystem error.
        #[source]
        source: PortError,
    },

    /// The config file is not valid YAML for [`crate::config::AuditConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An environment override carried a value that could not be interpreted.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// Environment variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// Rendering failures.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The JSON report could not be serialized.
    #[error("failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),
}
