//! Dependency resolver backed by a YAML manifest.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::SnapshotLayout;
use crate::ports::{DependencyResolver, FileSystem, PortError};

/// One module in the consumer's build list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRequirement {
    /// Module path.
    pub path: String,
    /// Version selected for the build.
    pub version: String,
    /// Whether the consumer requires the module directly.
    #[serde(default)]
    pub direct: bool,
}

/// Contents of `dependencies.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManifest {
    /// Every module in the build list, direct and transitive.
    #[serde(default)]
    pub modules: Vec<ModuleRequirement>,
    /// Module paths that imports of the consumer's packages resolve to.
    #[serde(default)]
    pub imported_modules: Vec<String>,
}

impl DependencyManifest {
    /// Looks up the selected version of `module`.
    #[must_use]
    pub fn version_of(&self, module: &str) -> Option<&str> {
        self.modules.iter().find(|m| m.path == module).map(|m| m.version.as_str())
    }
}

/// Answers dependency queries from `dependencies.yaml`.
///
/// The manifest is re-read on every call; audits query it at most three times.
pub struct SnapshotDependencyResolver {
    fs: Arc<dyn FileSystem>,
    layout: SnapshotLayout,
}

impl SnapshotDependencyResolver {
    /// Creates a resolver reading through `fs`.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>, layout: SnapshotLayout) -> Self {
        Self { fs, layout }
    }

    /// Loads and parses the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing or is not valid YAML.
    pub fn manifest(&self) -> Result<DependencyManifest, PortError> {
        let path = self.layout.manifest_path();
        if !self.fs.exists(&path) {
            return Err(format!("no dependency manifest at {}", path.display()).into());
        }
        let contents = self.fs.read_to_string(&path)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("failed to parse {}: {e}", path.display()).into())
    }
}

impl DependencyResolver for SnapshotDependencyResolver {
    fn pinned_version(&self, module: &str) -> Result<Option<String>, PortError> {
        Ok(self.manifest()?.version_of(module).map(String::from))
    }

    fn direct_dependencies(&self) -> Result<Vec<String>, PortError> {
        let manifest = self.manifest()?;
        Ok(manifest.modules.into_iter().filter(|m| m.direct).map(|m| m.path).collect())
    }

    fn imported_modules(&self) -> Result<Vec<String>, PortError> {
        Ok(self.manifest()?.imported_modules)
    }
}
