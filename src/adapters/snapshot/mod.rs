//! Snapshot-backed collaborators.
//!
//! A snapshot directory holds surfaces and usage indexes that were extracted
//! ahead of time, plus a manifest of the consumer's dependencies:
//!
//! ```text
//! <root>/
//!   ├── dependencies.yaml
//!   ├── surfaces/<module-key>@<version>.json
//!   └── usage/<module-key>.json
//! ```
//!
//! `<module-key>` is the module path with every `/` replaced by `~`.
//! All reads go through the [`FileSystem`] port.

pub mod dependencies;
pub mod surfaces;
pub mod usage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::ports::{FileSystem, PortError};

pub use dependencies::{DependencyManifest, ModuleRequirement, SnapshotDependencyResolver};
pub use surfaces::SnapshotSurfaceExtractor;
pub use usage::SnapshotUsageScanner;

/// File name of the dependency manifest inside a snapshot directory.
pub const MANIFEST_FILE_NAME: &str = "dependencies.yaml";

/// Resolves file locations inside a snapshot directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLayout {
    root: PathBuf,
}

impl SnapshotLayout {
    /// Creates a layout rooted at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    /// Root of the snapshot directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the dependency manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE_NAME)
    }

    /// Path of the surface file for `module` at `version`.
    #[must_use]
    pub fn surface_path(&self, module: &str, version: &str) -> PathBuf {
        self.root.join("surfaces").join(format!("{}@{version}.json", module_key(module)))
    }

    /// Path of the usage index file for `module`.
    #[must_use]
    pub fn usage_path(&self, module: &str) -> PathBuf {
        self.root.join("usage").join(format!("{}.json", module_key(module)))
    }
}

/// Flattens a module path into a single file-name component.
#[must_use]
pub fn module_key(module: &str) -> String {
    module.replace('/', "~")
}

/// Reads and deserializes a JSON file through `fs`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(fs: &dyn FileSystem, path: &Path) -> Result<T, PortError> {
    let contents = fs.read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()).into())
}

/// Builds the three snapshot collaborators over one shared filesystem.
#[must_use]
pub fn collaborators(
    fs: &Arc<dyn FileSystem>,
    layout: &SnapshotLayout,
) -> (SnapshotDependencyResolver, SnapshotSurfaceExtractor, SnapshotUsageScanner) {
    (
        SnapshotDependencyResolver::new(Arc::clone(fs), layout.clone()),
        SnapshotSurfaceExtractor::new(Arc::clone(fs), layout.clone()),
        SnapshotUsageScanner::new(Arc::clone(fs), layout.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_paths_flatten_into_file_names() {
        assert_eq!(module_key("github.com/pkg/errors"), "github.com~pkg~errors");
        assert_eq!(module_key("rsc.io/quote/v3"), "rsc.io~quote~v3");
    }

    #[test]
    fn layout_places_files_under_root() {
        let layout = SnapshotLayout::new(Path::new("/project/.semver-audit"));
        assert_eq!(layout.manifest_path(), Path::new("/project/.semver-audit/dependencies.yaml"));
        assert_eq!(
            layout.surface_path("example.com/lib", "v1.0.0"),
            Path::new("/project/.semver-audit/surfaces/example.com~lib@v1.0.0.json")
        );
        assert_eq!(
            layout.usage_path("example.com/lib"),
            Path::new("/project/.semver-audit/usage/example.com~lib.json")
        );
    }
}
