//! Surface extractor serving pre-extracted surface files.

use std::sync::Arc;

use super::{read_json, SnapshotLayout};
use crate::ports::{FileSystem, PortError, SurfaceExtractor};
use crate::surface::Surface;

/// Loads surfaces from `surfaces/<module-key>@<version>.json`.
pub struct SnapshotSurfaceExtractor {
    fs: Arc<dyn FileSystem>,
    layout: SnapshotLayout,
}

impl SnapshotSurfaceExtractor {
    /// Creates an extractor reading through `fs`.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>, layout: SnapshotLayout) -> Self {
        Self { fs, layout }
    }
}

impl SurfaceExtractor for SnapshotSurfaceExtractor {
    fn extract(&self, module: &str, version: &str) -> Result<Surface, PortError> {
        let path = self.layout.surface_path(module, version);
        if !self.fs.exists(&path) {
            return Err(format!("no surface snapshot at {}", path.display()).into());
        }
        tracing::debug!(path = %path.display(), "reading surface snapshot");
        read_json(self.fs.as_ref(), &path)
    }
}
