//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::LiveFileSystem;
use crate::adapters::snapshot::{self, SnapshotLayout};
use crate::audit::Auditor;
use crate::ports::{DependencyResolver, FileSystem, SurfaceExtractor, UsageScanner};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// different adapter implementations; tests build the struct directly.
pub struct ServiceContext {
    /// Filesystem for config and snapshot reads.
    pub fs: Arc<dyn FileSystem>,
    /// Dependency graph of the consumer.
    pub resolver: Box<dyn DependencyResolver>,
    /// Surface extractor for module versions.
    pub extractor: Box<dyn SurfaceExtractor>,
    /// Usage scanner over the consumer codebase.
    pub scanner: Box<dyn UsageScanner>,
}

impl ServiceContext {
    /// Creates a context serving collaborators from the snapshot directory
    /// `snapshot_root` on the real disk.
    #[must_use]
    pub fn live(snapshot_root: &Path) -> Self {
        Self::snapshot(Arc::new(LiveFileSystem), snapshot_root)
    }

    /// Creates a context serving collaborators from `snapshot_root` through `fs`.
    #[must_use]
    pub fn snapshot(fs: Arc<dyn FileSystem>, snapshot_root: &Path) -> Self {
        let layout = SnapshotLayout::new(snapshot_root);
        let (resolver, extractor, scanner) = snapshot::collaborators(&fs, &layout);
        Self { fs, resolver: Box::new(resolver), extractor: Box::new(extractor), scanner: Box::new(scanner) }
    }

    /// Returns an auditor borrowing this context's collaborators.
    #[must_use]
    pub fn auditor(&self) -> Auditor<'_> {
        Auditor::new(self.resolver.as_ref(), self.extractor.as_ref(), self.scanner.as_ref())
    }
}
