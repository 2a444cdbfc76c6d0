//! Usage scanner serving pre-computed usage indexes.

use std::sync::Arc;

use super::{read_json, SnapshotLayout};
use crate::ports::{FileSystem, PortError, UsageScanner};
use crate::usage::UsageIndex;

/// Loads usage indexes from `usage/<module-key>.json`.
pub struct SnapshotUsageScanner {
    fs: Arc<dyn FileSystem>,
    layout: SnapshotLayout,
}

impl SnapshotUsageScanner {
    /// Creates a scanner reading through `fs`.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>, layout: SnapshotLayout) -> Self {
        Self { fs, layout }
    }
}

impl UsageScanner for SnapshotUsageScanner {
    fn scan(&self, module: &str) -> Result<UsageIndex, PortError> {
        let path = self.layout.usage_path(module);
        if !self.fs.exists(&path) {
            return Err(format!("no usage snapshot at {}", path.display()).into());
        }
        read_json(self.fs.as_ref(), &path)
    }
}
