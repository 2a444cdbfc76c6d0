//! Filesystem port for reading snapshot and config files.

use std::path::Path;

use super::PortError;

/// Provides read access to files.
///
/// Abstracting the filesystem lets the snapshot adapters and config loader
/// run against an in-memory tree in tests.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;
}
