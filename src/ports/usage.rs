//! Usage scanner port.

use super::PortError;
use crate::usage::UsageIndex;

/// Scans the consumer codebase for references into one module.
pub trait UsageScanner: Send + Sync {
    /// Builds the usage index of `module`'s exported symbols over the whole
    /// consumer codebase.
    ///
    /// # Errors
    ///
    /// Returns an error if the consumer codebase cannot be scanned.
    fn scan(&self, module: &str) -> Result<UsageIndex, PortError>;
}
