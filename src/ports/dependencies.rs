//! Dependency resolver port.

use super::PortError;

/// Answers questions about the consumer's dependency graph.
pub trait DependencyResolver: Send + Sync {
    /// Returns the version of `module` currently pinned by the consumer, or
    /// `None` if it is not a direct or transitive dependency.
    ///
    /// # Errors
    ///
    /// Returns an error if the dependency graph cannot be read.
    fn pinned_version(&self, module: &str) -> Result<Option<String>, PortError>;

    /// Module paths the consumer declares as direct dependencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the dependency graph cannot be read.
    fn direct_dependencies(&self) -> Result<Vec<String>, PortError>;

    /// Module paths that at least one import of a loaded consumer package resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the consumer's imports cannot be read.
    fn imported_modules(&self) -> Result<Vec<String>, PortError>;
}
