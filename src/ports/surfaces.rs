//! Surface extractor port.

use super::PortError;
use crate::surface::Surface;

/// Produces the exported surface of a module at a given version.
///
/// Implementations own signature normalization: the emitted strings must not
/// change under parameter renames, but must change with parameter types,
/// arity or variadic-ness.
pub trait SurfaceExtractor: Send + Sync {
    /// Loads the surface of `module` at `version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the module version cannot be resolved or loaded.
    fn extract(&self, module: &str, version: &str) -> Result<Surface, PortError>;
}
