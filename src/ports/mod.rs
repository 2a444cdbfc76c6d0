//! Port traits defining external boundaries.
//!
//! Each trait is a collaborator the audit core depends on but does not
//! implement: surface extraction, usage scanning, dependency resolution and
//! file access. Implementations live in `src/adapters/` and are passed in
//! explicitly through [`crate::context::ServiceContext`].

pub mod dependencies;
pub mod filesystem;
pub mod surfaces;
pub mod usage;

pub use dependencies::DependencyResolver;
pub use filesystem::FileSystem;
pub use surfaces::SurfaceExtractor;
pub use usage::UsageScanner;

/// Error type returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
