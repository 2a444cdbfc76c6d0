//! Sequences the collaborator ports and assembles an [`AuditResult`].

use std::collections::BTreeSet;

use crate::audit::{AuditResult, Upgrade};
use crate::diff::diff_surfaces;
use crate::error::AuditError;
use crate::ports::{DependencyResolver, SurfaceExtractor, UsageScanner};

/// Runs audits against explicitly supplied collaborators.
pub struct Auditor<'a> {
    resolver: &'a dyn DependencyResolver,
    extractor: &'a dyn SurfaceExtractor,
    scanner: &'a dyn UsageScanner,
}

impl<'a> Auditor<'a> {
    /// Creates an auditor over the given collaborators.
    #[must_use]
    pub fn new(
        resolver: &'a dyn DependencyResolver,
        extractor: &'a dyn SurfaceExtractor,
        scanner: &'a dyn UsageScanner,
    ) -> Self {
        Self { resolver, extractor, scanner }
    }

    /// Audits `upgrade` against the consumer's currently pinned version.
    ///
    /// The returned result carries no unused-dependency findings; see
    /// [`Auditor::audit_with_unused`].
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ModuleNotFound`] if the module is not a dependency,
    /// [`AuditError::SurfaceLoad`] if either surface fails to load,
    /// [`AuditError::UsageScan`] if the consumer cannot be scanned, and
    /// [`AuditError::Dependencies`] if the resolver fails.
    pub fn audit(&self, upgrade: &Upgrade) -> Result<AuditResult, AuditError> {
        let module = upgrade.module.as_str();
        let old_version = self
            .resolver
            .pinned_version(module)
            .map_err(AuditError::Dependencies)?
            .ok_or_else(|| AuditError::ModuleNotFound { module: module.to_string() })?;

        tracing::info!(module, from = %old_version, to = %upgrade.new_version, "auditing upgrade");

        let old_surface = self.load_surface(module, &old_version)?;
        let new_surface = self.load_surface(module, &upgrade.new_version)?;

        let usage = self
            .scanner
            .scan(module)
            .map_err(|source| AuditError::UsageScan { module: module.to_string(), source })?;
        tracing::debug!(module, used_symbols = usage.used_symbol_count(), "usage index built");

        let diff = diff_surfaces(&old_surface, &new_surface, &usage);
        Ok(AuditResult::new(module, old_version, upgrade.new_version.clone(), diff))
    }

    /// Audits `upgrade` and then runs unused-dependency detection.
    ///
    /// A failure of the unused-dependency pass is logged as a warning and
    /// leaves the list empty; it never affects the diff.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Auditor::audit`].
    pub fn audit_with_unused(&self, upgrade: &Upgrade) -> Result<AuditResult, AuditError> {
        let mut result = self.audit(upgrade)?;
        match self.find_unused_dependencies() {
            Ok(unused) => result.unused_dependencies = unused,
            Err(err) => tracing::warn!(error = %err, "failed to detect unused dependencies"),
        }
        Ok(result)
    }

    /// Direct dependencies that no loaded package imports, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Dependencies`] if either set cannot be read.
    pub fn find_unused_dependencies(&self) -> Result<Vec<String>, AuditError> {
        let direct: BTreeSet<String> =
            self.resolver.direct_dependencies().map_err(AuditError::Dependencies)?.into_iter().collect();
        let imported: BTreeSet<String> =
            self.resolver.imported_modules().map_err(AuditError::Dependencies)?.into_iter().collect();

        Ok(direct.difference(&imported).cloned().collect())
    }

    fn load_surface(&self, module: &str, version: &str) -> Result<crate::surface::Surface, AuditError> {
        let surface = self.extractor.extract(module, version).map_err(|source| AuditError::SurfaceLoad {
            module: module.to_string(),
            version: version.to_string(),
            source,
        })?;
        tracing::debug!(module, version, symbols = surface.len(), "surface loaded");
        Ok(surface)
    }
}
