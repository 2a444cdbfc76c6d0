//! The unit handed to renderers and the exit-code policy.

use serde::Serialize;

use crate::diff::Diff;

/// Outcome of auditing one upgrade.
///
/// Consumers decide on pass/fail through [`AuditResult::has_breaking_changes`]
/// and [`AuditResult::has_warnings`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    /// Audited module path.
    pub module: String,
    /// Version currently pinned by the consumer.
    pub old_version: String,
    /// Requested target version.
    pub new_version: String,
    /// Usage-filtered changelist.
    pub diff: Diff,
    /// Direct dependencies no loaded package imports.
    pub unused_dependencies: Vec<String>,
}

impl AuditResult {
    /// Wraps a diff with no unused-dependency findings.
    #[must_use]
    pub fn new(
        module: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
        diff: Diff,
    ) -> Self {
        Self {
            module: module.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
            diff,
            unused_dependencies: Vec::new(),
        }
    }

    /// Returns `true` if the consumer is affected by a removal, a signature
    /// change or an interface change.
    #[must_use]
    pub fn has_breaking_changes(&self) -> bool {
        !self.diff.removed.is_empty()
            || !self.diff.changed.is_empty()
            || !self.diff.interface_changes.is_empty()
    }

    /// Returns `true` if there are additions or unused dependencies to mention.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.diff.added.is_empty() || !self.unused_dependencies.is_empty()
    }

    /// Number of breaking entries across all categories.
    #[must_use]
    pub fn breaking_count(&self) -> usize {
        self.diff.removed.len() + self.diff.changed.len() + self.diff.interface_changes.len()
    }

    /// Number of consumer locations touched by breaking entries.
    #[must_use]
    pub fn affected_locations(&self) -> usize {
        let removed: usize = self.diff.removed.iter().map(|r| r.used_at.len()).sum();
        let changed: usize = self.diff.changed.iter().map(|c| c.used_at.len()).sum();
        let ifaces: usize = self.diff.interface_changes.iter().map(|i| i.used_at.len()).sum();
        removed + changed + ifaces
    }
}
