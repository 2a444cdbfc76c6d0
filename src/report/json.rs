//! Machine-readable JSON report.

use serde::Serialize;

use crate::audit::AuditResult;
use crate::diff::{AddedSymbol, ChangedSignature, InterfaceChange, RemovedSymbol};
use crate::error::ReportError;

/// Wire shape of the JSON report; empty lists are left out.
#[derive(Serialize)]
struct JsonReport<'a> {
    module: &'a str,
    old_version: &'a str,
    new_version: &'a str,
    breaking: bool,
    breaking_count: usize,
    affected_locations: usize,
    #[serde(skip_serializing_if = "is_empty")]
    removed: &'a [RemovedSymbol],
    #[serde(skip_serializing_if = "is_empty")]
    changed: &'a [ChangedSignature],
    #[serde(skip_serializing_if = "is_empty")]
    interface_changes: &'a [InterfaceChange],
    #[serde(skip_serializing_if = "is_empty")]
    added: &'a [AddedSymbol],
    #[serde(skip_serializing_if = "is_empty")]
    unused_dependencies: &'a [String],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

impl<'a> From<&'a AuditResult> for JsonReport<'a> {
    fn from(result: &'a AuditResult) -> Self {
        Self {
            module: &result.module,
            old_version: &result.old_version,
            new_version: &result.new_version,
            breaking: result.has_breaking_changes(),
            breaking_count: result.breaking_count(),
            affected_locations: result.affected_locations(),
            removed: &result.diff.removed,
            changed: &result.diff.changed,
            interface_changes: &result.diff.interface_changes,
            added: &result.diff.added,
            unused_dependencies: &result.unused_dependencies,
        }
    }
}

/// Pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if serialization fails.
pub fn format_json(result: &AuditResult) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(&JsonReport::from(result))?;
    out.push('\n');
    Ok(out)
}
