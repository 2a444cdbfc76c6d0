//! Plain-text report.

use std::fmt::Write;

use super::{format_locations, summarize_fixes};
use crate::audit::AuditResult;

const MAX_LOCATIONS: usize = 3;
const MAX_FIXES: usize = 3;

/// Formats `result` for a terminal.
///
/// Old/new signatures and added symbols are shown only when `verbose` is set.
#[must_use]
pub fn format_text(result: &AuditResult, verbose: bool) -> String {
    let mut out = String::new();
    let diff = &result.diff;
    let breaking = result.has_breaking_changes();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Analyzing upgrade: {} {} -> {}\n",
        result.module, result.old_version, result.new_version
    );

    if breaking {
        out.push_str("BREAKING CHANGES DETECTED\n\n");
        let _ = writeln!(out, "{}\n", summary_line(result));

        let fixes = summarize_fixes(result, MAX_FIXES);
        if !fixes.is_empty() {
            out.push_str("What to fix next:\n");
            for fix in fixes {
                let _ = writeln!(out, "  - {fix}");
            }
            out.push('\n');
        }
    } else {
        out.push_str("No breaking changes detected.\n\n");
    }

    if !diff.removed.is_empty() {
        out.push_str("Removed Symbols:\n");
        for removed in &diff.removed {
            let _ = write!(out, "  - {} ({})", removed.name, removed.kind);
            if !removed.used_at.is_empty() {
                let _ = write!(out, " (used in: {})", format_locations(&removed.used_at, MAX_LOCATIONS));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    if !diff.changed.is_empty() {
        out.push_str("Changed Signatures:\n");
        for changed in &diff.changed {
            let _ = writeln!(out, "  - {}", changed.name);
            if verbose {
                let _ = writeln!(out, "    Old: {}", changed.old_signature);
                let _ = writeln!(out, "    New: {}", changed.new_signature);
            }
            if !changed.used_at.is_empty() {
                let _ = writeln!(out, "    Used in: {}", format_locations(&changed.used_at, MAX_LOCATIONS));
            }
        }
        out.push('\n');
    }

    if !diff.interface_changes.is_empty() {
        out.push_str("Modified Interfaces:\n");
        for iface in &diff.interface_changes {
            let _ = writeln!(out, "  - {}", iface.name);
            if !iface.removed_methods.is_empty() {
                out.push_str("    Removed methods:\n");
                for method in &iface.removed_methods {
                    let _ = writeln!(out, "      - {method}");
                }
            }
            if !iface.added_methods.is_empty() {
                out.push_str("    Added methods:\n");
                for method in &iface.added_methods {
                    let _ = writeln!(out, "      - {method}");
                }
            }
            if !iface.used_at.is_empty() {
                let _ = writeln!(out, "    Used in: {}", format_locations(&iface.used_at, MAX_LOCATIONS));
            }
        }
        out.push('\n');
    }

    if verbose && !diff.added.is_empty() {
        out.push_str("Added Symbols (informational):\n");
        for added in &diff.added {
            let _ = writeln!(out, "  + {} ({})", added.name, added.kind);
        }
        out.push('\n');
    }

    if !result.unused_dependencies.is_empty() {
        out.push_str("Unused Dependencies:\n");
        for dep in &result.unused_dependencies {
            let _ = writeln!(out, "  - {dep}");
        }
        out.push('\n');
    }

    if breaking {
        let _ = writeln!(
            out,
            "Found {} breaking change(s) affecting {} location(s) in your code.",
            result.breaking_count(),
            result.affected_locations()
        );
    }

    out
}

fn summary_line(result: &AuditResult) -> String {
    format!(
        "Summary: {} breaking change(s) affecting {} location(s).",
        result.breaking_count(),
        result.affected_locations()
    )
}
