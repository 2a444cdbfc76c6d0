//! Self-contained HTML report.

use std::fmt::Write;

use html_escape::encode_text;

use super::{format_locations, summarize_fixes};
use crate::audit::AuditResult;

const TEMPLATE: &str = include_str!("templates/report.html");
const MAX_LOCATIONS: usize = 5;
const MAX_FIXES: usize = 3;

/// Renders `result` as a single HTML page with inline styles.
///
/// Every interpolated value is escaped.
#[must_use]
pub fn format_html(result: &AuditResult) -> String {
    let title = format!(
        "Upgrade audit: {} {} \u{2192} {}",
        result.module, result.old_version, result.new_version
    );
    TEMPLATE.replace("{{TITLE}}", &encode_text(&title)).replace("{{BODY}}", &body(result))
}

fn body(result: &AuditResult) -> String {
    let mut out = String::new();
    let diff = &result.diff;

    // Writing into a String cannot fail.
    if result.has_breaking_changes() {
        let _ = writeln!(
            out,
            "<p class=\"banner breaking\">Breaking changes detected: {} change(s) affecting {} location(s)</p>",
            result.breaking_count(),
            result.affected_locations()
        );
        let fixes = summarize_fixes(result, MAX_FIXES);
        if !fixes.is_empty() {
            out.push_str("<h2>What to fix next</h2>\n<ol>\n");
            for fix in fixes {
                let _ = writeln!(out, "<li>{}</li>", encode_text(&fix));
            }
            out.push_str("</ol>\n");
        }
    } else {
        out.push_str("<p class=\"banner clean\">No breaking changes detected</p>\n");
    }

    if !diff.removed.is_empty() {
        out.push_str("<h2>Removed symbols</h2>\n<table>\n<tr><th>Symbol</th><th>Kind</th><th>Used in</th></tr>\n");
        for removed in &diff.removed {
            let _ = writeln!(
                out,
                "<tr><td><code>{}</code></td><td class=\"kind\">{}</td><td>{}</td></tr>",
                encode_text(&removed.name),
                removed.kind,
                encode_text(&format_locations(&removed.used_at, MAX_LOCATIONS))
            );
        }
        out.push_str("</table>\n");
    }

    if !diff.changed.is_empty() {
        out.push_str(
            "<h2>Changed signatures</h2>\n<table>\n<tr><th>Function</th><th>Old</th><th>New</th><th>Used in</th></tr>\n",
        );
        for changed in &diff.changed {
            let _ = writeln!(
                out,
                "<tr><td><code>{}</code></td><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>",
                encode_text(&changed.name),
                encode_text(&changed.old_signature),
                encode_text(&changed.new_signature),
                encode_text(&format_locations(&changed.used_at, MAX_LOCATIONS))
            );
        }
        out.push_str("</table>\n");
    }

    if !diff.interface_changes.is_empty() {
        out.push_str(
            "<h2>Modified interfaces</h2>\n<table>\n<tr><th>Interface</th><th>Removed methods</th><th>Added methods</th><th>Used in</th></tr>\n",
        );
        for iface in &diff.interface_changes {
            let _ = writeln!(
                out,
                "<tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(&iface.name),
                method_list(&iface.removed_methods),
                method_list(&iface.added_methods),
                encode_text(&format_locations(&iface.used_at, MAX_LOCATIONS))
            );
        }
        out.push_str("</table>\n");
    }

    if !diff.added.is_empty() {
        out.push_str("<h2>Added symbols</h2>\n<ul>\n");
        for added in &diff.added {
            let _ = writeln!(
                out,
                "<li><code>{}</code> <span class=\"kind\">({})</span></li>",
                encode_text(&added.name),
                added.kind
            );
        }
        out.push_str("</ul>\n");
    }

    if !result.unused_dependencies.is_empty() {
        out.push_str("<h2>Unused dependencies</h2>\n<ul>\n");
        for dep in &result.unused_dependencies {
            let _ = writeln!(out, "<li><code>{}</code></li>", encode_text(dep));
        }
        out.push_str("</ul>\n");
    }

    out
}

fn method_list(methods: &[String]) -> String {
    methods
        .iter()
        .map(|m| format!("<code>{}</code>", encode_text(m)))
        .collect::<Vec<_>>()
        .join("<br>")
}
