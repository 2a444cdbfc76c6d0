//! Renderers for audit results.
//!
//! Renderers present exactly what an [`AuditResult`] contains; they never
//! re-apply usage filtering.

pub mod html;
pub mod json;
pub mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::audit::AuditResult;
use crate::error::ReportError;
use crate::usage::Location;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Self-contained HTML page.
    Html,
}

impl OutputFormat {
    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(format!("invalid format '{other}', expected one of: text, json, html")),
        }
    }
}

/// Renders `result` in `format`. `verbose` only affects text output.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(result: &AuditResult, format: OutputFormat, verbose: bool) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(text::format_text(result, verbose)),
        OutputFormat::Json => json::format_json(result),
        OutputFormat::Html => Ok(html::format_html(result)),
    }
}

/// Joins up to `max` locations as `file:line`, summarizing the rest.
#[must_use]
pub fn format_locations(locations: &[Location], max: usize) -> String {
    let mut parts: Vec<String> = locations.iter().take(max).map(ToString::to_string).collect();
    if locations.len() > max {
        parts.push(format!("and {} more", locations.len() - max));
    }
    parts.join(", ")
}

/// The first `max` remediation hints, in removed/changed/interface order.
#[must_use]
pub fn summarize_fixes(result: &AuditResult, max: usize) -> Vec<String> {
    let diff = &result.diff;
    let removed = diff.removed.iter().filter(|r| !r.used_at.is_empty()).map(|r| {
        format!("Remove/replace {} ({}) at {}", r.name, r.kind, format_locations(&r.used_at, 1))
    });
    let changed = diff
        .changed
        .iter()
        .filter(|c| !c.used_at.is_empty())
        .map(|c| format!("Update call to {} at {}", c.name, format_locations(&c.used_at, 1)));
    let ifaces = diff.interface_changes.iter().filter(|i| !i.used_at.is_empty()).map(|i| {
        format!("Update implementations of {} at {}", i.name, format_locations(&i.used_at, 1))
    });
    removed.chain(changed).chain(ifaces).take(max).collect()
}
