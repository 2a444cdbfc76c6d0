//! `semver-audit audit` command.

use std::path::PathBuf;

use crate::adapters::live::LiveFileSystem;
use crate::audit::Upgrade;
use crate::commands::Outcome;
use crate::config::AuditConfig;
use crate::context::ServiceContext;
use crate::report::{self, OutputFormat};

/// Command-line options of `audit`.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Raw `module@version` argument.
    pub upgrade: String,
    /// Project root holding the config file and snapshot directory.
    pub project_root: PathBuf,
    /// Format flag, if given.
    pub format: Option<OutputFormat>,
    /// `--strict` flag.
    pub strict: bool,
    /// `--unused` flag.
    pub unused: bool,
    /// `--verbose` flag.
    pub verbose: bool,
}

/// Effective settings after merging flags over the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditSettings {
    /// Report format.
    pub format: OutputFormat,
    /// Fail on warnings.
    pub strict: bool,
    /// Run unused-dependency detection.
    pub unused: bool,
    /// Include full signatures and additions in text output.
    pub verbose: bool,
}

impl AuditSettings {
    /// Flags win over the config; boolean switches can only be turned on.
    #[must_use]
    pub fn merge(options: &AuditOptions, config: &AuditConfig) -> Self {
        Self {
            format: options.format.unwrap_or(config.format),
            strict: options.strict || config.strict,
            unused: options.unused || config.unused,
            verbose: options.verbose,
        }
    }
}

/// Execute the `audit` command, printing the report to stdout.
///
/// # Errors
///
/// Returns an error string if the upgrade argument is malformed, the config
/// is invalid, or the audit itself fails.
pub fn run(options: &AuditOptions) -> Result<Outcome, String> {
    let upgrade = Upgrade::parse(&options.upgrade).map_err(|e| e.to_string())?;
    let config = AuditConfig::load(&LiveFileSystem, &options.project_root).map_err(|e| e.to_string())?;
    let settings = AuditSettings::merge(options, &config);
    let snapshot_root = config.snapshot_root(&options.project_root);
    tracing::debug!(snapshot = %snapshot_root.display(), format = %settings.format, "resolved settings");

    let ctx = ServiceContext::live(&snapshot_root);
    let (report, outcome) = execute(&ctx, &upgrade, settings)?;
    print!("{report}");
    Ok(outcome)
}

/// Audit `upgrade` with `ctx` and render the report without printing it.
///
/// # Errors
///
/// Returns an error string if the audit or rendering fails.
pub fn execute(
    ctx: &ServiceContext,
    upgrade: &Upgrade,
    settings: AuditSettings,
) -> Result<(String, Outcome), String> {
    let auditor = ctx.auditor();
    let result = if settings.unused {
        auditor.audit_with_unused(upgrade)
    } else {
        auditor.audit(upgrade)
    }
    .map_err(|e| e.to_string())?;

    let report = report::render(&result, settings.format, settings.verbose).map_err(|e| e.to_string())?;
    Ok((report, Outcome::of(&result, settings.strict)))
}
