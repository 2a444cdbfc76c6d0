//! Command dispatch and handlers.

pub mod audit;
pub mod diff;

use crate::audit::AuditResult;
use crate::cli::{Cli, Command};

/// How a successfully executed command should end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing actionable; exit 0.
    Pass,
    /// Breaking changes, or warnings under `--strict`; exit 1.
    Fail,
}

impl Outcome {
    /// Applies the exit policy to `result`.
    #[must_use]
    pub fn of(result: &AuditResult, strict: bool) -> Self {
        if result.has_breaking_changes() || (strict && result.has_warnings()) {
            Self::Fail
        } else {
            Self::Pass
        }
    }
}

/// Dispatch a parsed command line to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<Outcome, String> {
    let outcome = match &cli.command {
        Command::Audit { upgrade, path, format, strict, unused } => audit::run(&audit::AuditOptions {
            upgrade: upgrade.clone(),
            project_root: path.clone(),
            format: *format,
            strict: *strict,
            unused: *unused,
            verbose: cli.verbose,
        }),
        Command::Diff { old, new, usage, format } => diff::run(&diff::DiffOptions {
            old: old.clone(),
            new: new.clone(),
            usage: usage.clone(),
            format: *format,
            verbose: cli.verbose,
        }),
    };
    outcome.map_err(|err| format!("Error: {err}"))
}
