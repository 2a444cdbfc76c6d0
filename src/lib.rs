//! Core library entry for the `semver-audit` CLI.
//!
//! Audits a dependency upgrade by diffing the exported API surfaces of two
//! module versions and keeping only the changes the consumer's code actually
//! references.

pub mod adapters;
pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod logging;
pub mod ports;
pub mod report;
pub mod surface;
pub mod usage;

use clap::Parser;

pub use commands::Outcome;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and pass.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<Outcome, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(Outcome::Pass);
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::{run, Outcome};

    #[test]
    fn run_prints_help() {
        assert_eq!(run(["semver-audit", "--help"]), Ok(Outcome::Pass));
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["semver-audit", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_rejects_malformed_upgrade() {
        let err = run(["semver-audit", "audit", "--upgrade", "no-version"]).unwrap_err();
        assert!(err.contains("invalid upgrade specification: no-version"));
    }
}
