//! Binary entrypoint for the `semver-audit` CLI.

use std::process::ExitCode;

use semver_audit::Outcome;

fn main() -> ExitCode {
    // A missing .env is fine; SEMVER_AUDIT_* may also come from the shell.
    let _ = dotenvy::dotenv();

    match semver_audit::run(std::env::args()) {
        Ok(Outcome::Pass) => ExitCode::SUCCESS,
        Ok(Outcome::Fail) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
