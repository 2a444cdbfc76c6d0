//! `semver-audit diff` command.

use std::path::{Path, PathBuf};

use crate::adapters::live::LiveFileSystem;
use crate::adapters::snapshot::read_json;
use crate::audit::AuditResult;
use crate::commands::Outcome;
use crate::diff::diff_surfaces;
use crate::ports::FileSystem;
use crate::report::{self, OutputFormat};
use crate::surface::Surface;
use crate::usage::UsageIndex;

/// Module name shown in reports of a direct file diff.
pub const LOCAL_MODULE: &str = "local";

/// Command-line options of `diff`.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Surface file of the old version.
    pub old: PathBuf,
    /// Surface file of the new version.
    pub new: PathBuf,
    /// Optional usage index file.
    pub usage: Option<PathBuf>,
    /// Report format.
    pub format: OutputFormat,
    /// Include full signatures and additions in text output.
    pub verbose: bool,
}

/// Execute the `diff` command, printing the report to stdout.
///
/// # Errors
///
/// Returns an error string if an input file is missing or malformed.
pub fn run(options: &DiffOptions) -> Result<Outcome, String> {
    let (report, outcome) = execute(&LiveFileSystem, options)?;
    print!("{report}");
    Ok(outcome)
}

/// Diff the two surface files named by `options` and render the report.
///
/// Versions in the report are the file stems of the two inputs.
///
/// # Errors
///
/// Returns an error string if an input file is missing or malformed.
pub fn execute(fs: &dyn FileSystem, options: &DiffOptions) -> Result<(String, Outcome), String> {
    let old: Surface = load(fs, &options.old, "surface")?;
    let new: Surface = load(fs, &options.new, "surface")?;
    let usage: UsageIndex = match &options.usage {
        Some(path) => load(fs, path, "usage index")?,
        None => UsageIndex::new(),
    };

    let diff = diff_surfaces(&old, &new, &usage);
    let result = AuditResult::new(LOCAL_MODULE, stem(&options.old), stem(&options.new), diff);
    let report = report::render(&result, options.format, options.verbose).map_err(|e| e.to_string())?;
    Ok((report, Outcome::of(&result, false)))
}

fn load<T: serde::de::DeserializeOwned>(fs: &dyn FileSystem, path: &Path, what: &str) -> Result<T, String> {
    read_json(fs, path).map_err(|e| format!("failed to load {what} {}: {e}", path.display()))
}

fn stem(path: &Path) -> String {
    path.file_stem().map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}
