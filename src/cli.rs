//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::OutputFormat;

/// Top-level CLI parser for `semver-audit`.
#[derive(Debug, Parser)]
#[command(
    name = "semver-audit",
    version,
    about = "Report which dependency API changes actually affect your code"
)]
pub struct Cli {
    /// Print debug diagnostics and full signatures.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit a dependency upgrade against the project's usage.
    Audit {
        /// Target of the upgrade, as `module@version`.
        #[arg(short, long, value_name = "MODULE@VERSION")]
        upgrade: String,

        /// Project root.
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Report format; overrides the config file.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail on warnings (additions, unused dependencies) too.
        #[arg(long)]
        strict: bool,

        /// Also report direct dependencies that nothing imports.
        #[arg(long)]
        unused: bool,
    },
    /// Diff two surface snapshot files directly.
    Diff {
        /// Surface file of the old version.
        old: PathBuf,

        /// Surface file of the new version.
        new: PathBuf,

        /// Usage index file; without it only additions are reported.
        #[arg(long, value_name = "FILE")]
        usage: Option<PathBuf>,

        /// Report format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
