//! CLI struct definitions for the aget-lint command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "aget-lint",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convention linter for AGET agent repositories: validates ontology inheritance, cross-references, and vocabulary collisions.",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Validate ontology inheritance and cross-references
    Ontology(OntologyCli),
    /// Print version
    Version,
}

#[derive(clap::Args, Debug)]
pub(crate) struct OntologyCli {
    /// Agent directory to scan (defaults to the discovered agent root, else the current directory).
    #[clap(long)]
    pub dir: Option<PathBuf>,
    /// Framework root supplying shared ontology definitions (defaults to discovery).
    #[clap(long)]
    pub framework: Option<PathBuf>,
    /// Exit 1 if any ERROR-severity finding exists (warnings never fail CI).
    #[clap(long)]
    pub check: bool,
    /// Print every reference checked, not just findings.
    #[clap(long, short = 'v')]
    pub verbose: bool,
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}
