//! aget-lint: Convention Linter for AGET Agent Repositories
//!
//! AGET structures AI-agent repositories by convention (`.aget/`,
//! `governance/`, `ontology/`, `specs/`). This crate lints the ontology
//! layer: small YAML vocabularies that may extend one another across an
//! agent, a shared framework checkout, and sibling templates.
//!
//! Checks performed per run:
//!
//! - **Phantom inheritance** (ERROR): a declared `extends` target that no
//!   search-path location supplies.
//! - **Term collision** (WARN): a child restating a `prefLabel` it inherits.
//!   Warn-level because re-grounding an inherited definition may be
//!   intentional; flagged for human review.
//! - **Cyclic inheritance** (ERROR): any cycle in the resolved extends graph.
//!
//! Every run is a fresh, single-threaded scan; no state survives between
//! invocations.
//!
//! # Exit codes
//!
//! - `0`: scan completed (findings alone never fail without `--check`)
//! - `1`: `--check` was set and at least one ERROR finding exists
//! - `2`: configuration error (e.g. the agent directory does not exist)
//!
//! # Examples
//!
//! ```bash
//! # Lint the enclosing agent repository
//! aget-lint ontology
//!
//! # CI gate over an explicit directory
//! aget-lint ontology --dir agents/support-triage --check
//!
//! # Machine-readable report
//! aget-lint ontology --format json
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: document model, reference resolver, inheritance graph,
//!   findings, and the lint orchestrator

pub mod core;

mod cli;

use cli::{Cli, Command, OntologyCli};
use crate::core::error::AgetError;
use crate::core::validate::OntologyLinter;
use crate::core::workspace;

use clap::Parser;
use std::fs;
use std::path::PathBuf;

pub fn run() -> Result<(), AgetError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            // Simple output for scripts/parsing
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Ontology(args) => run_ontology(args),
    }
}

fn run_ontology(args: OntologyCli) -> Result<(), AgetError> {
    let current_dir = std::env::current_dir()?;

    let agent_root: PathBuf = match args.dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(AgetError::PathError(format!(
                    "agent directory does not exist: {}",
                    dir.display()
                )));
            }
            fs::canonicalize(&dir)?
        }
        None => workspace::find_agent_root(&current_dir).unwrap_or(current_dir),
    };

    let framework_root: Option<PathBuf> = match args.framework {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(AgetError::PathError(format!(
                    "framework root does not exist: {}",
                    dir.display()
                )));
            }
            Some(fs::canonicalize(&dir)?)
        }
        None => workspace::find_framework_root(&agent_root),
    };

    if args.verbose {
        println!("ontology: scanning {}", agent_root.display());
        if let Some(framework) = &framework_root {
            println!("ontology: framework root {}", framework.display());
        }
    }

    let linter = OntologyLinter::new().verbose(args.verbose);
    let report = linter.run(&agent_root, framework_root.as_deref())?;

    if args.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| AgetError::ValidationError(e.to_string()))?
        );
    } else {
        report.render_text();
    }

    if args.check && report.error_count() > 0 {
        return Err(AgetError::ValidationError(format!(
            "{} error finding(s)",
            report.error_count()
        )));
    }
    Ok(())
}
