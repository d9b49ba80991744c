//! Ontology inheritance and cross-reference validation.
//!
//! Linear pipeline per file: read -> parse -> resolve `extends` -> collision
//! check against the resolved parent, accumulating resolved edges into an
//! inheritance graph. One cycle scan runs over the graph after all files.
//!
//! Error stance is best-effort, appropriate for hand-edited files:
//! unparseable documents are skipped silently, phantom references and cycles
//! become ERROR findings, term collisions become WARN findings. Nothing
//! aborts the scan.

use crate::core::concepts;
use crate::core::document::{DocumentParser, OntologyDocument, YamlDocumentParser};
use crate::core::error::AgetError;
use crate::core::graph::{self, InheritanceGraph};
use crate::core::report::{OntologyReport, Severity};
use crate::core::resolve;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Orchestrator for one lint run. Holds the parsing strategy and verbosity;
/// all scan state lives on the stack of [`OntologyLinter::run`], so repeated
/// runs over an unchanged directory are identical.
pub struct OntologyLinter {
    parser: Box<dyn DocumentParser>,
    verbose: bool,
}

impl Default for OntologyLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyLinter {
    pub fn new() -> Self {
        Self::with_parser(Box::new(YamlDocumentParser))
    }

    /// Use an alternative parsing strategy (e.g. the line-scan fallback).
    pub fn with_parser(parser: Box<dyn DocumentParser>) -> Self {
        Self {
            parser,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan `agent_root` and return the accumulated report.
    pub fn run(
        &self,
        agent_root: &Path,
        framework_root: Option<&Path>,
    ) -> Result<OntologyReport, AgetError> {
        let mut report = OntologyReport::default();
        let mut inheritance = InheritanceGraph::new();

        let files = collect_ontology_files(agent_root)?;
        report.files_scanned = files.len();

        for file in &files {
            self.check_file(file, agent_root, framework_root, &mut report, &mut inheritance);
        }

        for cycle in inheritance.find_cycles() {
            let source = cycle
                .first()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("inheritance graph")
                .to_string();
            report.push(
                Severity::Error,
                &source,
                format!("cyclic inheritance: {}", graph::cycle_label(&cycle)),
            );
        }

        Ok(report)
    }

    fn check_file(
        &self,
        file: &Path,
        agent_root: &Path,
        framework_root: Option<&Path>,
        report: &mut OntologyReport,
        inheritance: &mut InheritanceGraph,
    ) {
        let name = basename(file);

        let Some(doc) = self.load(file) else {
            if self.verbose {
                println!("ontology: {} unparseable, skipped", name);
            }
            return;
        };

        let Some(target) = doc.metadata.extends.clone() else {
            if self.verbose {
                println!("ontology: {} declares no extends", name);
            }
            return;
        };

        report.refs_checked += 1;
        let reference = resolve::resolve_extends(file, &target, agent_root, framework_root);

        if self.verbose {
            match &reference.resolved {
                Some(path) => println!(
                    "ontology: {} extends {} -> {}",
                    name,
                    target,
                    path.display()
                ),
                None => println!("ontology: {} extends {} -> UNRESOLVED", name, target),
            }
        }

        let Some(parent_path) = reference.resolved else {
            report.push(
                Severity::Error,
                &name,
                format!(
                    "phantom inheritance: extends target '{}' not found in any search path",
                    target
                ),
            );
            return;
        };

        // Collision check is best-effort: an unparseable parent contributes
        // an empty concept set but still participates in cycle detection.
        let child_terms = concepts::pref_labels(&doc);
        let parent_terms = self
            .load(&parent_path)
            .as_ref()
            .map(concepts::pref_labels)
            .unwrap_or_default();
        let shared = concepts::collisions(&child_terms, &parent_terms);
        if !shared.is_empty() {
            report.push(
                Severity::Warn,
                &name,
                concepts::collision_message(&basename(&parent_path), &shared),
            );
        }

        let child_key = fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());
        inheritance.add_edge(child_key, parent_path);
    }

    fn load(&self, file: &Path) -> Option<OntologyDocument> {
        let text = fs::read_to_string(file).ok()?;
        self.parser.parse(&text)
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("?")
        .to_string()
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Enumerate ontology files: `ONTOLOGY_*` YAML files directly in the agent
/// root, plus every YAML file in `<agent_root>/ontology/`. Deduplicated by
/// canonical path and sorted for stable output across runs.
pub fn collect_ontology_files(agent_root: &Path) -> Result<Vec<PathBuf>, AgetError> {
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();

    for entry in fs::read_dir(agent_root)? {
        let path = entry?.path();
        if !path.is_file() || !is_yaml(&path) {
            continue;
        }
        let starts_with_marker = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("ONTOLOGY_"));
        if starts_with_marker {
            found.insert(fs::canonicalize(&path).unwrap_or(path));
        }
    }

    let ontology_dir = agent_root.join("ontology");
    if ontology_dir.is_dir() {
        for entry in fs::read_dir(&ontology_dir)? {
            let path = entry?.path();
            if path.is_file() && is_yaml(&path) {
                found.insert(fs::canonicalize(&path).unwrap_or(path));
            }
        }
    }

    Ok(found.into_iter().collect())
}
