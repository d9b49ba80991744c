//! Resolution of `extends` references across the ontology search path.
//!
//! An `extends` target is a bare filename, not a path. Resolution policy:
//! local overrides beat agent-level definitions beat framework-shared
//! definitions beat cross-template borrowing. The last-resort template scan
//! tolerates ontology reuse between sibling templates without symlinks.

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of resolving one document's `extends` declaration.
#[derive(Debug, Clone)]
pub struct OntologyRef {
    /// File that declared the reference.
    pub source: PathBuf,
    /// Declared target, as written.
    pub target: String,
    /// First existing candidate on the search path, absolute. `None` is a
    /// normal outcome ("phantom inheritance"), never an error.
    pub resolved: Option<PathBuf>,
}

impl OntologyRef {
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

/// Resolve `target` for `source`, checking in order:
/// 1. the source file's own directory,
/// 2. `<agent_root>/ontology/`,
/// 3. `<framework_root>/ontology/` (when a framework root is known),
/// 4. `<framework_root>/templates/*/ontology/`, siblings in sorted order.
///
/// Pure filesystem lookup; no side effects.
pub fn resolve_extends(
    source: &Path,
    target: &str,
    agent_root: &Path,
    framework_root: Option<&Path>,
) -> OntologyRef {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Some(dir) = source.parent() {
        candidates.push(dir.join(target));
    }
    candidates.push(agent_root.join("ontology").join(target));

    if let Some(framework) = framework_root {
        candidates.push(framework.join("ontology").join(target));
        candidates.extend(template_candidates(framework, target));
    }

    let resolved = candidates.into_iter().find(|c| c.is_file()).map(|hit| {
        // Canonical paths keep graph node identity stable regardless of how
        // a file was reached.
        fs::canonicalize(&hit).unwrap_or(hit)
    });

    OntologyRef {
        source: source.to_path_buf(),
        target: target.to_string(),
        resolved,
    }
}

fn template_candidates(framework: &Path, target: &str) -> Vec<PathBuf> {
    let templates = framework.join("templates");
    let Ok(entries) = fs::read_dir(&templates) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs.into_iter()
        .map(|d| d.join("ontology").join(target))
        .collect()
}
