//! Inheritance graph and cycle detection.
//!
//! Each document declares at most one `extends` parent, so the graph is a
//! functional graph (out-degree <= 1): cycle detection reduces to walking
//! single-parent chains with a path list, no SCC machinery needed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Child -> resolved parent edges, keyed by absolute path.
///
/// Unresolved references never contribute an edge: they have no destination
/// node, and are already reported separately.
#[derive(Debug, Default)]
pub struct InheritanceGraph {
    edges: std::collections::BTreeMap<PathBuf, PathBuf>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, child: PathBuf, parent: PathBuf) {
        self.edges.insert(child, parent);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Detect every cycle reachable from any node.
    ///
    /// Iterative walk per unvisited start node with a local path list; nodes
    /// touched by any walk are marked globally visited so shared chains are
    /// not rewalked and each cycle is reported once. Detection continues for
    /// remaining start nodes after a cycle is found.
    pub fn find_cycles(&self) -> Vec<Vec<PathBuf>> {
        let mut visited: BTreeSet<&Path> = BTreeSet::new();
        let mut cycles: Vec<Vec<PathBuf>> = Vec::new();

        for start in self.edges.keys() {
            if visited.contains(start.as_path()) {
                continue;
            }
            let mut path: Vec<&Path> = Vec::new();
            let mut current: &Path = start;
            loop {
                if let Some(pos) = path.iter().position(|p| *p == current) {
                    cycles.push(path[pos..].iter().map(|p| p.to_path_buf()).collect());
                    break;
                }
                if visited.contains(current) {
                    // Joined a chain already cleared by an earlier walk.
                    break;
                }
                path.push(current);
                match self.edges.get(current) {
                    Some(parent) => current = parent.as_path(),
                    None => break,
                }
            }
            visited.extend(path);
        }

        cycles
    }
}

/// Render a cycle as an `->`-joined sequence of file basenames, closing the
/// loop back to the first node.
pub fn cycle_label(cycle: &[PathBuf]) -> String {
    let mut names: Vec<&str> = cycle
        .iter()
        .map(|p| p.file_name().and_then(|n| n.to_str()).unwrap_or("?"))
        .collect();
    if let Some(first) = names.first().copied() {
        names.push(first);
    }
    names.join(" -> ")
}
