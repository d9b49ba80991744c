//! Agent and framework root discovery.

use std::path::{Path, PathBuf};

/// Nearest ancestor (including `start`) containing a `.aget/` marker
/// directory. `None` when no AGET repository encloses `start`.
pub fn find_agent_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(".aget").is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Nearest strict ancestor of the agent root that looks like a framework
/// checkout: carries both `ontology/` and `templates/` directories. Purely
/// optional; only extends the reference resolver's search path.
pub fn find_framework_root(agent_root: &Path) -> Option<PathBuf> {
    let mut current = agent_root.to_path_buf();
    while current.pop() {
        if current.join("ontology").is_dir() && current.join("templates").is_dir() {
            return Some(current);
        }
    }
    None
}
