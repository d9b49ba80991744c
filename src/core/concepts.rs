//! Concept extraction and term-collision detection.

use crate::core::document::OntologyDocument;
use crate::core::output;
use std::collections::BTreeSet;

/// All `prefLabel` values in a document, as a set. Empty when the document
/// carries no concepts in either supported shape.
pub fn pref_labels(doc: &OntologyDocument) -> BTreeSet<String> {
    doc.concepts
        .iter()
        .filter_map(|c| c.pref_label.clone())
        .collect()
}

/// Terms present in both child and parent, sorted.
pub fn collisions(child: &BTreeSet<String>, parent: &BTreeSet<String>) -> Vec<String> {
    child.intersection(parent).cloned().collect()
}

/// Collision finding text: up to 5 example terms plus a remainder count.
pub fn collision_message(parent_name: &str, terms: &[String]) -> String {
    format!(
        "inherited term collision with {}: {}",
        parent_name,
        output::preview_items(terms, 5)
    )
}
