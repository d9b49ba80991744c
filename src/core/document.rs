//! Ontology document model and parsing strategies.
//!
//! An ontology document is a small YAML vocabulary: a `metadata` mapping
//! (optionally naming the document and declaring a single `extends` parent)
//! plus a list of concepts carrying `prefLabel` terms. Two nesting shapes are
//! accepted: a top-level `concepts:` list, or `conceptScheme: { concepts: }`.
//!
//! Parsing is a Strategy: [`YamlDocumentParser`] is the structured default,
//! [`ScanDocumentParser`] is a line-scanning fallback that recovers the same
//! minimal shape, so downstream checks are parser-agnostic.

use regex::Regex;
use serde::Deserialize;

/// Document header: optional name plus at most one `extends` reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub name: Option<String>,
    /// Bare filename of the parent document, resolved by search path.
    pub extends: Option<String>,
}

/// One named term within an ontology document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Concept {
    pub id: Option<String>,
    #[serde(rename = "prefLabel")]
    pub pref_label: Option<String>,
}

/// Parsed content of one ontology file. Transient: read fresh on every run,
/// never persisted or mutated.
#[derive(Debug, Clone, Default)]
pub struct OntologyDocument {
    pub metadata: Metadata,
    pub concepts: Vec<Concept>,
}

/// Raw deserialization target representing both known document shapes
/// explicitly, merged into [`OntologyDocument`] after parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    metadata: Metadata,
    concepts: Option<Vec<Concept>>,
    #[serde(rename = "conceptScheme")]
    concept_scheme: Option<RawConceptScheme>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConceptScheme {
    concepts: Option<Vec<Concept>>,
}

/// Parsing strategy for ontology files.
pub trait DocumentParser {
    /// Parse one document. `None` means unparseable; the caller skips every
    /// dependent check for that file rather than surfacing an error.
    fn parse(&self, text: &str) -> Option<OntologyDocument>;
}

/// Structured parser backed by serde_yaml. The default strategy.
#[derive(Debug, Default)]
pub struct YamlDocumentParser;

impl DocumentParser for YamlDocumentParser {
    fn parse(&self, text: &str) -> Option<OntologyDocument> {
        let raw: RawDocument = serde_yaml::from_str(text).ok()?;
        let concepts = raw
            .concepts
            .or_else(|| raw.concept_scheme.and_then(|scheme| scheme.concepts))
            .unwrap_or_default();
        Some(OntologyDocument {
            metadata: raw.metadata,
            concepts,
        })
    }
}

/// Best-effort line scanner recovering `metadata.name`, `metadata.extends`,
/// and `prefLabel` values without a YAML parser. Produces the same minimal
/// shape as the structured parser; concept ids are not recovered.
#[derive(Debug)]
pub struct ScanDocumentParser {
    name_re: Regex,
    extends_re: Regex,
    pref_label_re: Regex,
}

impl Default for ScanDocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanDocumentParser {
    pub fn new() -> Self {
        // Anchored per line; quotes around scalar values are optional.
        Self {
            name_re: Regex::new(r#"(?m)^\s+name:\s*["']?([^"'\n#]+?)["']?\s*$"#)
                .expect("static regex"),
            extends_re: Regex::new(r#"(?m)^\s+extends:\s*["']?([^"'\n#]+?)["']?\s*$"#)
                .expect("static regex"),
            pref_label_re: Regex::new(r#"(?m)^\s*-?\s*prefLabel:\s*["']?([^"'\n#]+?)["']?\s*$"#)
                .expect("static regex"),
        }
    }

    fn first_capture(re: &Regex, text: &str) -> Option<String> {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

impl DocumentParser for ScanDocumentParser {
    fn parse(&self, text: &str) -> Option<OntologyDocument> {
        let metadata = Metadata {
            name: Self::first_capture(&self.name_re, text),
            extends: Self::first_capture(&self.extends_re, text),
        };
        let concepts = self
            .pref_label_re
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| Concept {
                id: None,
                pref_label: Some(m.as_str().trim().to_string()),
            })
            .collect();
        Some(OntologyDocument { metadata, concepts })
    }
}
