//! Findings and report rendering for the ontology linter.

use crate::core::output;
use serde::Serialize;

/// Finding severity. ERROR fails `--check`; WARN never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
}

/// One reported issue, attributed to a source document (or to the
/// inheritance graph for cycles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

/// Accumulated result of one lint run. Pure output; rebuilt from scratch on
/// every invocation.
#[derive(Debug, Default, Serialize)]
pub struct OntologyReport {
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    pub refs_checked: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl OntologyReport {
    pub fn push(&mut self, severity: Severity, source: &str, message: String) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warn => self.warnings += 1,
        }
        self.findings.push(Finding {
            severity,
            source: source.to_string(),
            message,
        });
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warn_count(&self) -> usize {
        self.warnings
    }

    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    /// Human-readable rendering: one `  [SEVERITY] source: message` line per
    /// finding, then a summary block and a pass/fail line.
    pub fn render_text(&self) {
        use colored::Colorize;

        for finding in &self.findings {
            let tag = match finding.severity {
                Severity::Error => "[ERROR]".red(),
                Severity::Warn => "[WARN]".yellow(),
            };
            println!(
                "  {} {}: {}",
                tag,
                finding.source,
                output::compact_line(&finding.message, 160)
            );
        }

        println!(
            "\nSummary: {} file(s) scanned, {} reference(s) checked, {} error(s), {} warning(s)",
            self.files_scanned, self.refs_checked, self.errors, self.warnings
        );
        if self.passed() {
            println!("Result: {}", "PASS".green());
        } else {
            println!("Result: {}", "FAIL".red());
        }
    }
}
