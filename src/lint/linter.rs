// ABOUTME: Shallow single-pass line scanner for generated Robot Framework text
// ABOUTME: Applies independent pattern checks per line; no parse tree, no multi-line state

use tracing::debug;

use super::finding::{LintFinding, LintKind};
use super::report::LintReport;

const SECTION_MARKER: &str = "***";
const FIELD_SEPARATOR: &str = "    ";

/// Lint an artifact. Blank lines and `#` comment lines are skipped.
pub fn lint(text: &str) -> LintReport {
    let mut findings = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let line_number = index + 1;
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        findings.extend(
            check_line(line, stripped)
                .into_iter()
                .map(|kind| LintFinding::new(line_number, kind)),
        );
    }

    let report = LintReport::new(findings);
    debug!(
        findings = report.findings.len(),
        verdict = %report.verdict,
        "Lint pass complete"
    );
    report
}

/// Every check runs on every line; one line can produce several findings.
fn check_line(line: &str, stripped: &str) -> Vec<LintKind> {
    let mut kinds = Vec::new();

    if stripped.starts_with(SECTION_MARKER) && !stripped.ends_with(SECTION_MARKER) {
        kinds.push(LintKind::UnterminatedSectionHeader);
    }

    if line.contains("${{") && line.contains("}}") {
        kinds.push(LintKind::DoubledBraceSyntax);
    }

    if line.contains("${") && !line.contains('}') {
        kinds.push(LintKind::UnclosedVariableReference);
    }

    if stripped.starts_with("${") && !line.contains(FIELD_SEPARATOR) && !line.contains('\t') {
        kinds.push(LintKind::MissingFieldSeparator);
    }

    kinds
}
