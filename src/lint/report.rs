// ABOUTME: Lint report with verdict plus text and JSON renderings
// ABOUTME: The text form is the human-readable report returned by the lint-artifact operation

use serde::Serialize;
use std::fmt;

use super::finding::{LintFinding, Severity};

pub const REPORT_TITLE: &str = "# ROBOT FRAMEWORK SYNTAX VALIDATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    PassWithWarnings,
    Fail,
}

impl Verdict {
    pub fn banner(&self) -> &'static str {
        match self {
            Verdict::Pass => "✅ VALIDATION PASSED: No syntax errors found",
            Verdict::PassWithWarnings => {
                "⚠️  VALIDATION PASSED WITH WARNINGS: No critical errors, but consider fixing warnings"
            }
            Verdict::Fail => "❌ VALIDATION FAILED: Critical errors found that must be fixed",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::PassWithWarnings => write!(f, "PASS_WITH_WARNINGS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub findings: Vec<LintFinding>,
    pub verdict: Verdict,
}

impl LintReport {
    pub fn new(findings: Vec<LintFinding>) -> Self {
        let verdict = if findings.iter().any(|f| f.severity == Severity::Error) {
            Verdict::Fail
        } else if findings.is_empty() {
            Verdict::Pass
        } else {
            Verdict::PassWithWarnings
        };

        Self { findings, verdict }
    }

    pub fn errors(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.verdict == Verdict::Fail
    }

    /// Sectioned report: errors, then warnings, then the verdict banner
    pub fn to_text(&self) -> String {
        let mut output = format!("{}\n\n", REPORT_TITLE);

        let errors: Vec<String> = self.errors().map(|f| format!("- {}", f)).collect();
        if !errors.is_empty() {
            output.push_str("## ERRORS (Must Fix):\n");
            output.push_str(&errors.join("\n"));
            output.push_str("\n\n");
        }

        let warnings: Vec<String> = self.warnings().map(|f| format!("- {}", f)).collect();
        if !warnings.is_empty() {
            output.push_str("## WARNINGS (Recommended Fixes):\n");
            output.push_str(&warnings.join("\n"));
            output.push_str("\n\n");
        }

        output.push_str(self.verdict.banner());
        output.push('\n');
        output
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
