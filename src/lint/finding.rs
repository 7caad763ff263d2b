// ABOUTME: Lint finding types with line numbers, severities and check kinds
// ABOUTME: Each kind has a fixed severity and a fixed human-readable message

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LintKind {
    UnterminatedSectionHeader,
    DoubledBraceSyntax,
    UnclosedVariableReference,
    MissingFieldSeparator,
}

impl LintKind {
    pub fn severity(&self) -> Severity {
        match self {
            LintKind::UnterminatedSectionHeader | LintKind::UnclosedVariableReference => {
                Severity::Error
            }
            LintKind::DoubledBraceSyntax | LintKind::MissingFieldSeparator => Severity::Warning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LintKind::UnterminatedSectionHeader => "Section header must end with '***'",
            LintKind::DoubledBraceSyntax => "Use ${variable} syntax instead of ${{variable}}",
            LintKind::UnclosedVariableReference => "Unclosed variable syntax",
            LintKind::MissingFieldSeparator => {
                "Variables should use 4 spaces between name and value"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    /// 1-based line number in the linted text
    pub line: usize,
    pub severity: Severity,
    pub kind: LintKind,
    pub message: String,
}

impl LintFinding {
    pub fn new(line: usize, kind: LintKind) -> Self {
        Self {
            line,
            severity: kind.severity(),
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}
