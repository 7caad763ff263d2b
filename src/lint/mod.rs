// ABOUTME: Syntax linter module for generated Robot Framework artifacts
// ABOUTME: Exports the line scanner, finding types and the report with its verdict

pub mod finding;
pub mod linter;
pub mod report;

pub use finding::{LintFinding, LintKind, Severity};
pub use linter::lint;
pub use report::{LintReport, Verdict};
