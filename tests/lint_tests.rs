// ABOUTME: Integration tests for the Robot Framework syntax linter
// ABOUTME: Checks findings, verdicts and both report renderings on whole documents

use robotsmith::lint::{LintKind, Severity};
use robotsmith::{lint, Verdict};

#[test]
fn test_unterminated_section_header_fails() {
    let text = "*** Settings ***\nLibrary    SeleniumLibrary\n\n*** Test Cases\nExample\n    Log    hi\n";
    let report = lint(text);

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].kind, LintKind::UnterminatedSectionHeader);
    assert_eq!(report.findings[0].line, 4);
    assert_eq!(report.verdict, Verdict::Fail);
    assert!(report.has_errors());
}

#[test]
fn test_warnings_only_pass_with_warnings() {
    let text = "*** Variables ***\n${URL} https://example.com\n${NAME}    ${{name}}\n";
    let report = lint(text);

    let kinds: Vec<LintKind> = report.findings.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![LintKind::MissingFieldSeparator, LintKind::DoubledBraceSyntax]
    );
    assert!(report.findings.iter().all(|f| f.severity == Severity::Warning));
    assert_eq!(report.verdict, Verdict::PassWithWarnings);
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let text = "# *** Broken\n\n   \n    # ${unclosed\n*** Keywords ***\n";
    assert_eq!(lint(text).verdict, Verdict::Pass);
}

#[test]
fn test_text_report_layout() {
    let text = "*** Test Cases\n${A} 1\n";
    let report = lint(text).to_text();

    assert!(report.starts_with("# ROBOT FRAMEWORK SYNTAX VALIDATION\n\n## ERRORS (Must Fix):\n- Line 1: Section header must end with '***'\n"));
    assert!(report.contains("## WARNINGS (Recommended Fixes):\n- Line 2: Variables should use 4 spaces between name and value\n"));
    assert!(report.ends_with("❌ VALIDATION FAILED: Critical errors found that must be fixed\n"));
}

#[test]
fn test_json_report() {
    let report = lint("${OPEN\n");
    let json: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();

    assert_eq!(json["verdict"], "FAIL");
    assert_eq!(json["findings"][0]["line"], 1);
    assert_eq!(json["findings"][0]["severity"], "error");
    assert_eq!(json["findings"][0]["kind"], "UnclosedVariableReference");
}
