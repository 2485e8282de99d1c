use std::path::PathBuf;

use crate::rules::Violation;

use super::*;

fn report() -> ScanReport {
    ScanReport::new("/proj".to_string(), "code files (default)")
}

#[test]
fn empty_report_passes_gate() {
    let report = report();

    assert_eq!(report.total_files(), 0);
    assert!(report.gate_passed());
    assert_eq!(report.exit_code(), crate::EXIT_SUCCESS);
}

#[test]
fn clean_file_counts_as_passed() {
    let mut report = report();
    report.record_file(PathBuf::from("a.py"), Vec::new());

    assert_eq!(report.total_files(), 1);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 0);
    assert!(report.file_sections().is_empty());
    assert_eq!(report.passed_files(), [PathBuf::from("a.py")]);
}

#[test]
fn blocking_violation_fails_file_and_gate() {
    let mut report = report();
    report.record_file(PathBuf::from("a.py"), vec![Violation::invalid_encoding()]);

    assert_eq!(report.failed(), 1);
    assert!(!report.gate_passed());
    assert_eq!(report.exit_code(), crate::EXIT_GATE_FAILED);
}

#[test]
fn advisory_only_file_passes_but_keeps_its_section() {
    let mut report = report();
    report.record_file(PathBuf::from("a.py"), vec![Violation::unreadable("denied")]);

    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.file_sections().len(), 1);
    assert!(report.gate_passed());
}

#[test]
fn oversize_flag_set_by_length_violations_only() {
    let mut report = report();
    report.record_file(PathBuf::from("a.py"), vec![Violation::invalid_encoding()]);
    assert!(!report.has_oversize());

    report.record_file(
        PathBuf::from("b.py"),
        vec![Violation::file_too_long(1100, 1000)],
    );
    assert!(report.has_oversize());
}

#[test]
fn file_sections_preserve_insertion_order() {
    let mut report = report();
    for name in ["z.py", "a.py", "m.py"] {
        report.record_file(PathBuf::from(name), vec![Violation::invalid_encoding()]);
    }

    let order: Vec<_> = report
        .file_sections()
        .keys()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(order, vec!["z.py", "a.py", "m.py"]);
}

#[test]
fn project_unit_with_blocking_violation_counts_failed() {
    let mut report = report();
    report.record_project_unit(vec![Violation::missing_ignore_file(".gitignore")]);

    assert_eq!(report.failed(), 1);
    assert_eq!(report.total_files(), 0);
    assert_eq!(report.project_violations().len(), 1);
}

#[test]
fn empty_project_unit_counts_passed() {
    let mut report = report();
    report.record_project_unit(Vec::new());

    assert_eq!(report.passed(), 1);
    assert!(report.gate_passed());
}

#[test]
fn advisories_never_flip_the_exit_code() {
    let mut report = report();
    report.record_project_advisories(vec![
        Violation::missing_credential_example(".env", ".env.example"),
        Violation::loose_layout(5, "src"),
    ]);

    assert_eq!(report.project_violations().len(), 2);
    assert!(report.gate_passed());
    assert_eq!(report.exit_code(), crate::EXIT_SUCCESS);
}
