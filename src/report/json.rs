use serde::Serialize;

use crate::error::Result;
use crate::rules::Violation;

use super::{ReportFormatter, ScanReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: &'a str,
    scope: &'a str,
    summary: Summary,
    files: Vec<FileSection<'a>>,
    project: &'a [Violation],
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    gate_passed: bool,
    oversize: bool,
}

#[derive(Serialize)]
struct FileSection<'a> {
    path: String,
    violations: &'a [Violation],
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let files = report
            .file_sections()
            .iter()
            .map(|(path, violations)| FileSection {
                path: path.display().to_string().replace('\\', "/"),
                violations,
            })
            .collect();

        let output = JsonOutput {
            root: report.root_display(),
            scope: report.scope_label(),
            summary: Summary {
                total_files: report.total_files(),
                passed: report.passed(),
                failed: report.failed(),
                gate_passed: report.gate_passed(),
                oversize: report.has_oversize(),
            },
            files,
            project: report.project_violations(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
