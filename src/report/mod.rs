mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{ColorMode, TextFormatter};

use std::path::PathBuf;

use clap::ValueEnum;
use indexmap::IndexMap;

use crate::error::Result;
use crate::rules::Violation;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ReportFormatter {
    /// Render a completed report.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &ScanReport) -> Result<String>;
}

/// Append-only accumulator for one scan, and the entire output contract.
///
/// File sections keep first-seen order; pass/fail counts cover scanned files
/// plus the two counted project-level checks. Advisory violations are
/// reported without moving any count.
#[derive(Debug)]
pub struct ScanReport {
    root_display: String,
    scope_label: &'static str,
    total_files: usize,
    passed: usize,
    failed: usize,
    file_sections: IndexMap<PathBuf, Vec<Violation>>,
    passed_files: Vec<PathBuf>,
    project_violations: Vec<Violation>,
    has_oversize: bool,
}

impl ScanReport {
    #[must_use]
    pub fn new(root_display: String, scope_label: &'static str) -> Self {
        Self {
            root_display,
            scope_label,
            total_files: 0,
            passed: 0,
            failed: 0,
            file_sections: IndexMap::new(),
            passed_files: Vec::new(),
            project_violations: Vec::new(),
            has_oversize: false,
        }
    }

    /// Record one scanned file and its violations.
    pub fn record_file(&mut self, rel_path: PathBuf, violations: Vec<Violation>) {
        self.total_files += 1;

        if violations.iter().any(Violation::is_blocking) {
            self.failed += 1;
        } else {
            self.passed += 1;
        }

        if violations.is_empty() {
            self.passed_files.push(rel_path);
        } else {
            self.has_oversize |= violations.iter().any(Violation::is_oversize);
            self.file_sections.insert(rel_path, violations);
        }
    }

    /// Record one counted project-level check: empty means the unit passed.
    pub fn record_project_unit(&mut self, violations: Vec<Violation>) {
        if violations.iter().any(Violation::is_blocking) {
            self.failed += 1;
        } else {
            self.passed += 1;
        }
        self.project_violations.extend(violations);
    }

    /// Record advisory project-level findings; counts are unaffected.
    pub fn record_project_advisories(&mut self, violations: Vec<Violation>) {
        self.project_violations.extend(violations);
    }

    #[must_use]
    pub fn root_display(&self) -> &str {
        &self.root_display
    }

    #[must_use]
    pub const fn scope_label(&self) -> &'static str {
        self.scope_label
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.total_files
    }

    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub const fn file_sections(&self) -> &IndexMap<PathBuf, Vec<Violation>> {
        &self.file_sections
    }

    #[must_use]
    pub fn passed_files(&self) -> &[PathBuf] {
        &self.passed_files
    }

    #[must_use]
    pub fn project_violations(&self) -> &[Violation] {
        &self.project_violations
    }

    #[must_use]
    pub const fn has_oversize(&self) -> bool {
        self.has_oversize
    }

    #[must_use]
    pub const fn gate_passed(&self) -> bool {
        self.failed == 0
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.gate_passed() {
            crate::EXIT_SUCCESS
        } else {
            crate::EXIT_GATE_FAILED
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
