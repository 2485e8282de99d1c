use std::path::PathBuf;

use serde::Serialize;

/// Rule that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    FileTooLong,
    FunctionTooLong,
    BannedSuffix,
    InvalidEncoding,
    Unreadable,
    IgnoreFileGap,
    MissingCredentialExample,
    StrayTempFiles,
    LooseLayout,
}

/// Whether a violation fails the gate or is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Blocking,
    Advisory,
}

/// A single detected policy breach. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Relative path of the offending file; `None` for violations scoped to
    /// the project root as a whole.
    pub path: Option<PathBuf>,
    /// 1-based inclusive line range, where applicable.
    pub lines: Option<(usize, usize)>,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    #[must_use]
    pub fn file_too_long(line_count: usize, limit: usize) -> Self {
        Self {
            kind: ViolationKind::FileTooLong,
            path: None,
            lines: None,
            message: format!(
                "file exceeds limit: {line_count} lines (max {limit}); split into smaller modules"
            ),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn function_too_long(name: &str, range: (usize, usize), limit: usize) -> Self {
        let (start, end) = range;
        let span = end - start + 1;
        Self {
            kind: ViolationKind::FunctionTooLong,
            path: None,
            lines: Some(range),
            message: format!(
                "function exceeds limit: {name}() lines {start}-{end} ({span} lines, max {limit}); split it up"
            ),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn banned_suffix(file_name: &str, suffix: &str) -> Self {
        Self {
            kind: ViolationKind::BannedSuffix,
            path: None,
            lines: None,
            message: format!(
                "file name carries banned suffix '{suffix}': {file_name}; rename and keep a single copy"
            ),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn invalid_encoding() -> Self {
        Self {
            kind: ViolationKind::InvalidEncoding,
            path: None,
            lines: None,
            message: "file is not valid UTF-8; convert it to UTF-8".to_string(),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn unreadable(detail: &str) -> Self {
        Self {
            kind: ViolationKind::Unreadable,
            path: None,
            lines: None,
            message: format!("cannot read file: {detail}"),
            severity: Severity::Advisory,
        }
    }

    #[must_use]
    pub fn missing_ignore_file(ignore_file: &str) -> Self {
        Self {
            kind: ViolationKind::IgnoreFileGap,
            path: None,
            lines: None,
            message: format!(
                "no {ignore_file} present; create one covering disposable directories and credentials"
            ),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn uncovered_dir(ignore_file: &str, dir: &str) -> Self {
        Self {
            kind: ViolationKind::IgnoreFileGap,
            path: None,
            lines: None,
            message: format!("{dir}/ directory is not covered by {ignore_file}"),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn uncovered_credential(ignore_file: &str, credential_file: &str) -> Self {
        Self {
            kind: ViolationKind::IgnoreFileGap,
            path: None,
            lines: None,
            message: format!(
                "{credential_file} is not covered by {ignore_file}: credential leak risk"
            ),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn missing_credential_example(credential_file: &str, example: &str) -> Self {
        Self {
            kind: ViolationKind::MissingCredentialExample,
            path: None,
            lines: None,
            message: format!(
                "{credential_file} present without {example}; add a template listing required variables"
            ),
            severity: Severity::Advisory,
        }
    }

    #[must_use]
    pub fn stray_temp_files(preview: &str) -> Self {
        Self {
            kind: ViolationKind::StrayTempFiles,
            path: None,
            lines: None,
            message: format!(
                "suspected temporary files at project root: {preview}; delete them or move them into tmp/"
            ),
            severity: Severity::Blocking,
        }
    }

    #[must_use]
    pub fn loose_layout(count: usize, source_dir: &str) -> Self {
        Self {
            kind: ViolationKind::LooseLayout,
            path: None,
            lines: None,
            message: format!(
                "{count} code files at the project root without a {source_dir}/ directory; consider restructuring"
            ),
            severity: Severity::Advisory,
        }
    }

    /// Attach the relative path of the offending file.
    #[must_use]
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self.severity, Severity::Blocking)
    }

    /// Oversize violations trigger the anti-gaming warning block.
    #[must_use]
    pub const fn is_oversize(&self) -> bool {
        matches!(
            self.kind,
            ViolationKind::FileTooLong | ViolationKind::FunctionTooLong
        )
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
