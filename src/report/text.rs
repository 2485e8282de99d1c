use std::fmt::Write;

use crate::error::Result;
use crate::rules::Violation;

use super::{ReportFormatter, ScanReport};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set.
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

const RULE_HEAVY: &str = "============================================================";
const RULE_WARN: &str = "------------------------------------------------------------";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn violation_line(&self, violation: &Violation) -> String {
        if violation.is_blocking() {
            format!("  {} {}", self.paint(ansi::RED, "✗"), violation.message)
        } else {
            format!("  {} {}", self.paint(ansi::YELLOW, "⚠"), violation.message)
        }
    }

    fn write_file_sections(&self, report: &ScanReport, out: &mut String) {
        for (path, violations) in report.file_sections() {
            let _ = writeln!(out, "\n{}", path.display());
            for violation in violations {
                let _ = writeln!(out, "{}", self.violation_line(violation));
            }
        }

        if self.verbose > 0 {
            for path in report.passed_files() {
                let _ = writeln!(
                    out,
                    "\n{}\n  {} no findings",
                    path.display(),
                    self.paint(ansi::GREEN, "✓")
                );
            }
        }
    }

    fn write_oversize_warning(out: &mut String) {
        let _ = writeln!(out, "\n{RULE_WARN}");
        let _ = writeln!(
            out,
            "Oversize violations must be fixed by splitting responsibilities:"
        );
        let _ = writeln!(
            out,
            "  - never delete error handling, retries, validation, logging or docs"
        );
        let _ = writeln!(
            out,
            "  - never merge several functions into one oversized one"
        );
        let _ = writeln!(
            out,
            "  - do split modules and functions along responsibility lines"
        );
        let _ = writeln!(out, "{RULE_WARN}");
    }

    fn write_project_section(&self, report: &ScanReport, out: &mut String) {
        if report.project_violations().is_empty() {
            return;
        }

        let _ = writeln!(out, "\nProject-level checks");
        for violation in report.project_violations() {
            let _ = writeln!(out, "{}", self.violation_line(violation));
        }
    }

    fn write_summary(&self, report: &ScanReport, out: &mut String) {
        let _ = writeln!(out, "\n{RULE_HEAVY}");
        let _ = writeln!(out, "Scan complete");
        let _ = writeln!(out, "  files scanned: {}", report.total_files());
        let _ = writeln!(out, "  passed: {}", report.passed());
        let _ = writeln!(out, "  failed: {}", report.failed());

        let _ = writeln!(out, "\nNeeds human review (not checked automatically):");
        let _ = writeln!(
            out,
            "  - duplicate implementations: is each feature kept in exactly one place?"
        );
        let _ = writeln!(out, "  - comment language convention");

        if report.gate_passed() {
            let _ = writeln!(
                out,
                "\n{} all automated checks passed",
                self.paint(ansi::GREEN, "✓")
            );
        } else {
            let _ = writeln!(
                out,
                "\n{} gate failed: fix the findings above and re-run",
                self.paint(ansi::RED, "✗")
            );
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "Repository gate: {}", report.root_display());
        let _ = writeln!(out, "{RULE_HEAVY}");
        let _ = writeln!(out, "Scope: {}", report.scope_label());

        self.write_file_sections(report, &mut out);

        if report.has_oversize() {
            Self::write_oversize_warning(&mut out);
        }

        self.write_project_section(report, &mut out);
        self.write_summary(report, &mut out);

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
