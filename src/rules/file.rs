use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::blocks::BlockScanner;
use crate::config::{GateConfig, LimitsConfig, NamingConfig};

use super::Violation;

/// Number of leading bytes validated by the encoding check.
const ENCODING_PROBE_BYTES: usize = 4096;

/// One file as loaded for evaluation. Read-only, scan-scoped.
#[derive(Debug)]
pub struct SourceFile {
    /// Path relative to the project root, used in all reporting.
    pub rel_path: PathBuf,
    pub content: Vec<u8>,
    /// Lowercase extension without the dot; empty when absent.
    pub extension: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(rel_path: PathBuf, content: Vec<u8>) -> Self {
        let extension = rel_path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        Self {
            rel_path,
            content,
            extension,
        }
    }

    /// Content decoded leniently; invalid sequences are replaced, matching
    /// the line-counting behavior (the encoding rule reports them separately).
    #[must_use]
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Run every file-level evaluator against one file on disk.
///
/// A file that cannot be read yields a single soft violation; nothing here
/// aborts the scan.
#[must_use]
pub fn evaluate_file(path: &Path, rel_path: &Path, config: &GateConfig) -> Vec<Violation> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            return vec![Violation::unreadable(&e.to_string()).with_path(rel_path.to_path_buf())];
        }
    };

    let file = SourceFile::new(rel_path.to_path_buf(), content);
    let mut violations = Vec::new();

    violations.extend(check_file_length(&file, &config.limits));
    violations.extend(check_banned_suffix(&file, &config.naming));
    violations.extend(check_encoding(&file));
    if config
        .extensions
        .indent_blocks
        .iter()
        .any(|e| *e == file.extension)
    {
        violations.extend(check_function_lengths(&file, &config.limits));
    }

    violations
        .into_iter()
        .map(|v| v.with_path(rel_path.to_path_buf()))
        .collect()
}

/// Flag files longer than `limits.max_file_lines`.
#[must_use]
pub fn check_file_length(file: &SourceFile, limits: &LimitsConfig) -> Vec<Violation> {
    let line_count = file.text_lossy().lines().count();
    if line_count > limits.max_file_lines {
        vec![Violation::file_too_long(line_count, limits.max_file_lines)]
    } else {
        Vec::new()
    }
}

/// Flag detected blocks longer than `limits.max_func_lines`.
///
/// Only meaningful for indentation-significant syntaxes; the caller gates on
/// the configured extension list.
#[must_use]
pub fn check_function_lengths(file: &SourceFile, limits: &LimitsConfig) -> Vec<Violation> {
    let scanner = BlockScanner::new();
    scanner
        .scan(&file.text_lossy())
        .iter()
        .filter(|record| record.line_count() > limits.max_func_lines)
        .map(|record| {
            Violation::function_too_long(
                &record.name,
                record.display_range(),
                limits.max_func_lines,
            )
        })
        .collect()
}

/// Flag file stems ending in a banned versioning/backup suffix.
///
/// Matching is case-insensitive and suffix-only; the first matching suffix
/// wins.
#[must_use]
pub fn check_banned_suffix(file: &SourceFile, naming: &NamingConfig) -> Vec<Violation> {
    let Some(stem) = file.rel_path.file_stem().and_then(|s| s.to_str()) else {
        return Vec::new();
    };
    let stem = stem.to_lowercase();

    let file_name = file
        .rel_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    for suffix in &naming.banned_suffixes {
        if stem.ends_with(&suffix.to_lowercase()) {
            return vec![Violation::banned_suffix(file_name, suffix)];
        }
    }

    Vec::new()
}

/// Flag content whose leading bytes are not valid UTF-8.
///
/// Only a bounded prefix is probed. A multi-byte sequence cut off by the
/// probe boundary is not an error.
#[must_use]
pub fn check_encoding(file: &SourceFile) -> Vec<Violation> {
    let probe = &file.content[..file.content.len().min(ENCODING_PROBE_BYTES)];

    match std::str::from_utf8(probe) {
        Ok(_) => Vec::new(),
        // error_len() of None means the probe ended mid-sequence.
        Err(e) if e.error_len().is_none() => Vec::new(),
        Err(_) => vec![Violation::invalid_encoding()],
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
