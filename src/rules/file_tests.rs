use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::GateConfig;
use crate::rules::ViolationKind;

use super::*;

fn source(name: &str, content: &str) -> SourceFile {
    SourceFile::new(PathBuf::from(name), content.as_bytes().to_vec())
}

fn limits(max_file: usize, max_func: usize) -> LimitsConfig {
    LimitsConfig {
        max_file_lines: max_file,
        max_func_lines: max_func,
    }
}

#[test]
fn file_at_limit_passes() {
    let content = "x = 1\n".repeat(10);
    let file = source("a.py", &content);

    assert!(check_file_length(&file, &limits(10, 200)).is_empty());
}

#[test]
fn file_one_line_over_fails_exactly_once() {
    let content = "x = 1\n".repeat(11);
    let file = source("a.py", &content);

    let violations = check_file_length(&file, &limits(10, 200));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::FileTooLong);
    assert!(violations[0].message.contains("11 lines"));
}

#[test]
fn function_at_limit_passes() {
    // One def line plus 199 body lines: exactly 200.
    let mut content = String::from("def exact():\n");
    for _ in 0..199 {
        content.push_str("    x = 1\n");
    }
    let file = source("a.py", &content);

    assert!(check_function_lengths(&file, &limits(1000, 200)).is_empty());
}

#[test]
fn function_one_line_over_fails_with_name_and_range() {
    let mut content = String::from("def padded():\n");
    for _ in 0..200 {
        content.push_str("    x = 1\n");
    }
    let file = source("a.py", &content);

    let violations = check_function_lengths(&file, &limits(1000, 200));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::FunctionTooLong);
    assert_eq!(violations[0].lines, Some((1, 201)));
    assert!(violations[0].message.contains("padded()"));
}

#[test]
fn banned_suffix_matches_stem_end_only() {
    let naming = NamingConfig::default();

    let flagged = check_banned_suffix(&source("report_v2.py", ""), &naming);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].kind, ViolationKind::BannedSuffix);

    // Substring elsewhere in the name is fine.
    assert!(check_banned_suffix(&source("v2report.py", ""), &naming).is_empty());
}

#[test]
fn banned_suffix_is_case_insensitive() {
    let naming = NamingConfig::default();
    assert_eq!(
        check_banned_suffix(&source("Parser_OLD.py", ""), &naming).len(),
        1
    );
}

#[test]
fn banned_suffix_short_circuits_on_first_match() {
    let naming = NamingConfig {
        banned_suffixes: vec!["_old".to_string(), "_bak_old".to_string()],
    };
    let violations = check_banned_suffix(&source("x_bak_old.py", ""), &naming);

    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("'_old'"));
}

#[test]
fn valid_utf8_passes_encoding_check() {
    let file = source("a.py", "x = 'héllo'\n");
    assert!(check_encoding(&file).is_empty());
}

#[test]
fn invalid_utf8_fails_encoding_check() {
    let file = SourceFile::new(PathBuf::from("a.py"), vec![0x66, 0x6f, 0xff, 0xfe, 0x6f]);
    let violations = check_encoding(&file);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::InvalidEncoding);
}

#[test]
fn multibyte_char_split_at_probe_boundary_is_not_an_error() {
    // 4095 ASCII bytes followed by a 2-byte char puts the cut mid-sequence.
    let mut content = vec![b'a'; 4095];
    content.extend_from_slice("é".as_bytes());
    let file = SourceFile::new(PathBuf::from("a.py"), content);

    assert!(check_encoding(&file).is_empty());
}

#[test]
fn garbage_past_probe_window_is_ignored() {
    let mut content = vec![b'a'; 4096];
    content.push(0xff);
    let file = SourceFile::new(PathBuf::from("a.py"), content);

    assert!(check_encoding(&file).is_empty());
}

#[test]
fn evaluate_file_tags_every_violation_with_rel_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big_v2.py");
    fs::write(&path, "x = 1\n".repeat(20)).unwrap();

    let mut config = GateConfig::default();
    config.limits.max_file_lines = 10;

    let violations = evaluate_file(&path, Path::new("big_v2.py"), &config);
    assert_eq!(violations.len(), 2);
    assert!(violations
        .iter()
        .all(|v| v.path == Some(PathBuf::from("big_v2.py"))));
}

#[test]
fn evaluate_file_missing_file_yields_soft_violation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.py");

    let violations = evaluate_file(&path, Path::new("absent.py"), &GateConfig::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::Unreadable);
    assert!(!violations[0].is_blocking());
}

#[test]
fn evaluate_file_skips_block_scan_for_brace_syntax() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.rs");
    // "def " inside a Rust string literal must not be treated as a block.
    let mut content = String::from("fn main() {\n    let s = \"def x\";\n");
    for _ in 0..250 {
        content.push_str("    s.len();\n");
    }
    content.push_str("}\n");
    fs::write(&path, &content).unwrap();

    let violations = evaluate_file(&path, Path::new("main.rs"), &GateConfig::default());
    assert!(violations.is_empty());
}

#[test]
fn source_file_extension_is_lowercased() {
    let file = source("Module.PY", "");
    assert_eq!(file.extension, "py");
}
