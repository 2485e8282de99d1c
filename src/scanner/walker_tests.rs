use std::fs;

use tempfile::TempDir;

use crate::config::{ExtensionsConfig, WalkConfig};
use crate::scanner::ScanScope;

use super::*;

fn walker(walk: &WalkConfig) -> TreeWalker {
    let filter =
        InclusionFilter::new(ScanScope::CodeOnly, &ExtensionsConfig::default(), &[]).unwrap();
    TreeWalker::new(filter, walk)
}

#[test]
fn walk_finds_nested_code_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/pkg")).unwrap();
    fs::write(dir.path().join("main.py"), "x = 1\n").unwrap();
    fs::write(dir.path().join("src/pkg/util.py"), "y = 2\n").unwrap();
    fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let files = walker(&WalkConfig::default()).walk(dir.path()).unwrap();
    let mut names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names, vec!["main.py", "util.py"]);
}

#[test]
fn walk_prunes_configured_ignore_dirs() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("node_modules/dep")).unwrap();
    fs::write(dir.path().join("node_modules/dep/index.js"), "x\n").unwrap();
    fs::create_dir(dir.path().join("debug")).unwrap();
    fs::write(dir.path().join("debug/dump.py"), "x\n").unwrap();
    fs::write(dir.path().join("app.py"), "x\n").unwrap();

    let files = walker(&WalkConfig::default()).walk(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.py"));
}

#[test]
fn walk_prunes_dot_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".hidden")).unwrap();
    fs::write(dir.path().join(".hidden/secret.py"), "x\n").unwrap();
    fs::write(dir.path().join("app.py"), "x\n").unwrap();

    let files = walker(&WalkConfig::default()).walk(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.py"));
}

#[test]
fn walk_missing_root_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    assert!(walker(&WalkConfig::default()).walk(&missing).is_err());
}

#[test]
fn gitignore_mode_skips_ignored_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "ignored.py\n").unwrap();
    fs::write(dir.path().join("ignored.py"), "x\n").unwrap();
    fs::write(dir.path().join("kept.py"), "x\n").unwrap();

    let walk = WalkConfig {
        gitignore: true,
        ..WalkConfig::default()
    };
    let files = walker(&walk).walk(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("kept.py"));
}

#[test]
fn empty_ignore_list_still_prunes_dot_dirs() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/config.py"), "x\n").unwrap();
    fs::write(dir.path().join("app.py"), "x\n").unwrap();

    let walk = WalkConfig {
        ignore_dirs: Vec::new(),
        ..WalkConfig::default()
    };
    let files = walker(&walk).walk(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
}
