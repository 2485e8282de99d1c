use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{GateConfig, HygieneConfig, TempConfig};

use super::Violation;

/// Outcome of the project-level evaluators.
///
/// The ignore-file and stray-temp checks each count as one pass/fail unit in
/// the summary; advisories are reported without affecting counts.
#[derive(Debug, Default)]
pub struct ProjectChecks {
    pub ignore_file: Vec<Violation>,
    pub temp_files: Vec<Violation>,
    pub advisories: Vec<Violation>,
}

/// Run every project-level evaluator against the root directory.
#[must_use]
pub fn evaluate_project(root: &Path, config: &GateConfig) -> ProjectChecks {
    let mut advisories = check_credential_pairing(root, &config.hygiene);
    advisories.extend(check_layout(root, config));

    ProjectChecks {
        ignore_file: check_ignore_file(root, &config.hygiene),
        temp_files: check_stray_temp_files(root, &config.temp),
        advisories,
    }
}

/// Verify that disposable directories and the credential file, when present
/// on disk, are covered by the ignore file.
///
/// Absence of every sensitive path is not a violation; absence of the ignore
/// file only matters once something needs covering.
#[must_use]
pub fn check_ignore_file(root: &Path, hygiene: &HygieneConfig) -> Vec<Violation> {
    let ignore_path = root.join(&hygiene.ignore_file);

    let present_dirs: Vec<&str> = hygiene
        .watched_dirs
        .iter()
        .filter(|d| root.join(d).exists())
        .map(String::as_str)
        .collect();
    let credential_present = root.join(&hygiene.credential_file).exists();

    if !ignore_path.exists() {
        if present_dirs.is_empty() && !credential_present {
            return Vec::new();
        }
        return vec![Violation::missing_ignore_file(&hygiene.ignore_file)];
    }

    let content = match fs::read_to_string(&ignore_path) {
        Ok(content) => content,
        Err(e) => {
            return vec![Violation::unreadable(&e.to_string())
                .with_path(PathBuf::from(&hygiene.ignore_file))];
        }
    };

    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with('#'))
        .collect();

    let mut violations = Vec::new();
    for dir in present_dirs {
        if !covers_directory(&entries, dir) {
            violations.push(Violation::uncovered_dir(&hygiene.ignore_file, dir));
        }
    }

    if credential_present && !covers_file(&entries, &hygiene.credential_file) {
        violations.push(Violation::uncovered_credential(
            &hygiene.ignore_file,
            &hygiene.credential_file,
        ));
    }

    violations
}

fn covers_directory(entries: &[&str], dir: &str) -> bool {
    let accepted = [
        dir.to_string(),
        format!("{dir}/"),
        format!("/{dir}"),
        format!("/{dir}/"),
    ];
    entries.iter().any(|e| accepted.iter().any(|a| a == e))
}

fn covers_file(entries: &[&str], name: &str) -> bool {
    let rooted = format!("/{name}");
    entries.iter().any(|e| *e == name || *e == rooted)
}

/// Advisory: a credential file without its example/template counterpart.
#[must_use]
pub fn check_credential_pairing(root: &Path, hygiene: &HygieneConfig) -> Vec<Violation> {
    let has_credential = root.join(&hygiene.credential_file).exists();
    let has_example = root.join(&hygiene.credential_example).exists();

    if has_credential && !has_example {
        vec![Violation::missing_credential_example(
            &hygiene.credential_file,
            &hygiene.credential_example,
        )]
    } else {
        Vec::new()
    }
}

/// Detect leftover temporary files at the project root.
///
/// All matches are aggregated into one violation listing a bounded preview
/// of names, with an overflow indicator when more exist.
#[must_use]
pub fn check_stray_temp_files(root: &Path, temp: &TempConfig) -> Vec<Violation> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut found: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_ok_and(|ft| ft.is_file()))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| is_temp_name(name, temp))
        .collect();

    if found.is_empty() {
        return Vec::new();
    }

    found.sort();
    let mut preview = found
        .iter()
        .take(temp.preview_limit)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if found.len() > temp.preview_limit {
        let extra = found.len() - temp.preview_limit;
        preview.push_str(&format!(" (+{extra} more)"));
    }

    vec![Violation::stray_temp_files(&preview)]
}

fn is_temp_name(name: &str, temp: &TempConfig) -> bool {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    temp.name_prefixes.iter().any(|p| stem.starts_with(p.as_str()))
        || temp.extensions.iter().any(|e| *e == extension)
}

/// Advisory: too many loose code files at the root with no conventional
/// source subdirectory.
#[must_use]
pub fn check_layout(root: &Path, config: &GateConfig) -> Vec<Violation> {
    if root.join(&config.layout.source_dir).exists() {
        return Vec::new();
    }

    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let loose_count = entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_ok_and(|ft| ft.is_file()))
        .filter(|e| {
            let name = e.file_name();
            Path::new(&name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_lowercase)
                .is_some_and(|ext| config.extensions.code.iter().any(|c| *c == ext))
        })
        .count();

    if loose_count > config.layout.max_loose_code_files {
        vec![Violation::loose_layout(
            loose_count,
            &config.layout.source_dir,
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
