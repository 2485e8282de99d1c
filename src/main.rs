use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use repo_gate::cli::{Cli, ColorChoice};
use repo_gate::config::{ConfigLoader, FileConfigLoader, GateConfig};
use repo_gate::report::{
    ColorMode, JsonFormatter, OutputFormat, ReportFormatter, ScanProgress, ScanReport,
    TextFormatter,
};
use repo_gate::rules::{evaluate_file, evaluate_project, Violation};
use repo_gate::scanner::{InclusionFilter, ScanScope, TreeWalker};
use repo_gate::{GateError, EXIT_GATE_FAILED, EXIT_RUNTIME_ERROR};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_gate(&cli));
}

fn run_gate(cli: &Cli) -> i32 {
    match run_gate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(GateError::RootNotFound(path)) => {
            eprintln!("Error: project root does not exist: {}", path.display());
            EXIT_GATE_FAILED
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_gate_impl(cli: &Cli) -> repo_gate::Result<i32> {
    // 1. Validate the root before anything else; this is the only fatal input.
    let root = resolve_root(&cli.root)?;

    // 2. Load configuration and apply CLI overrides.
    let mut config = load_config(cli, &root)?;
    apply_cli_overrides(&mut config, cli);

    // 3. Enumerate eligible files.
    let scope = scan_scope(cli);
    let filter = InclusionFilter::new(scope, &config.extensions, &config.walk.exclude)?;
    let walker = TreeWalker::new(filter, &config.walk);
    let files = walker.walk(&root)?;

    // 4. File-level evaluation, parallel per file; results keep walk order.
    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let results: Vec<(PathBuf, Vec<Violation>)> = files
        .par_iter()
        .map(|path| {
            let rel = path
                .strip_prefix(&root)
                .unwrap_or(path.as_path())
                .to_path_buf();
            let violations = evaluate_file(path, &rel, &config);
            progress.inc();
            (rel, violations)
        })
        .collect();
    progress.finish();

    // 5. Aggregate, then run project-level checks single-threaded.
    let mut report = ScanReport::new(root.display().to_string(), scope.label());
    for (rel, violations) in results {
        report.record_file(rel, violations);
    }

    let checks = evaluate_project(&root, &config);
    report.record_project_unit(checks.ignore_file);
    report.record_project_unit(checks.temp_files);
    report.record_project_advisories(checks.advisories);

    // 6. Render and emit.
    let output = format_output(cli.format, &report, color_choice_to_mode(cli.color), cli.verbose)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    Ok(report.exit_code())
}

fn resolve_root(path: &Path) -> repo_gate::Result<PathBuf> {
    if !path.is_dir() {
        return Err(GateError::RootNotFound(path.to_path_buf()));
    }
    Ok(dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}

fn load_config(cli: &Cli, root: &Path) -> repo_gate::Result<GateConfig> {
    if cli.no_config {
        return Ok(GateConfig::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(root), |path| loader.load_from_path(path))
}

const fn apply_cli_overrides(config: &mut GateConfig, cli: &Cli) {
    if let Some(max_file_lines) = cli.max_file_lines {
        config.limits.max_file_lines = max_file_lines;
    }

    if let Some(max_func_lines) = cli.max_func_lines {
        config.limits.max_func_lines = max_func_lines;
    }
}

const fn scan_scope(cli: &Cli) -> ScanScope {
    if cli.all_text_files {
        ScanScope::AllText
    } else {
        ScanScope::CodeOnly
    }
}

fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    color_mode: ColorMode,
    verbose: u8,
) -> repo_gate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> repo_gate::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
