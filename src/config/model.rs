use serde::{Deserialize, Serialize};

/// Root configuration for a gate run.
///
/// Every threshold, extension set and file-name convention the evaluators
/// consult lives here; nothing reads module-level constants. A default
/// instance reproduces the stock policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub extensions: ExtensionsConfig,

    #[serde(default)]
    pub temp: TempConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub hygiene: HygieneConfig,
}

/// Size limits for files and detected blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum lines per file.
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// Maximum lines per detected function block.
    #[serde(default = "default_max_func_lines")]
    pub max_func_lines: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_lines: default_max_file_lines(),
            max_func_lines: default_max_func_lines(),
        }
    }
}

/// File-name conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    /// Banned stem suffixes (versioning/backup markers), matched
    /// case-insensitively against the end of the file stem.
    #[serde(default = "default_banned_suffixes")]
    pub banned_suffixes: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            banned_suffixes: default_banned_suffixes(),
        }
    }
}

/// Tree-walk configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Directory basenames pruned from the walk. Directories starting with
    /// `.` are always pruned regardless of this list.
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    /// Additional exclude patterns (glob syntax) applied to file paths.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules while walking (default: false, so that
    /// hygiene checks see the tree as it exists on disk).
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// Extension allow/deny lists, stored without the leading dot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionsConfig {
    /// Source-code extensions checked in the default scope.
    #[serde(default = "default_code_extensions")]
    pub code: Vec<String>,

    /// Text-like extensions added in `--all-text-files` scope.
    #[serde(default = "default_text_extensions")]
    pub text: Vec<String>,

    /// Known-binary extensions rejected without sniffing.
    #[serde(default = "default_binary_extensions")]
    pub binary: Vec<String>,

    /// Extensions whose syntax delimits blocks by indentation; only these
    /// run the block scanner.
    #[serde(default = "default_indent_extensions")]
    pub indent_blocks: Vec<String>,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            code: default_code_extensions(),
            text: default_text_extensions(),
            binary: default_binary_extensions(),
            indent_blocks: default_indent_extensions(),
        }
    }
}

/// Stray temporary-artifact detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TempConfig {
    /// Stem prefixes that mark a root-level file as a likely leftover.
    #[serde(default = "default_temp_prefixes")]
    pub name_prefixes: Vec<String>,

    /// Extensions that mark a root-level file as a likely leftover.
    #[serde(default = "default_temp_extensions")]
    pub extensions: Vec<String>,

    /// Maximum number of file names listed in the aggregated violation.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self {
            name_prefixes: default_temp_prefixes(),
            extensions: default_temp_extensions(),
            preview_limit: default_preview_limit(),
        }
    }
}

/// Directory-layout heuristic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// How many top-level code files are tolerated before the missing
    /// source-directory advisory fires.
    #[serde(default = "default_max_loose_code_files")]
    pub max_loose_code_files: usize,

    /// Conventional source subdirectory looked for at the root.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_loose_code_files: default_max_loose_code_files(),
            source_dir: default_source_dir(),
        }
    }
}

/// Ignore-file and credential-file hygiene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HygieneConfig {
    /// Version-control ignore file expected at the project root.
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    /// Disposable directories that must be covered by the ignore file when
    /// they exist on disk.
    #[serde(default = "default_watched_dirs")]
    pub watched_dirs: Vec<String>,

    /// Credential file that must be covered by the ignore file and paired
    /// with a template.
    #[serde(default = "default_credential_file")]
    pub credential_file: String,

    /// Template expected alongside the credential file.
    #[serde(default = "default_credential_example")]
    pub credential_example: String,
}

impl Default for HygieneConfig {
    fn default() -> Self {
        Self {
            ignore_file: default_ignore_file(),
            watched_dirs: default_watched_dirs(),
            credential_file: default_credential_file(),
            credential_example: default_credential_example(),
        }
    }
}

const fn default_max_file_lines() -> usize {
    1000
}

const fn default_max_func_lines() -> usize {
    200
}

fn default_banned_suffixes() -> Vec<String> {
    to_strings(&[
        "_v2", "_v3", "_v4", "_v5", "_new", "_old", "_bak", "_backup", "_copy",
    ])
}

fn default_ignore_dirs() -> Vec<String> {
    to_strings(&[
        "__pycache__",
        "node_modules",
        ".git",
        ".venv",
        "venv",
        "env",
        "dist",
        "build",
        ".next",
        ".cache",
        ".idea",
        ".vscode",
        "debug",
        "tmp",
    ])
}

fn default_code_extensions() -> Vec<String> {
    to_strings(&["py", "js", "ts", "jsx", "tsx", "java", "go", "rs"])
}

fn default_text_extensions() -> Vec<String> {
    to_strings(&[
        "md", "txt", "rst", "json", "jsonl", "yaml", "yml", "toml", "ini", "cfg", "conf", "env",
        "csv", "tsv", "xml", "html", "css", "sql", "sh", "bat", "ps1",
    ])
}

fn default_binary_extensions() -> Vec<String> {
    to_strings(&[
        "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "svg", "pdf", "doc", "docx", "ppt",
        "pptx", "xls", "xlsx", "zip", "rar", "7z", "gz", "tar", "exe", "dll", "so", "dylib",
        "class", "jar", "pyc", "pyd", "bin",
    ])
}

fn default_indent_extensions() -> Vec<String> {
    to_strings(&["py"])
}

fn default_temp_prefixes() -> Vec<String> {
    to_strings(&[
        "test_output",
        "debug_response",
        "temp",
        "tmp_",
        "test_",
        "scratch",
        "playground",
        "draft",
    ])
}

fn default_temp_extensions() -> Vec<String> {
    to_strings(&["tmp", "bak", "swp", "log"])
}

const fn default_preview_limit() -> usize {
    5
}

const fn default_max_loose_code_files() -> usize {
    3
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_ignore_file() -> String {
    ".gitignore".to_string()
}

fn default_watched_dirs() -> Vec<String> {
    to_strings(&["debug", "tmp"])
}

fn default_credential_file() -> String {
    ".env".to_string()
}

fn default_credential_example() -> String {
    ".env.example".to_string()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
