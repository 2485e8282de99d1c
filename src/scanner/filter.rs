use std::fs::File;
use std::io::Read;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ExtensionsConfig;
use crate::error::{GateError, Result};

/// Bytes sniffed when an extension gives no verdict.
const SNIFF_BYTES: usize = 4096;

/// Which files a scan considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanScope {
    /// Source-code extensions only.
    #[default]
    CodeOnly,
    /// Code plus text-like files, with a content sniff for unknown
    /// extensions.
    AllText,
}

impl ScanScope {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CodeOnly => "code files (default)",
            Self::AllText => "all text-like files",
        }
    }
}

/// Decides whether a walked file enters the evaluation stage.
pub struct InclusionFilter {
    scope: ScanScope,
    code: Vec<String>,
    text: Vec<String>,
    binary: Vec<String>,
    exclude: GlobSet,
}

impl InclusionFilter {
    /// Build a filter from the configured extension sets and user exclude
    /// patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn new(
        scope: ScanScope,
        extensions: &ExtensionsConfig,
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| GateError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude = builder.build().map_err(|e| GateError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            scope,
            code: extensions.code.clone(),
            text: extensions.text.clone(),
            binary: extensions.binary.clone(),
            exclude,
        })
    }

    #[must_use]
    pub fn should_include(&self, path: &Path) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }

        let ext = extension_of(path);
        match self.scope {
            ScanScope::CodeOnly => self.code.iter().any(|c| *c == ext),
            ScanScope::AllText => self.is_text_like(path, &ext),
        }
    }

    fn is_text_like(&self, path: &Path, ext: &str) -> bool {
        if self.binary.iter().any(|b| b == ext) {
            return false;
        }

        // Fast path for known text suffixes, sniff the rest.
        if self.code.iter().any(|c| c == ext) || self.text.iter().any(|t| t == ext) {
            return true;
        }

        sniff_is_text(path)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Cheap binary heuristic: a NUL byte in the leading bytes means binary.
/// Unreadable files are excluded rather than failing the walk.
fn sniff_is_text(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buf = [0u8; SNIFF_BYTES];
    let Ok(read) = file.read(&mut buf) else {
        return false;
    };

    !buf[..read].contains(&0)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
