use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::WalkConfig;
use crate::error::Result;

use super::InclusionFilter;

/// Recursive project-tree enumerator.
///
/// Prunes configured ignore directories and any dot-directory, never follows
/// symbolic links, and tolerates unreadable entries. Only failure to read the
/// root directory itself is fatal, and that is checked before walking.
pub struct TreeWalker {
    filter: InclusionFilter,
    ignore_dirs: Vec<String>,
    use_gitignore: bool,
}

impl TreeWalker {
    #[must_use]
    pub fn new(filter: InclusionFilter, walk: &WalkConfig) -> Self {
        Self {
            filter,
            ignore_dirs: walk.ignore_dirs.clone(),
            use_gitignore: walk.gitignore,
        }
    }

    /// Enumerate eligible files under `root`, in walk order.
    ///
    /// # Errors
    /// Returns an error if the root directory cannot be enumerated at all.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        // Fail fast when the root itself is unusable; everything below it is
        // tolerated.
        std::fs::read_dir(root)?;

        if self.use_gitignore {
            Ok(self.walk_with_gitignore(root))
        } else {
            Ok(self.walk_plain(root))
        }
    }

    fn walk_plain(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !Self::is_pruned(&self.ignore_dirs, e.path(), e.depth()))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn walk_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        let ignore_dirs = self.ignore_dirs.clone();
        WalkBuilder::new(root)
            .follow_links(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .filter_entry(move |e| !Self::is_pruned(&ignore_dirs, e.path(), e.depth()))
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.filter.should_include(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }

    fn is_pruned(ignore_dirs: &[String], path: &Path, depth: usize) -> bool {
        if depth == 0 || !path.is_dir() {
            return false;
        }

        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| {
                name.starts_with('.') || ignore_dirs.iter().any(|d| d == name)
            })
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
