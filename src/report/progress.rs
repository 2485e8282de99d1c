use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the file-evaluation stage.
///
/// Rendered on stderr so the report on stdout stays clean; hidden in quiet
/// mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::with_visibility(total, quiet, is_tty)
    }

    fn with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Checking [{bar:40.cyan/blue}] {pos}/{len} files")
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            bar
        };

        Self {
            bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Thread-safe increment, usable from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(count);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
