use regex::Regex;

use super::BlockRecord;

/// Indentation-based block detector.
///
/// This is a heuristic, not a parser: block extent is inferred purely from
/// leading-whitespace depth and a definition-keyword prefix, so multi-line
/// signatures or unusual formatting can be misclassified. That approximation
/// is accepted; the goal is a function-length policy without a per-language
/// front end.
///
/// At most one block is tracked at a time. A nested definition closes the
/// block currently open and starts tracking the inner one, so enclosing
/// definitions are never separately measured (shallow single-level tracking).
pub struct BlockScanner {
    def_pattern: Regex,
}

struct OpenBlock {
    name: String,
    start: usize,
    depth: usize,
}

impl OpenBlock {
    fn close(self, end: usize) -> BlockRecord {
        BlockRecord {
            name: self.name,
            start: self.start,
            end,
            depth: self.depth,
        }
    }
}

impl Default for BlockScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            def_pattern: Regex::new(r"^(?:async\s+)?def\s+([A-Za-z_][A-Za-z0-9_]*)")
                .expect("valid definition pattern"),
        }
    }

    /// Scan file content and return one record per detected definition.
    ///
    /// Rules, in order, for each non-blank line:
    /// - a definition line closes any open block at the current index and
    ///   opens a new one in the same step;
    /// - a line at depth <= the open block's depth closes it, unless it is a
    ///   comment or a decorator line (decorators precede a definition and
    ///   must not terminate the block they annotate);
    /// - blank and comment lines never open or close a block.
    ///
    /// A block still open at end of input is closed at the final line.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<BlockRecord> {
        let lines: Vec<&str> = content.lines().collect();
        let mut records = Vec::new();
        let mut open: Option<OpenBlock> = None;

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }

            let trimmed = line.trim_start();
            let depth = line.chars().count() - trimmed.chars().count();

            if let Some(caps) = self.def_pattern.captures(trimmed) {
                if let Some(block) = open.take() {
                    records.push(block.close(i));
                }
                open = Some(OpenBlock {
                    name: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                    start: i,
                    depth,
                });
            } else if open.as_ref().is_some_and(|b| depth <= b.depth)
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('@')
                && let Some(block) = open.take()
            {
                records.push(block.close(i));
            }
        }

        if let Some(block) = open {
            records.push(block.close(lines.len()));
        }

        records
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
