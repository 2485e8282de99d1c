/// One detected block-defining construct.
///
/// Line indices are 0-based; `start` is the definition line and `end` is
/// exclusive, so `end - start` is the block's line span. Display output uses
/// 1-based numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    /// Name captured from the definition line.
    pub name: String,
    /// Definition line (0-based, inclusive).
    pub start: usize,
    /// First line past the block (0-based, exclusive).
    pub end: usize,
    /// Leading-whitespace depth of the definition line.
    pub depth: usize,
}

impl BlockRecord {
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end - self.start
    }

    /// 1-based inclusive line range for display.
    #[must_use]
    pub const fn display_range(&self) -> (usize, usize) {
        (self.start + 1, self.end)
    }
}
