//! Byte offset to line/column mapping.

/// Start offsets of every line in a document.
///
/// Lines are split on `\n`; a `\r` before it stays at the end of its line.
/// Columns are 1-based byte columns.
#[derive(Clone, Debug)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the scanner's u32 positions"
    )]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i as u32 + 1));
        Self { line_starts }
    }

    /// 1-based `(line, column)` of `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the document length"
    )]
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line] + 1;
        (line as u32 + 1, col)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
