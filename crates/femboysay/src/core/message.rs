//! The wrapped message shown inside the speech bubble

use unicode_width::UnicodeWidthStr;

/// Display width of a line in terminal columns
pub fn display_width(line: &str) -> usize {
    UnicodeWidthStr::width(line)
}

/// Ordered display lines plus the width of the widest one
///
/// Lines are only ever appended, so `max_width` is kept up to date as they
/// arrive instead of being recomputed at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    lines: Vec<String>,
    max_width: usize,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and widen the message if needed
    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.max_width = self.max_width.max(display_width(&line));
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width of the widest line, in display columns
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
