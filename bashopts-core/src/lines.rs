//! Indented line buffers.
//!
//! Generated code is assembled as a sequence of [`Line`]s, each carrying its own indentation level.
//! Blocks are built independently, shifted into place with [`Lines::indent`] and concatenated with
//! [`Lines::append`]. Indentation is only turned into text when the buffer is rendered.

use core::fmt;

/// The indentation unit used by the [`fmt::Display`] implementation of [`Lines`].
pub const INDENT: &str = "  ";

/// A single line of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    level: usize,
    text: String,
}

impl Line {
    /// Creates a new line at the given indentation level.
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// The indentation level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The text, without indentation.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the line with `unit` repeated `level` times, followed by a newline.
    pub fn render(&self, unit: &str) -> String {
        let mut out = String::with_capacity(unit.len() * self.level + self.text.len() + 1);
        self.write_to(&mut out, unit);
        out
    }

    fn write_to(&self, out: &mut String, unit: &str) {
        for _ in 0..self.level {
            out.push_str(unit);
        }
        out.push_str(&self.text);
        out.push('\n');
    }
}

/// An ordered buffer of [`Line`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines {
    lines: Vec<Line>,
}

impl Lines {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line at the given indentation level.
    pub fn push(&mut self, level: usize, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::new(level, text));
        self
    }

    /// Shifts every line by `by` levels.
    pub fn indent(mut self, by: usize) -> Self {
        for line in &mut self.lines {
            line.level += by;
        }
        self
    }

    /// Moves all lines of `other` to the end of this buffer.
    pub fn append(&mut self, other: Lines) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// The lines in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders all lines with the given indentation unit.
    pub fn render(&self, unit: &str) -> String {
        let mut out = String::new();
        for line in &self.lines {
            line.write_to(&mut out, unit);
        }
        out
    }
}

impl fmt::Display for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(INDENT))
    }
}
