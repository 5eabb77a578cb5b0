use serde::Serialize;

/// One logical row of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Current textual content; may be empty.
    pub text: String,
    /// Indentation depth in indent units.
    pub indent: usize,
    /// One-based ordinal at creation time. Informational only: the field is
    /// never renumbered after later insertions, so display positions must be
    /// derived from the current index instead.
    pub position: usize,
}

impl Line {
    /// Create a line with the given content.
    pub fn new(text: impl Into<String>, position: usize, indent: usize) -> Self {
        Self {
            text: text.into(),
            indent,
            position,
        }
    }

    /// Create an empty line at indent 0.
    pub fn empty(position: usize) -> Self {
        Self::new("", position, 0)
    }

    /// Replace the textual content. No other field changes.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Deepen the indentation by one unit.
    pub(crate) const fn indent_once(&mut self) {
        self.indent += 1;
    }
}
