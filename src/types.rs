use std::fmt;

use crate::compositor::PaintWarning;
use crate::geometry::Size;

/// Options for rendering shapes to text
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Fixed canvas size; when `None` the canvas fits every shape's zone
    pub size: Option<Size>,
    /// Truncate output lines to this many characters, marking cuts with `…`.
    /// Zero empties every line.
    pub max_width: Option<usize>,
}

/// Rendered text plus anything worth telling the caller about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub output: String,
    pub warnings: Vec<PaintWarning>,
}

impl fmt::Display for RenderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output)
    }
}
