//! Colored, orientation-aware characters

use unicode_width::UnicodeWidthChar;

use crate::error::ShapeError;

/// The 16 classic console colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Default background of a fresh console
    pub const BACKGROUND: Color = Color::Black;
    /// Default foreground of a fresh console
    pub const FOREGROUND: Color = Color::Gray;
}

/// Drawing direction used to pick a glyph's character variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    LeftToRight,
    TopToBottom,
    RightToLeft,
    BottomToTop,
    TopLeftToBottomRight,
    TopRightToBottomLeft,
    BottomRightToTopLeft,
    BottomLeftToTopRight,
}

impl Orientation {
    /// All orientations, in table order
    pub const ALL: [Orientation; 8] = [
        Orientation::LeftToRight,
        Orientation::TopToBottom,
        Orientation::RightToLeft,
        Orientation::BottomToTop,
        Orientation::TopLeftToBottomRight,
        Orientation::TopRightToBottomLeft,
        Orientation::BottomRightToTopLeft,
        Orientation::BottomLeftToTopRight,
    ];

    /// Position of this orientation in a glyph table
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::LeftToRight | Orientation::RightToLeft)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::TopToBottom | Orientation::BottomToTop)
    }

    pub fn is_diagonal(self) -> bool {
        !self.is_horizontal() && !self.is_vertical()
    }

    /// The same axis walked the other way
    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::LeftToRight => Orientation::RightToLeft,
            Orientation::RightToLeft => Orientation::LeftToRight,
            Orientation::TopToBottom => Orientation::BottomToTop,
            Orientation::BottomToTop => Orientation::TopToBottom,
            Orientation::TopLeftToBottomRight => Orientation::BottomRightToTopLeft,
            Orientation::BottomRightToTopLeft => Orientation::TopLeftToBottomRight,
            Orientation::TopRightToBottomLeft => Orientation::BottomLeftToTopRight,
            Orientation::BottomLeftToTopRight => Orientation::TopRightToBottomLeft,
        }
    }
}

/// Character source of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    /// One character per orientation, indexed by [`Orientation::index`]
    Directional { table: [char; 8] },
    /// A single character used for every orientation
    Simple { value: char },
}

/// An immutable colored character, possibly varying by orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    background: Color,
    foreground: Color,
    kind: GlyphKind,
}

impl Glyph {
    /// Directional glyph from a full orientation table
    pub fn directional(
        background: Color,
        foreground: Color,
        table: [char; 8],
    ) -> Result<Self, ShapeError> {
        for ch in table {
            check_cell_char(ch)?;
        }
        Ok(Self {
            background,
            foreground,
            kind: GlyphKind::Directional { table },
        })
    }

    /// Directional glyph from a slice, which must hold one entry per orientation
    pub fn from_table(
        background: Color,
        foreground: Color,
        values: &[char],
    ) -> Result<Self, ShapeError> {
        let table: [char; 8] = values
            .try_into()
            .map_err(|_| ShapeError::IncompleteGlyphTable {
                expected: Orientation::ALL.len(),
                found: values.len(),
            })?;
        Self::directional(background, foreground, table)
    }

    /// Glyph whose character does not depend on orientation
    pub fn simple(background: Color, foreground: Color, value: char) -> Result<Self, ShapeError> {
        check_cell_char(value)?;
        Ok(Self {
            background,
            foreground,
            kind: GlyphKind::Simple { value },
        })
    }

    /// Skips the width check; callers guarantee single-column characters
    pub(crate) const fn trusted(background: Color, foreground: Color, kind: GlyphKind) -> Self {
        Self {
            background,
            foreground,
            kind,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn kind(&self) -> &GlyphKind {
        &self.kind
    }

    /// Character to draw for `orientation`.
    ///
    /// Simple glyphs return their only character whatever is asked.
    pub fn value(&self, orientation: Orientation) -> char {
        match &self.kind {
            GlyphKind::Directional { table } => table[orientation.index()],
            GlyphKind::Simple { value } => *value,
        }
    }
}

/// Grid cells hold exactly one column-wide character
fn check_cell_char(ch: char) -> Result<(), ShapeError> {
    match ch.width() {
        Some(1) => Ok(()),
        _ => Err(ShapeError::InvalidGlyphChar { ch }),
    }
}
