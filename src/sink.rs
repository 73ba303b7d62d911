//! Grid sink trait for abstracting cell writes

use std::io;

use crate::geometry::{Point, Size};
use crate::glyph::{Color, Glyph, Orientation};

/// A painted character with its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub foreground: Color,
    pub background: Color,
}

impl Cell {
    /// Empty cell in the default console colors
    pub const BLANK: Cell = Cell {
        ch: ' ',
        foreground: Color::FOREGROUND,
        background: Color::BACKGROUND,
    };

    /// Cell drawn by `glyph` for the given orientation
    pub fn from_glyph(glyph: &Glyph, orientation: Orientation) -> Self {
        Self {
            ch: glyph.value(orientation),
            foreground: glyph.foreground(),
            background: glyph.background(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// Surface the compositor paints through
pub trait GridSink {
    /// Rows and columns available; writes outside are never issued
    fn dimensions(&self) -> Size;

    /// Set the cell at `point`
    fn put(&mut self, point: Point, cell: Cell) -> io::Result<()>;

    /// Push buffered writes to the underlying surface
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: GridSink + ?Sized> GridSink for &mut S {
    fn dimensions(&self) -> Size {
        (**self).dimensions()
    }

    fn put(&mut self, point: Point, cell: Cell) -> io::Result<()> {
        (**self).put(point, cell)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
