use thiserror::Error;

use crate::geometry::{Point, Size};
use crate::glyph::Orientation;

/// Errors raised while constructing glyphs and shapes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A required glyph slot was never supplied
    #[error("{shape} requires a glyph for slot `{slot}`")]
    MissingGlyph {
        shape: &'static str,
        slot: &'static str,
    },
    /// The zone cannot hold the requested figure
    #[error("{shape} cannot be drawn {direction:?} in a {}x{} zone (height x width): {reason}", .size.height, .size.width)]
    InvalidGeometry {
        shape: &'static str,
        direction: Orientation,
        size: Size,
        reason: &'static str,
    },
    /// The zone reaches past the largest representable coordinate
    #[error("Zone at ({}, {}) with size {}x{} (height x width) exceeds the coordinate range", .origin.x, .origin.y, .size.height, .size.width)]
    ZoneOverflow { origin: Point, size: Size },
    /// Signed size with a negative component
    #[error("Size must be non-negative, got height {height} and width {width}")]
    NegativeSize { height: i64, width: i64 },
    /// Directional glyph table without one entry per orientation
    #[error("Glyph table needs exactly {expected} characters, found {found}")]
    IncompleteGlyphTable { expected: usize, found: usize },
    /// Character that does not occupy exactly one grid column
    #[error("Glyph character {ch:?} does not fit in a single cell")]
    InvalidGlyphChar { ch: char },
}

/// Errors raised during a paint pass
#[derive(Error, Debug)]
pub enum PaintError {
    /// The sink rejected a write or flush
    #[error("Failed to write to grid sink: {0}")]
    Sink(#[from] std::io::Error),
}
