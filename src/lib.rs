//! boxpaint - Declarative box-drawing shapes for terminal character grids
//!
//! Shapes are described once (a zone, glyph slots, a priority) and painted
//! in a single pass. Where shapes overlap, the lower priority number wins
//! the cell; equal priorities go to the shape painted last.
//!
//! # Rendering to text
//! ```
//! use boxpaint::{render_shapes, BoxStyle, Glyphs, Point, RenderOptions, Size};
//!
//! let g = Glyphs::unicode();
//! let frame = g
//!     .rectangle(Point::new(0, 0), Size::new(3, 6), BoxStyle::Rounded)
//!     .build()
//!     .unwrap();
//! let result = render_shapes(&[frame], RenderOptions::default()).unwrap();
//! println!("{}", result);
//! ```
//!
//! # Custom glyphs and priorities
//! ```
//! use boxpaint::{
//!     compositor, Color, Glyph, Grid, LinePriority, LineShape, Orientation, Point, Size,
//! };
//!
//! let stroke = Glyph::from_table(
//!     Color::Black,
//!     Color::Cyan,
//!     &['─', '│', '─', '│', '╲', '╱', '╲', '╱'],
//! )
//! .unwrap();
//! let line = LineShape::new(Point::new(0, 0), Size::new(4, 1))
//!     .direction(Orientation::TopToBottom)
//!     .trait_glyph(stroke)
//!     .priority(LinePriority::Start)
//!     .build()
//!     .unwrap();
//!
//! let mut grid = Grid::new(2, 4);
//! let report = compositor::paint(&[line], &mut grid).unwrap();
//! assert_eq!(report.cells_written, 4);
//! assert_eq!(grid.get(0, 2), Some('│'));
//! ```
//!
//! # Painting to a terminal
//! ```no_run
//! use boxpaint::{compositor, BoxStyle, Glyphs, Point, Size, TerminalSink};
//!
//! let frame = Glyphs::unicode()
//!     .rectangle(Point::new(2, 1), Size::new(5, 20), BoxStyle::Double)
//!     .build()
//!     .unwrap();
//! // Colors and cursor are restored when the sink goes out of scope
//! let mut sink = TerminalSink::stdout().unwrap();
//! compositor::paint(&[frame], &mut sink).unwrap();
//! ```

mod charset;
pub mod compositor;
mod error;
mod geometry;
mod glyph;
mod grid;
mod shape;
mod sink;
mod terminal;
mod types;

pub use charset::{BoxStyle, CharSet, Glyphs, ASCII_CHARS, UNICODE_CHARS};
pub use compositor::{PaintReport, PaintWarning};
pub use error::{PaintError, ShapeError};
pub use geometry::{Point, Size, Zone};
pub use glyph::{Color, Glyph, GlyphKind, Orientation};
pub use grid::Grid;
pub use shape::{
    ConfigValue, LinePriority, LineShape, Placement, RectanglePriority, RectangleShape, Shape,
    ShapeKind, DIRECTION, PRIORITY,
};
pub use sink::{Cell, GridSink};
pub use terminal::TerminalSink;
pub use types::{RenderOptions, RenderResult};

use tracing::debug;

/// Render shapes to terminal-displayable text
///
/// # Arguments
/// * `shapes` - Shapes to paint, in painting order
/// * `options` - Canvas size and output width limit
///
/// # Returns
/// * `Ok(RenderResult)` - Rendered text and paint warnings
/// * `Err(PaintError)` - The grid sink failed
pub fn render_shapes(shapes: &[Shape], options: RenderOptions) -> Result<RenderResult, PaintError> {
    let size = options.size.unwrap_or_else(|| fit_size(shapes));
    let mut grid = Grid::new(size.width, size.height);
    let report = compositor::paint(shapes, &mut grid)?;
    debug!(
        height = size.height,
        width = size.width,
        cells = report.cells_written,
        "Rendered shapes"
    );

    let output = grid.to_string();

    // Apply max_width constraint if set; a zero width leaves no room for `…`
    let output = if let Some(max_width) = options.max_width {
        output
            .lines()
            .map(|line| {
                let char_count = line.chars().count();
                if max_width == 0 {
                    String::new()
                } else if char_count > max_width {
                    let mut truncated: String =
                        line.chars().take(max_width.saturating_sub(1)).collect();
                    truncated.push('…');
                    truncated
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        output
    };

    Ok(RenderResult {
        output,
        warnings: report.warnings,
    })
}

/// Smallest canvas that holds every shape's zone
fn fit_size(shapes: &[Shape]) -> Size {
    let mut max_x = 0;
    let mut max_y = 0;
    for zone in shapes.iter().map(Shape::zone) {
        if let (Some(right), Some(bottom)) = (zone.right(), zone.bottom()) {
            max_x = max_x.max(right + 1);
            max_y = max_y.max(bottom + 1);
        }
    }
    Size::new(max_y, max_x)
}
