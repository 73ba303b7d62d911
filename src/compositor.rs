//! Paints shapes onto a grid sink, resolving overlaps by priority.
//!
//! Painting runs in two phases. [`resolve`] reduces every shape's claims to
//! a single winner per cell; [`paint`] then writes the winners row by row.
//! No cell is written before the reduction is complete.
//!
//! Overlap rules:
//! - the claim with the numerically lowest priority wins;
//! - on equal priority the shape later in the input wins (painter's order),
//!   and the tie is reported as [`PaintWarning::PriorityTie`];
//! - unset slots never claim a cell;
//! - cells outside the sink are dropped and reported per shape as
//!   [`PaintWarning::Clipped`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::PaintError;
use crate::geometry::{Point, Size};
use crate::shape::Shape;
use crate::sink::{Cell, GridSink};

/// Non-fatal conditions noticed during a paint pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintWarning {
    /// Some of a shape's cells fell outside the sink
    Clipped { shape: usize, cells: usize },
    /// Two shapes with the same priority claimed one cell
    PriorityTie {
        point: Point,
        kept: usize,
        replaced: usize,
        priority: u8,
    },
}

impl fmt::Display for PaintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintWarning::Clipped { shape, cells } => {
                write!(f, "Shape {} clipped: {} cell(s) outside the grid", shape, cells)
            }
            PaintWarning::PriorityTie {
                point,
                kept,
                replaced,
                priority,
            } => write!(
                f,
                "Priority tie at ({}, {}): shape {} painted over shape {} (priority {})",
                point.x, point.y, kept, replaced, priority
            ),
        }
    }
}

/// Winning claim for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub shape: usize,
    pub priority: u8,
    pub cell: Cell,
}

/// Outcome of the reduction phase: one claim per covered cell
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Keyed by `(y, x)` so iteration is row-major
    pub cells: BTreeMap<(usize, usize), Claim>,
    pub warnings: Vec<PaintWarning>,
}

impl Resolution {
    /// Winning claim at `point`, if any shape drew there
    pub fn claim_at(&self, point: Point) -> Option<&Claim> {
        self.cells.get(&(point.y, point.x))
    }
}

/// Summary of a completed paint pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintReport {
    pub cells_written: usize,
    pub warnings: Vec<PaintWarning>,
}

/// Reduce all shapes' claims inside `bounds` to one winner per cell
pub fn resolve(shapes: &[Shape], bounds: Size) -> Resolution {
    let mut resolution = Resolution::default();

    for (index, shape) in shapes.iter().enumerate() {
        let priority = shape.priority();
        let mut clipped = 0;

        for (placement, glyph) in shape.claims() {
            let Point { x, y } = placement.point;
            if x >= bounds.width || y >= bounds.height {
                clipped += 1;
                continue;
            }
            let claim = Claim {
                shape: index,
                priority,
                cell: Cell::from_glyph(glyph, placement.orientation),
            };
            match resolution.cells.entry((y, x)) {
                Entry::Vacant(slot) => {
                    slot.insert(claim);
                }
                Entry::Occupied(mut slot) => {
                    let current = slot.get_mut();
                    if priority < current.priority {
                        *current = claim;
                    } else if priority == current.priority {
                        trace!(x, y, kept = index, replaced = current.shape, "Priority tie");
                        resolution.warnings.push(PaintWarning::PriorityTie {
                            point: placement.point,
                            kept: index,
                            replaced: current.shape,
                            priority,
                        });
                        *current = claim;
                    }
                }
            }
        }

        if clipped > 0 {
            warn!(shape = index, cells = clipped, "Shape extends beyond the grid");
            resolution.warnings.push(PaintWarning::Clipped {
                shape: index,
                cells: clipped,
            });
        }
    }

    resolution
}

/// Paint `shapes` onto `sink` and flush it
pub fn paint<S: GridSink + ?Sized>(
    shapes: &[Shape],
    sink: &mut S,
) -> Result<PaintReport, PaintError> {
    let bounds = sink.dimensions();
    let resolution = resolve(shapes, bounds);

    for (&(y, x), claim) in &resolution.cells {
        sink.put(Point::new(x, y), claim.cell)?;
    }
    sink.flush()?;

    debug!(
        shapes = shapes.len(),
        cells = resolution.cells.len(),
        warnings = resolution.warnings.len(),
        "Paint pass complete"
    );
    Ok(PaintReport {
        cells_written: resolution.cells.len(),
        warnings: resolution.warnings,
    })
}
