use std::collections::BTreeMap;

use crate::error::ShapeError;
use crate::geometry::{Point, Size, Zone};
use crate::glyph::{Glyph, Orientation};

use super::{ConfigValue, Placement, Shape, ShapeKind, DIRECTION, PRIORITY};

/// Priority values for line shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum LinePriority {
    Start = 0,
    Trait = 1,
    #[default]
    End = 2,
}

impl From<LinePriority> for u8 {
    fn from(p: LinePriority) -> u8 {
        p as u8
    }
}

/// Builder for a straight line with optional pins at either end.
///
/// The trait glyph is required. Pins that are not given reuse it.
#[derive(Debug, Clone)]
pub struct LineShape {
    zone: Zone,
    direction: Orientation,
    trait_glyph: Option<Glyph>,
    start_pin: Option<Glyph>,
    end_pin: Option<Glyph>,
    priority: LinePriority,
}

impl LineShape {
    pub const START_PIN: &'static str = "StartPin";
    pub const TRAIT: &'static str = "Trait";
    pub const END_PIN: &'static str = "EndPin";
    pub const SLOTS: [&'static str; 3] = [Self::START_PIN, Self::TRAIT, Self::END_PIN];

    pub fn new(source: Point, size: Size) -> Self {
        Self {
            zone: Zone::new(source, size),
            direction: Orientation::LeftToRight,
            trait_glyph: None,
            start_pin: None,
            end_pin: None,
            priority: LinePriority::default(),
        }
    }

    /// Direction the line is drawn in, from start pin to end pin
    pub fn direction(mut self, direction: Orientation) -> Self {
        self.direction = direction;
        self
    }

    pub fn trait_glyph(mut self, glyph: Glyph) -> Self {
        self.trait_glyph = Some(glyph);
        self
    }

    pub fn start_pin(mut self, glyph: Glyph) -> Self {
        self.start_pin = Some(glyph);
        self
    }

    pub fn end_pin(mut self, glyph: Glyph) -> Self {
        self.end_pin = Some(glyph);
        self
    }

    pub fn priority(mut self, priority: LinePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Result<Shape, ShapeError> {
        let trait_glyph = self.trait_glyph.ok_or(ShapeError::MissingGlyph {
            shape: ShapeKind::Line.name(),
            slot: Self::TRAIT,
        })?;
        self.zone.validate()?;
        check_geometry(&self.zone, self.direction)?;

        let data = BTreeMap::from([
            (Self::START_PIN, Some(self.start_pin.unwrap_or(trait_glyph))),
            (Self::TRAIT, Some(trait_glyph)),
            (Self::END_PIN, Some(self.end_pin.unwrap_or(trait_glyph))),
        ]);
        let configs = BTreeMap::from([
            (PRIORITY, ConfigValue::Priority(self.priority.into())),
            (DIRECTION, ConfigValue::Orientation(self.direction)),
        ]);
        Ok(Shape::new(self.zone, ShapeKind::Line, data, configs))
    }
}

fn check_geometry(zone: &Zone, direction: Orientation) -> Result<(), ShapeError> {
    let size = zone.size;
    if size.is_empty() {
        return Ok(());
    }
    let reason = if direction.is_horizontal() && size.height != 1 {
        "horizontal lines must be one row tall"
    } else if direction.is_vertical() && size.width != 1 {
        "vertical lines must be one column wide"
    } else if direction.is_diagonal() && size.height != size.width {
        "diagonal lines need a square zone"
    } else {
        return Ok(());
    };
    Err(ShapeError::InvalidGeometry {
        shape: ShapeKind::Line.name(),
        direction,
        size,
        reason,
    })
}

/// Cells from the start end to the end end. A single cell is the end pin.
pub(super) fn placements(zone: &Zone, direction: Orientation) -> Vec<Placement> {
    let len = length(zone, direction);
    (0..len).map(|i| placement(zone, direction, len - 1, i)).collect()
}

/// Placement covering `point`, found from its offset along the line
pub(super) fn placement_at(
    zone: &Zone,
    direction: Orientation,
    point: Point,
) -> Option<Placement> {
    if !zone.contains(point) {
        return None;
    }
    let last = length(zone, direction) - 1;
    let dx = point.x - zone.source.x;
    let dy = point.y - zone.source.y;
    let i = match direction {
        Orientation::LeftToRight
        | Orientation::TopLeftToBottomRight
        | Orientation::BottomLeftToTopRight => dx,
        Orientation::RightToLeft | Orientation::BottomRightToTopLeft => last - dx,
        Orientation::TopToBottom | Orientation::TopRightToBottomLeft => dy,
        Orientation::BottomToTop => last - dy,
    };
    let found = placement(zone, direction, last, i);
    (found.point == point).then_some(found)
}

/// Cells along the line; zero for an empty zone
fn length(zone: &Zone, direction: Orientation) -> usize {
    if zone.is_empty() {
        0
    } else if direction.is_vertical() {
        zone.size.height
    } else {
        zone.size.width
    }
}

fn placement(zone: &Zone, direction: Orientation, last: usize, i: usize) -> Placement {
    let Point { x: x0, y: y0 } = zone.source;
    let (x, y) = match direction {
        Orientation::LeftToRight => (x0 + i, y0),
        Orientation::RightToLeft => (x0 + last - i, y0),
        Orientation::TopToBottom => (x0, y0 + i),
        Orientation::BottomToTop => (x0, y0 + last - i),
        Orientation::TopLeftToBottomRight => (x0 + i, y0 + i),
        Orientation::BottomRightToTopLeft => (x0 + last - i, y0 + last - i),
        Orientation::TopRightToBottomLeft => (x0 + last - i, y0 + i),
        Orientation::BottomLeftToTopRight => (x0 + i, y0 + last - i),
    };
    let slot = if i == last {
        LineShape::END_PIN
    } else if i == 0 {
        LineShape::START_PIN
    } else {
        LineShape::TRAIT
    };
    Placement::new(x, y, slot, direction)
}
