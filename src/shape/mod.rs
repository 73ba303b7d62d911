//! Shapes: a zone, named glyph slots and configuration values
//!
//! A [`Shape`] is built once by one of the concrete builders
//! ([`LineShape`], [`RectangleShape`]) and is read-only afterwards. Every
//! declared slot of the concrete type is present in [`Shape::data`], even
//! when no glyph was supplied for it. An unset slot is never drawn.
//!
//! All slots of a shape share the single `TraitPriority` config value.
//! When shapes overlap, the lower number wins the cell.

mod line;
mod rectangle;

use std::collections::BTreeMap;

use crate::geometry::{Point, Zone};
use crate::glyph::{Glyph, Orientation};

pub use line::{LinePriority, LineShape};
pub use rectangle::{RectanglePriority, RectangleShape};

/// Config key holding the shape's priority
pub const PRIORITY: &str = "TraitPriority";
/// Config key holding a line's drawing direction
pub const DIRECTION: &str = "Direction";

/// Typed configuration value stored on a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue {
    Priority(u8),
    Orientation(Orientation),
}

/// Which concrete figure a shape describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "LineShape",
            ShapeKind::Rectangle => "RectangleShape",
        }
    }
}

/// One cell a shape covers, with the slot and orientation used to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub slot: &'static str,
    pub orientation: Orientation,
}

impl Placement {
    fn new(x: usize, y: usize, slot: &'static str, orientation: Orientation) -> Self {
        Self {
            point: Point::new(x, y),
            slot,
            orientation,
        }
    }
}

/// An immutable figure ready to be painted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    zone: Zone,
    kind: ShapeKind,
    data: BTreeMap<&'static str, Option<Glyph>>,
    configs: BTreeMap<&'static str, ConfigValue>,
}

impl Shape {
    fn new(
        zone: Zone,
        kind: ShapeKind,
        data: BTreeMap<&'static str, Option<Glyph>>,
        configs: BTreeMap<&'static str, ConfigValue>,
    ) -> Self {
        Self {
            zone,
            kind,
            data,
            configs,
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Slot name to glyph; unset slots map to `None`
    pub fn data(&self) -> &BTreeMap<&'static str, Option<Glyph>> {
        &self.data
    }

    pub fn configs(&self) -> &BTreeMap<&'static str, ConfigValue> {
        &self.configs
    }

    /// Glyph in `slot`, if the slot exists and is set
    pub fn glyph(&self, slot: &str) -> Option<&Glyph> {
        self.data.get(slot).and_then(Option::as_ref)
    }

    /// Shape-wide priority; lower values win overlapping cells. A shape
    /// without a priority config loses every contested cell.
    pub fn priority(&self) -> u8 {
        match self.configs.get(PRIORITY) {
            Some(ConfigValue::Priority(p)) => *p,
            _ => u8::MAX,
        }
    }

    /// Drawing direction of a line; `None` for other shapes
    pub fn direction(&self) -> Option<Orientation> {
        match self.configs.get(DIRECTION) {
            Some(ConfigValue::Orientation(o)) => Some(*o),
            _ => None,
        }
    }

    fn line_direction(&self) -> Orientation {
        self.direction().unwrap_or(Orientation::LeftToRight)
    }

    /// Every cell this shape covers, whether or not its slot is set
    pub fn placements(&self) -> Vec<Placement> {
        match self.kind {
            ShapeKind::Line => line::placements(&self.zone, self.line_direction()),
            ShapeKind::Rectangle => rectangle::placements(&self.zone),
        }
    }

    /// Placement covering `point`, if any. Computed from the point's offset
    /// in the zone without walking the outline.
    pub fn placement_at(&self, point: Point) -> Option<Placement> {
        match self.kind {
            ShapeKind::Line => line::placement_at(&self.zone, self.line_direction(), point),
            ShapeKind::Rectangle => rectangle::placement_at(&self.zone, point),
        }
    }

    /// Character and glyph drawn at `point`, if the shape draws there
    pub fn glyph_at(&self, point: Point) -> Option<(char, &Glyph)> {
        let placement = self.placement_at(point)?;
        let glyph = self.glyph(placement.slot)?;
        Some((glyph.value(placement.orientation), glyph))
    }

    /// Placements whose slot holds a glyph, paired with that glyph
    pub fn claims(&self) -> impl Iterator<Item = (Placement, &Glyph)> + '_ {
        self.placements()
            .into_iter()
            .filter_map(move |p| self.glyph(p.slot).map(|g| (p, g)))
    }
}
