use std::collections::BTreeMap;

use crate::error::ShapeError;
use crate::geometry::{Point, Size, Zone};
use crate::glyph::{Glyph, Orientation};

use super::{ConfigValue, Placement, Shape, ShapeKind, PRIORITY};

/// Priority values for rectangle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum RectanglePriority {
    #[default]
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
    Horizontal = 4,
    Vertical = 5,
}

impl From<RectanglePriority> for u8 {
    fn from(p: RectanglePriority) -> u8 {
        p as u8
    }
}

/// Builder for a rectangle outline.
///
/// Horizontal and vertical edge glyphs are required. Corners are optional
/// and stay undrawn when omitted.
#[derive(Debug, Clone)]
pub struct RectangleShape {
    zone: Zone,
    horizontal: Option<Glyph>,
    vertical: Option<Glyph>,
    top_left: Option<Glyph>,
    top_right: Option<Glyph>,
    bottom_left: Option<Glyph>,
    bottom_right: Option<Glyph>,
    priority: RectanglePriority,
}

impl RectangleShape {
    pub const TOP_LEFT: &'static str = "TopLeft";
    pub const TOP_RIGHT: &'static str = "TopRight";
    pub const BOTTOM_LEFT: &'static str = "BottomLeft";
    pub const BOTTOM_RIGHT: &'static str = "BottomRight";
    pub const HORIZONTAL: &'static str = "Horizontal";
    pub const VERTICAL: &'static str = "Vertical";
    pub const SLOTS: [&'static str; 6] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
        Self::HORIZONTAL,
        Self::VERTICAL,
    ];

    pub fn new(source: Point, size: Size) -> Self {
        Self {
            zone: Zone::new(source, size),
            horizontal: None,
            vertical: None,
            top_left: None,
            top_right: None,
            bottom_left: None,
            bottom_right: None,
            priority: RectanglePriority::default(),
        }
    }

    pub fn horizontal(mut self, glyph: Glyph) -> Self {
        self.horizontal = Some(glyph);
        self
    }

    pub fn vertical(mut self, glyph: Glyph) -> Self {
        self.vertical = Some(glyph);
        self
    }

    pub fn top_left(mut self, glyph: Glyph) -> Self {
        self.top_left = Some(glyph);
        self
    }

    pub fn top_right(mut self, glyph: Glyph) -> Self {
        self.top_right = Some(glyph);
        self
    }

    pub fn bottom_left(mut self, glyph: Glyph) -> Self {
        self.bottom_left = Some(glyph);
        self
    }

    pub fn bottom_right(mut self, glyph: Glyph) -> Self {
        self.bottom_right = Some(glyph);
        self
    }

    pub fn priority(mut self, priority: RectanglePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Result<Shape, ShapeError> {
        let missing = |slot: &'static str| ShapeError::MissingGlyph {
            shape: ShapeKind::Rectangle.name(),
            slot,
        };
        let horizontal = self.horizontal.ok_or_else(|| missing(Self::HORIZONTAL))?;
        let vertical = self.vertical.ok_or_else(|| missing(Self::VERTICAL))?;
        self.zone.validate()?;

        let data = BTreeMap::from([
            (Self::TOP_LEFT, self.top_left),
            (Self::TOP_RIGHT, self.top_right),
            (Self::BOTTOM_LEFT, self.bottom_left),
            (Self::BOTTOM_RIGHT, self.bottom_right),
            (Self::HORIZONTAL, Some(horizontal)),
            (Self::VERTICAL, Some(vertical)),
        ]);
        let configs = BTreeMap::from([(PRIORITY, ConfigValue::Priority(self.priority.into()))]);
        Ok(Shape::new(self.zone, ShapeKind::Rectangle, data, configs))
    }
}

/// Perimeter cells walked clockwise from the top-left corner.
///
/// Corners are queried with the direction of the edge leaving them, so a
/// one-row rectangle has only top corners and a one-column rectangle only
/// left corners.
pub(super) fn placements(zone: &Zone) -> Vec<Placement> {
    let (Some(right), Some(bottom)) = (zone.right(), zone.bottom()) else {
        return Vec::new();
    };
    let Point { x: left, y: top } = zone.source;
    let wide = right > left;
    let tall = bottom > top;

    let mut cells = Vec::with_capacity(2 * (zone.size.width + zone.size.height));
    cells.push(Placement::new(
        left,
        top,
        RectangleShape::TOP_LEFT,
        Orientation::LeftToRight,
    ));
    for x in left + 1..right {
        cells.push(Placement::new(
            x,
            top,
            RectangleShape::HORIZONTAL,
            Orientation::LeftToRight,
        ));
    }
    if wide {
        cells.push(Placement::new(
            right,
            top,
            RectangleShape::TOP_RIGHT,
            Orientation::TopToBottom,
        ));
        if tall {
            for y in top + 1..bottom {
                cells.push(Placement::new(
                    right,
                    y,
                    RectangleShape::VERTICAL,
                    Orientation::TopToBottom,
                ));
            }
            cells.push(Placement::new(
                right,
                bottom,
                RectangleShape::BOTTOM_RIGHT,
                Orientation::RightToLeft,
            ));
        }
    }
    if tall {
        if wide {
            for x in (left + 1..right).rev() {
                cells.push(Placement::new(
                    x,
                    bottom,
                    RectangleShape::HORIZONTAL,
                    Orientation::RightToLeft,
                ));
            }
        }
        cells.push(Placement::new(
            left,
            bottom,
            RectangleShape::BOTTOM_LEFT,
            Orientation::BottomToTop,
        ));
        for y in (top + 1..bottom).rev() {
            cells.push(Placement::new(
                left,
                y,
                RectangleShape::VERTICAL,
                Orientation::BottomToTop,
            ));
        }
    }
    cells
}

/// Placement covering `point`, classified by which edges it lies on
pub(super) fn placement_at(zone: &Zone, point: Point) -> Option<Placement> {
    let (Some(right), Some(bottom)) = (zone.right(), zone.bottom()) else {
        return None;
    };
    if !zone.contains(point) {
        return None;
    }
    let Point { x: left, y: top } = zone.source;
    let Point { x, y } = point;
    let (slot, orientation) = if y == top {
        if x == left {
            (RectangleShape::TOP_LEFT, Orientation::LeftToRight)
        } else if x == right {
            (RectangleShape::TOP_RIGHT, Orientation::TopToBottom)
        } else {
            (RectangleShape::HORIZONTAL, Orientation::LeftToRight)
        }
    } else if y == bottom {
        if x == left {
            (RectangleShape::BOTTOM_LEFT, Orientation::BottomToTop)
        } else if x == right {
            (RectangleShape::BOTTOM_RIGHT, Orientation::RightToLeft)
        } else {
            (RectangleShape::HORIZONTAL, Orientation::RightToLeft)
        }
    } else if x == left {
        (RectangleShape::VERTICAL, Orientation::BottomToTop)
    } else if x == right {
        (RectangleShape::VERTICAL, Orientation::TopToBottom)
    } else {
        return None;
    };
    Some(Placement::new(x, y, slot, orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Color;

    fn simple(c: char) -> Glyph {
        Glyph::simple(Color::Black, Color::Gray, c).unwrap()
    }

    fn edges(source: Point, size: Size) -> RectangleShape {
        RectangleShape::new(source, size)
            .horizontal(simple('-'))
            .vertical(simple('|'))
    }

    fn slot_at(shape: &Shape, x: usize, y: usize) -> Option<&'static str> {
        shape.placement_at(Point::new(x, y)).map(|p| p.slot)
    }

    #[test]
    fn test_corners_unset_without_fallback() {
        let shape = edges(Point::new(0, 0), Size::new(3, 4)).build().unwrap();
        for corner in [
            RectangleShape::TOP_LEFT,
            RectangleShape::TOP_RIGHT,
            RectangleShape::BOTTOM_LEFT,
            RectangleShape::BOTTOM_RIGHT,
        ] {
            assert_eq!(shape.data().get(corner), Some(&None), "{corner}");
        }
        assert_eq!(shape.glyph(RectangleShape::HORIZONTAL), Some(&simple('-')));
        assert_eq!(shape.data().len(), RectangleShape::SLOTS.len());
    }

    #[test]
    fn test_corners_passed_through() {
        let shape = edges(Point::new(0, 0), Size::new(3, 4))
            .top_left(simple('A'))
            .bottom_right(simple('D'))
            .build()
            .unwrap();
        assert_eq!(shape.glyph(RectangleShape::TOP_LEFT), Some(&simple('A')));
        assert_eq!(shape.glyph(RectangleShape::TOP_RIGHT), None);
        assert_eq!(shape.glyph(RectangleShape::BOTTOM_RIGHT), Some(&simple('D')));
    }

    #[test]
    fn test_missing_edges_rejected() {
        let no_vertical = RectangleShape::new(Point::new(0, 0), Size::new(2, 2))
            .horizontal(simple('-'))
            .build();
        assert_eq!(
            no_vertical,
            Err(ShapeError::MissingGlyph {
                shape: "RectangleShape",
                slot: "Vertical"
            })
        );

        let no_horizontal = RectangleShape::new(Point::new(0, 0), Size::new(2, 2))
            .vertical(simple('|'))
            .top_left(simple('+'))
            .build();
        assert!(matches!(
            no_horizontal,
            Err(ShapeError::MissingGlyph {
                slot: "Horizontal",
                ..
            })
        ));
    }

    #[test]
    fn test_default_priority_is_top_left() {
        let shape = edges(Point::new(0, 0), Size::new(2, 2)).build().unwrap();
        assert_eq!(shape.priority(), 0);
        assert_eq!(shape.priority(), u8::from(RectanglePriority::TopLeft));

        let vertical = edges(Point::new(0, 0), Size::new(2, 2))
            .priority(RectanglePriority::Vertical)
            .build()
            .unwrap();
        assert_eq!(vertical.priority(), 5);
    }

    #[test]
    fn test_perimeter_slots() {
        let shape = edges(Point::new(1, 1), Size::new(3, 4)).build().unwrap();
        // 4 wide, 3 tall: 4 + 4 + 1 + 1
        assert_eq!(shape.placements().len(), 10);
        assert_eq!(slot_at(&shape, 1, 1), Some(RectangleShape::TOP_LEFT));
        assert_eq!(slot_at(&shape, 4, 1), Some(RectangleShape::TOP_RIGHT));
        assert_eq!(slot_at(&shape, 1, 3), Some(RectangleShape::BOTTOM_LEFT));
        assert_eq!(slot_at(&shape, 4, 3), Some(RectangleShape::BOTTOM_RIGHT));
        assert_eq!(slot_at(&shape, 2, 1), Some(RectangleShape::HORIZONTAL));
        assert_eq!(slot_at(&shape, 3, 3), Some(RectangleShape::HORIZONTAL));
        assert_eq!(slot_at(&shape, 1, 2), Some(RectangleShape::VERTICAL));
        assert_eq!(slot_at(&shape, 4, 2), Some(RectangleShape::VERTICAL));
        assert_eq!(slot_at(&shape, 2, 2), None);
    }

    #[test]
    fn test_edges_walk_clockwise() {
        let shape = edges(Point::new(0, 0), Size::new(3, 3)).build().unwrap();
        let orientation_at = |x, y| {
            shape
                .placement_at(Point::new(x, y))
                .map(|p| p.orientation)
        };
        assert_eq!(orientation_at(1, 0), Some(Orientation::LeftToRight));
        assert_eq!(orientation_at(2, 1), Some(Orientation::TopToBottom));
        assert_eq!(orientation_at(1, 2), Some(Orientation::RightToLeft));
        assert_eq!(orientation_at(0, 1), Some(Orientation::BottomToTop));
    }

    #[test]
    fn test_degenerate_rectangles() {
        let row = edges(Point::new(0, 0), Size::new(1, 4)).build().unwrap();
        let slots: Vec<&str> = row.placements().iter().map(|p| p.slot).collect();
        assert_eq!(
            slots,
            vec![
                RectangleShape::TOP_LEFT,
                RectangleShape::HORIZONTAL,
                RectangleShape::HORIZONTAL,
                RectangleShape::TOP_RIGHT
            ]
        );

        let column = edges(Point::new(0, 0), Size::new(3, 1)).build().unwrap();
        let slots: Vec<&str> = column.placements().iter().map(|p| p.slot).collect();
        assert_eq!(
            slots,
            vec![
                RectangleShape::TOP_LEFT,
                RectangleShape::BOTTOM_LEFT,
                RectangleShape::VERTICAL
            ]
        );

        let dot = edges(Point::new(5, 5), Size::new(1, 1)).build().unwrap();
        assert_eq!(dot.placements().len(), 1);
        assert_eq!(slot_at(&dot, 5, 5), Some(RectangleShape::TOP_LEFT));
    }

    #[test]
    fn test_placement_at_matches_walk() {
        for size in [
            Size::new(3, 4),
            Size::new(1, 4),
            Size::new(3, 1),
            Size::new(1, 1),
            Size::new(2, 2),
        ] {
            let shape = edges(Point::new(2, 3), size).build().unwrap();
            let walk = shape.placements();
            for point in shape.zone().cells() {
                let expected = walk.iter().find(|p| p.point == point).copied();
                assert_eq!(shape.placement_at(point), expected, "{size:?} at {point:?}");
            }
        }
    }

    #[test]
    fn test_overflowing_zone_rejected() {
        let err = edges(Point::new(usize::MAX, 0), Size::new(1, 2))
            .build()
            .unwrap_err();
        assert!(matches!(err, ShapeError::ZoneOverflow { .. }));

        let tall = edges(Point::new(0, usize::MAX - 1), Size::new(3, 2)).build();
        assert!(tall.is_err());
    }

    #[test]
    fn test_empty_rectangle_covers_nothing() {
        let shape = edges(Point::new(0, 0), Size::new(0, 0)).build().unwrap();
        assert!(shape.placements().is_empty());
        assert_eq!(shape.claims().count(), 0);
    }
}
