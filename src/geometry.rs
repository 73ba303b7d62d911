//! Grid geometry: points, sizes and the rectangular zones shapes occupy

use crate::error::ShapeError;

/// A cell coordinate on the grid (column `x`, row `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Extent of a zone in rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub height: usize,
    pub width: usize,
}

impl Size {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// True if the size covers no cells
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.height.saturating_mul(self.width)
    }
}

/// Signed `(height, width)` pair, as produced by callers working in signed
/// coordinates. Negative components are rejected.
impl TryFrom<(i64, i64)> for Size {
    type Error = ShapeError;

    fn try_from((height, width): (i64, i64)) -> Result<Self, Self::Error> {
        if height < 0 || width < 0 {
            return Err(ShapeError::NegativeSize { height, width });
        }
        Ok(Size::new(height as usize, width as usize))
    }
}

/// Rectangular footprint anchored at its top-left `source`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Zone {
    pub source: Point,
    pub size: Size,
}

impl Zone {
    pub const fn new(source: Point, size: Size) -> Self {
        Self { source, size }
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// One past the last column and row, or `None` if that overflows `usize`
    pub fn end(&self) -> Option<Point> {
        Some(Point::new(
            self.source.x.checked_add(self.size.width)?,
            self.source.y.checked_add(self.size.height)?,
        ))
    }

    /// Reject zones whose extent does not fit the coordinate range
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self.end() {
            Some(_) => Ok(()),
            None => Err(ShapeError::ZoneOverflow {
                origin: self.source,
                size: self.size,
            }),
        }
    }

    /// Last column covered, or `None` for an empty or overflowing zone
    pub fn right(&self) -> Option<usize> {
        self.end().filter(|_| !self.is_empty()).map(|end| end.x - 1)
    }

    /// Last row covered, or `None` for an empty or overflowing zone
    pub fn bottom(&self) -> Option<usize> {
        self.end().filter(|_| !self.is_empty()).map(|end| end.y - 1)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.end().is_some_and(|end| {
            point.x >= self.source.x
                && point.y >= self.source.y
                && point.x < end.x
                && point.y < end.y
        })
    }

    /// Every covered cell, row-major from the top-left. An overflowing zone
    /// yields nothing.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let source = self.source;
        let end = self.end().unwrap_or(source);
        (source.y..end.y).flat_map(move |y| (source.x..end.x).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_cells_row_major() {
        let zone = Zone::new(Point::new(2, 1), Size::new(2, 3));
        let cells: Vec<Point> = zone.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Point::new(2, 1));
        assert_eq!(cells[2], Point::new(4, 1));
        assert_eq!(cells[3], Point::new(2, 2));
        assert_eq!(cells[5], Point::new(4, 2));
    }

    #[test]
    fn test_empty_zone_covers_nothing() {
        let zone = Zone::new(Point::new(3, 3), Size::new(0, 0));
        assert!(zone.is_empty());
        assert_eq!(zone.cells().count(), 0);
        assert_eq!(zone.right(), None);
        assert_eq!(zone.bottom(), None);

        let flat = Zone::new(Point::new(0, 0), Size::new(0, 5));
        assert_eq!(flat.cells().count(), 0);
    }

    #[test]
    fn test_zone_bounds() {
        let zone = Zone::new(Point::new(1, 2), Size::new(3, 4));
        assert_eq!(zone.right(), Some(4));
        assert_eq!(zone.bottom(), Some(4));
        assert!(zone.contains(Point::new(1, 2)));
        assert!(zone.contains(Point::new(4, 4)));
        assert!(!zone.contains(Point::new(5, 4)));
        assert!(!zone.contains(Point::new(0, 2)));
    }

    #[test]
    fn test_overflowing_zone() {
        let zone = Zone::new(Point::new(usize::MAX, 0), Size::new(1, 2));
        assert_eq!(zone.end(), None);
        assert_eq!(
            zone.validate(),
            Err(ShapeError::ZoneOverflow {
                origin: Point::new(usize::MAX, 0),
                size: Size::new(1, 2),
            })
        );
        assert_eq!(zone.right(), None);
        assert!(!zone.contains(Point::new(0, 0)));
        assert!(!zone.contains(Point::new(usize::MAX, 0)));
        assert_eq!(zone.cells().count(), 0);
    }

    #[test]
    fn test_zone_touching_coordinate_limit() {
        let zone = Zone::new(Point::new(usize::MAX - 2, 0), Size::new(1, 2));
        assert_eq!(zone.validate(), Ok(()));
        assert_eq!(zone.right(), Some(usize::MAX - 1));
        assert_eq!(zone.cells().last(), Some(Point::new(usize::MAX - 1, 0)));
    }

    #[test]
    fn test_size_rejects_negative() {
        assert_eq!(Size::try_from((2_i64, 3_i64)), Ok(Size::new(2, 3)));
        assert!(matches!(
            Size::try_from((-1_i64, 3_i64)),
            Err(ShapeError::NegativeSize {
                height: -1,
                width: 3
            })
        ));
        assert!(Size::try_from((0_i64, -4_i64)).is_err());
    }
}
