// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use crate::Point;

/// A rectangle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect {
            x0: p0.x,
            y0: p0.y,
            x1: p1.x,
            y1: p1.y,
        }
        .abs()
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    pub fn abs(&self) -> Rect {
        let Rect { x0, y0, x1, y1 } = *self;
        Rect {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// Whether this rectangle and `other` share at least one point.
    ///
    /// Unlike an area intersection test, touching edges and corners count,
    /// and zero-area rectangles (a horizontal segment's bounds, say) still
    /// touch whatever they cross.
    #[inline]
    pub fn touches(&self, other: &Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Expand the rectangle by `amount` on every side.
    #[inline]
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x0 - amount,
            self.y0 - amount,
            self.x1 + amount,
            self.y1 + amount,
        )
    }

    /// Whether this rectangle contains the point.
    ///
    /// The boundary is included.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect};

    #[test]
    fn from_points_is_normalized() {
        let r = Rect::from_points((10.0, 5.0), (2.0, 8.0));
        assert_eq!(r, Rect::new(2.0, 5.0, 10.0, 8.0));
        assert_eq!(r.abs(), r);
    }

    #[test]
    fn touches_includes_edges() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.touches(&Rect::new(1.0, 0.5, 2.0, 2.0)));
        assert!(a.touches(&Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(!a.touches(&Rect::new(1.0 + 1e-12, 0.0, 2.0, 1.0)));
        // A degenerate rect, such as the bounds of a horizontal line.
        let flat = Rect::new(-1.0, 0.5, 3.0, 0.5);
        assert!(a.touches(&flat));
        assert!(flat.touches(&a));
    }

    #[test]
    fn union_pt() {
        let r = Rect::from_points(Point::ORIGIN, Point::ORIGIN)
            .union_pt(Point::new(2.0, -1.0))
            .union_pt(Point::new(-3.0, 4.0));
        assert_eq!(r, Rect::new(-3.0, -1.0, 2.0, 4.0));
        assert!(r.contains(Point::new(2.0, 4.0)));
        assert!(!r.contains(Point::new(2.1, 4.0)));
        assert!(r.inflate(0.5).contains(Point::new(2.1, 4.0)));
    }
}
