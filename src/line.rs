// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::{Mul, Range};

use arrayvec::ArrayVec;

use crate::{Affine, ParamCurve, ParamCurveExtrema, Point, MAX_EXTREMA};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// Computes the point where two lines cross.
    ///
    /// With `infinite` unset, only a crossing within both segments (endpoints
    /// included) is reported; with it set, the lines are extended to infinity.
    /// Parallel lines, including collinear overlapping ones, never cross.
    pub fn intersect(self, other: Line, infinite: bool) -> Option<Point> {
        let ab = self.p1 - self.p0;
        let cd = other.p1 - other.p0;
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return None;
        }
        let ca = self.p0 - other.p0;
        let h = ab.cross(ca) / pcd;
        let g = cd.cross(ca) / pcd;
        if !infinite && !((0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&h)) {
            return None;
        }
        Some(self.p0.lerp(self.p1, g))
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Line {
        Line {
            p0: self.eval(range.start),
            p1: self.eval(range.end),
        }
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveExtrema for Line {
    #[inline]
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        ArrayVec::new()
    }
}

impl Mul<Line> for Affine {
    type Output = Line;

    #[inline]
    fn mul(self, other: Line) -> Line {
        Line {
            p0: self * other.p0,
            p1: self * other.p1,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, ParamCurve, ParamCurveExtrema, Point, Rect};

    /// Cramer's rule on the two segment equations, written out independently.
    fn determinant_crossing(a: Line, b: Line) -> Option<Point> {
        let (x1, y1, x2, y2) = (a.p0.x, a.p0.y, a.p1.x, a.p1.y);
        let (x3, y3, x4, y4) = (b.p0.x, b.p0.y, b.p1.x, b.p1.y);
        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }
        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }
        Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    }

    #[test]
    fn line_crossing() {
        let l1 = Line::new((0.0, 0.0), (10.0, 10.0));
        let l2 = Line::new((0.0, 10.0), (10.0, 0.0));
        assert_eq!(l1.intersect(l2, false), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn line_crossing_bounded() {
        let l1 = Line::new((0.0, 0.0), (1.0, 1.0));
        let l2 = Line::new((3.0, 0.0), (2.0, 1.0));
        assert_eq!(l1.intersect(l2, false), None);
        let p = l1.intersect(l2, true).unwrap();
        assert!(p.is_near(Point::new(1.5, 1.5), 1e-12));

        // Touching at an endpoint counts.
        let l3 = Line::new((1.0, 1.0), (2.0, 0.0));
        assert_eq!(l1.intersect(l3, false), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn line_crossing_parallel() {
        let l1 = Line::new((0.0, 0.0), (1.0, 0.0));
        assert_eq!(l1.intersect(Line::new((0.0, 1.0), (1.0, 1.0)), true), None);
        assert_eq!(l1.intersect(Line::new((0.5, 0.0), (2.0, 0.0)), false), None);
    }

    #[test]
    fn line_crossing_matches_determinant() {
        let lines = [
            Line::new((0.0, 0.0), (4.0, 3.0)),
            Line::new((1.0, 5.0), (2.0, -1.0)),
            Line::new((-3.0, 2.0), (6.0, 2.5)),
            Line::new((0.5, -2.0), (0.5, 7.0)),
            Line::new((10.0, 10.0), (11.0, 12.0)),
        ];
        for a in lines {
            for b in lines {
                if a == b {
                    continue;
                }
                match (a.intersect(b, false), determinant_crossing(a, b)) {
                    (Some(p), Some(q)) => assert!(p.is_near(q, 1e-9), "{a:?} {b:?}"),
                    (None, None) => {}
                    (p, q) => panic!("{a:?} x {b:?}: got {p:?}, expected {q:?}"),
                }
            }
        }
    }

    #[test]
    fn line_bbox() {
        let l = Line::new((3.0, -1.0), (-2.0, 4.0));
        assert_eq!(l.bounding_box(), Rect::new(-2.0, -1.0, 3.0, 4.0));
        assert!(l.subsegment(0.0..0.2).end().is_near(Point::new(2.0, 0.0), 1e-12));
    }
}
