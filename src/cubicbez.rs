// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::{Mul, Range};

use arrayvec::ArrayVec;

use crate::common::{solve_cubic, solve_quadratic};
use crate::{Affine, Error, Line, ParamCurve, ParamCurveExtrema, Point, Vec2, MAX_EXTREMA};

/// A single cubic Bézier segment.
///
/// The four control points are the "curve values" the intersection code works
/// on; see [`CubicBez::values`] for the flat 8-tuple form.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Build a segment from its eight coordinates `x0, y0, .. x3, y3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCurve`] unless `values` holds exactly eight
    /// finite numbers.
    pub fn from_values(values: &[f64]) -> Result<CubicBez, Error> {
        match *values {
            [x0, y0, x1, y1, x2, y2, x3, y3] if values.iter().all(|v| v.is_finite()) => {
                Ok(CubicBez::new((x0, y0), (x1, y1), (x2, y2), (x3, y3)))
            }
            _ => Err(Error::InvalidCurve { len: values.len() }),
        }
    }

    /// The eight coordinates of the control points, in order.
    #[inline]
    pub fn values(&self) -> [f64; 8] {
        [
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y,
        ]
    }

    /// Raise a line to a cubic with handles at its thirds.
    #[inline]
    pub fn from_line(line: Line) -> CubicBez {
        CubicBez::new(
            line.p0,
            line.p0.lerp(line.p1, 1.0 / 3.0),
            line.p0.lerp(line.p1, 2.0 / 3.0),
            line.p1,
        )
    }

    /// Raise a quadratic Bézier given by its control points to a cubic.
    #[inline]
    pub fn from_quad(p0: Point, p1: Point, p2: Point) -> CubicBez {
        CubicBez::new(
            p0,
            p0 + (2.0 / 3.0) * (p1 - p0),
            p2 + (2.0 / 3.0) * (p1 - p2),
            p2,
        )
    }

    /// The line through the two endpoints.
    #[inline]
    pub fn baseline(&self) -> Line {
        Line::new(self.p0, self.p3)
    }

    /// Returns true if all four control points lie on the segment between the
    /// endpoints, within `tolerance`.
    ///
    /// A curve whose endpoints coincide is linear only if it is a single point.
    pub fn is_linear(&self, tolerance: f64) -> bool {
        let chord = self.p3 - self.p0;
        let len = chord.hypot();
        if len <= tolerance {
            return self.p1.is_near(self.p0, tolerance) && self.p2.is_near(self.p0, tolerance);
        }
        let slack = tolerance / len;
        [self.p1, self.p2].iter().all(|&p| {
            let v = p - self.p0;
            let distance = chord.cross(v) / len;
            let along = chord.dot(v) / (len * len);
            distance.abs() <= tolerance && along >= -slack && along <= 1.0 + slack
        })
    }

    /// Returns true if the curve deviates from its chord by less than
    /// `tolerance`, so that it can be treated as a line.
    #[inline]
    pub fn is_flat_enough(&self, tolerance: f64) -> bool {
        let u = 3.0 * self.p1.to_vec2() - 2.0 * self.p0.to_vec2() - self.p3.to_vec2();
        let v = 3.0 * self.p2.to_vec2() - 2.0 * self.p3.to_vec2() - self.p0.to_vec2();
        (u.x * u.x).max(v.x * v.x) + (u.y * u.y).max(v.y * v.y) < 16.0 * tolerance * tolerance
    }

    /// Find the parameter at which the curve passes through `point`.
    ///
    /// The point is expected to lie on the curve (within `tolerance`); when it
    /// doesn't, the candidate root closest to it is returned, and failing any
    /// root, its projection on the chord.
    pub fn parameter_of(&self, point: Point, tolerance: f64) -> f64 {
        if point.is_near(self.p0, tolerance) {
            return 0.0;
        }
        if point.is_near(self.p3, tolerance) {
            return 1.0;
        }
        let (a, b, c, d) = self.parameters();
        let roots_x = solve_cubic(d.x - point.x, c.x, b.x, a.x);
        let roots_y = solve_cubic(d.y - point.y, c.y, b.y, a.y);
        let mut best: Option<(f64, f64)> = None;
        for t in roots_x.into_iter().chain(roots_y) {
            if !(-tolerance..=1.0 + tolerance).contains(&t) {
                continue;
            }
            let t = t.clamp(0.0, 1.0);
            let d2 = self.eval(t).distance_squared(point);
            if best.map(|(_, best_d2)| d2 < best_d2).unwrap_or(true) {
                best = Some((t, d2));
            }
        }
        match best {
            Some((t, _)) => t,
            None => {
                let chord = self.p3 - self.p0;
                let t = chord.dot(point - self.p0) / chord.hypot2();
                if t.is_finite() {
                    t.clamp(0.0, 1.0)
                } else {
                    0.0
                }
            }
        }
    }

    /// The polynomial coefficients `(a, b, c, d)` of `a t³ + b t² + c t + d`.
    #[inline]
    fn parameters(&self) -> (Vec2, Vec2, Vec2, Vec2) {
        let c = (self.p1 - self.p0) * 3.0;
        let b = (self.p2 - self.p1) * 3.0 - c;
        let d = self.p0.to_vec2();
        let a = self.p3.to_vec2() - d - c - b;
        (a, b, c, d)
    }

    /// The derivative at `t`.
    #[inline]
    fn deriv_at(&self, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        3.0 * ((mt * mt) * (self.p1 - self.p0)
            + (2.0 * mt * t) * (self.p2 - self.p1)
            + (t * t) * (self.p3 - self.p2))
    }
}

impl TryFrom<&[f64]> for CubicBez {
    type Error = Error;

    #[inline]
    fn try_from(values: &[f64]) -> Result<CubicBez, Error> {
        CubicBez::from_values(values)
    }
}

impl From<Line> for CubicBez {
    #[inline]
    fn from(line: Line) -> CubicBez {
        CubicBez::from_line(line)
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p3 = self.eval(t1);
        let scale = (t1 - t0) * (1.0 / 3.0);
        let p1 = p0 + scale * self.deriv_at(t0);
        let p2 = p3 - scale * self.deriv_at(t1);
        CubicBez { p0, p1, p2, p3 }
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        fn one_coord(result: &mut ArrayVec<f64, MAX_EXTREMA>, d0: f64, d1: f64, d2: f64) {
            let a = d0 - 2.0 * d1 + d2;
            let b = 2.0 * (d1 - d0);
            let c = d0;
            let roots = solve_quadratic(c, b, a);
            for &t in &roots {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        one_coord(&mut result, d0.x, d1.x, d2.x);
        one_coord(&mut result, d0.y, d1.y, d2.y);
        result.sort_by(|a, b| a.total_cmp(b));
        result
    }
}

impl Mul<CubicBez> for Affine {
    type Output = CubicBez;

    #[inline]
    fn mul(self, c: CubicBez) -> CubicBez {
        CubicBez {
            p0: self * c.p0,
            p1: self * c.p1,
            p2: self * c.p2,
            p3: self * c.p3,
        }
    }
}
