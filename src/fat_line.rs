// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fat lines, and clipping a curve's parameter range against one.
//!
//! The fat line of a cubic is its baseline (the line through the endpoints)
//! thickened just enough to enclose the whole curve. Any intersection with
//! another curve has to lie inside it, so the parts of the other curve whose
//! control polygon lies outside can be discarded. This is the core step of
//! Sederberg and Nishita's Bézier clipping.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{ClipParams, CubicBez, Line, ParamCurveExtrema, Point};

/// A baseline and the band of signed distances around it that contains a
/// curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FatLine {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
    /// The min distance from the center-line (zero or less).
    pub dmin: f64,
    /// The max distance from the center-line (zero or more).
    pub dmax: f64,
}

/// One edge of a [`distance_hull`], in `(t, d)` space.
pub type HullEdge = Line;

/// What a clip step learned about the clipped curve.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipOutcome {
    /// The curves can't intersect within the clipped range.
    Disjoint,
    /// Any intersection lies within this (narrower) range.
    Narrowed(Range<f64>),
    /// The range didn't shrink enough; there may be several intersections.
    Ambiguous,
}

/// Signed distance from the (unbounded) line to a point.
///
/// Points to the left of the direction of travel are positive. A zero-length
/// line has no direction, and every distance from it is zero.
#[inline]
pub fn signed_distance(line: Line, p: Point) -> f64 {
    let v = line.p1 - line.p0;
    let len = v.hypot();
    if len == 0.0 {
        return 0.0;
    }
    v.cross(p - line.p0) / len
}

impl FatLine {
    /// The fat line of a cubic.
    ///
    /// Returns `None` when the curve starts and ends at the same point, since
    /// the baseline then has no direction.
    pub fn from_curve(c: &CubicBez) -> Option<FatLine> {
        let len = (c.p3 - c.p0).hypot();
        if len <= 0.0 || !len.is_finite() {
            return None;
        }
        let baseline = c.baseline();
        let d1 = signed_distance(baseline, c.p1);
        let d2 = signed_distance(baseline, c.p2);
        let factor = if d1 * d2 > 0.0 { 3.0 / 4.0 } else { 4.0 / 9.0 };
        Some(FatLine {
            p0: c.p0,
            p1: c.p3,
            dmin: factor * d1.min(d2).min(0.0),
            dmax: factor * d1.max(d2).max(0.0),
        })
    }

    /// The baseline.
    #[inline]
    pub fn baseline(&self) -> Line {
        Line::new(self.p0, self.p1)
    }

    /// Signed distance of a point from the baseline.
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        signed_distance(self.baseline(), p)
    }

    /// Whether a distance falls inside the band.
    #[inline]
    pub fn contains(&self, d: f64) -> bool {
        d >= self.dmin && d <= self.dmax
    }

    /// The range of `t` over which the hull lies inside the band.
    ///
    /// The band cuts a convex polygon in a convex polygon whose corners are
    /// either hull vertices inside the band or edge crossings of `dmin` and
    /// `dmax`, so those are the only candidates.
    fn clip_hull(&self, hull: &[HullEdge]) -> Option<Range<f64>> {
        let mut candidates = ArrayVec::<f64, 12>::new();
        for edge in hull {
            let (a, b) = (edge.p0, edge.p1);
            if self.contains(a.y) {
                candidates.push(a.x);
            }
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = (a.y.min(b.y), a.y.max(b.y));
            for d in [self.dmin, self.dmax] {
                if d >= lo && d <= hi {
                    candidates.push(a.x + (d - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
        }
        let tmin = candidates.iter().copied().reduce(f64::min)?;
        let tmax = candidates.iter().copied().reduce(f64::max)?;
        Some(tmin.clamp(0.0, 1.0)..tmax.clamp(0.0, 1.0))
    }
}

/// The convex hull of the non-parametric distance curve.
///
/// The curve has control points `(0, d0)`, `(1/3, d1)`, `(2/3, d2)` and
/// `(1, d3)`. As these are already sorted by abscissa, the hull is either a
/// triangle or a quadrilateral, depending on which side of the chord
/// `(0, d0)-(1, d3)` the interior points lie and how far out. Edges are
/// returned in order around the hull, each ending where the next begins.
pub fn distance_hull([d0, d1, d2, d3]: [f64; 4]) -> ArrayVec<HullEdge, 4> {
    let p0 = Point::new(0.0, d0);
    let p1 = Point::new(1.0 / 3.0, d1);
    let p2 = Point::new(2.0 / 3.0, d2);
    let p3 = Point::new(1.0, d3);
    let chord = Line::new(p0, p3);
    let dist1 = signed_distance(chord, p1);
    let dist2 = signed_distance(chord, p2);

    let polygon: ArrayVec<Point, 4> = if dist1 * dist2 < 0.0 {
        // Opposite sides of the chord, which isn't part of the hull.
        [p0, p1, p3, p2].into_iter().collect()
    } else {
        // Same side: the chord is an edge. The point of smaller deviation is
        // either inside the triangle made by the chord and the other point,
        // or a corner of its own.
        let (max, apex, other_apex, min) = if dist1.abs() > dist2.abs() {
            (p1, p3, p0, p2)
        } else {
            (p2, p0, p3, p1)
        };
        let to_apex2 = other_apex - apex;
        let to_max = max - apex;
        let to_min = min - apex;
        if to_apex2.cross(to_min) * to_max.cross(to_min) < 0.0 {
            [p0, max, p3].into_iter().collect()
        } else {
            [p0, p1, p2, p3].into_iter().collect()
        }
    };

    let n = polygon.len();
    (0..n)
        .map(|i| Line::new(polygon[i], polygon[(i + 1) % n]))
        .collect()
}

/// Clip the range of `v2` against the fat line of `v1`.
///
/// `v2` is the section of the second curve over `range2`; a narrowed result
/// is mapped back into `range2`. When the hull doesn't shrink the range by at
/// least `params.min_shrink`, the outcome falls back to whether the two
/// sections' bounding boxes touch: [`ClipOutcome::Ambiguous`] if they do,
/// [`ClipOutcome::Disjoint`] if not. The same fallback applies when `v1` has
/// no fat line.
pub fn clip(v1: &CubicBez, v2: &CubicBez, range2: Range<f64>, params: &ClipParams) -> ClipOutcome {
    #[cfg(test)]
    counter::bump();

    let Some(fat_line) = FatLine::from_curve(v1) else {
        return touch_outcome(v1, v2);
    };
    let dq = [v2.p0, v2.p1, v2.p2, v2.p3].map(|p| fat_line.distance(p));
    let min_d = dq.iter().copied().fold(f64::INFINITY, f64::min);
    let max_d = dq.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if fat_line.dmin > max_d || fat_line.dmax < min_d {
        return ClipOutcome::Disjoint;
    }

    if let Some(t) = fat_line.clip_hull(&distance_hull(dq)) {
        let tdiff = range2.end - range2.start;
        let narrowed = (range2.start + t.start * tdiff)..(range2.start + t.end * tdiff);
        if (tdiff - (narrowed.end - narrowed.start)) / tdiff >= params.min_shrink {
            return ClipOutcome::Narrowed(narrowed);
        }
    }
    touch_outcome(v1, v2)
}

fn touch_outcome(v1: &CubicBez, v2: &CubicBez) -> ClipOutcome {
    if v1.bounding_box().touches(&v2.bounding_box()) {
        ClipOutcome::Ambiguous
    } else {
        ClipOutcome::Disjoint
    }
}


#[cfg(test)]
mod tests {
    use super::{clip, distance_hull, signed_distance, ClipOutcome, FatLine, HullEdge};
    use crate::{ClipParams, CubicBez, Line, Point};

    fn arch() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.5, 1.0), (1.5, 1.0), (2.0, 0.0))
    }

    /// The hull is closed, and every control point is on or inside it.
    fn check_hull(hull: &[HullEdge], d: [f64; 4]) {
        let n = hull.len();
        for i in 0..n {
            assert_eq!(hull[i].p1, hull[(i + 1) % n].p0, "hull is not closed");
        }
        let points = [
            Point::new(0.0, d[0]),
            Point::new(1.0 / 3.0, d[1]),
            Point::new(2.0 / 3.0, d[2]),
            Point::new(1.0, d[3]),
        ];
        for p in points {
            let sides: Vec<f64> = hull
                .iter()
                .map(|e| (e.p1 - e.p0).cross(p - e.p0))
                .collect();
            let all_left = sides.iter().all(|&s| s >= -1e-12);
            let all_right = sides.iter().all(|&s| s <= 1e-12);
            assert!(all_left || all_right, "{p:?} is outside {hull:?}");
        }
    }

    #[test]
    fn signed_distance_sign() {
        let l = Line::new((0.0, 0.0), (2.0, 0.0));
        assert_eq!(signed_distance(l, Point::new(1.0, 3.0)), 3.0);
        assert_eq!(signed_distance(l, Point::new(5.0, -1.5)), -1.5);
        let point = Line::new((1.0, 1.0), (1.0, 1.0));
        assert_eq!(signed_distance(point, Point::new(4.0, 5.0)), 0.0);
    }

    #[test]
    fn fat_line_factors() {
        // Both handles on one side: 3/4 of the larger distance.
        let f = FatLine::from_curve(&arch()).unwrap();
        assert_eq!(f.dmin, 0.0);
        assert!((f.dmax - 0.75).abs() < 1e-12);

        // Opposite sides: 4/9 of each.
        let s = CubicBez::new((0.0, 0.0), (1.0, 1.0), (2.0, -1.0), (3.0, 0.0));
        let f = FatLine::from_curve(&s).unwrap();
        assert!((f.dmin + 4.0 / 9.0).abs() < 1e-12);
        assert!((f.dmax - 4.0 / 9.0).abs() < 1e-12);

        // The band really does contain the curve.
        for c in [arch(), s] {
            let f = FatLine::from_curve(&c).unwrap();
            for i in 0..=64 {
                let d = f.distance(crate::ParamCurve::eval(&c, i as f64 / 64.0));
                assert!(d >= f.dmin - 1e-12 && d <= f.dmax + 1e-12);
            }
        }
    }

    #[test]
    fn fat_line_degenerate() {
        let lp = CubicBez::new((0.0, 0.0), (1.0, 1.0), (-1.0, 1.0), (0.0, 0.0));
        assert_eq!(FatLine::from_curve(&lp), None);
    }

    #[test]
    fn hull_triangle() {
        let d = [0.0, 3.0, 1.0, 0.0];
        let hull = distance_hull(d);
        assert_eq!(hull.len(), 3);
        assert_eq!(hull[0].p1, Point::new(1.0 / 3.0, 3.0));
        check_hull(&hull, d);
    }

    #[test]
    fn hull_quadrilateral_same_side() {
        let d = [0.0, 2.0, 2.0, 0.0];
        let hull = distance_hull(d);
        assert_eq!(hull.len(), 4);
        check_hull(&hull, d);
    }

    #[test]
    fn hull_quadrilateral_opposite_sides() {
        let d = [0.0, 1.0, -1.0, 0.0];
        let hull = distance_hull(d);
        assert_eq!(hull.len(), 4);
        assert_eq!(hull[1].p1, Point::new(1.0, 0.0));
        check_hull(&hull, d);
    }

    #[test]
    fn hull_contains_control_points() {
        let cases = [
            [0.0, -2.0, -0.1, 0.5],
            [1.0, 1.0, 1.0, 1.0],
            [-3.0, 4.0, 4.5, -1.0],
            [0.2, 0.1, 3.0, -5.0],
            [2.0, -1.0, -1.0, 2.0],
        ];
        for d in cases {
            check_hull(&distance_hull(d), d);
        }
    }

    #[test]
    fn clip_disjoint() {
        let far = CubicBez::from_line(Line::new((0.0, 5.0), (2.0, 5.0)));
        assert_eq!(
            clip(&arch(), &far, 0.0..1.0, &ClipParams::default()),
            ClipOutcome::Disjoint
        );
    }

    #[test]
    fn clip_narrowed() {
        let horizontal = CubicBez::from_line(Line::new((0.0, 0.5), (2.0, 0.5)));
        let vertical = CubicBez::from_line(Line::new((1.0, -1.0), (1.0, 2.0)));
        match clip(&horizontal, &vertical, 0.0..1.0, &ClipParams::default()) {
            ClipOutcome::Narrowed(r) => {
                assert!((r.start - 0.5).abs() < 1e-12, "{r:?}");
                assert!((r.end - 0.5).abs() < 1e-12, "{r:?}");
            }
            other => panic!("expected a narrowed range, got {other:?}"),
        }
        // The result is mapped into the given range.
        match clip(&horizontal, &vertical, 0.5..0.75, &ClipParams::default()) {
            ClipOutcome::Narrowed(r) => assert!((r.start - 0.625).abs() < 1e-12),
            other => panic!("expected a narrowed range, got {other:?}"),
        }
    }

    #[test]
    fn clip_ambiguous() {
        // A curve against itself can't be narrowed.
        assert_eq!(
            clip(&arch(), &arch(), 0.0..1.0, &ClipParams::default()),
            ClipOutcome::Ambiguous
        );
    }

    #[test]
    fn clip_without_fat_line() {
        let lp = CubicBez::new((0.0, 0.0), (1.0, 1.0), (-1.0, 1.0), (0.0, 0.0));
        let params = ClipParams::default();
        assert_eq!(clip(&lp, &arch(), 0.0..1.0, &params), ClipOutcome::Ambiguous);
        let far = CubicBez::from_line(Line::new((10.0, 10.0), (12.0, 10.0)));
        assert_eq!(clip(&lp, &far, 0.0..1.0, &params), ClipOutcome::Disjoint);
    }
}
