// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier paths (up to cubic).

use core::ops::Mul;

use crate::{Affine, CubicBez, Error, Line, ParamCurveExtrema, Point, Rect};

/// A path of Bézier segments up to cubic, possibly with multiple subpaths.
///
/// This is the "outline" the intersection routines work on: an ordered
/// sequence of curves, where line and quadratic segments are treated as
/// cubics.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

/// The element of a Bézier path.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic bezier using the current location and the two points.
    QuadTo(Point, Point),
    /// Draw a cubic bezier using the current location and the three points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

impl BezPath {
    /// Create a new path.
    #[inline]
    pub fn new() -> BezPath {
        BezPath::default()
    }

    /// Create a path from a vector of path elements.
    #[inline]
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// A path holding one cubic segment.
    pub fn from_cubic(c: CubicBez) -> BezPath {
        BezPath(vec![PathEl::MoveTo(c.p0), PathEl::CurveTo(c.p1, c.p2, c.p3)])
    }

    /// Push a generic path element onto the path.
    #[inline]
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "quad to" element onto the path.
    pub fn quad_to<P: Into<Point>>(&mut self, p1: P, p2: P) {
        self.push(PathEl::QuadTo(p1.into(), p2.into()));
    }

    /// Push a "curve to" element onto the path.
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no segments.
    pub fn is_empty(&self) -> bool {
        !self
            .0
            .iter()
            .any(|el| matches!(*el, PathEl::LineTo(..) | PathEl::QuadTo(..) | PathEl::CurveTo(..)))
    }

    /// Check that the path starts with a `MoveTo`.
    ///
    /// An empty path is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the first element is anything else.
    pub fn validate(&self) -> Result<(), Error> {
        match self.0.first() {
            None | Some(PathEl::MoveTo(_)) => Ok(()),
            Some(_) => Err(Error::InvalidPath),
        }
    }

    /// Iterate over the path segments, each as a cubic.
    ///
    /// Lines and quadratics are raised, and a `ClosePath` that doesn't land on
    /// the subpath start contributes the closing line. A path that doesn't
    /// start with a `MoveTo` is taken to start at the origin.
    pub fn segments(&self) -> BezPathSegs<'_> {
        BezPathSegs {
            c: self.0.iter(),
            start: Point::ORIGIN,
            last: Point::ORIGIN,
        }
    }

    /// The smallest rectangle enclosing every segment.
    ///
    /// Returns `None` for a path without segments.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.segments()
            .map(|seg| seg.bounding_box())
            .reduce(|a, b| a.union(b))
    }

    /// Apply an affine transform to the path.
    pub fn apply_affine(&mut self, affine: Affine) {
        for el in self.0.iter_mut() {
            *el = affine * (*el);
        }
    }
}

impl FromIterator<PathEl> for BezPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        BezPath(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BezPath {
    type Item = PathEl;
    type IntoIter = core::iter::Cloned<core::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().cloned()
    }
}

impl Mul<PathEl> for Affine {
    type Output = PathEl;

    fn mul(self, other: PathEl) -> PathEl {
        match other {
            PathEl::MoveTo(p) => PathEl::MoveTo(self * p),
            PathEl::LineTo(p) => PathEl::LineTo(self * p),
            PathEl::QuadTo(p1, p2) => PathEl::QuadTo(self * p1, self * p2),
            PathEl::CurveTo(p1, p2, p3) => PathEl::CurveTo(self * p1, self * p2, self * p3),
            PathEl::ClosePath => PathEl::ClosePath,
        }
    }
}

impl<'a> Mul<&'a BezPath> for Affine {
    type Output = BezPath;

    fn mul(self, other: &BezPath) -> BezPath {
        BezPath(other.0.iter().map(|&el| self * el).collect())
    }
}

/// An iterator over the segments of a [`BezPath`], as cubics.
///
/// Created by [`BezPath::segments`].
#[derive(Clone, Debug)]
pub struct BezPathSegs<'a> {
    c: core::slice::Iter<'a, PathEl>,
    start: Point,
    last: Point,
}

impl Iterator for BezPathSegs<'_> {
    type Item = CubicBez;

    fn next(&mut self) -> Option<CubicBez> {
        for el in &mut self.c {
            let (ret, last) = match *el {
                PathEl::MoveTo(p) => {
                    self.start = p;
                    self.last = p;
                    continue;
                }
                PathEl::LineTo(p) => (CubicBez::from_line(Line::new(self.last, p)), p),
                PathEl::QuadTo(p1, p2) => (CubicBez::from_quad(self.last, p1, p2), p2),
                PathEl::CurveTo(p1, p2, p3) => (CubicBez::new(self.last, p1, p2, p3), p3),
                PathEl::ClosePath => {
                    if self.last != self.start {
                        (
                            CubicBez::from_line(Line::new(self.last, self.start)),
                            self.start,
                        )
                    } else {
                        continue;
                    }
                }
            };

            self.last = last;
            return Some(ret);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{Affine, BezPath, CubicBez, Error, PathEl, Point, Rect};

    fn square() -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.line_to((0.0, 10.0));
        path.close_path();
        path
    }

    #[test]
    fn segments_close_path() {
        let path = square();
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3].p0, Point::new(0.0, 10.0));
        assert_eq!(segs[3].p3, Point::new(0.0, 0.0));
        assert!(segs.iter().all(|s| s.is_linear(1e-9)));

        // Closing on the start point adds nothing.
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.line_to((0.0, 0.0));
        path.close_path();
        assert_eq!(path.segments().count(), 2);
    }

    #[test]
    fn segments_raise_quads() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.quad_to((1.0, 2.0), (2.0, 0.0));
        let seg = path.segments().next().unwrap();
        assert_eq!(seg.p0, Point::new(0.0, 0.0));
        assert_eq!(seg.p3, Point::new(2.0, 0.0));
        // The raised cubic peaks at the same height as the quadratic.
        assert!((seg.p1.y - 4.0 / 3.0).abs() < 1e-12);
        assert!((seg.p2.y - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn multiple_subpaths() {
        let mut path = square();
        path.move_to((20.0, 20.0));
        path.curve_to((21.0, 22.0), (23.0, 22.0), (24.0, 20.0));
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 5);
        assert_eq!(
            segs[4],
            CubicBez::new((20.0, 20.0), (21.0, 22.0), (23.0, 22.0), (24.0, 20.0))
        );
    }

    #[test]
    fn validate() {
        assert_eq!(square().validate(), Ok(()));
        assert_eq!(BezPath::new().validate(), Ok(()));
        let bad = BezPath::from_vec(vec![PathEl::LineTo(Point::new(1.0, 1.0))]);
        assert_eq!(bad.validate(), Err(Error::InvalidPath));
    }

    #[test]
    fn bounding_box() {
        assert_eq!(square().bounding_box(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(BezPath::new().bounding_box(), None);
        assert!(BezPath::new().is_empty());
        let mut only_move = BezPath::new();
        only_move.move_to((1.0, 1.0));
        assert!(only_move.is_empty());
    }

    #[test]
    fn affine() {
        let moved = Affine::translate((5.0, -5.0)) * &square();
        assert_eq!(moved.bounding_box(), Some(Rect::new(5.0, -5.0, 15.0, 5.0)));
        let mut scaled = square();
        scaled.apply_affine(Affine::scale(0.5));
        assert_eq!(scaled.bounding_box(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn collect_elements() {
        let path = square();
        let open: BezPath = (&path)
            .into_iter()
            .filter(|el| *el != PathEl::ClosePath)
            .collect();
        assert_eq!(open.elements().len(), path.elements().len() - 1);
        // Without the close, the left edge is gone.
        assert_eq!(open.segments().count(), 3);
        assert_eq!(path.segments().count(), 4);
    }
}
