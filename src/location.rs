// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection locations and the list that collects them.

use core::cell::OnceCell;
use core::fmt;

use crate::{CubicBez, Point};

/// Which of the two outlines a curve belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathId {
    /// The first argument of the intersection call.
    First,
    /// The second argument.
    Second,
}

/// Position of a curve: its outline and its segment index there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CurveIndex {
    /// The outline.
    pub path: PathId,
    /// The index among the outline's segments, as yielded by
    /// [`BezPath::segments`](crate::BezPath::segments).
    pub segment: usize,
}

impl CurveIndex {
    /// Create a new index.
    #[inline]
    pub fn new(path: PathId, segment: usize) -> CurveIndex {
        CurveIndex { path, segment }
    }
}

impl fmt::Display for CurveIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let path = match self.path {
            PathId::First => 'a',
            PathId::Second => 'b',
        };
        write!(f, "{path}[{}]", self.segment)
    }
}

/// A curve together with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedCurve {
    /// Where the curve sits in its outline.
    pub index: CurveIndex,
    /// The whole curve, never a sub-arc of it.
    pub curve: CubicBez,
}

/// A point where two curves meet.
///
/// The location is owned by [`curve`](Self::curve); [`parameter`](Self::parameter)
/// is the curve parameter of [`point`](Self::point) on it. When the search
/// found the point without the parameter, it is computed on first access and
/// cached.
#[derive(Clone)]
pub struct CurveLocation {
    curve: IndexedCurve,
    other: IndexedCurve,
    point: Point,
    parameter: OnceCell<f64>,
    tolerance: f64,
}

impl CurveLocation {
    fn new(
        curve: IndexedCurve,
        parameter: Option<f64>,
        point: Point,
        other: IndexedCurve,
        tolerance: f64,
    ) -> CurveLocation {
        let cell = OnceCell::new();
        if let Some(t) = parameter {
            let _ = cell.set(t);
        }
        CurveLocation {
            curve,
            other,
            point,
            parameter: cell,
            tolerance,
        }
    }

    /// The curve that owns this location.
    #[inline]
    pub fn curve(&self) -> CurveIndex {
        self.curve.index
    }

    /// The curve it meets.
    #[inline]
    pub fn other(&self) -> CurveIndex {
        self.other.index
    }

    /// The owning curve's control points.
    #[inline]
    pub fn curve_bez(&self) -> CubicBez {
        self.curve.curve
    }

    /// The other curve's control points.
    #[inline]
    pub fn other_bez(&self) -> CubicBez {
        self.other.curve
    }

    /// The intersection point.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// The parameter of the point on the owning curve.
    pub fn parameter(&self) -> f64 {
        *self
            .parameter
            .get_or_init(|| self.curve.curve.parameter_of(self.point, self.tolerance))
    }

    /// Whether the parameter is known without further work.
    #[inline]
    pub fn is_parameter_resolved(&self) -> bool {
        self.parameter.get().is_some()
    }
}

impl fmt::Debug for CurveLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CurveLocation")
            .field("curve", &self.curve.index)
            .field("other", &self.other.index)
            .field("point", &self.point)
            .field("parameter", &self.parameter.get())
            .finish()
    }
}

impl fmt::Display for CurveLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} x {} at {}", self.curve(), self.other(), self.point)
    }
}

/// Collects intersection locations in the order they are found.
///
/// A location whose point is within the tolerance of the first or the last
/// recorded one is dropped. This catches the same crossing reached through
/// the end of one segment and the start of the next, including the seam of a
/// closed outline. Nothing else is deduplicated.
#[derive(Clone, Debug)]
pub struct Locations {
    items: Vec<CurveLocation>,
    tolerance: f64,
}

impl Locations {
    /// An empty list, comparing points with `tolerance`.
    pub fn new(tolerance: f64) -> Locations {
        Locations {
            items: Vec::new(),
            tolerance,
        }
    }

    /// Record a location owned by `curve`.
    ///
    /// Returns `false` if it was dropped as a duplicate.
    pub fn add(
        &mut self,
        curve: IndexedCurve,
        parameter: Option<f64>,
        point: Point,
        other: IndexedCurve,
    ) -> bool {
        let near = |loc: Option<&CurveLocation>| {
            loc.is_some_and(|loc| loc.point.is_near(point, self.tolerance))
        };
        if near(self.items.first()) || near(self.items.last()) {
            tracing::trace!(%point, "dropping duplicate location");
            return false;
        }
        self.items.push(CurveLocation::new(
            curve,
            parameter,
            point,
            other,
            self.tolerance,
        ));
        true
    }

    /// The number of recorded locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The recorded locations, in order.
    #[inline]
    pub fn as_slice(&self) -> &[CurveLocation] {
        &self.items
    }

    /// Take the recorded locations.
    #[inline]
    pub fn into_vec(self) -> Vec<CurveLocation> {
        self.items
    }
}
