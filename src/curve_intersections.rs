// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections between Bézier outlines.
//!
//! Every curve of one outline is paired with every curve of the other. Pairs
//! of lines are intersected directly, a line and a curve by rotating the line
//! onto the x axis and solving a cubic, and two curves by fat-line clipping
//! (see [`fat_line`](crate::fat_line)) until their parameter ranges converge
//! or one of them is flat enough to be treated as a line.

use core::ops::Range;

use smallvec::{smallvec, SmallVec};

use crate::common::solve_cubic;
use crate::fat_line::{clip, ClipOutcome};
use crate::{
    Affine, BezPath, ClipParams, CubicBez, CurveIndex, CurveLocation, Error, IndexedCurve,
    Locations, ParamCurve, ParamCurveExtrema, PathId,
};

/// Find every intersection between two outlines, with default parameters.
///
/// Locations come out in the order they are found: by segment of `a`, then
/// by segment of `b`, then along the search.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if either path has a segment before its
/// first `MoveTo`.
///
/// # Examples
///
/// ```
/// use bezclip::{path_intersections, BezPath};
///
/// let a = BezPath::from_svg("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
/// let b = BezPath::from_svg("M5,5 L15,5 L15,15 L5,15 Z").unwrap();
/// let hits = path_intersections(&a, &b).unwrap();
/// assert_eq!(hits.len(), 2);
/// ```
pub fn path_intersections(a: &BezPath, b: &BezPath) -> Result<Vec<CurveLocation>, Error> {
    path_intersections_with(a, b, &ClipParams::default())
}

/// Find every intersection between two outlines.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if either path has a segment before its
/// first `MoveTo`.
pub fn path_intersections_with(
    a: &BezPath,
    b: &BezPath,
    params: &ClipParams,
) -> Result<Vec<CurveLocation>, Error> {
    a.validate()?;
    b.validate()?;
    let _span = tracing::debug_span!(
        "path_intersections",
        a = a.elements().len(),
        b = b.elements().len()
    )
    .entered();

    let (Some(bbox_a), Some(bbox_b)) = (a.bounding_box(), b.bounding_box()) else {
        return Ok(Vec::new());
    };
    if !bbox_a.touches(&bbox_b) {
        tracing::debug!("bounding boxes don't touch");
        return Ok(Vec::new());
    }

    let curves2: Vec<IndexedCurve> = b
        .segments()
        .enumerate()
        .map(|(i, curve)| IndexedCurve {
            index: CurveIndex::new(PathId::Second, i),
            curve,
        })
        .collect();
    let mut locations = Locations::new(params.tolerance);
    for (i, curve) in a.segments().enumerate() {
        let curve1 = IndexedCurve {
            index: CurveIndex::new(PathId::First, i),
            curve,
        };
        for &curve2 in &curves2 {
            add_intersections(curve1, curve2, &mut locations, params);
        }
    }
    tracing::debug!(count = locations.len(), "done");
    Ok(locations.into_vec())
}

/// Find the intersections of two single curves, with default parameters.
///
/// The curves are reported as segment 0 of [`PathId::First`] and
/// [`PathId::Second`].
pub fn curve_intersections(c1: CubicBez, c2: CubicBez) -> Vec<CurveLocation> {
    curve_intersections_with(c1, c2, &ClipParams::default())
}

/// Find the intersections of two single curves.
pub fn curve_intersections_with(
    c1: CubicBez,
    c2: CubicBez,
    params: &ClipParams,
) -> Vec<CurveLocation> {
    let mut locations = Locations::new(params.tolerance);
    add_intersections(
        IndexedCurve {
            index: CurveIndex::new(PathId::First, 0),
            curve: c1,
        },
        IndexedCurve {
            index: CurveIndex::new(PathId::Second, 0),
            curve: c2,
        },
        &mut locations,
        params,
    );
    locations.into_vec()
}

/// Pick the intersector for one pair of curves.
fn add_intersections(
    curve1: IndexedCurve,
    curve2: IndexedCurve,
    locations: &mut Locations,
    params: &ClipParams,
) {
    let linear1 = curve1.curve.is_linear(params.tolerance);
    let linear2 = curve2.curve.is_linear(params.tolerance);
    let one = Section::whole(curve1);
    let two = Section::whole(curve2);
    match (linear1, linear2) {
        (true, true) => {
            tracing::trace!(curve1 = %curve1.index, curve2 = %curve2.index, "line-line");
            add_line_intersection(&one, &two, locations);
        }
        (false, false) => {
            tracing::trace!(curve1 = %curve1.index, curve2 = %curve2.index, "curve-curve");
            add_curve_intersections(curve1, curve2, locations, params);
        }
        _ => {
            tracing::trace!(curve1 = %curve1.index, curve2 = %curve2.index, "curve-line");
            add_curve_line_intersections(&one, &two, linear1, locations, params);
        }
    }
}

/// The part of a curve still under consideration.
struct Section {
    operand: IndexedCurve,
    range: Range<f64>,
    /// `operand.curve` restricted to `range`.
    part: CubicBez,
}

impl Section {
    fn whole(operand: IndexedCurve) -> Section {
        Section {
            operand,
            range: 0.0..1.0,
            part: operand.curve,
        }
    }
}

/// A pending pair of parameter ranges to clip.
struct Task {
    range1: Range<f64>,
    range2: Range<f64>,
    depth: usize,
}

#[inline]
fn width(range: &Range<f64>) -> f64 {
    range.end - range.start
}

/// Fat-line clipping of two curves.
///
/// Subdivision is depth first, with the first half of a split explored before
/// the second.
fn add_curve_intersections(
    curve1: IndexedCurve,
    curve2: IndexedCurve,
    locations: &mut Locations,
    params: &ClipParams,
) {
    let mut stack: SmallVec<[Task; 8]> = smallvec![Task {
        range1: 0.0..1.0,
        range2: 0.0..1.0,
        depth: 0,
    }];
    while let Some(task) = stack.pop() {
        clip_task(curve1, curve2, task, &mut stack, locations, params);
    }
}

fn clip_task(
    curve1: IndexedCurve,
    curve2: IndexedCurve,
    task: Task,
    stack: &mut SmallVec<[Task; 8]>,
    locations: &mut Locations,
    params: &ClipParams,
) {
    let Task {
        mut range1,
        mut range2,
        depth,
    } = task;
    if depth > params.max_recursion {
        tracing::trace!(depth, ?range1, ?range2, "recursion limit reached");
        return;
    }
    let tolerance = params.tolerance;
    // Sub-arcs are always cut from the original curves so errors don't add up.
    let mut part1 = curve1.curve.subsegment(range1.clone());
    let mut part2 = curve2.curve.subsegment(range2.clone());
    let mut iteration = 0;
    while iteration < params.max_iterations
        && (width(&range1) > tolerance || width(&range2) > tolerance)
    {
        iteration += 1;
        let ambiguous = match clip(&part1, &part2, range2.clone(), params) {
            ClipOutcome::Disjoint => return,
            ClipOutcome::Ambiguous => true,
            ClipOutcome::Narrowed(r) => {
                range2 = r;
                if width(&range2) < tolerance {
                    // Curve 2 is down to a point, which has no fat line to
                    // clip curve 1 against. Its parameter on curve 1 is
                    // looked up on demand.
                    let point = curve2.curve.eval(range2.start);
                    if part1.bounding_box().inflate(tolerance).contains(point) {
                        locations.add(curve1, None, point, curve2);
                    }
                    return;
                }
                part2 = curve2.curve.subsegment(range2.clone());
                match clip(&part2, &part1, range1.clone(), params) {
                    ClipOutcome::Disjoint => return,
                    ClipOutcome::Ambiguous => true,
                    ClipOutcome::Narrowed(r) => {
                        range1 = r;
                        part1 = curve1.curve.subsegment(range1.clone());
                        false
                    }
                }
            }
        };

        if ambiguous {
            // Split whichever curve has converged the least.
            let depth = depth + 1;
            if width(&range1) > width(&range2) {
                let t = 0.5 * (range1.start + range1.end);
                stack.push(Task {
                    range1: t..range1.end,
                    range2: range2.clone(),
                    depth,
                });
                stack.push(Task {
                    range1: range1.start..t,
                    range2,
                    depth,
                });
            } else {
                let t = 0.5 * (range2.start + range2.end);
                stack.push(Task {
                    range1: range1.clone(),
                    range2: t..range2.end,
                    depth,
                });
                stack.push(Task {
                    range1,
                    range2: range2.start..t,
                    depth,
                });
            }
            return;
        }

        // Once curve 1 is down to a point, more clipping only makes curve 2
        // unstable.
        if width(&range1) < tolerance {
            let t = range1.start;
            locations.add(curve1, Some(t), curve1.curve.eval(t), curve2);
            return;
        }

        let flat1 = part1.is_flat_enough(tolerance);
        let flat2 = part2.is_flat_enough(tolerance);
        if flat1 || flat2 {
            let one = Section {
                operand: curve1,
                range: range1,
                part: part1,
            };
            let two = Section {
                operand: curve2,
                range: range2,
                part: part2,
            };
            if flat1 && flat2 {
                add_line_intersection(&one, &two, locations);
            } else {
                add_curve_line_intersections(&one, &two, flat1, locations, params);
            }
            return;
        }
    }
    if iteration == params.max_iterations {
        tracing::trace!(?range1, ?range2, "no convergence");
    }
}

/// Intersect a curve with a line, where `flip` says that `one` is the line.
///
/// The line is moved onto the positive x axis, which turns the problem into
/// finding the roots of the curve's y coordinate. Locations belong to the
/// curve, at its parameter on the whole (unclipped) curve.
fn add_curve_line_intersections(
    one: &Section,
    two: &Section,
    flip: bool,
    locations: &mut Locations,
    params: &ClipParams,
) {
    let (curved, line) = if flip { (two, one) } else { (one, two) };
    let tolerance = params.tolerance;
    let origin = line.part.p0;
    let direction = line.part.p3 - origin;
    let length = direction.hypot();
    let to_axis = Affine::rotate(-direction.atan2()) * Affine::translate(-origin.to_vec2());
    let c = to_axis * curved.part;

    let (y0, y1, y2, y3) = (c.p0.y, c.p1.y, c.p2.y, c.p3.y);
    let roots = solve_cubic(
        y0,
        3.0 * (y1 - y0),
        3.0 * (y0 - 2.0 * y1 + y2),
        -y0 + 3.0 * (y1 - y2) + y3,
    );
    for t in roots {
        if t < -tolerance || t > 1.0 + tolerance {
            continue;
        }
        let t = t.clamp(0.0, 1.0);
        let x = c.eval(t).x;
        if x < -tolerance || x > length + tolerance {
            continue;
        }
        let t = curved.range.start + t * width(&curved.range);
        let point = curved.operand.curve.eval(t);
        locations.add(curved.operand, Some(t), point, line.operand);
    }
}

/// Intersect the chords of two (nearly) straight sections.
fn add_line_intersection(one: &Section, two: &Section, locations: &mut Locations) {
    if let Some(point) = one.part.baseline().intersect(two.part.baseline(), false) {
        locations.add(one.operand, None, point, two.operand);
    }
}
