// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs for the clipping loop.

use crate::common::{MAX_ITERATIONS, MAX_RECURSION, MIN_SHRINK, TOLERANCE};

/// Parameters of the fat-line clipping search.
///
/// The defaults are what [`path_intersections`](crate::path_intersections)
/// uses; most callers never need another value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClipParams {
    /// Parameter width below which a range counts as converged. Also the
    /// distance under which two points are considered the same.
    pub tolerance: f64,
    /// Clipping rounds per curve pair before giving up on it.
    pub max_iterations: usize,
    /// Subdivision depth beyond which a pair is dropped.
    pub max_recursion: usize,
    /// Fraction by which a clip must shrink a range to count as progress.
    pub min_shrink: f64,
}

impl Default for ClipParams {
    fn default() -> Self {
        ClipParams {
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            max_recursion: MAX_RECURSION,
            min_shrink: MIN_SHRINK,
        }
    }
}

impl ClipParams {
    /// Default parameters with a different tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        ClipParams {
            tolerance,
            ..Default::default()
        }
    }
}
