// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections of cubic Bézier outlines, by fat-line clipping.
//!
//! The bezclip library finds every point where two outlines meet, each
//! outline being a [`BezPath`] of line, quadratic and cubic segments. Curve
//! pairs are intersected with Sederberg and Nishita's Bézier clipping: the
//! parameter range of one curve is repeatedly cut down to where it can still
//! meet the "fat line" of the other, subdividing when that stops making
//! progress. Lines and near-straight pieces are handed to exact line-line and
//! curve-line routines. Iteration and subdivision are bounded, so tangent or
//! overlapping curves still terminate.
//!
//! # Examples
//!
//! A curve against a line:
//!
//! ```
//! use bezclip::{curve_intersections, CubicBez, Line, ParamCurve};
//!
//! let arch = CubicBez::new((0.0, 0.0), (0.5, 1.0), (1.5, 1.0), (2.0, 0.0));
//! let line = CubicBez::from_line(Line::new((0.0, 0.5), (2.0, 0.5)));
//!
//! let hits = curve_intersections(arch, line);
//! assert_eq!(hits.len(), 2);
//! for hit in &hits {
//!     assert!(arch.eval(hit.parameter()).is_near(hit.point(), 1e-9));
//! }
//! ```
//!
//! Two outlines given as SVG path data:
//!
//! ```
//! use bezclip::{path_intersections, BezPath, PathId};
//!
//! let a = BezPath::from_svg("M0,0 C0,10 10,10 10,0 Z").unwrap();
//! let b = BezPath::from_svg("M5,-5 L5,15").unwrap();
//! let hits = path_intersections(&a, &b).unwrap();
//! // Once through the curve, once through the closing line.
//! assert_eq!(hits.len(), 2);
//! assert!(hits.iter().all(|hit| hit.curve().path == PathId::First));
//! ```
//!
//! # Features
//!
//! With the `serde` feature, the geometry types and [`ClipParams`] implement
//! `Serialize` and `Deserialize`.
//!
//! # Logging
//!
//! The search reports through [`tracing`]: a `debug` span per pair of
//! outlines, and `trace` events for each dispatch, dropped duplicates and
//! pairs abandoned at the iteration or recursion bound.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    reason = "geometry code reads better with short names and exact constants"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod affine;
mod bezpath;
pub mod common;
mod cubicbez;
mod curve_intersections;
mod error;
pub mod fat_line;
mod line;
mod location;
mod param_curve;
mod params;
mod point;
mod rect;
mod svg;
mod vec2;

pub use crate::affine::*;
pub use crate::bezpath::*;
pub use crate::common::{MAX_ITERATIONS, MAX_RECURSION, MIN_SHRINK, TOLERANCE};
pub use crate::cubicbez::*;
pub use crate::curve_intersections::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::location::*;
pub use crate::param_curve::*;
pub use crate::params::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::svg::*;
pub use crate::vec2::*;
