// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors at the API boundary.

use crate::SvgParseError;

/// Something wrong with the input outlines.
///
/// The intersection core itself never fails; these are raised while turning
/// caller data into curves.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A curve was given as a coordinate slice that is not eight finite numbers.
    #[error("expected 8 finite curve coordinates, got {len} values")]
    InvalidCurve {
        /// The length of the offending slice.
        len: usize,
    },
    /// A path has a segment before its first `MoveTo`.
    #[error("path does not start with a MoveTo")]
    InvalidPath,
    /// Path data could not be parsed.
    #[error("invalid SVG path data: {0}")]
    Svg(#[from] SvgParseError),
}

#[cfg(test)]
mod tests {
    use crate::{Error, SvgParseError};

    #[test]
    fn error_display() {
        assert_eq!(
            Error::InvalidCurve { len: 3 }.to_string(),
            "expected 8 finite curve coordinates, got 3 values"
        );
        let svg: Error = SvgParseError::UnexpectedEof.into();
        assert_eq!(
            svg.to_string(),
            "invalid SVG path data: unexpected end of path data"
        );
    }
}
