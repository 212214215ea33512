// Copyright 2026 the bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation.

use core::fmt;

use crate::{BezPath, PathEl, Vec2};

impl BezPath {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Writing into a `String` can't fail.
        let _ = self.write_to(&mut result);
        result
    }

    /// Write the SVG representation of this path to the provided writer.
    pub fn write_to<W: fmt::Write>(&self, mut writer: W) -> fmt::Result {
        for (i, el) in self.elements().iter().enumerate() {
            if i > 0 {
                writer.write_char(' ')?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(writer, "M{},{}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(writer, "L{},{}", p.x, p.y)?,
                PathEl::QuadTo(p1, p2) => write!(writer, "Q{},{} {},{}", p1.x, p1.y, p2.x, p2.y)?,
                PathEl::CurveTo(p1, p2, p3) => write!(
                    writer,
                    "C{},{} {},{} {},{}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                )?,
                PathEl::ClosePath => writer.write_char('Z')?,
            }
        }
        Ok(())
    }

    /// Try to parse a bezier path from an SVG path element.
    ///
    /// This is implemented on a best-effort basis, intended for cases where the
    /// user controls the source of paths. Arcs and the smooth curve commands
    /// are not supported.
    ///
    /// # Errors
    ///
    /// Returns a [`SvgParseError`] on malformed numbers, truncated data, or a
    /// command letter it doesn't know.
    pub fn from_svg(data: &str) -> Result<BezPath, SvgParseError> {
        let mut lexer = SvgLexer::new(data);
        let mut path = BezPath::new();
        let mut last_cmd = 0;
        let mut subpath_start = Vec2::ZERO;
        while let Some(c) = lexer.get_cmd(last_cmd) {
            match c {
                b'm' | b'M' => {
                    let pt = lexer.get_maybe_relative(c)?;
                    path.move_to(pt.to_point());
                    lexer.last_pt = pt;
                    subpath_start = pt;
                    // Further pairs are implicit line commands.
                    last_cmd = c - (b'M' - b'L');
                }
                b'l' | b'L' => {
                    let pt = lexer.get_maybe_relative(c)?;
                    path.line_to(pt.to_point());
                    lexer.last_pt = pt;
                    last_cmd = c;
                }
                b'h' | b'H' => {
                    let mut x = lexer.get_number()?;
                    lexer.opt_comma();
                    if c == b'h' {
                        x += lexer.last_pt.x;
                    }
                    let pt = Vec2::new(x, lexer.last_pt.y);
                    path.line_to(pt.to_point());
                    lexer.last_pt = pt;
                    last_cmd = c;
                }
                b'v' | b'V' => {
                    let mut y = lexer.get_number()?;
                    lexer.opt_comma();
                    if c == b'v' {
                        y += lexer.last_pt.y;
                    }
                    let pt = Vec2::new(lexer.last_pt.x, y);
                    path.line_to(pt.to_point());
                    lexer.last_pt = pt;
                    last_cmd = c;
                }
                b'q' | b'Q' => {
                    let p1 = lexer.get_maybe_relative(c)?;
                    let p2 = lexer.get_maybe_relative(c)?;
                    path.quad_to(p1.to_point(), p2.to_point());
                    lexer.last_pt = p2;
                    last_cmd = c;
                }
                b'c' | b'C' => {
                    let p1 = lexer.get_maybe_relative(c)?;
                    let p2 = lexer.get_maybe_relative(c)?;
                    let p3 = lexer.get_maybe_relative(c)?;
                    path.curve_to(p1.to_point(), p2.to_point(), p3.to_point());
                    lexer.last_pt = p3;
                    last_cmd = c;
                }
                b'z' | b'Z' => {
                    path.close_path();
                    lexer.last_pt = subpath_start;
                    last_cmd = 0;
                }
                _ => return Err(SvgParseError::UnknownCommand(c as char)),
            }
        }
        lexer.skip_ws();
        if lexer.ix < data.len() {
            return Err(SvgParseError::Wrong);
        }
        Ok(path)
    }
}

/// An error which can be returned when parsing an SVG.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgParseError {
    /// A number was expected.
    Wrong,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// Encountered an unknown command letter.
    UnknownCommand(char),
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SvgParseError::Wrong => write!(f, "unable to parse a number"),
            SvgParseError::UnexpectedEof => write!(f, "unexpected end of path data"),
            SvgParseError::UnknownCommand(letter) => write!(f, "unknown command, \"{letter}\""),
        }
    }
}

impl std::error::Error for SvgParseError {}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
    pub last_pt: Vec2,
}

impl SvgLexer<'_> {
    fn new(data: &str) -> SvgLexer<'_> {
        SvgLexer {
            data,
            ix: 0,
            last_pt: Vec2::ZERO,
        }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    fn get_cmd(&mut self, last_cmd: u8) -> Option<u8> {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c.is_ascii_alphabetic() {
                return Some(c);
            } else if last_cmd != 0 && (c == b'-' || c == b'.' || c.is_ascii_digit()) {
                // Plausible number start
                self.unget();
                return Some(last_cmd);
            } else {
                self.unget();
            }
        }
        None
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn get_number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let start = self.ix;
        let c = self.get_byte().ok_or(SvgParseError::UnexpectedEof)?;
        if !(c == b'-' || c == b'+') {
            self.unget();
        }
        let mut digit_count = 0;
        let mut seen_period = false;
        while let Some(c) = self.get_byte() {
            if c.is_ascii_digit() {
                digit_count += 1;
            } else if c == b'.' && !seen_period {
                seen_period = true;
            } else {
                self.unget();
                break;
            }
        }
        if let Some(c) = self.get_byte() {
            if c == b'e' || c == b'E' {
                let mut c = self.get_byte().ok_or(SvgParseError::Wrong)?;
                if c == b'-' || c == b'+' {
                    c = self.get_byte().ok_or(SvgParseError::Wrong)?;
                }
                if !c.is_ascii_digit() {
                    return Err(SvgParseError::Wrong);
                }
                while let Some(c) = self.get_byte() {
                    if !c.is_ascii_digit() {
                        self.unget();
                        break;
                    }
                }
            } else {
                self.unget();
            }
        }
        if digit_count > 0 {
            self.data[start..self.ix]
                .parse()
                .map_err(|_| SvgParseError::Wrong)
        } else {
            Err(SvgParseError::Wrong)
        }
    }

    fn get_number_pair(&mut self) -> Result<Vec2, SvgParseError> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        self.opt_comma();
        Ok(Vec2::new(x, y))
    }

    fn get_maybe_relative(&mut self, cmd: u8) -> Result<Vec2, SvgParseError> {
        let pt = self.get_number_pair()?;
        if cmd.is_ascii_lowercase() {
            Ok(pt + self.last_pt)
        } else {
            Ok(pt)
        }
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BezPath, CubicBez, PathEl, Point, SvgParseError};

    #[test]
    fn test_parse_svg() {
        let path = BezPath::from_svg("m10 10 100 0 0 100 -100 0z").unwrap();
        assert_eq!(path.segments().count(), 4);
        assert_eq!(path.elements()[2], PathEl::LineTo(Point::new(110.0, 110.0)));
    }

    #[test]
    fn test_parse_svg_commands() {
        let path = BezPath::from_svg("M0,0 H10 V5 h-5 v-5 Q1 2 3 4 C5,6 7,8 9,10 Z").unwrap();
        let els = path.elements();
        assert_eq!(els[1], PathEl::LineTo(Point::new(10.0, 0.0)));
        assert_eq!(els[2], PathEl::LineTo(Point::new(10.0, 5.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(5.0, 5.0)));
        assert_eq!(els[4], PathEl::LineTo(Point::new(5.0, 0.0)));
        assert_eq!(
            els[5],
            PathEl::QuadTo(Point::new(1.0, 2.0), Point::new(3.0, 4.0))
        );
        assert_eq!(els[7], PathEl::ClosePath);
    }

    #[test]
    fn test_parse_svg_relative_after_close() {
        let path = BezPath::from_svg("M10 10 l5 0 z m1 1 l1 0").unwrap();
        assert_eq!(path.elements()[3], PathEl::MoveTo(Point::new(11.0, 11.0)));
        assert_eq!(path.elements()[4], PathEl::LineTo(Point::new(12.0, 11.0)));
    }

    #[test]
    fn test_parse_svg_exponent() {
        let path = BezPath::from_svg("M1e2 -2.5E-1 L.5 -.5").unwrap();
        assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(100.0, -0.25)));
        assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(0.5, -0.5)));
    }

    #[test]
    fn test_parse_svg_errors() {
        assert_eq!(BezPath::from_svg("M10"), Err(SvgParseError::UnexpectedEof));
        assert_eq!(BezPath::from_svg("M1 x"), Err(SvgParseError::Wrong));
        assert_eq!(
            BezPath::from_svg("M0 0 A1 1 0 0 0 2 2"),
            Err(SvgParseError::UnknownCommand('A'))
        );
        assert_eq!(BezPath::from_svg("M0 0 #"), Err(SvgParseError::Wrong));
    }

    #[test]
    fn test_write_svg_roundtrip() {
        let mut path = BezPath::from_cubic(CubicBez::new(
            (0.0, 0.0),
            (0.5, 1.0),
            (1.5, 1.0),
            (2.0, 0.0),
        ));
        path.line_to((2.0, -1.0));
        path.close_path();
        let svg = path.to_svg();
        assert_eq!(svg, "M0,0 C0.5,1 1.5,1 2,0 L2,-1 Z");
        assert_eq!(BezPath::from_svg(&svg).unwrap(), path);
    }
}
