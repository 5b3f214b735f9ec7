// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
Star glyph outlines for the
[star-glyph](https://github.com/RazrFalcon/star-glyph) crate.

Each glyph is an ordered, compile-time table of path segments tracing a
single closed contour inside a fixed 100x100 design square. This crate
carries the tables and the scaling math only; path construction and
rasterization live in `star-glyph`.
*/

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

use strict_num::{NonZeroPositiveF32, PositiveF32};

mod burst;
mod five_point;

/// The side length of the logical square the outline tables are authored in.
pub const DESIGN_SIZE: f32 = 100.0;

/// A point in the design square.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Point {
    /// Horizontal position, growing rightwards.
    pub x: f32,
    /// Vertical position, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a new `Point`.
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Scales the point by `factor` and shifts both axes by `offset`.
    ///
    /// `offset` is the line width the caller intends to stroke with.
    /// Shifting by it keeps the stroke inside the surface instead of
    /// clipped at the top-left edge.
    ///
    /// `scale(1.0, 0.0)` returns the point unchanged.
    pub fn scale(self, factor: f32, offset: f32) -> Self {
        Point::from_xy(self.x * factor + offset, self.y * factor + offset)
    }
}

/// A single path-construction instruction.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Segment {
    /// Starts the contour.
    MoveTo(Point),
    /// A cubic bezier: two tangent handles and the end point.
    CubicTo(Point, Point, Point),
    /// Closes the contour back to the `MoveTo` point.
    Close,
}

impl Segment {
    /// Scales every point of the segment. See [`Point::scale`].
    pub fn scale(self, factor: f32, offset: f32) -> Self {
        match self {
            Segment::MoveTo(p) => Segment::MoveTo(p.scale(factor, offset)),
            Segment::CubicTo(p1, p2, p) => Segment::CubicTo(
                p1.scale(factor, offset),
                p2.scale(factor, offset),
                p.scale(factor, offset),
            ),
            Segment::Close => Segment::Close,
        }
    }
}

/// The available star glyphs.
///
/// Both outlines were traced from the same illustration set and share the
/// design square, so they can be swapped without layout changes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StarGlyph {
    /// A five-point star with rounded tips.
    FivePoint,
    /// A twelve-ray seal with scalloped edges.
    Burst,
}

impl StarGlyph {
    /// Every glyph, in declaration order.
    pub const ALL: &'static [StarGlyph] = &[StarGlyph::FivePoint, StarGlyph::Burst];

    /// Returns the glyph's segment table.
    ///
    /// The table is always a single closed contour: one leading `MoveTo`,
    /// cubic curves, one trailing `Close`.
    pub const fn segments(self) -> &'static [Segment] {
        match self {
            StarGlyph::FivePoint => five_point::SEGMENTS,
            StarGlyph::Burst => burst::SEGMENTS,
        }
    }

    /// Returns the factor mapping the design square onto `size`.
    ///
    /// Returns `None` when `size` is not finite and positive.
    pub fn scale_factor(size: f32) -> Option<f32> {
        NonZeroPositiveF32::new(size).map(|size| size.get() / DESIGN_SIZE)
    }

    /// Returns the glyph's segments scaled to `size` and shifted by
    /// `line_width`.
    ///
    /// Returns `None` when `size` is not finite and positive, or when
    /// `line_width` is not finite and non-negative.
    pub fn scaled(self, size: f32, line_width: f32) -> Option<ScaledSegments> {
        let factor = Self::scale_factor(size)?;
        let offset = PositiveF32::new(line_width)?.get();
        Some(ScaledSegments {
            iter: self.segments().iter(),
            factor,
            offset,
        })
    }
}

/// An iterator over a glyph's segments with scaling applied.
///
/// Produced by [`StarGlyph::scaled`].
#[derive(Clone, Debug)]
pub struct ScaledSegments {
    iter: core::slice::Iter<'static, Segment>,
    factor: f32,
    offset: f32,
}

impl Iterator for ScaledSegments {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|segment| segment.scale(self.factor, self.offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for ScaledSegments {}

#[cfg(test)]
mod tests {
    use super::*;

    fn for_each_point(segment: Segment, f: &mut dyn FnMut(Point)) {
        match segment {
            Segment::MoveTo(p) => f(p),
            Segment::CubicTo(p1, p2, p) => {
                f(p1);
                f(p2);
                f(p);
            }
            Segment::Close => {}
        }
    }

    #[test]
    fn scale_identity() {
        for &glyph in StarGlyph::ALL {
            let scaled = glyph.scaled(100.0, 0.0).unwrap();
            for (scaled, &original) in scaled.zip(glyph.segments()) {
                assert_eq!(scaled, original);
            }
        }
    }

    #[test]
    fn scale_with_offset() {
        let p = Point::from_xy(50.0, 50.0).scale(2.0, 2.0);
        assert_eq!(p, Point::from_xy(102.0, 102.0));
    }

    #[test]
    fn scale_is_linear() {
        // Doubling the target size doubles every coordinate,
        // while the line width offset stays fixed.
        for &glyph in StarGlyph::ALL {
            let direct = glyph.scaled(120.0, 3.0).unwrap();
            let doubled = glyph
                .scaled(60.0, 0.0)
                .unwrap()
                .map(|segment| segment.scale(2.0, 3.0));
            for (a, b) in direct.zip(doubled) {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn single_closed_contour() {
        for &glyph in StarGlyph::ALL {
            let segments = glyph.segments();
            assert!(matches!(segments[0], Segment::MoveTo(_)));
            assert!(matches!(segments[segments.len() - 1], Segment::Close));

            let moves = segments
                .iter()
                .filter(|s| matches!(s, Segment::MoveTo(_)))
                .count();
            let closes = segments
                .iter()
                .filter(|s| matches!(s, Segment::Close))
                .count();
            assert_eq!(moves, 1);
            assert_eq!(closes, 1);
        }
    }

    #[test]
    fn inside_design_square() {
        for &glyph in StarGlyph::ALL {
            for &segment in glyph.segments() {
                for_each_point(segment, &mut |p| {
                    assert!(p.x >= 0.0 && p.x <= DESIGN_SIZE);
                    assert!(p.y >= 0.0 && p.y <= DESIGN_SIZE);
                });
            }
        }
    }

    #[test]
    fn invalid_inputs() {
        assert!(StarGlyph::scale_factor(0.0).is_none());
        assert!(StarGlyph::scale_factor(-100.0).is_none());
        assert!(StarGlyph::scale_factor(f32::NAN).is_none());

        let glyph = StarGlyph::FivePoint;
        assert!(glyph.scaled(0.0, 0.0).is_none());
        assert!(glyph.scaled(-1.0, 0.0).is_none());
        assert!(glyph.scaled(f32::INFINITY, 0.0).is_none());
        assert!(glyph.scaled(100.0, -1.0).is_none());
        assert!(glyph.scaled(100.0, f32::NAN).is_none());
    }
}
