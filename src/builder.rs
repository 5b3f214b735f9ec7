// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{Path, PathBuilder};

use crate::{Segment, StarGlyph};

/// Builds a closed path for `glyph`, scaled from the design square to `size`.
///
/// Every control point `(x, y)` maps to
/// `(x * size / 100 + line_width, y * size / 100 + line_width)`.
/// The additive offset keeps a stroke of `line_width` inside the surface
/// instead of clipped at the top-left edge.
///
/// Returns `None` when `size` is not finite and positive, or when
/// `line_width` is not finite and non-negative.
pub fn build_path(glyph: StarGlyph, size: f32, line_width: f32) -> Option<Path> {
    let segments = glyph.scaled(size, line_width)?;

    let points = glyph
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::MoveTo(_) => 1,
            Segment::CubicTo(..) => 3,
            Segment::Close => 0,
        })
        .sum();

    let mut pb = PathBuilder::with_capacity(glyph.segments().len(), points);
    for segment in segments {
        match segment {
            Segment::MoveTo(p) => pb.move_to(p.x, p.y),
            Segment::CubicTo(p1, p2, p) => pb.cubic_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y),
            Segment::Close => pb.close(),
        }
    }

    pb.finish()
}
