// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`star-glyph` renders a small set of traced star glyphs using
[tiny-skia](https://github.com/RazrFalcon/tiny-skia).

Each glyph is a closed cubic-bezier contour authored in a fixed 100x100
design square (see the `star-glyph-outline` crate). The renderer scales the
contour to a requested square size, fills and/or strokes it, and composites
the result onto a pixel-density-aware backing [`Surface`] the caller can
place into its own display stack.

See the `demos/` directory for usage examples.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

mod builder;
mod render;
mod style;
mod surface;

pub use star_glyph_outline::{Point, ScaledSegments, Segment, StarGlyph, DESIGN_SIZE};

pub use builder::build_path;
pub use render::{compose, render_image, render_shape};
pub use style::RenderStyle;
pub use surface::Surface;

pub use tiny_skia::{Color, Path, Pixmap, PixmapRef, Rect};
