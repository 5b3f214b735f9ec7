// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::Color;

/// Fill and stroke parameters for [`render_shape`](crate::render_shape).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RenderStyle {
    /// Stroke width in logical units. Zero disables the stroke.
    ///
    /// Also shifts the path by the same amount, see
    /// [`build_path`](crate::build_path).
    pub line_width: f32,
    /// The fill color. Zero alpha disables the fill.
    pub fill: Color,
    /// The stroke color. Zero alpha disables the stroke.
    pub stroke: Color,
    /// Controls whether fill and stroke edges are anti-aliased.
    pub anti_alias: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            line_width: 1.0,
            fill: Color::BLACK,
            stroke: Color::TRANSPARENT,
            anti_alias: true,
        }
    }
}

impl RenderStyle {
    /// Sets the fill color.
    pub fn set_fill_rgba8(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.fill = Color::from_rgba8(r, g, b, a);
    }

    /// Sets the stroke color.
    pub fn set_stroke_rgba8(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.stroke = Color::from_rgba8(r, g, b, a);
    }
}
