// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{FillRule, FilterQuality, Paint, Path, PixmapPaint, PixmapRef, Stroke, Transform};

use crate::{build_path, RenderStyle, StarGlyph, Surface};

/// Renders `path` onto a new square surface with a logical side of `size`.
///
/// The path is filled with `style.fill` using the winding rule and stroked
/// with `style.stroke` at `style.line_width`. A channel with zero alpha,
/// or a stroke with zero width, is skipped entirely, so the result is
/// pixel-identical to omitting that operation.
///
/// Returns `None` when `size` or `pixel_scale` is not finite and positive.
pub fn render_shape(
    path: &Path,
    style: &RenderStyle,
    size: f32,
    pixel_scale: f32,
) -> Option<Surface> {
    let mut surface = Surface::new(size, pixel_scale)?;
    let ts = surface.device_transform();

    if style.fill.alpha() > 0.0 {
        let mut paint = Paint::default();
        paint.set_color(style.fill);
        paint.anti_alias = style.anti_alias;
        surface
            .pixmap_mut()
            .fill_path(path, &paint, FillRule::Winding, ts, None);
    }

    if style.line_width > 0.0 && style.stroke.alpha() > 0.0 {
        let mut paint = Paint::default();
        paint.set_color(style.stroke);
        paint.anti_alias = style.anti_alias;

        let stroke = Stroke {
            width: style.line_width,
            ..Stroke::default()
        };
        surface
            .pixmap_mut()
            .stroke_path(path, &paint, &stroke, ts, None);
    }

    Some(surface)
}

/// Renders `image` centered on a new square surface with a logical side of
/// `size`.
///
/// The image is scaled to fit while preserving its aspect ratio and is
/// never cropped. A non-square image is letterboxed.
///
/// Returns `None` when `size` or `pixel_scale` is not finite and positive.
pub fn render_image(image: PixmapRef, size: f32, pixel_scale: f32) -> Option<Surface> {
    let mut surface = Surface::new(size, pixel_scale)?;

    let target = surface.pixmap().width() as f32;
    let width = image.width() as f32;
    let height = image.height() as f32;

    let fit = (target / width).min(target / height);
    let tx = (target - width * fit) / 2.0;
    let ty = (target - height * fit) / 2.0;

    let mut paint = PixmapPaint::default();
    paint.quality = FilterQuality::Bilinear;

    surface.pixmap_mut().draw_pixmap(
        0,
        0,
        image,
        &paint,
        Transform::from_row(fit, 0.0, 0.0, fit, tx, ty),
        None,
    );

    Some(surface)
}

/// Builds and renders `glyph`, then attaches the result to a new backing
/// surface with a logical side of `size`.
///
/// This is the top-level entry point. The returned backing surface is ready
/// to be placed into the caller's display stack.
///
/// Returns `None` when `size` or `pixel_scale` is not finite and positive,
/// or when `style.line_width` is not finite and non-negative.
pub fn compose(
    glyph: StarGlyph,
    style: &RenderStyle,
    size: f32,
    pixel_scale: f32,
) -> Option<Surface> {
    let mut backing = Surface::new(size, pixel_scale)?;
    let path = build_path(glyph, size, style.line_width)?;
    let shape = render_shape(&path, style, size, pixel_scale)?;
    backing.draw_child(&shape, 0.0, 0.0);
    Some(backing)
}
