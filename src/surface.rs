// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;

use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Rect, Transform};

/// A square, pixel-density-aware backing surface.
///
/// Logical geometry is expressed in the caller's units. The backing pixmap
/// has `ceil(size * pixel_scale)` pixels per side, so drawing is always
/// clipped to the surface bounds.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
    bounds: Rect,
    pixel_scale: f32,
}

impl Surface {
    /// Allocates a transparent square surface with a logical side of `size`.
    ///
    /// `pixel_scale` is the display's pixels-per-logical-unit ratio.
    ///
    /// Returns `None` when either value is not finite and positive, or when
    /// the device size rounds to zero pixels.
    pub fn new(size: f32, pixel_scale: f32) -> Option<Self> {
        if !(size.is_finite() && size > 0.0) {
            return None;
        }

        if !(pixel_scale.is_finite() && pixel_scale > 0.0) {
            return None;
        }

        let px = (size * pixel_scale).ceil() as u32;
        let pixmap = Pixmap::new(px, px)?;
        let bounds = Rect::from_xywh(0.0, 0.0, size, size)?;
        Some(Surface {
            pixmap,
            bounds,
            pixel_scale,
        })
    }

    /// Returns the logical bounds: always `size x size` at the origin.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the logical side length.
    pub fn size(&self) -> f32 {
        self.bounds.width()
    }

    /// Returns the pixels-per-logical-unit ratio.
    pub fn pixel_scale(&self) -> f32 {
        self.pixel_scale
    }

    pub(crate) fn device_transform(&self) -> Transform {
        Transform::from_scale(self.pixel_scale, self.pixel_scale)
    }

    /// Returns the backing pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Returns the backing pixmap mutably.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Consumes the surface and returns the backing pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Draws `child` as a nested surface with its origin at the logical
    /// point `(x, y)`.
    ///
    /// A child with a different `pixel_scale` is resampled by the density
    /// ratio so that its logical size is preserved.
    pub fn draw_child(&mut self, child: &Surface, x: f32, y: f32) {
        let ratio = self.pixel_scale / child.pixel_scale;

        let mut paint = PixmapPaint::default();
        if ratio != 1.0 {
            paint.quality = FilterQuality::Bilinear;
        }

        let ts = Transform::from_row(
            ratio,
            0.0,
            0.0,
            ratio,
            x * self.pixel_scale,
            y * self.pixel_scale,
        );
        self.pixmap
            .draw_pixmap(0, 0, child.pixmap.as_ref(), &paint, ts, None);
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("size", &self.size())
            .field("pixel_scale", &self.pixel_scale)
            .finish()
    }
}
