use star_glyph::*;

use tiny_skia::{FillRule, Paint, Transform};

fn main() {
    let banner = create_banner();

    // A 2:1 banner on a square surface at 2x pixel density:
    // scaled to fit, centered, letterboxed.
    let surface = render_image(banner.as_ref(), 256.0, 2.0).unwrap();

    surface.pixmap().save_png("image.png").unwrap();
}

fn create_banner() -> Pixmap {
    let mut pixmap = Pixmap::new(320, 160).unwrap();
    pixmap.fill(Color::from_rgba8(36, 52, 71, 255));

    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 214, 64, 255);
    paint.anti_alias = true;

    let path = build_path(StarGlyph::FivePoint, 120.0, 0.0).unwrap();
    pixmap.fill_path(
        &path,
        &paint,
        FillRule::Winding,
        Transform::from_translate(100.0, 20.0),
        None,
    );

    pixmap
}
