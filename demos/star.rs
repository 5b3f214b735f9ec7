use star_glyph::*;

fn main() {
    let mut style = RenderStyle::default();
    style.line_width = 3.0;
    style.set_fill_rgba8(255, 193, 7, 255);
    style.set_stroke_rgba8(160, 82, 12, 255);

    let mut backing = Surface::new(440.0, 1.0).unwrap();

    let star = compose(StarGlyph::FivePoint, &style, 200.0, 1.0).unwrap();
    backing.draw_child(&star, 10.0, 110.0);

    style.set_fill_rgba8(220, 68, 68, 255);
    style.set_stroke_rgba8(120, 20, 20, 255);
    let seal = compose(StarGlyph::Burst, &style, 200.0, 1.0).unwrap();
    backing.draw_child(&seal, 230.0, 110.0);

    backing.pixmap().save_png("image.png").unwrap();
}
