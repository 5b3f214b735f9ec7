use star_glyph::*;

fn solid_image(width: u32, height: u32, color: Color) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height).unwrap();
    pixmap.fill(color);
    pixmap
}

#[test]
fn wide_image_is_letterboxed() {
    let red = Color::from_rgba8(255, 0, 0, 255);
    let image = solid_image(40, 20, red);

    let surface = render_image(image.as_ref(), 40.0, 1.0).unwrap();
    assert_eq!(surface.pixmap().width(), 40);

    // The image keeps its 2:1 ratio: rows 10..30, centered vertically.
    let expected = red.premultiply().to_color_u8();
    assert_eq!(surface.pixmap().pixel(20, 20).unwrap(), expected);
    assert_eq!(surface.pixmap().pixel(2, 12).unwrap(), expected);
    assert_eq!(surface.pixmap().pixel(37, 27).unwrap(), expected);

    // Letterbox bands stay clear.
    assert_eq!(surface.pixmap().pixel(20, 5).unwrap().alpha(), 0);
    assert_eq!(surface.pixmap().pixel(20, 35).unwrap().alpha(), 0);
}

#[test]
fn tall_image_is_never_cropped() {
    let green = Color::from_rgba8(0, 160, 60, 255);
    let image = solid_image(20, 80, green);

    let surface = render_image(image.as_ref(), 40.0, 1.0).unwrap();

    // Fit by height: the image shrinks to 10x40 and is centered
    // horizontally, fully visible.
    assert_eq!(surface.pixmap().pixel(20, 20).unwrap().alpha(), 255);
    assert_eq!(surface.pixmap().pixel(20, 2).unwrap().alpha(), 255);
    assert_eq!(surface.pixmap().pixel(20, 37).unwrap().alpha(), 255);

    assert_eq!(surface.pixmap().pixel(10, 20).unwrap().alpha(), 0);
    assert_eq!(surface.pixmap().pixel(30, 20).unwrap().alpha(), 0);
}

#[test]
fn square_image_fills_the_surface() {
    let blue = Color::from_rgba8(20, 60, 220, 255);
    let image = solid_image(30, 30, blue);

    let surface = render_image(image.as_ref(), 60.0, 1.0).unwrap();

    let expected = blue.premultiply().to_color_u8();
    assert_eq!(surface.pixmap().pixel(30, 30).unwrap(), expected);
    assert_eq!(surface.pixmap().pixel(5, 5).unwrap(), expected);
    assert_eq!(surface.pixmap().pixel(55, 55).unwrap(), expected);
}

#[test]
fn image_at_retina_scale() {
    let red = Color::from_rgba8(255, 0, 0, 255);
    let image = solid_image(40, 20, red);

    let surface = render_image(image.as_ref(), 40.0, 2.0).unwrap();
    assert_eq!(surface.pixmap().width(), 80);

    assert_eq!(surface.pixmap().pixel(40, 40).unwrap().alpha(), 255);
    assert_eq!(surface.pixmap().pixel(40, 10).unwrap().alpha(), 0);
    assert_eq!(surface.pixmap().pixel(40, 70).unwrap().alpha(), 0);
}

#[test]
fn invalid_inputs() {
    let image = solid_image(10, 10, Color::WHITE);
    assert!(render_image(image.as_ref(), 0.0, 1.0).is_none());
    assert!(render_image(image.as_ref(), -10.0, 1.0).is_none());
    assert!(render_image(image.as_ref(), 40.0, 0.0).is_none());
    assert!(render_image(image.as_ref(), f32::NAN, 1.0).is_none());
}
