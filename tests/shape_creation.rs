use egui::{Color32, Pos2, Vec2, pos2, vec2};
use image_quest::shape::{self, factory};

#[test]
fn test_text_factory_defaults() {
    let text = factory::text();

    assert_eq!(text.kind_name(), "text");
    assert_eq!(text.position(), pos2(100.0, 100.0));
    assert_eq!(text.fill(), Color32::BLACK);

    match text.kind() {
        shape::ShapeKind::Text { content, font_size } => {
            assert_eq!(content, "Edit me");
            assert_eq!(*font_size, 24.0);
        }
        other => panic!("expected a text shape, got {other:?}"),
    }
}

#[test]
fn test_rectangle_factory_defaults() {
    let rect = factory::rectangle();

    assert_eq!(rect.kind_name(), "rect");
    assert_eq!(rect.position(), pos2(150.0, 150.0));
    assert_eq!(rect.fill(), shape::RECT_FILL);
    assert_eq!(rect.rect().size(), vec2(100.0, 60.0));
}

#[test]
fn test_circle_factory_defaults() {
    let circle = factory::circle();

    assert_eq!(circle.kind_name(), "circle");
    assert_eq!(circle.position(), pos2(200.0, 200.0));
    assert_eq!(circle.fill(), shape::CIRCLE_FILL);
    // Bounding box of a radius-50 circle
    assert_eq!(circle.rect().size(), Vec2::splat(100.0));
}

#[test]
fn test_triangle_factory_defaults() {
    let triangle = factory::triangle();

    assert_eq!(triangle.kind_name(), "triangle");
    assert_eq!(triangle.position(), pos2(250.0, 250.0));
    assert_eq!(triangle.fill(), shape::TRIANGLE_FILL);
    assert_eq!(triangle.rect().size(), vec2(100.0, 100.0));
}

#[test]
fn test_polygon_factory_defaults() {
    let polygon = factory::polygon();

    assert_eq!(polygon.kind_name(), "polygon");
    assert_eq!(polygon.position(), pos2(300.0, 300.0));
    assert_eq!(polygon.fill(), shape::POLYGON_FILL);

    // Bounds cover the 100x100 quadrilateral at its position
    let rect = polygon.rect();
    assert_eq!(rect.min, Pos2::new(300.0, 300.0));
    assert_eq!(rect.max, Pos2::new(400.0, 400.0));
}

#[test]
fn test_image_factory_scales_to_half() {
    // 2x2 opaque red image
    let data = vec![
        255, 0, 0, 255, //
        255, 0, 0, 255, //
        255, 0, 0, 255, //
        255, 0, 0, 255,
    ];
    let image = factory::image("https://example.com/a.jpg", data, vec2(2.0, 2.0));

    assert_eq!(image.kind_name(), "image");
    assert_eq!(image.position(), pos2(100.0, 100.0));
    // Displayed at half the natural size
    assert_eq!(image.rect().size(), vec2(1.0, 1.0));
}

#[test]
fn test_factory_ids_are_unique() {
    let a = factory::rectangle();
    let b = factory::rectangle();
    let c = factory::circle();

    assert_ne!(a.id(), b.id());
    assert_ne!(b.id(), c.id());
    assert_ne!(a.id(), c.id());
}
