use egui::{Align2, Color32, ColorImage, FontId, Painter, Pos2, Rect, Stroke, TextureId, Vec2, pos2, vec2};

use crate::texture_manager::TextureError;

/// Default fill colors, one distinct color per toolbar action.
pub const TEXT_FILL: Color32 = Color32::BLACK;
pub const RECT_FILL: Color32 = Color32::from_rgb(0xad, 0xd8, 0xe6); // light blue
pub const CIRCLE_FILL: Color32 = Color32::from_rgb(0x90, 0xee, 0x90); // light green
pub const TRIANGLE_FILL: Color32 = Color32::from_rgb(0xf0, 0x80, 0x80); // light coral
pub const POLYGON_FILL: Color32 = Color32::from_rgb(0xff, 0xff, 0xe0); // light yellow

/// One object on the drawing surface.
///
/// Position is the top-left corner of the shape's bounding box, in surface
/// coordinates. The fill color and geometry are fixed at creation time;
/// the only mutation after that is translation by dragging.
#[derive(Clone, Debug)]
pub struct Shape {
    id: usize,
    position: Pos2,
    fill: Color32,
    kind: ShapeKind,
}

/// Geometry payload per shape type.
#[derive(Clone, Debug)]
pub enum ShapeKind {
    Text {
        content: String,
        font_size: f32,
    },
    Rect {
        size: Vec2,
    },
    Circle {
        radius: f32,
    },
    Triangle {
        size: Vec2,
    },
    /// Points are relative to the shape position.
    Polygon {
        points: Vec<Vec2>,
    },
    /// Bitmap loaded from a URL, displayed at `natural_size * scale`.
    Image {
        src: String,
        natural_size: Vec2,
        scale: f32,
        rgba: Vec<u8>,
    },
}

impl Shape {
    pub fn new(id: usize, position: Pos2, fill: Color32, kind: ShapeKind) -> Self {
        Self {
            id,
            position,
            fill,
            kind,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Get the shape type as a string, as used in exports.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ShapeKind::Text { .. } => "text",
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Polygon { .. } => "polygon",
            ShapeKind::Image { .. } => "image",
        }
    }

    /// Bounding rectangle in surface coordinates.
    pub fn rect(&self) -> Rect {
        match &self.kind {
            // Approximate text bounds; exact metrics would need a font galley.
            ShapeKind::Text { content, font_size } => Rect::from_min_size(
                self.position,
                vec2(
                    font_size * 0.55 * content.chars().count() as f32,
                    font_size * 1.25,
                ),
            ),
            ShapeKind::Rect { size } | ShapeKind::Triangle { size } => {
                Rect::from_min_size(self.position, *size)
            }
            ShapeKind::Circle { radius } => {
                Rect::from_min_size(self.position, Vec2::splat(radius * 2.0))
            }
            ShapeKind::Polygon { points } => {
                let mut rect = Rect::NOTHING;
                for point in points {
                    rect.extend_with(self.position + *point);
                }
                rect
            }
            ShapeKind::Image {
                natural_size,
                scale,
                ..
            } => Rect::from_min_size(self.position, *natural_size * *scale),
        }
    }

    /// Test if the shape's bounding box contains the given surface position.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }

    /// Translate the shape by the given delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Whether the shape carries raster data that must be uploaded as a texture.
    pub fn needs_texture(&self) -> bool {
        matches!(self.kind, ShapeKind::Image { .. })
    }

    /// Build the texture image for an image shape from its stored pixels.
    pub fn color_image(&self) -> Result<ColorImage, TextureError> {
        let ShapeKind::Image {
            natural_size, rgba, ..
        } = &self.kind
        else {
            return Err(TextureError::NoRasterData);
        };

        let width = natural_size.x as usize;
        let height = natural_size.y as usize;
        if rgba.len() != width * height * 4 {
            return Err(TextureError::InvalidDimensions);
        }

        Ok(ColorImage::from_rgba_unmultiplied([width, height], rgba))
    }

    /// Paint the shape. `origin` maps surface coordinates onto the screen;
    /// `texture` is only consulted by image shapes.
    pub fn draw(&self, painter: &Painter, origin: Vec2, texture: Option<TextureId>) {
        let rect = self.rect().translate(origin);

        match &self.kind {
            ShapeKind::Text { content, font_size } => {
                painter.text(
                    self.position + origin,
                    Align2::LEFT_TOP,
                    content,
                    FontId::proportional(*font_size),
                    self.fill,
                );
            }
            ShapeKind::Rect { .. } => {
                painter.rect_filled(rect, 0.0, self.fill);
            }
            ShapeKind::Circle { radius } => {
                painter.circle_filled(rect.min + Vec2::splat(*radius), *radius, self.fill);
            }
            ShapeKind::Triangle { size } => {
                let points = vec![
                    pos2(rect.min.x + size.x / 2.0, rect.min.y),
                    pos2(rect.min.x + size.x, rect.min.y + size.y),
                    pos2(rect.min.x, rect.min.y + size.y),
                ];
                painter.add(egui::Shape::convex_polygon(points, self.fill, Stroke::NONE));
            }
            ShapeKind::Polygon { points } => {
                let points: Vec<Pos2> = points
                    .iter()
                    .map(|point| self.position + origin + *point)
                    .collect();
                painter.add(egui::Shape::convex_polygon(points, self.fill, Stroke::NONE));
            }
            ShapeKind::Image { .. } => {
                if let Some(texture) = texture {
                    let uv = Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0));
                    painter.image(texture, rect, uv, Color32::WHITE);
                } else {
                    // Placeholder until the texture is uploaded
                    painter.rect_filled(rect, 0.0, Color32::from_gray(200));
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(100)));
                }
            }
        }
    }
}

/// Factory functions for the toolbar's fixed-default shapes
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;

    /// Text object, default content "Edit me".
    pub fn text() -> Shape {
        Shape::new(
            generate_id(),
            pos2(100.0, 100.0),
            TEXT_FILL,
            ShapeKind::Text {
                content: "Edit me".to_owned(),
                font_size: 24.0,
            },
        )
    }

    pub fn rectangle() -> Shape {
        Shape::new(
            generate_id(),
            pos2(150.0, 150.0),
            RECT_FILL,
            ShapeKind::Rect {
                size: vec2(100.0, 60.0),
            },
        )
    }

    pub fn circle() -> Shape {
        Shape::new(
            generate_id(),
            pos2(200.0, 200.0),
            CIRCLE_FILL,
            ShapeKind::Circle { radius: 50.0 },
        )
    }

    pub fn triangle() -> Shape {
        Shape::new(
            generate_id(),
            pos2(250.0, 250.0),
            TRIANGLE_FILL,
            ShapeKind::Triangle {
                size: vec2(100.0, 100.0),
            },
        )
    }

    /// Quadrilateral with unit-square geometry scaled to 100 px sides.
    pub fn polygon() -> Shape {
        Shape::new(
            generate_id(),
            pos2(300.0, 300.0),
            POLYGON_FILL,
            ShapeKind::Polygon {
                points: vec![
                    vec2(0.0, 0.0),
                    vec2(100.0, 0.0),
                    vec2(100.0, 100.0),
                    vec2(0.0, 100.0),
                ],
            },
        )
    }

    /// Background image, placed at (100, 100) and shown at half natural size.
    pub fn image(src: impl Into<String>, rgba: Vec<u8>, natural_size: Vec2) -> Shape {
        Shape::new(
            generate_id(),
            pos2(100.0, 100.0),
            Color32::WHITE,
            ShapeKind::Image {
                src: src.into(),
                natural_size,
                scale: 0.5,
                rgba,
            },
        )
    }
}
