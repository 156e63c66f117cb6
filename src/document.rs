use egui::Color32;

use crate::shape::Shape;

/// Fixed drawing surface dimensions.
pub const SURFACE_WIDTH: f32 = 1020.0;
pub const SURFACE_HEIGHT: f32 = 500.0;

/// Surface background color.
pub const SURFACE_BACKGROUND: Color32 = Color32::from_rgb(0xf3, 0xf3, 0xf3);

/// The in-memory drawing surface: an ordered collection of shapes, painted
/// bottom-up. Owned exclusively by the edit screen's lifetime.
#[derive(Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the stack.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Insert a shape below everything else. Used for the background image,
    /// which must stay the first surface object even when it finishes
    /// loading after other shapes were added.
    pub fn insert_first(&mut self, shape: Shape) {
        self.shapes.insert(0, shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn find(&self, id: usize) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn find_mut(&mut self, id: usize) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// The topmost shape containing the given surface position, if any.
    pub fn hit_test(&self, pos: egui::Pos2) -> Option<&Shape> {
        self.shapes.iter().rev().find(|shape| shape.hit_test(pos))
    }
}
