use egui::{Color32, Sense, Stroke, Ui, vec2};

use crate::document::{Document, SURFACE_BACKGROUND, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::texture_manager::TextureManager;

/// Padding around the selection outline so it doesn't hug the shape.
const SELECTION_PADDING: f32 = 4.0;
const SELECTION_COLOR: Color32 = Color32::from_rgb(0x6a, 0x3d, 0xad);

/// Paint the drawing surface and handle click-select / drag-translate.
pub fn canvas_panel(
    ui: &mut Ui,
    document: &mut Document,
    textures: &mut TextureManager,
    selected: &mut Option<usize>,
) {
    textures.begin_frame();

    let (response, painter) =
        ui.allocate_painter(vec2(SURFACE_WIDTH, SURFACE_HEIGHT), Sense::click_and_drag());
    let surface_rect = response.rect;
    let origin = surface_rect.min.to_vec2();
    let painter = painter.with_clip_rect(surface_rect);

    painter.rect_filled(surface_rect, 0.0, SURFACE_BACKGROUND);
    painter.rect_stroke(surface_rect, 0.0, Stroke::new(1.0, Color32::from_gray(180)));

    // Selection happens on press so a drag moves the shape it started on.
    if response.drag_started() || response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            *selected = document.hit_test(pos - origin).map(|shape| shape.id());
        }
    }

    if response.dragged() {
        if let Some(id) = *selected {
            if let Some(shape) = document.find_mut(id) {
                shape.translate(response.drag_delta());
            }
        }
    }

    // Paint shapes bottom-up, uploading image textures on demand.
    for shape in document.shapes() {
        let texture = if shape.needs_texture() {
            match textures.get_or_create_texture(shape.id(), 0, || shape.color_image(), ui.ctx()) {
                Ok(id) => Some(id),
                Err(err) => {
                    log::warn!("texture for shape {} unavailable: {err}", shape.id());
                    None
                }
            }
        } else {
            None
        };
        shape.draw(&painter, origin, texture);
    }

    // Selection outline on top of everything.
    if let Some(shape) = selected.and_then(|id| document.find(id)) {
        let outline = shape.rect().translate(origin).expand(SELECTION_PADDING);
        painter.rect_stroke(outline, 0.0, Stroke::new(1.5, SELECTION_COLOR));
    }
}
