use egui::vec2;

use crate::document::Document;
use crate::error::FetchError;
use crate::export;
use crate::fetch::{DecodedImage, Fetcher};
use crate::panels::{self, ToolbarAction};
use crate::shape::factory;
use crate::texture_manager::TextureManager;

const TEXTURE_CACHE_SIZE: usize = 32;

/// State of the edit screen: the drawing surface plus the pending
/// background-image load. Dropped wholesale when navigating away.
pub struct EditScreen {
    image_url: Option<String>,
    document: Document,
    textures: TextureManager,
    selected: Option<usize>,
    /// Set until the background image load completes (or fails).
    background_pending: bool,
}

impl EditScreen {
    /// Mount the edit screen. `image_url == None` renders a fallback message
    /// instead of a surface; otherwise the image download starts immediately.
    pub fn new(image_url: Option<String>, fetcher: &Fetcher) -> Self {
        if let Some(url) = &image_url {
            log::info!("loading surface image from {url}");
            fetcher.fetch_image(url.clone());
        }

        Self {
            background_pending: image_url.is_some(),
            image_url,
            document: Document::new(),
            textures: TextureManager::new(TEXTURE_CACHE_SIZE),
            selected: None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether a drawing surface exists (an image reference was provided).
    pub fn has_surface(&self) -> bool {
        self.image_url.is_some()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Apply a completed image download. The decoded image becomes the first
    /// surface object; completions for anything but the pending background
    /// URL are ignored.
    pub fn apply_image_loaded(&mut self, url: &str, result: Result<DecodedImage, FetchError>) {
        if !self.background_pending || self.image_url.as_deref() != Some(url) {
            log::debug!("ignoring image completion for {url}");
            return;
        }
        self.background_pending = false;

        match result {
            Ok(decoded) => {
                let natural_size = vec2(decoded.width as f32, decoded.height as f32);
                self.document
                    .insert_first(factory::image(url, decoded.rgba, natural_size));
            }
            Err(err) => {
                // The surface stays usable without a background.
                log::error!("failed to load surface image {url}: {err}");
            }
        }
    }

    /// Run one toolbar action: append a shape, or export the surface.
    pub fn apply_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::AddText => self.document.add_shape(factory::text()),
            ToolbarAction::AddRectangle => self.document.add_shape(factory::rectangle()),
            ToolbarAction::AddCircle => self.document.add_shape(factory::circle()),
            ToolbarAction::AddTriangle => self.document.add_shape(factory::triangle()),
            ToolbarAction::AddPolygon => self.document.add_shape(factory::polygon()),
            ToolbarAction::ExportSvg => match export::save_svg(&self.document) {
                Ok(Some(path)) => log::info!("exported SVG to {}", path.display()),
                Ok(None) => log::info!("SVG export cancelled"),
                Err(err) => log::error!("SVG export failed: {err}"),
            },
            ToolbarAction::ExportJson => match export::save_json(&self.document) {
                Ok(Some(path)) => log::info!("exported JSON to {}", path.display()),
                Ok(None) => log::info!("JSON export cancelled"),
                Err(err) => log::error!("JSON export failed: {err}"),
            },
        }
    }

    /// Render the screen. Returns a navigation path when the user leaves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<String> {
        let mut navigate = None;

        egui::TopBottomPanel::top("edit_toolbar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Back to search").clicked() {
                    navigate = Some("/".to_owned());
                }
                if self.has_surface() {
                    ui.separator();
                    if let Some(action) = panels::toolbar(ui) {
                        self.apply_action(action);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.has_surface() {
                ui.heading("Edit Your Image");
                panels::canvas_panel(ui, &mut self.document, &mut self.textures, &mut self.selected);
            } else {
                ui.heading("Edit Your Image");
                ui.label("No image selected. Go back and choose an image!");
            }
        });

        navigate
    }
}
