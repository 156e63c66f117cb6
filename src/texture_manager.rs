use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use thiserror::Error;

/// Errors that can occur while turning shape pixels into a texture
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("shape carries no raster data")]
    NoRasterData,
    #[error("image data size does not match its dimensions")]
    InvalidDimensions,
}

/// Caches GPU textures for image shapes, keyed by (shape id, version).
///
/// Shape pixels never change after creation, so the version is currently
/// always zero; the key shape keeps cache entries distinct if versioned
/// shapes appear later.
pub struct TextureManager {
    texture_cache: HashMap<(usize, u64), TextureHandle>,
    /// Tracks when each texture was last used, for pruning.
    last_used: HashMap<(usize, u64), u64>,
    current_frame: u64,
    max_cache_size: usize,
}

impl TextureManager {
    /// Creates a new texture manager with the specified cache size
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size,
        }
    }

    /// Increments the frame counter, should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Gets or creates a texture for the given shape
    pub fn get_or_create_texture<F>(
        &mut self,
        shape_id: usize,
        version: u64,
        generator: F,
        ctx: &Context,
    ) -> Result<TextureId, TextureError>
    where
        F: FnOnce() -> Result<ColorImage, TextureError>,
    {
        let cache_key = (shape_id, version);

        if let Some(handle) = self.texture_cache.get(&cache_key) {
            self.last_used.insert(cache_key, self.current_frame);
            return Ok(handle.id());
        }

        self.prune_cache_if_needed();

        let image = generator()?;

        let name = format!("shape_{}_v{}", shape_id, version);
        let handle = ctx.load_texture(&name, image, TextureOptions::LINEAR);

        self.texture_cache.insert(cache_key, handle.clone());
        self.last_used.insert(cache_key, self.current_frame);

        Ok(handle.id())
    }

    /// Evicts the least recently used entry once the cache is full.
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() < self.max_cache_size {
            return;
        }

        let oldest = self
            .last_used
            .iter()
            .min_by_key(|(_, frame)| **frame)
            .map(|(key, _)| *key);

        if let Some(key) = oldest {
            log::debug!("evicting cached texture for shape {} v{}", key.0, key.1);
            self.texture_cache.remove(&key);
            self.last_used.remove(&key);
        }
    }

    /// Number of cached textures, used for diagnostics.
    pub fn cached_count(&self) -> usize {
        self.texture_cache.len()
    }
}
